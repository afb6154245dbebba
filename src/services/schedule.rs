use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use tracing::warn;

/// One derived (day, time-block) pairing with its round-robin course
/// assignment. Recomputed fresh on every render, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSlot {
    pub date: NaiveDate,
    pub day_name: String,
    pub time_block: String,
    pub start_time: String,
    pub end_time: String,
    pub course: String,
}

/// One equal-weighted slice of the time-allocation pie chart.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationSlice {
    pub label: String,
    pub weight: u32,
}

/// Static wall-clock lookup for a time-block label. Unknown labels map to
/// the "N/A" sentinel pair instead of failing.
pub fn block_hours(label: &str) -> (&'static str, &'static str) {
    match label {
        "Morning" => ("08:00", "10:00"),
        "Afternoon" => ("13:00", "15:00"),
        "Evening" => ("18:00", "20:00"),
        _ => ("N/A", "N/A"),
    }
}

/// Next upcoming occurrence of `day_name` counted from `today`; if today is
/// that weekday the result is today itself.
fn upcoming_date(day_name: &str, today: NaiveDate) -> NaiveDate {
    match day_name.parse::<Weekday>() {
        Ok(target) => {
            let ahead = (target.num_days_from_monday() + 7
                - today.weekday().num_days_from_monday())
                % 7;
            today
                .checked_add_days(Days::new(ahead as u64))
                .unwrap_or(today)
        }
        Err(_) => {
            warn!("unknown study day label: {}", day_name);
            today
        }
    }
}

/// Round-robin derivation of the weekly schedule: days outer, time blocks
/// inner, one slot per pairing, courses cycled with a single counter shared
/// across the whole nested iteration.
pub fn derive_schedule(
    courses: &[String],
    days: &[String],
    times: &[String],
    today: NaiveDate,
) -> Vec<ScheduleSlot> {
    if courses.is_empty() {
        warn!("no courses to schedule, returning empty schedule");
        return Vec::new();
    }

    let mut slots = Vec::with_capacity(days.len() * times.len());
    let mut i = 0usize;

    for day in days {
        let date = upcoming_date(day, today);
        for block in times {
            let (start, end) = block_hours(block);
            if start == "N/A" {
                warn!("unknown time block label: {}", block);
            }
            slots.push(ScheduleSlot {
                date,
                day_name: day.clone(),
                time_block: block.clone(),
                start_time: start.to_string(),
                end_time: end.to_string(),
                course: courses[i % courses.len()].clone(),
            });
            i += 1;
        }
    }

    slots
}

/// Pie-chart input: one unit-weight slice per slot, labelled
/// "<day> <time> - <course>".
pub fn time_allocation(slots: &[ScheduleSlot]) -> Vec<AllocationSlice> {
    slots
        .iter()
        .map(|slot| AllocationSlice {
            label: format!("{} {} - {}", slot.day_name, slot.time_block, slot.course),
            weight: 1,
        })
        .collect()
}
