use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::CourseDeadline;

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const TIME_BLOCKS: [&str; 3] = ["Morning", "Afternoon", "Evening"];

/// All state for one planning session. Everything lives in memory for the
/// process lifetime; reset restores the whole struct to its initial value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerSession {
    pub deadlines: Vec<CourseDeadline>,
    pub preferences: String,
    pub study_days: Vec<String>,
    pub study_times: Vec<String>,
    pub study_plan: Option<String>,
}

impl PlannerSession {
    /// Generate requires all four input groups to be filled in.
    pub fn is_complete(&self) -> bool {
        !self.deadlines.is_empty()
            && !self.preferences.is_empty()
            && !self.study_days.is_empty()
            && !self.study_times.is_empty()
    }

    pub fn course_names(&self) -> Vec<String> {
        self.deadlines.iter().map(|d| d.course.clone()).collect()
    }

    /// Atomic reset of every session field, selections included.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Validates a day/time multi-select against its fixed enumeration,
/// dropping duplicates while keeping selection order.
pub fn validate_selection(values: Vec<String>, allowed: &[&str]) -> Result<Vec<String>, AppError> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !allowed.contains(&value.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Unknown selection: {}",
                value
            )));
        }
        if !out.contains(&value) {
            out.push(value);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid date")
    }

    #[test]
    fn empty_session_is_incomplete() {
        let session = PlannerSession::default();
        assert!(!session.is_complete());
    }

    #[test]
    fn session_with_all_groups_is_complete() {
        let session = PlannerSession {
            deadlines: vec![CourseDeadline {
                course: "Math".to_string(),
                due_date: date("2024-01-10"),
            }],
            preferences: "45 min sessions".to_string(),
            study_days: vec!["Monday".to_string()],
            study_times: vec!["Morning".to_string()],
            study_plan: None,
        };
        assert!(session.is_complete());
    }

    #[test]
    fn reset_clears_every_field() {
        let mut session = PlannerSession {
            deadlines: vec![CourseDeadline::new_for(date("2024-01-10"))],
            preferences: "evenings only".to_string(),
            study_days: vec!["Monday".to_string(), "Friday".to_string()],
            study_times: vec!["Evening".to_string()],
            study_plan: Some("old plan".to_string()),
        };

        session.reset();

        assert!(session.deadlines.is_empty());
        assert!(session.preferences.is_empty());
        assert!(session.study_days.is_empty());
        assert!(session.study_times.is_empty());
        assert!(session.study_plan.is_none());
    }

    #[test]
    fn selection_rejects_unknown_and_dedupes() {
        let ok = validate_selection(
            vec![
                "Friday".to_string(),
                "Monday".to_string(),
                "Friday".to_string(),
            ],
            &WEEKDAYS,
        )
        .expect("valid days");
        assert_eq!(ok, vec!["Friday".to_string(), "Monday".to_string()]);

        let err = validate_selection(vec!["Midnight".to_string()], &TIME_BLOCKS);
        assert!(err.is_err());
    }
}
