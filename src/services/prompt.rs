use crate::models::PlannerSession;

/// Formats the collected session state into the single natural-language
/// prompt sent to the generation service. Callers are expected to have
/// checked `PlannerSession::is_complete` first; the builder itself does no
/// validation or escaping.
pub fn build_plan_prompt(session: &PlannerSession) -> String {
    let course_load = session.course_names().join(", ");
    let deadlines = session
        .deadlines
        .iter()
        .map(|d| format!("{} by {}", d.course, d.due_date))
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "Generate a detailed weekly study plan for the following courses: {}. \
         Deadlines: {}. Preferences: {}. \
         Study Days: {}. Study Times: {}.",
        course_load,
        deadlines,
        session.preferences,
        session.study_days.join(", "),
        session.study_times.join(", "),
    )
}
