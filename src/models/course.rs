use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One course/deadline entry. Entries are identified by their position in
/// the session's deadline list; there is no per-entry id and no delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDeadline {
    pub course: String,
    pub due_date: NaiveDate,
}

impl CourseDeadline {
    /// Default entry produced by the add-course action: empty name, due today.
    pub fn new_for(today: NaiveDate) -> Self {
        Self {
            course: String::new(),
            due_date: today,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditCourseRequest {
    pub course: Option<String>,
    pub due_date: Option<NaiveDate>,
}
