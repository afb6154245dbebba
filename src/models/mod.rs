pub mod course;
pub mod session;

pub use course::{CourseDeadline, EditCourseRequest};
pub use session::{PlannerSession, TIME_BLOCKS, WEEKDAYS, validate_selection};
