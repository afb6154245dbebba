pub mod prompt;
pub mod schedule;

pub use prompt::build_plan_prompt;
pub use schedule::{AllocationSlice, ScheduleSlot, block_hours, derive_schedule, time_allocation};
