//! Activity log aggregate

pub mod dto;
pub mod model;

pub use dto::{GetActivityLogsDto, DEFAULT_ACTIVITY_LIMIT};
pub use model::{ActivityAction, ActivityLog};
