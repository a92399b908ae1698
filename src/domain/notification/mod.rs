//! Notification aggregate

pub mod dto;
pub mod model;

pub use dto::GetNotificationsDto;
pub use model::{Notification, NotificationKind};
