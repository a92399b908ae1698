//! Notifications module: the caller's inbox

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
