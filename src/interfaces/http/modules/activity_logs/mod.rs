//! Activity logs module: the audit feed

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
