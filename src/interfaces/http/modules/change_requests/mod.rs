//! Change requests module: client edits and admin review

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
