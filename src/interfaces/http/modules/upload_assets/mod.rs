//! Upload assets module: files and copy attached to a website

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
