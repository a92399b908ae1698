//! Websites module: client sites managed by the service

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
