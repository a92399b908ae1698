//! Users module: admin view of client accounts

pub mod handlers;

pub use handlers::*;
