//! Analytics module: dashboard figures

pub mod handlers;

pub use handlers::*;
