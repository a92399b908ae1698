//! HTTP REST API interfaces
//!
//! - `middleware`: bearer token authentication
//! - `modules`: one module per resource (dto + handlers)
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod error;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::create_api_router;
pub use state::AppState;
