//! # SiteKeeper
//!
//! REST API of a website-management portal: clients own websites, file
//! change requests and upload assets, admins review requests and bill the
//! websites they run.
//!
//! ## Architecture
//!
//! - **domain**: entities, the acting identity, status machines and ports
//! - **application**: use cases guarded by the ownership access policy
//! - **infrastructure**: JSON file / in-memory document stores, JWT, bcrypt
//! - **interfaces**: axum REST API with Swagger documentation
//! - **server**: start/stop lifecycle shared by both binaries

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig};
pub use interfaces::http::{create_api_router, AppState};
