//! Identity module: accounts and authentication
//!
//! `UserService` owns signup, login, profile updates, password changes
//! and the admin-only user directory.

pub mod service;

pub use service::{AuthResult, IdentitySettings, UserService};
