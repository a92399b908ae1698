//! Cryptography: bearer tokens and password hashing

pub mod jwt;
pub mod password;

pub use jwt::{JwtAuthority, JwtConfig};
