//! Infrastructure layer - external concerns

pub mod crypto;
pub mod storage;

pub use crypto::{JwtAuthority, JwtConfig};
pub use storage::{InMemoryStore, JsonFileStore};
