//! Ports: interfaces the domain needs from the outside world
//!
//! - `store`: whole-collection document persistence
//! - `tokens`: bearer token issuing and verification

pub mod store;
pub mod tokens;

pub use store::{Collection, Document, DocumentStore, StoreError, StoreResult};
pub use tokens::TokenAuthority;
