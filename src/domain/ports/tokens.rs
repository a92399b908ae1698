//! Token port: the identity provider boundary

use crate::domain::{DomainResult, Identity, User};

/// Issues and verifies bearer tokens carrying `{id, role}`
pub trait TokenAuthority: Send + Sync {
    fn issue(&self, user: &User) -> DomainResult<String>;

    /// Fails with `DomainError::Unauthenticated` for bad, foreign or expired tokens
    fn verify(&self, token: &str) -> DomainResult<Identity>;

    /// Lifetime of issued tokens in seconds
    fn expires_in(&self) -> i64;
}
