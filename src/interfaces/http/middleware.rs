//! Authentication middleware for Axum
//!
//! Turns `Authorization: Bearer <token>` into an `Identity` request
//! extension. Handlers behind this layer extract it with
//! `Extension<Identity>`.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use crate::domain::TokenAuthority;
use crate::interfaces::http::error::ApiError;

/// Authentication state: the authority that verifies bearer tokens
#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<dyn TokenAuthority>,
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Bearer token authentication middleware
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::unauthenticated("Missing authentication token"))?;

    let token = extract_token(auth_header)
        .ok_or_else(|| ApiError::unauthenticated("Invalid authentication token"))?;

    let identity = auth_state.tokens.verify(token)?;
    tracing::Span::current().record("user_id", identity.id.as_str());
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(extract_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_token("Basic abc"), None);
        assert_eq!(extract_token("Bearer   "), None);
    }
}
