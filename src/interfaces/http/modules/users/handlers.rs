//! User directory handlers
//!
//! Admin-only. Delegates to `UserService` from the identity layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::application::UserService;
use crate::domain::{Identity, PublicUser};
use crate::interfaces::http::error::{ApiResult, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Client accounts", body = [PublicUser]),
        (status = 403, description = "Admin role required", body = ErrorBody)
    )
)]
pub async fn list_clients(
    State(users): State<Arc<UserService>>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Json<Vec<PublicUser>>> {
    Ok(Json(users.list_clients(&identity).await?))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = PublicUser),
        (status = 403, description = "Admin role required", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(users): State<Arc<UserService>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> ApiResult<Json<PublicUser>> {
    Ok(Json(users.get_user(&identity, &id).await?))
}
