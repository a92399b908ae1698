//! Website handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateWebsiteRequest, UpdateWebsiteRequest};
use crate::application::WebsiteService;
use crate::domain::{Identity, Website};
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::{ApiResult, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/websites",
    tag = "Websites",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All websites for admins, own websites otherwise", body = [Website])
    )
)]
pub async fn list_websites(
    State(websites): State<Arc<WebsiteService>>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Json<Vec<Website>>> {
    Ok(Json(websites.list(&identity).await?))
}

#[utoipa::path(
    get,
    path = "/api/websites/{id}",
    tag = "Websites",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Website ID")),
    responses(
        (status = 200, description = "Website", body = Website),
        (status = 403, description = "Not the owner", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_website(
    State(websites): State<Arc<WebsiteService>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> ApiResult<Json<Website>> {
    Ok(Json(websites.get(&identity, &id).await?))
}

#[utoipa::path(
    post,
    path = "/api/websites",
    tag = "Websites",
    security(("bearer_auth" = [])),
    request_body = CreateWebsiteRequest,
    responses(
        (status = 201, description = "Website created", body = Website),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 403, description = "Admin role required", body = ErrorBody),
        (status = 404, description = "Owner not found", body = ErrorBody)
    )
)]
pub async fn create_website(
    State(websites): State<Arc<WebsiteService>>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(request): ValidatedJson<CreateWebsiteRequest>,
) -> ApiResult<(StatusCode, Json<Website>)> {
    let website = websites.create(&identity, request.into()).await?;
    Ok((StatusCode::CREATED, Json(website)))
}

#[utoipa::path(
    put,
    path = "/api/websites/{id}",
    tag = "Websites",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Website ID")),
    request_body = UpdateWebsiteRequest,
    responses(
        (status = 200, description = "Website updated", body = Website),
        (status = 403, description = "Not the owner", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_website(
    State(websites): State<Arc<WebsiteService>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateWebsiteRequest>,
) -> ApiResult<Json<Website>> {
    Ok(Json(websites.update(&identity, &id, request.into()).await?))
}
