//! Change request handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateChangeRequestRequest, ReviewChangeRequestRequest, WebsiteFilter};
use crate::application::ChangeRequestService;
use crate::domain::{ChangeRequest, Identity};
use crate::interfaces::http::common::{ApiQuery, ValidatedJson};
use crate::interfaces::http::error::{ApiResult, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/change-requests",
    tag = "Change Requests",
    security(("bearer_auth" = [])),
    params(WebsiteFilter),
    responses(
        (status = 200, description = "Visible change requests", body = [ChangeRequest])
    )
)]
pub async fn list_change_requests(
    State(requests): State<Arc<ChangeRequestService>>,
    Extension(identity): Extension<Identity>,
    ApiQuery(filter): ApiQuery<WebsiteFilter>,
) -> ApiResult<Json<Vec<ChangeRequest>>> {
    Ok(Json(
        requests
            .list(&identity, filter.website_id.as_deref())
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/change-requests/{id}",
    tag = "Change Requests",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Change request ID")),
    responses(
        (status = 200, description = "Change request", body = ChangeRequest),
        (status = 403, description = "Not the owner", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_change_request(
    State(requests): State<Arc<ChangeRequestService>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> ApiResult<Json<ChangeRequest>> {
    Ok(Json(requests.get(&identity, &id).await?))
}

#[utoipa::path(
    post,
    path = "/api/change-requests",
    tag = "Change Requests",
    security(("bearer_auth" = [])),
    request_body = CreateChangeRequestRequest,
    responses(
        (status = 201, description = "Change request filed", body = ChangeRequest),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 403, description = "Not the website owner", body = ErrorBody),
        (status = 404, description = "Website not found", body = ErrorBody)
    )
)]
pub async fn create_change_request(
    State(requests): State<Arc<ChangeRequestService>>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(request): ValidatedJson<CreateChangeRequestRequest>,
) -> ApiResult<(StatusCode, Json<ChangeRequest>)> {
    let created = requests.create(&identity, request.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/api/change-requests/{id}",
    tag = "Change Requests",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Change request ID")),
    request_body = ReviewChangeRequestRequest,
    responses(
        (status = 200, description = "Change request reviewed", body = ChangeRequest),
        (status = 403, description = "Admin role required", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn review_change_request(
    State(requests): State<Arc<ChangeRequestService>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<ReviewChangeRequestRequest>,
) -> ApiResult<Json<ChangeRequest>> {
    Ok(Json(requests.review(&identity, &id, request.into()).await?))
}
