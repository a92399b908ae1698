//! Upload asset handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateUploadAssetRequest, WebsiteFilter};
use crate::application::UploadAssetService;
use crate::domain::{Identity, UploadAsset};
use crate::interfaces::http::common::{ApiQuery, ValidatedJson};
use crate::interfaces::http::error::{ApiResult, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/upload-assets",
    tag = "Upload Assets",
    security(("bearer_auth" = [])),
    params(WebsiteFilter),
    responses(
        (status = 200, description = "Assets of the website", body = [UploadAsset]),
        (status = 400, description = "websiteId is required", body = ErrorBody),
        (status = 403, description = "Not the website owner", body = ErrorBody),
        (status = 404, description = "Website not found", body = ErrorBody)
    )
)]
pub async fn list_upload_assets(
    State(assets): State<Arc<UploadAssetService>>,
    Extension(identity): Extension<Identity>,
    ApiQuery(filter): ApiQuery<WebsiteFilter>,
) -> ApiResult<Json<Vec<UploadAsset>>> {
    Ok(Json(
        assets
            .list(&identity, filter.website_id.as_deref())
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/upload-assets/{id}",
    tag = "Upload Assets",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset", body = UploadAsset),
        (status = 403, description = "Not the owner", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_upload_asset(
    State(assets): State<Arc<UploadAssetService>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> ApiResult<Json<UploadAsset>> {
    Ok(Json(assets.get(&identity, &id).await?))
}

#[utoipa::path(
    post,
    path = "/api/upload-assets",
    tag = "Upload Assets",
    security(("bearer_auth" = [])),
    request_body = CreateUploadAssetRequest,
    responses(
        (status = 201, description = "Asset stored", body = UploadAsset),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 403, description = "Not the website owner", body = ErrorBody),
        (status = 404, description = "Website not found", body = ErrorBody)
    )
)]
pub async fn create_upload_asset(
    State(assets): State<Arc<UploadAssetService>>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(request): ValidatedJson<CreateUploadAssetRequest>,
) -> ApiResult<(StatusCode, Json<UploadAsset>)> {
    let asset = assets.create(&identity, request.into()).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}
