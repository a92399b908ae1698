//! Activity log handlers

use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use super::dto::ActivityLogParams;
use crate::application::ActivityLogService;
use crate::domain::{ActivityLog, Identity};
use crate::interfaces::http::common::ApiQuery;
use crate::interfaces::http::error::ApiResult;

#[utoipa::path(
    get,
    path = "/api/activity-logs",
    tag = "Activity Logs",
    security(("bearer_auth" = [])),
    params(ActivityLogParams),
    responses(
        (status = 200, description = "Activity entries, newest first", body = [ActivityLog])
    )
)]
pub async fn list_activity_logs(
    State(logs): State<Arc<ActivityLogService>>,
    Extension(identity): Extension<Identity>,
    ApiQuery(params): ApiQuery<ActivityLogParams>,
) -> ApiResult<Json<Vec<ActivityLog>>> {
    Ok(Json(logs.list(&identity, params.into()).await?))
}
