//! Dashboard handler

use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use crate::application::{AnalyticsService, DashboardStats};
use crate::domain::Identity;
use crate::interfaces::http::error::ApiResult;

#[utoipa::path(
    get,
    path = "/api/analytics/dashboard",
    tag = "Analytics",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Global figures for admins, own figures otherwise", body = DashboardStats)
    )
)]
pub async fn dashboard(
    State(analytics): State<Arc<AnalyticsService>>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Json<DashboardStats>> {
    Ok(Json(analytics.dashboard(&identity).await?))
}
