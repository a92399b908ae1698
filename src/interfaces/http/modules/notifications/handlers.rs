//! Notification handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::dto::NotificationParams;
use crate::application::NotificationService;
use crate::domain::{Identity, Notification};
use crate::interfaces::http::common::{ApiQuery, MessageResponse};
use crate::interfaces::http::error::{ApiResult, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    params(NotificationParams),
    responses(
        (status = 200, description = "The caller's notifications, newest first", body = [Notification])
    )
)]
pub async fn list_notifications(
    State(notifications): State<Arc<NotificationService>>,
    Extension(identity): Extension<Identity>,
    ApiQuery(params): ApiQuery<NotificationParams>,
) -> ApiResult<Json<Vec<Notification>>> {
    Ok(Json(notifications.list(&identity, params.into()).await?))
}

#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification marked read", body = Notification),
        (status = 403, description = "Addressed to someone else", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn mark_notification_read(
    State(notifications): State<Arc<NotificationService>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> ApiResult<Json<Notification>> {
    Ok(Json(notifications.mark_read(&identity, &id).await?))
}

#[utoipa::path(
    patch,
    path = "/api/notifications/read-all",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All own notifications marked read", body = MessageResponse)
    )
)]
pub async fn mark_all_notifications_read(
    State(notifications): State<Arc<NotificationService>>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Json<MessageResponse>> {
    let count = notifications.mark_all_read(&identity).await?;
    Ok(Json(
        MessageResponse::new("All notifications marked as read").with_count(count),
    ))
}
