use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::GetNotificationsDto;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NotificationParams {
    /// Only unread notifications
    pub unread_only: Option<bool>,
    /// Newest first, at most this many
    pub limit: Option<usize>,
}

impl From<NotificationParams> for GetNotificationsDto {
    fn from(p: NotificationParams) -> Self {
        Self {
            unread_only: p.unread_only.unwrap_or(false),
            limit: p.limit,
        }
    }
}
