use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::GetActivityLogsDto;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ActivityLogParams {
    /// Admins only; ignored for everyone else
    pub user_id: Option<String>,
    pub website_id: Option<String>,
    /// Defaults to 50
    pub limit: Option<usize>,
}

impl From<ActivityLogParams> for GetActivityLogsDto {
    fn from(p: ActivityLogParams) -> Self {
        Self {
            user_id: p.user_id,
            website_id: p.website_id,
            limit: p.limit,
        }
    }
}
