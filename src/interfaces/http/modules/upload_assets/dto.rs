use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{AssetType, CreateUploadAssetDto};

pub use crate::interfaces::http::modules::change_requests::WebsiteFilter;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUploadAssetRequest {
    #[serde(default)]
    pub website_id: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    #[serde(default)]
    #[validate(length(max = 200, message = "label must be at most 200 characters"))]
    pub label: String,
    /// Where the content lives; a placeholder is stored when absent
    #[validate(length(max = 2048, message = "url must be at most 2048 characters"))]
    pub url: Option<String>,
}

impl From<CreateUploadAssetRequest> for CreateUploadAssetDto {
    fn from(r: CreateUploadAssetRequest) -> Self {
        Self {
            website_id: r.website_id,
            asset_type: r.asset_type,
            label: r.label,
            url: r.url,
        }
    }
}
