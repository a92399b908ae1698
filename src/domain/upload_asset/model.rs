use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Collection, Document, Owned};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Image,
    Text,
    File,
}

/// Content supplied by a client for one of their websites. Immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadAsset {
    pub id: String,
    pub website_id: String,
    pub owner_id: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub label: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Document for UploadAsset {
    const COLLECTION: Collection = Collection::UploadAssets;
    const ENTITY: &'static str = "Upload asset";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Owned for UploadAsset {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}
