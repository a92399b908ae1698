use super::AssetType;

#[derive(Debug, Clone)]
pub struct CreateUploadAssetDto {
    pub website_id: String,
    pub asset_type: AssetType,
    pub label: String,
    /// A placeholder reference is generated when absent
    pub url: Option<String>,
}
