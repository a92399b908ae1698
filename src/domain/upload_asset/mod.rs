//! Upload asset aggregate

pub mod dto;
pub mod model;

pub use dto::CreateUploadAssetDto;
pub use model::{AssetType, UploadAsset};
