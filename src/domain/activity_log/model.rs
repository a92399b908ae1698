use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Collection, Document, Owned};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ActivityAction {
    WebsiteCreated,
    WebsiteUpdated,
    ChangeRequestCreated,
    ChangeRequestReviewed,
    InvoiceCreated,
    InvoiceUpdated,
    InvoicePaid,
    AssetUploaded,
    ProfileUpdated,
    PasswordChanged,
}

/// Append-only record of something a user did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: String,
    /// The acting user
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_id: Option<String>,
    pub action: ActivityAction,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Document for ActivityLog {
    const COLLECTION: Collection = Collection::ActivityLogs;
    const ENTITY: &'static str = "Activity log";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Owned for ActivityLog {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}
