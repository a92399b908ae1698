use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Collection, Document, Lifecycle, Owned};

/// Review status of a change request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl Lifecycle for RequestStatus {
    // Admins may revert a decision, so reviewed requests can go back to Pending.
    fn allowed_next(&self) -> &'static [Self] {
        &[Self::Pending, Self::Approved, Self::Rejected]
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// A client's request for a change to one of their websites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequest {
    pub id: String,
    pub website_id: String,
    /// The identity that filed the request, not necessarily the website owner
    pub owner_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for ChangeRequest {
    const COLLECTION: Collection = Collection::ChangeRequests;
    const ENTITY: &'static str = "Change request";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Owned for ChangeRequest {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}
