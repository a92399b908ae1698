use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Collection, Document, Lifecycle, Owned};

/// Service plan a website is billed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Plan {
    Foundation,
    Growth,
    Scale,
    Dominance,
}

/// Website status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum WebsiteStatus {
    #[default]
    Draft,
    #[serde(rename = "In Review", alias = "InReview")]
    InReview,
    #[serde(rename = "Needs Payment", alias = "NeedsPayment")]
    NeedsPayment,
    Active,
    Paused,
}

impl WebsiteStatus {
    const ALL: [Self; 5] = [
        Self::Draft,
        Self::InReview,
        Self::NeedsPayment,
        Self::Active,
        Self::Paused,
    ];
}

impl Lifecycle for WebsiteStatus {
    fn allowed_next(&self) -> &'static [Self] {
        &Self::ALL
    }

    fn is_terminal(&self) -> bool {
        false
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::InReview => "In Review",
            Self::NeedsPayment => "Needs Payment",
            Self::Active => "Active",
            Self::Paused => "Paused",
        }
    }
}

/// A client website managed by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub domain: String,
    pub plan: Plan,
    #[serde(default)]
    pub status: WebsiteStatus,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}

impl Document for Website {
    const COLLECTION: Collection = Collection::Websites;
    const ENTITY: &'static str = "Website";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Owned for Website {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}
