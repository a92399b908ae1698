//! Document store port
//!
//! The store holds one JSON array per collection. Reads return the whole
//! array, writes replace it. There is no locking and no transaction: two
//! writers racing on the same collection resolve as last-write-wins.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::DomainError;

/// Logical collections persisted by the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Websites,
    ChangeRequests,
    Invoices,
    UploadAssets,
    Notifications,
    ActivityLogs,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Users,
        Collection::Websites,
        Collection::ChangeRequests,
        Collection::Invoices,
        Collection::UploadAssets,
        Collection::Notifications,
        Collection::ActivityLogs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Websites => "websites",
            Self::ChangeRequests => "changeRequests",
            Self::Invoices => "invoices",
            Self::UploadAssets => "uploadAssets",
            Self::Notifications => "notifications",
            Self::ActivityLogs => "activityLogs",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A record type stored in a single collection
pub trait Document: serde::Serialize + serde::de::DeserializeOwned + Clone + Send + Sync {
    const COLLECTION: Collection;
    /// Human name used in error messages
    const ENTITY: &'static str;

    fn id(&self) -> &str;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {collection}: {source}")]
    Io {
        collection: Collection,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt {collection} collection: {source}")]
    Corrupt {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        DomainError::Storage(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Whole-collection persistence
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load every record of a collection in insertion order. A collection
    /// that was never written is empty.
    async fn load(&self, collection: Collection) -> StoreResult<Vec<Value>>;

    /// Replace the collection with `records`
    async fn save(&self, collection: Collection, records: Vec<Value>) -> StoreResult<()>;
}
