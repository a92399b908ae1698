//! In-memory document store for development and testing

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use crate::domain::{Collection, DocumentStore, StoreResult};

/// Keeps every collection in a `DashMap`. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryStore {
    collections: DashMap<Collection, Vec<Value>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held in `collection`
    pub fn len(&self, collection: Collection) -> usize {
        self.collections
            .get(&collection)
            .map(|records| records.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn load(&self, collection: Collection) -> StoreResult<Vec<Value>> {
        Ok(self
            .collections
            .get(&collection)
            .map(|records| records.value().clone())
            .unwrap_or_default())
    }

    async fn save(&self, collection: Collection, records: Vec<Value>) -> StoreResult<()> {
        self.collections.insert(collection, records);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn unwritten_collection_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.load(Collection::Invoices).await.unwrap().is_empty());
        assert!(store.is_empty(Collection::Invoices));
    }

    #[tokio::test]
    async fn save_replaces_the_whole_collection() {
        let store = InMemoryStore::new();
        store
            .save(Collection::Websites, vec![json!({"id": "a"}), json!({"id": "b"})])
            .await
            .unwrap();
        store
            .save(Collection::Websites, vec![json!({"id": "c"})])
            .await
            .unwrap();

        let records = store.load(Collection::Websites).await.unwrap();
        assert_eq!(records, vec![json!({"id": "c"})]);
        assert!(store.is_empty(Collection::Users));
    }
}
