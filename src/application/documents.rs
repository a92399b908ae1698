//! Typed access to the document store
//!
//! Wraps `DocumentStore` so services work with entities instead of raw JSON.
//! Each write is read-entire-collection, change in memory, write it back.

use std::sync::Arc;

use crate::domain::{Document, DocumentStore, DomainError, DomainResult};

#[derive(Clone)]
pub struct Documents {
    store: Arc<dyn DocumentStore>,
}

impl Documents {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Every record of `T`'s collection, insertion order
    pub async fn all<T: Document>(&self) -> DomainResult<Vec<T>> {
        let raw = self.store.load(T::COLLECTION).await?;
        raw.into_iter()
            .map(|value| {
                serde_json::from_value(value).map_err(|e| {
                    DomainError::Storage(format!("Corrupt record in {}: {}", T::COLLECTION, e))
                })
            })
            .collect()
    }

    /// Record by id, `NotFound` when absent
    pub async fn get<T: Document>(&self, id: &str) -> DomainResult<T> {
        self.all::<T>()
            .await?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| DomainError::not_found(T::ENTITY, id))
    }

    pub async fn replace_all<T: Document>(&self, records: &[T]) -> DomainResult<()> {
        let raw = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        self.store.save(T::COLLECTION, raw).await?;
        Ok(())
    }

    /// Append a record and persist the collection
    pub async fn insert<T: Document>(&self, record: T) -> DomainResult<T> {
        let mut records = self.all::<T>().await?;
        records.push(record.clone());
        self.replace_all(&records).await?;
        Ok(record)
    }

    /// Load, mutate one record in place, persist.
    ///
    /// `change` runs before anything is written; if it fails the collection
    /// is left untouched.
    pub async fn update<T, F>(&self, id: &str, change: F) -> DomainResult<T>
    where
        T: Document,
        F: FnOnce(&mut T) -> DomainResult<()>,
    {
        let mut records = self.all::<T>().await?;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| DomainError::not_found(T::ENTITY, id))?;

        change(record)?;
        let updated = record.clone();

        self.replace_all(&records).await?;
        Ok(updated)
    }

    /// Mutate every record matching `select`, persisting only if one changed.
    /// Returns how many records were touched.
    pub async fn update_where<T, P, F>(&self, select: P, mut change: F) -> DomainResult<usize>
    where
        T: Document,
        P: Fn(&T) -> bool,
        F: FnMut(&mut T),
    {
        let mut records = self.all::<T>().await?;
        let mut touched = 0;
        for record in records.iter_mut().filter(|r| select(r)) {
            change(record);
            touched += 1;
        }
        if touched > 0 {
            self.replace_all(&records).await?;
        }
        Ok(touched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Collection, Denial};
    use crate::infrastructure::InMemoryStore;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        text: String,
    }

    impl Document for Note {
        const COLLECTION: Collection = Collection::ActivityLogs;
        const ENTITY: &'static str = "Note";

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.into(),
            text: text.into(),
        }
    }

    fn docs() -> (Arc<InMemoryStore>, Documents) {
        let store = Arc::new(InMemoryStore::new());
        (store.clone(), Documents::new(store))
    }

    #[tokio::test]
    async fn insert_then_get() {
        let (_, docs) = docs();
        docs.insert(note("a", "first")).await.unwrap();
        docs.insert(note("b", "second")).await.unwrap();

        assert_eq!(docs.get::<Note>("b").await.unwrap(), note("b", "second"));
        let err = docs.get::<Note>("zzz").await.unwrap_err();
        assert_eq!(err.to_string(), "Note not found");
    }

    #[tokio::test]
    async fn failed_change_writes_nothing() {
        let (store, docs) = docs();
        docs.insert(note("a", "first")).await.unwrap();

        let result = docs
            .update::<Note, _>("a", |n| {
                n.text = "changed".into();
                Err(DomainError::Forbidden(Denial::NotOwner))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(docs.get::<Note>("a").await.unwrap().text, "first");
        assert_eq!(store.len(Collection::ActivityLogs), 1);
    }

    #[tokio::test]
    async fn update_where_counts_touched_records() {
        let (_, docs) = docs();
        docs.insert(note("a", "x")).await.unwrap();
        docs.insert(note("b", "y")).await.unwrap();
        docs.insert(note("c", "x")).await.unwrap();

        let touched = docs
            .update_where::<Note, _, _>(|n| n.text == "x", |n| n.text = "z".into())
            .await
            .unwrap();

        assert_eq!(touched, 2);
        let texts: Vec<String> = docs
            .all::<Note>()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.text)
            .collect();
        assert_eq!(texts, vec!["z", "y", "z"]);
    }
}
