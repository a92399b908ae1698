//! JSON file document store
//!
//! One pretty-printed JSON array per collection inside `data_dir`,
//! e.g. `data/websites.json`. Every save rewrites the whole file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{Collection, DocumentStore, StoreError, StoreResult};

pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create the data directory and an empty array file for every
    /// collection that does not exist yet. Existing files are left alone.
    pub async fn init(&self) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| StoreError::Io {
                collection: Collection::Users,
                source,
            })?;

        for collection in Collection::ALL {
            let path = self.path_for(collection);
            if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                continue;
            }
            tokio::fs::write(&path, b"[]")
                .await
                .map_err(|source| StoreError::Io { collection, source })?;
            info!(path = %path.display(), "Created empty collection file");
        }

        Ok(())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self, collection: Collection) -> StoreResult<Vec<Value>> {
        let path = self.path_for(collection);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { collection, source }),
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&raw).map_err(|source| StoreError::Corrupt { collection, source })
    }

    async fn save(&self, collection: Collection, records: Vec<Value>) -> StoreResult<()> {
        let path = self.path_for(collection);
        let body = serde_json::to_vec_pretty(&records)?;

        // Readers must never see a half-written array, and concurrent
        // writers must never share a temp file. Last rename wins.
        let tmp = self
            .data_dir
            .join(format!(".{}.{}.tmp", collection.file_name(), Uuid::new_v4().simple()));
        if let Err(source) = tokio::fs::write(&tmp, &body).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::Io { collection, source });
        }
        if let Err(source) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::Io { collection, source });
        }

        debug!(%collection, records = records.len(), "Collection saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn init_creates_an_empty_file_per_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data"));
        store.init().await.unwrap();

        for collection in Collection::ALL {
            let path = dir.path().join("data").join(collection.file_name());
            assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
        }
    }

    #[tokio::test]
    async fn init_keeps_existing_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.init().await.unwrap();
        store
            .save(Collection::Users, vec![json!({"id": "admin-1"})])
            .await
            .unwrap();

        store.init().await.unwrap();
        let users = store.load(Collection::Users).await.unwrap();
        assert_eq!(users, vec![json!({"id": "admin-1"})]);
    }

    #[tokio::test]
    async fn saved_records_come_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let records = vec![json!({"id": "1"}), json!({"id": "2"}), json!({"id": "3"})];
        store
            .save(Collection::Invoices, records.clone())
            .await
            .unwrap();

        assert_eq!(store.load(Collection::Invoices).await.unwrap(), records);
        assert_eq!(file_names(dir.path()), vec!["invoices.json"]);
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_saves_leave_one_whole_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(JsonFileStore::new(dir.path()));

        for round in 0..50 {
            let writers: Vec<_> = (1..=8usize)
                .map(|len| {
                    let store = store.clone();
                    tokio::spawn(async move {
                        let records = (0..len).map(|i| json!({ "id": i, "round": round })).collect();
                        store.save(Collection::ActivityLogs, records).await
                    })
                })
                .collect();
            for writer in writers {
                writer.await.unwrap().unwrap();
            }

            let loaded = store.load(Collection::ActivityLogs).await.unwrap();
            assert!((1..=8).contains(&loaded.len()));
            assert!(loaded.iter().all(|r| r["round"] == round));
        }

        assert_eq!(file_names(dir.path()), vec!["activityLogs.json"]);
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load(Collection::Notifications).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("websites.json"), "{not json").unwrap();
        let store = JsonFileStore::new(dir.path());

        let err = store.load(Collection::Websites).await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { collection: Collection::Websites, .. }));
    }
}
