//! File-backed product store
//!
//! The whole collection lives in one JSON file. Every operation re-reads the
//! file, and every mutating operation rewrites it in full. Nothing is cached
//! and no file handle outlives the operation that opened it.
//!
//! # Concurrency
//!
//! There is no locking around the read-modify-write cycle. Two overlapping
//! `create` calls can both observe the same last id and append duplicates;
//! overlapping mutations on the same file are last-write-wins. Callers that
//! share a file across tasks must serialize mutations themselves.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use super::errors::{StoreError, StoreResult};
use super::record::{Payload, Record, RecordId};

/// CRUD over the product collection stored at a single path.
#[derive(Debug, Clone)]
pub struct ProductStore {
    path: PathBuf,
}

impl ProductStore {
    /// Creates a store for the file at `path`. The file is not touched until
    /// the first operation; it does not need to exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the products file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the full collection in stored order.
    pub async fn list(&self) -> StoreResult<Vec<Record>> {
        self.read_collection().await
    }

    /// Returns the first record whose id matches, or `None`.
    pub async fn get_by_id(&self, id: RecordId) -> StoreResult<Option<Record>> {
        let records = self.read_collection().await?;
        let found = records.into_iter().find(|r| r.id() == Some(id));
        debug!(path = %self.path.display(), id, found = found.is_some(), "get_by_id");
        Ok(found)
    }

    /// Appends a new record built from `payload` and returns it.
    ///
    /// The new id is the last record's id plus one (or 1 for an empty
    /// collection). This follows position, not the maximum id: if the last
    /// record does not hold the largest id, the assigned id may collide with
    /// an earlier one.
    pub async fn create(&self, payload: Payload) -> StoreResult<Record> {
        let mut records = self.read_collection().await?;
        let id = self.next_id(&records)?;

        let record = Record::with_id(id, payload);
        records.push(record.clone());
        self.write_collection(&records).await?;

        info!(path = %self.path.display(), id, count = records.len(), "product created");
        Ok(record)
    }

    /// Overlays `patch` onto the first record with a matching id.
    ///
    /// Returns `None` without writing when no record matches. The `id` field
    /// of the stored record is never changed.
    pub async fn update(&self, id: RecordId, patch: Payload) -> StoreResult<Option<Record>> {
        let mut records = self.read_collection().await?;
        let Some(index) = position_of(&records, id) else {
            debug!(path = %self.path.display(), id, "update: no such product");
            return Ok(None);
        };

        records[index].apply_patch(patch);
        let updated = records[index].clone();
        self.write_collection(&records).await?;

        info!(path = %self.path.display(), id, "product updated");
        Ok(Some(updated))
    }

    /// Removes the first record with a matching id and returns it.
    ///
    /// Returns `None` without writing when no record matches.
    pub async fn delete(&self, id: RecordId) -> StoreResult<Option<Record>> {
        let mut records = self.read_collection().await?;
        let Some(index) = position_of(&records, id) else {
            debug!(path = %self.path.display(), id, "delete: no such product");
            return Ok(None);
        };

        let removed = records.remove(index);
        self.write_collection(&records).await?;

        info!(path = %self.path.display(), id, count = records.len(), "product deleted");
        Ok(Some(removed))
    }

    fn next_id(&self, records: &[Record]) -> StoreResult<RecordId> {
        let Some(last) = records.last() else {
            return Ok(1);
        };
        last.id()
            .and_then(|id| id.checked_add(1))
            .ok_or_else(|| {
                StoreError::data_corruption(
                    &self.path,
                    "Last product has no valid integer id",
                )
            })
    }

    /// Reads and decodes the products file. A missing file is an empty
    /// collection.
    async fn read_collection(&self) -> StoreResult<Vec<Record>> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "products file absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::read_failed(&self.path, e)),
        };

        let records: Vec<Record> = serde_json::from_slice(&data)
            .map_err(|e| StoreError::decode_failed(&self.path, e))?;
        debug!(path = %self.path.display(), count = records.len(), "products file read");
        Ok(records)
    }

    /// Encodes the collection with 2-space indentation and replaces the file.
    async fn write_collection(&self, records: &[Record]) -> StoreResult<()> {
        let encoded = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::encode_failed(&self.path, e))?;
        fs::write(&self.path, encoded)
            .await
            .map_err(|e| StoreError::write_failed(&self.path, e))
    }
}

fn position_of(records: &[Record], id: RecordId) -> Option<usize> {
    records.iter().position(|r| r.id() == Some(id))
}
