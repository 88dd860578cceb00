//! Product record store
//!
//! File-backed CRUD over an ordered collection of product records. The
//! products file holds a single JSON array; a missing file is an empty
//! collection.
//!
//! # Design Principles
//!
//! - No cache: every operation re-reads the file
//! - Whole-file rewrite after every mutation, never during reads
//! - Store-assigned ids: last record's id + 1
//! - `id` is immutable under update
//! - Not-found is `None`, never an error

mod errors;
mod product_store;
mod record;

pub use errors::{StoreError, StoreErrorCode, StoreResult};
pub use product_store::ProductStore;
pub use record::{Payload, Record, RecordId, ID_FIELD};
