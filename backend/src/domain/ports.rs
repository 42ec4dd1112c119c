//! Ports consumed by the wish service.
//!
//! Adapters implement these traits; handlers and services depend on them as
//! `Arc<dyn …>` so the domain stays free of storage details.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use crate::domain::wish::{Wish, WishFilter};

/// Append-only store of wish records.
///
/// Implementations must serialise appends so insertion order and id
/// uniqueness hold when handlers run on multiple threads.
#[async_trait]
pub trait WishRepository: Send + Sync {
    /// Append a completed record to the store.
    async fn append(&self, wish: Wish);

    /// Return all records satisfying the filter, preserving insertion
    /// order. Never fails; no matches is an empty result.
    async fn scan(&self, filter: &WishFilter) -> Vec<Wish>;
}

/// Failure writing photo bytes to the content directory.
#[derive(Debug, ThisError)]
pub enum PhotoStoreError {
    /// The underlying filesystem write failed.
    #[error("failed to write photo file: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistence for decoded photo bytes.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Write the bytes under a fresh collision-free name and return the
    /// stored path.
    async fn save(&self, bytes: &[u8]) -> Result<String, PhotoStoreError>;
}
