pub mod config;
pub mod s3;

use chrono::{DateTime, Utc};

use crate::error::ModtimesResult;

/// One entry from a bucket listing. Zero-size entries are typically
/// directory markers rather than data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub key: String,
    pub size: i64,
}

pub trait ObjectStore {
    /// A single page of entries whose keys start with the configured prefix.
    fn list_under_prefix(&self) -> ModtimesResult<Vec<StoredEntry>>;

    /// Last-modified instant from the object's metadata, one round trip per key.
    fn last_modified(&self, key: &str) -> ModtimesResult<DateTime<Utc>>;
}
