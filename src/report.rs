use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};

use crate::error::ModtimesResult;
use crate::storage::{ObjectStore, StoredEntry};

const DATA_FILE_SUFFIX: &str = ".parquet";

/// A qualifying object and the last-modified instant from its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    pub key: String,
    pub last_modified: DateTime<Utc>,
}

pub struct TimestampReport {
    /// Deduplicated stamps, unordered.
    pub distinct: HashSet<DateTime<Utc>>,
    /// All qualifying objects, newest first.
    pub records: Vec<ObjectRecord>,
}
impl TimestampReport {
    /// One line per distinct stamp, in whatever order the set yields them.
    /// Stamps render as RFC 3339.
    pub fn write_summary(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "Distinct Timestamps:")?;
        for stamp in &self.distinct {
            writeln!(out, "- {}", stamp.to_rfc3339())?;
        }
        Ok(())
    }

    pub fn write_listing(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "Sorted Object List:")?;
        for record in &self.records {
            writeln!(
                out,
                "Object Key: {}, Timestamp: {}",
                record.key,
                record.last_modified.to_rfc3339()
            )?;
        }
        Ok(())
    }
}

/// List the prefix, keep the data files, and look up each one's last-modified
/// instant, strictly in listing order. The first failed lookup aborts the scan.
pub fn scan(store: &impl ObjectStore) -> ModtimesResult<TimestampReport> {
    let entries = store.list_under_prefix()?;
    log::info!("{} objects listed under prefix", entries.len());

    let mut distinct = HashSet::new();
    let mut records = Vec::new();

    for entry in entries.into_iter().filter(is_data_file) {
        let stamp = store.last_modified(&entry.key)?;
        distinct.insert(stamp);
        records.push(ObjectRecord {
            key: entry.key,
            last_modified: stamp,
        });
    }
    log::info!(
        "{} data files carried {} distinct timestamps",
        records.len(),
        distinct.len()
    );

    // Newest first; equal stamps keep their listing order.
    records.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));

    Ok(TimestampReport { distinct, records })
}

fn is_data_file(entry: &StoredEntry) -> bool {
    entry.size != 0 && entry.key.ends_with(DATA_FILE_SUFFIX)
}
