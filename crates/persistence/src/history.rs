// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use contract_desk_audit::HistoryEntry;
use csv::StringRecord;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::warn;

/// The fixed column set of the persisted history table, in order.
const HISTORY_COLUMNS: &[&str] = &[
    "timestamp",
    "contract_id",
    "field",
    "old_value",
    "new_value",
    "user",
];

/// Owner of the persisted change-history table.
///
/// Append is the only mutation: entries are never updated or removed.
/// File order is append order, which is chronological for a single
/// writer.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    /// Path to `contract_history.csv`.
    path: PathBuf,
}

impl HistoryStore {
    /// The history table file name.
    pub const FILE_NAME: &'static str = "contract_history.csv";

    /// Creates a store for the history table under `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(Self::FILE_NAME),
        }
    }

    /// Returns the path of the persisted table.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry to the history table.
    ///
    /// Creates the table with its header row on first use. Existing
    /// rows are never rewritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be opened or written.
    pub fn append(&self, entry: &HistoryEntry) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // A zero-length table needs its header just like a missing one.
        let needs_header: bool = !fs::metadata(&self.path).is_ok_and(|meta| meta.len() > 0);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer.write_record(HISTORY_COLUMNS)?;
        }
        writer.write_record([
            entry.timestamp.as_str(),
            entry.contract_id.as_str(),
            entry.field.as_str(),
            entry.old_value.as_str(),
            entry.new_value.as_str(),
            entry.user.as_str(),
        ])?;
        writer.flush()?;

        Ok(())
    }

    /// Returns all entries for one contract, in append order.
    ///
    /// A missing table reads as an empty history.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    pub fn history_for(&self, contract_id: &str) -> Result<Vec<HistoryEntry>, PersistenceError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let mut entries: Vec<HistoryEntry> = Vec::new();
        for record in reader.records() {
            let record: StringRecord = match record {
                Ok(record) => record,
                Err(err) => {
                    warn!(path = %self.path.display(), error = %err, "Skipping malformed history row");
                    continue;
                }
            };
            let field = |idx: usize| -> &str { record.get(idx).unwrap_or("") };
            if field(1) != contract_id {
                continue;
            }
            entries.push(HistoryEntry::with_timestamp(
                field(0).to_string(),
                contract_id,
                field(2),
                field(3).to_string(),
                field(4).to_string(),
                field(5),
            ));
        }

        Ok(entries)
    }
}
