// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use contract_desk_domain::{
    CONTRACT_COLUMNS, Contract, ContractId, ContractRow, Inn, derive_status, parse_end_date,
};
use csv::StringRecord;
use std::fs;
use std::path::{Path, PathBuf};
use time::Date;
use tracing::warn;

/// Column indices in the persisted contract table.
const COL_CONTRACT_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_DIRECTOR: usize = 2;
const COL_ADDRESS: usize = 3;
const COL_INN: usize = 4;
const COL_END_DATE: usize = 5;
const COL_VALUE: usize = 6;
const COL_COMMENTS: usize = 8;
const COL_LAWYER: usize = 9;

/// Owner of the persisted contract table.
///
/// The store reads and writes the whole table; there are no partial
/// updates. Every load recomputes the status column from the end date,
/// so a stale persisted status is harmless.
#[derive(Debug, Clone)]
pub struct ContractStore {
    /// Path to `contracts.csv`.
    path: PathBuf,
}

impl ContractStore {
    /// The contract table file name.
    pub const FILE_NAME: &'static str = "contracts.csv";

    /// Creates a store for the contract table under `data_dir`.
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

    /// Loads the contract table, deriving every row's status against `today`.
    ///
    /// A missing file is initialized as an empty table with the fixed
    /// column set and persisted. A malformed or empty file is treated as
    /// an empty table, not an error. Row-level damage is degraded:
    /// unparsable end dates become "no expiry", unparsable values become
    /// `0.0`, short rows are padded with empty fields.
    ///
    /// # Errors
    ///
    /// Returns an error only for genuine I/O failures.
    pub fn load(&self, today: Date) -> Result<Vec<ContractRow>, PersistenceError> {
        if !self.path.exists() {
            self.write_rows(&[])?;
            return Ok(Vec::new());
        }

        let mut reader = match csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
        {
            Ok(reader) => reader,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Unreadable contract table, treating as empty");
                return Ok(Vec::new());
            }
        };

        let mut rows: Vec<ContractRow> = Vec::new();
        for record in reader.records() {
            let record: StringRecord = match record {
                Ok(record) => record,
                Err(err) => {
                    warn!(path = %self.path.display(), error = %err, "Skipping malformed contract row");
                    continue;
                }
            };
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            rows.push(row_from_record(&record, today));
        }

        Ok(rows)
    }

    /// Persists the full table, overwriting prior contents.
    ///
    /// The write goes to a temp file that is atomically renamed over the
    /// table, so a crash mid-write never leaves a truncated table. The
    /// derived status label is serialized into the status column; it is
    /// ignored and recomputed on the next load.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be written.
    pub fn save(&self, rows: &[ContractRow]) -> Result<(), PersistenceError> {
        self.write_rows(rows)
    }

    fn write_rows(&self, rows: &[ContractRow]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path: PathBuf = self.path.with_extension("csv.tmp");
        {
            let mut writer = csv::Writer::from_path(&tmp_path)?;
            writer.write_record(CONTRACT_COLUMNS)?;
            for row in rows {
                writer.write_record(row.column_texts())?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

/// Builds a contract row from a persisted record, degrading damaged
/// fields to safe defaults.
fn row_from_record(record: &StringRecord, today: Date) -> ContractRow {
    let field = |idx: usize| -> &str { record.get(idx).unwrap_or("") };

    let end_date_raw: &str = field(COL_END_DATE);
    let end_date: Option<Date> = match parse_end_date(end_date_raw) {
        Ok(date) => date,
        Err(err) => {
            warn!(value = end_date_raw, error = %err, "Unparsable end date, treating as no expiry");
            None
        }
    };

    let value_raw: &str = field(COL_VALUE);
    let value: f64 = match value_raw.trim() {
        "" => 0.0,
        trimmed => trimmed.parse::<f64>().unwrap_or_else(|_| {
            warn!(value = value_raw, "Unparsable contract value, defaulting to 0");
            0.0
        }),
    };

    let contract: Contract = Contract {
        contract_id: ContractId::new(field(COL_CONTRACT_ID)),
        name: field(COL_NAME).to_string(),
        director: field(COL_DIRECTOR).to_string(),
        address: field(COL_ADDRESS).to_string(),
        inn: Inn::new(field(COL_INN)),
        end_date,
        value,
        comments: field(COL_COMMENTS).to_string(),
        lawyer: field(COL_LAWYER).to_string(),
    };

    ContractRow {
        status: derive_status(contract.end_date, today),
        contract,
    }
}

/// Checks whether any row carries the given tax identifier.
#[must_use]
pub fn exists_by_inn(rows: &[ContractRow], inn: &Inn) -> bool {
    rows.iter().any(|row| &row.contract.inn == inn)
}

/// Finds the first row carrying the given tax identifier.
#[must_use]
pub fn find_by_inn<'a>(rows: &'a [ContractRow], inn: &Inn) -> Option<&'a ContractRow> {
    rows.iter().find(|row| &row.contract.inn == inn)
}
