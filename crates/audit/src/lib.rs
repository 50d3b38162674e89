// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use contract_desk_domain::{Contract, ContractField};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Serialization format for audit timestamps: `YYYY-MM-DD HH:MM:SS`.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// An immutable audit record of one field-level contract change.
///
/// Every mutation of a contract field must produce exactly one entry.
/// Entries are append-only: once written they are never updated or
/// removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the change was recorded, as `YYYY-MM-DD HH:MM:SS` local time.
    pub timestamp: String,
    /// The identifier of the changed contract.
    pub contract_id: String,
    /// The column name of the changed field.
    pub field: String,
    /// The field's canonical text form before the change.
    pub old_value: String,
    /// The field's canonical text form after the change.
    pub new_value: String,
    /// The username of the actor who made the change.
    pub user: String,
}

impl HistoryEntry {
    /// Creates a new `HistoryEntry` stamped with the current local time.
    ///
    /// Falls back to UTC when the local offset cannot be determined.
    ///
    /// # Arguments
    ///
    /// * `contract_id` - The identifier of the changed contract
    /// * `field` - The changed field
    /// * `old_value` - The canonical text form before the change
    /// * `new_value` - The canonical text form after the change
    /// * `user` - The username of the actor
    #[must_use]
    pub fn new(
        contract_id: &str,
        field: ContractField,
        old_value: String,
        new_value: String,
        user: &str,
    ) -> Self {
        Self::with_timestamp(
            current_timestamp(),
            contract_id,
            field.as_str(),
            old_value,
            new_value,
            user,
        )
    }

    /// Creates a `HistoryEntry` with an explicit timestamp.
    ///
    /// Used when reading persisted entries back and in tests.
    #[must_use]
    pub fn with_timestamp(
        timestamp: String,
        contract_id: &str,
        field: &str,
        old_value: String,
        new_value: String,
        user: &str,
    ) -> Self {
        Self {
            timestamp,
            contract_id: contract_id.to_string(),
            field: field.to_string(),
            old_value,
            new_value,
            user: user.to_string(),
        }
    }
}

/// Formats the current local time in the audit timestamp format.
#[must_use]
pub fn current_timestamp() -> String {
    let now: OffsetDateTime =
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| now.to_string())
}

/// Computes the audit entries for an edit of a contract.
///
/// One entry is emitted per editable field whose canonical text form
/// changed, in persisted column order. A multi-field edit therefore
/// always logs every changed field; no-op edits log nothing.
///
/// Both arguments must refer to the same contract; entries carry the
/// identifier of `new`.
#[must_use]
pub fn diff_contracts(old: &Contract, new: &Contract, user: &str) -> Vec<HistoryEntry> {
    ContractField::ALL
        .iter()
        .filter_map(|&field| {
            let old_value: String = old.field_text(field);
            let new_value: String = new.field_text(field);
            if old_value == new_value {
                None
            } else {
                Some(HistoryEntry::new(
                    new.contract_id.value(),
                    field,
                    old_value,
                    new_value,
                    user,
                ))
            }
        })
        .collect()
}
