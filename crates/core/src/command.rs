// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use contract_desk_audit::HistoryEntry;
use contract_desk_domain::{
    Contract, ContractField, ContractId, ContractRow, DomainError, Inn, derive_status,
    parse_end_date,
};
use time::Date;

/// Length of a generated contract identifier.
const CONTRACT_ID_LEN: usize = 8;

/// Generates a fresh contract identifier: 8 hex characters of a v4 UUID.
#[must_use]
pub fn generate_contract_id() -> ContractId {
    let id: String = uuid::Uuid::new_v4().simple().to_string();
    ContractId::new(&id[..CONTRACT_ID_LEN])
}

/// Input for inserting a contract.
///
/// The identifier and status are not part of the input: the identifier
/// is generated and the status is derived.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContract {
    /// Organization name.
    pub name: String,
    /// Director name.
    pub director: String,
    /// Organization address.
    pub address: String,
    /// Tax identifier.
    pub inn: Inn,
    /// Contract end date. `None` means "no expiry".
    pub end_date: Option<Date>,
    /// Contract value.
    pub value: f64,
    /// Free-text comments.
    pub comments: String,
    /// Assigned lawyer.
    pub lawyer: String,
}

/// Builds a contract row from insertion input.
///
/// Generates the identifier and derives the status against `today`.
#[must_use]
pub fn new_contract(input: NewContract, today: Date) -> ContractRow {
    let contract: Contract = Contract {
        contract_id: generate_contract_id(),
        name: input.name,
        director: input.director,
        address: input.address,
        inn: input.inn,
        end_date: input.end_date,
        value: input.value,
        comments: input.comments,
        lawyer: input.lawyer,
    };
    ContractRow {
        status: derive_status(contract.end_date, today),
        contract,
    }
}

/// Applies one field edit to a contract row.
///
/// The raw value is parsed per field type: `end_date` accepts an ISO
/// date or the empty string for "no expiry", `value` must parse as a
/// number, every other field is taken verbatim. The row's status is
/// re-derived when the end date changes.
///
/// Returns the audit entry for the change, or `None` if the parsed
/// value equals the current one (no-op edits log nothing).
///
/// # Errors
///
/// Returns a `DomainError` if the raw value cannot be parsed for the
/// field's type. The row is left untouched on error.
pub fn apply_field_edit(
    row: &mut ContractRow,
    field: ContractField,
    raw_value: &str,
    user: &str,
    today: Date,
) -> Result<Option<HistoryEntry>, DomainError> {
    let old_value: String = row.contract.field_text(field);

    match field {
        ContractField::Name => row.contract.name = raw_value.to_string(),
        ContractField::Director => row.contract.director = raw_value.to_string(),
        ContractField::Address => row.contract.address = raw_value.to_string(),
        ContractField::Inn => row.contract.inn = Inn::new(raw_value),
        ContractField::EndDate => {
            row.contract.end_date = parse_end_date(raw_value)?;
            row.status = derive_status(row.contract.end_date, today);
        }
        ContractField::Value => {
            row.contract.value = raw_value
                .trim()
                .parse::<f64>()
                .map_err(|_| DomainError::InvalidValue(format!("'{raw_value}' is not a number")))?;
        }
        ContractField::Comments => row.contract.comments = raw_value.to_string(),
        ContractField::Lawyer => row.contract.lawyer = raw_value.to_string(),
    }

    let new_value: String = row.contract.field_text(field);
    if new_value == old_value {
        return Ok(None);
    }

    Ok(Some(HistoryEntry::new(
        row.contract.contract_id.value(),
        field,
        old_value,
        new_value,
        user,
    )))
}

/// Edits a contract in place, by identifier.
///
/// Edits are applied in persisted column order regardless of the order
/// they arrive in, so a multi-field edit always produces its audit
/// entries in a deterministic order. The caller persists the table and
/// appends the returned entries to the history store.
///
/// # Errors
///
/// Returns `CoreError::ContractNotFound` if no row carries the
/// identifier, or a domain violation if any raw value fails to parse.
/// On a parse failure, edits earlier in column order are already
/// applied to the in-memory row; the caller must not persist the table
/// when this function errors.
pub fn edit_contract(
    rows: &mut [ContractRow],
    contract_id: &str,
    edits: &[(ContractField, String)],
    user: &str,
    today: Date,
) -> Result<Vec<HistoryEntry>, CoreError> {
    let row: &mut ContractRow = rows
        .iter_mut()
        .find(|row| row.contract.contract_id.value() == contract_id)
        .ok_or_else(|| CoreError::ContractNotFound(contract_id.to_string()))?;

    let mut entries: Vec<HistoryEntry> = Vec::new();
    for &field in ContractField::ALL {
        let Some((_, raw_value)) = edits.iter().find(|(f, _)| *f == field) else {
            continue;
        };
        if let Some(entry) = apply_field_edit(row, field, raw_value, user, today)? {
            entries.push(entry);
        }
    }

    Ok(entries)
}
