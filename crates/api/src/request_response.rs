// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the ContractDesk API.

use std::collections::BTreeMap;

use contract_desk::NewContract;
use contract_desk_audit::HistoryEntry;
use contract_desk_domain::{
    ContractRow, Inn, StatusUrgency, parse_end_date, validate_contract_fields,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, translate_domain_error};
use crate::registry::OrgInfo;

/// Request body for `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The login name.
    pub username: String,
    /// The cleartext password.
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated username.
    pub username: String,
    /// The user's role.
    pub role: String,
    /// The user's display name.
    pub full_name: String,
}

/// Request body for `POST /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    /// The login name to register.
    pub username: String,
    /// The cleartext password.
    pub password: String,
    /// The role string ("admin" or "staff").
    pub role: String,
    /// The user's display name.
    pub full_name: String,
}

/// Response body for a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    /// The registered username.
    pub username: String,
}

/// One contract row as the API renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractResponse {
    /// The stable contract identifier.
    pub contract_id: String,
    /// Organization name.
    pub name: String,
    /// Director name.
    pub director: String,
    /// Organization address.
    pub address: String,
    /// Tax identifier.
    pub inn: String,
    /// End date in ISO form, empty for "no expiry".
    pub end_date: String,
    /// Contract value.
    pub value: f64,
    /// Derived status urgency marker.
    pub status: StatusUrgency,
    /// Derived human-readable status label.
    pub status_label: String,
    /// Free-text comments.
    pub comments: String,
    /// Assigned lawyer.
    pub lawyer: String,
}

impl From<&ContractRow> for ContractResponse {
    fn from(row: &ContractRow) -> Self {
        Self {
            contract_id: row.contract.contract_id.value().to_string(),
            name: row.contract.name.clone(),
            director: row.contract.director.clone(),
            address: row.contract.address.clone(),
            inn: row.contract.inn.value().to_string(),
            end_date: row.contract.end_date_text(),
            value: row.contract.value,
            status: row.status.urgency,
            status_label: row.status.label.clone(),
            comments: row.contract.comments.clone(),
            lawyer: row.contract.lawyer.clone(),
        }
    }
}

/// Request body for `POST /api/contracts`.
///
/// When `prefill_from_registry` is set, empty organization fields are
/// filled from the registry lookup before validation. A failed lookup
/// only skips the pre-fill; it never blocks the insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContractRequest {
    /// Organization name.
    #[serde(default)]
    pub name: String,
    /// Director name.
    #[serde(default)]
    pub director: String,
    /// Organization address.
    #[serde(default)]
    pub address: String,
    /// Tax identifier.
    pub inn: String,
    /// End date in ISO form; absent or empty means "no expiry".
    #[serde(default)]
    pub end_date: String,
    /// Contract value.
    #[serde(default)]
    pub value: f64,
    /// Free-text comments.
    #[serde(default)]
    pub comments: String,
    /// Assigned lawyer.
    #[serde(default)]
    pub lawyer: String,
    /// Whether to pre-fill empty organization fields from the registry.
    #[serde(default)]
    pub prefill_from_registry: bool,
}

impl CreateContractRequest {
    /// Fills empty organization fields from a registry result.
    ///
    /// Fields the caller already provided are never overwritten.
    pub fn apply_prefill(&mut self, org: &OrgInfo) {
        if self.name.trim().is_empty() {
            self.name.clone_from(&org.name);
        }
        if self.director.trim().is_empty() {
            self.director.clone_from(&org.director);
        }
        if self.address.trim().is_empty() {
            self.address.clone_from(&org.address);
        }
    }

    /// Validates the request and converts it to insertion input.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or tax identifier fails validation,
    /// or the end date is not an ISO calendar date.
    pub fn to_new_contract(&self) -> Result<NewContract, ApiError> {
        let inn: Inn = Inn::new(&self.inn);
        validate_contract_fields(&self.name, &inn).map_err(translate_domain_error)?;
        let end_date = parse_end_date(&self.end_date).map_err(translate_domain_error)?;

        Ok(NewContract {
            name: self.name.trim().to_string(),
            director: self.director.trim().to_string(),
            address: self.address.trim().to_string(),
            inn,
            end_date,
            value: self.value,
            comments: self.comments.clone(),
            lawyer: self.lawyer.trim().to_string(),
        })
    }
}

/// Request body for `PATCH /api/contracts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditContractRequest {
    /// The username of the actor making the change, recorded in the
    /// audit trail.
    pub user: String,
    /// Field edits: column name to raw new value. End dates use ISO
    /// form or the empty string for "no expiry".
    pub edits: BTreeMap<String, String>,
}

/// One audit entry as the API renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntryResponse {
    /// When the change was recorded.
    pub timestamp: String,
    /// The changed column.
    pub field: String,
    /// The value before the change.
    pub old_value: String,
    /// The value after the change.
    pub new_value: String,
    /// The actor who made the change.
    pub user: String,
}

impl From<&HistoryEntry> for HistoryEntryResponse {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            timestamp: entry.timestamp.clone(),
            field: entry.field.clone(),
            old_value: entry.old_value.clone(),
            new_value: entry.new_value.clone(),
            user: entry.user.clone(),
        }
    }
}

/// Response body for `GET /api/contracts/{id}/history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// The contract the entries belong to.
    pub contract_id: String,
    /// The entries, in append order.
    pub entries: Vec<HistoryEntryResponse>,
}

/// Response body for `GET /api/org/{inn}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgInfoResponse {
    /// Short organization name.
    pub name: String,
    /// Director name.
    pub director: String,
    /// Registered address.
    pub address: String,
    /// The tax identifier as the registry records it.
    pub inn: String,
}

impl From<OrgInfo> for OrgInfoResponse {
    fn from(org: OrgInfo) -> Self {
        Self {
            name: org.name,
            director: org.director,
            address: org.address,
            inn: org.inn,
        }
    }
}
