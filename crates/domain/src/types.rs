// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::ContractStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Serialization format for end dates: ISO calendar date.
const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// The fixed column set of the persisted contract table, in order.
pub const CONTRACT_COLUMNS: &[&str] = &[
    "contract_id",
    "name",
    "director",
    "address",
    "inn",
    "end_date",
    "value",
    "status",
    "comments",
    "lawyer",
];

/// Parses an end date from its persisted string form.
///
/// An empty string means "no expiry" and maps to `None`.
///
/// # Errors
///
/// Returns `DomainError::InvalidEndDate` if the string is non-empty but
/// not a valid ISO calendar date.
pub fn parse_end_date(value: &str) -> Result<Option<Date>, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Date::parse(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|e| DomainError::InvalidEndDate {
            value: trimmed.to_string(),
            error: e.to_string(),
        })
}

/// A stable, opaque contract identifier.
///
/// Identifiers are assigned at insertion time and never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractId {
    /// The identifier value.
    value: String,
}

impl ContractId {
    /// Creates a `ContractId` from an existing identifier string.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ContractId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An organization tax identifier (INN).
///
/// The INN is the natural key used to look the organization up in the
/// external registry. Uniqueness across contracts is expected but not
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inn {
    /// The normalized (trimmed) identifier value.
    value: String,
}

impl Inn {
    /// Creates a new `Inn`, trimming surrounding whitespace.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Inn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// User roles stored in the identity table.
///
/// Roles are an attribute of the user record; this crate stores them but
/// does not enforce authorization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrative users.
    Admin,
    /// Regular staff users.
    Staff,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The public profile of an authenticated user.
///
/// This never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The unique login name.
    pub username: String,
    /// The user's role.
    pub role: Role,
    /// The user's display name.
    pub full_name: String,
}

/// The editable columns of a contract.
///
/// `contract_id` and `status` are deliberately absent: the identifier is
/// immutable and the status is derived from the end date at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractField {
    /// Organization name.
    Name,
    /// Director name.
    Director,
    /// Organization address.
    Address,
    /// Tax identifier.
    Inn,
    /// Contract end date (empty means "no expiry").
    EndDate,
    /// Contract value.
    Value,
    /// Free-text comments.
    Comments,
    /// Assigned lawyer.
    Lawyer,
}

impl ContractField {
    /// All editable fields, in persisted column order.
    pub const ALL: &'static [Self] = &[
        Self::Name,
        Self::Director,
        Self::Address,
        Self::Inn,
        Self::EndDate,
        Self::Value,
        Self::Comments,
        Self::Lawyer,
    ];

    /// Converts this field to its column name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Director => "director",
            Self::Address => "address",
            Self::Inn => "inn",
            Self::EndDate => "end_date",
            Self::Value => "value",
            Self::Comments => "comments",
            Self::Lawyer => "lawyer",
        }
    }
}

impl FromStr for ContractField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(Self::Name),
            "director" => Ok(Self::Director),
            "address" => Ok(Self::Address),
            "inn" => Ok(Self::Inn),
            "end_date" => Ok(Self::EndDate),
            "value" => Ok(Self::Value),
            "comments" => Ok(Self::Comments),
            "lawyer" => Ok(Self::Lawyer),
            _ => Err(DomainError::UnknownField(s.to_string())),
        }
    }
}

impl std::fmt::Display for ContractField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One contract record.
///
/// `status` is not a field of this type: it is derived from `end_date`
/// and carried alongside the contract in a [`ContractRow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// The stable contract identifier.
    pub contract_id: ContractId,
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

impl Contract {
    /// Returns the canonical text form of the end date.
    ///
    /// An absent date renders as the empty string. This is the form used
    /// for persistence, filtering, and audit values, so all three stay
    /// consistent.
    #[must_use]
    pub fn end_date_text(&self) -> String {
        self.end_date.map_or_else(String::new, |d| d.to_string())
    }

    /// Returns the canonical text form of the contract value.
    #[must_use]
    pub fn value_text(&self) -> String {
        format!("{}", self.value)
    }

    /// Returns the canonical text form of one editable field.
    #[must_use]
    pub fn field_text(&self, field: ContractField) -> String {
        match field {
            ContractField::Name => self.name.clone(),
            ContractField::Director => self.director.clone(),
            ContractField::Address => self.address.clone(),
            ContractField::Inn => self.inn.value().to_string(),
            ContractField::EndDate => self.end_date_text(),
            ContractField::Value => self.value_text(),
            ContractField::Comments => self.comments.clone(),
            ContractField::Lawyer => self.lawyer.clone(),
        }
    }
}

/// A contract together with its derived status.
///
/// This is the read-model the query layer and the API operate on. The
/// status is recomputed on every load and never round-trips through the
/// persisted table as a source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRow {
    /// The contract record.
    pub contract: Contract,
    /// The status derived from the contract's end date.
    pub status: ContractStatus,
}

impl ContractRow {
    /// Returns the text form of every column, in [`CONTRACT_COLUMNS`] order.
    ///
    /// This is the exact row shape written to the persisted table and the
    /// haystack the free-text filter searches.
    #[must_use]
    pub fn column_texts(&self) -> Vec<String> {
        vec![
            self.contract.contract_id.value().to_string(),
            self.contract.name.clone(),
            self.contract.director.clone(),
            self.contract.address.clone(),
            self.contract.inn.value().to_string(),
            self.contract.end_date_text(),
            self.contract.value_text(),
            self.status.label.clone(),
            self.contract.comments.clone(),
            self.contract.lawyer.clone(),
        ]
    }
}
