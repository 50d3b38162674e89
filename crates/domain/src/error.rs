// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Organization name is empty or invalid.
    InvalidName(String),
    /// Tax identifier is empty or malformed.
    InvalidInn(String),
    /// Role string is not a recognized role.
    InvalidRole(String),
    /// Field name does not refer to an editable contract column.
    UnknownField(String),
    /// End date string could not be parsed as an ISO calendar date.
    InvalidEndDate {
        /// The invalid date string.
        value: String,
        /// The parsing error message.
        error: String,
    },
    /// Contract value could not be parsed as a number.
    InvalidValue(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidInn(msg) => write!(f, "Invalid tax identifier: {msg}"),
            Self::InvalidRole(role) => {
                write!(f, "Invalid role: '{role}'. Must be 'admin' or 'staff'")
            }
            Self::UnknownField(field) => {
                write!(f, "Unknown contract field: '{field}'")
            }
            Self::InvalidEndDate { value, error } => {
                write!(f, "Failed to parse end date '{value}': {error}")
            }
            Self::InvalidValue(msg) => write!(f, "Invalid contract value: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
