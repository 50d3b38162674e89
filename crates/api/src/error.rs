// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use contract_desk::CoreError;
use contract_desk_domain::DomainError;
use contract_desk_persistence::PersistenceError;

/// Authentication errors.
///
/// An unknown username and a wrong password produce the same error, so
/// the response shape never confirms whether a username exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The username is already registered.
    DuplicateUsername {
        /// The username that was already taken.
        username: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// No contract carries the requested identifier.
    ContractNotFound {
        /// The requested identifier.
        contract_id: String,
    },
    /// The external registry lookup failed.
    LookupFailed {
        /// A human-readable description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::DuplicateUsername { username } => {
                write!(f, "Username '{username}' is already registered")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ContractNotFound { contract_id } => {
                write!(f, "Contract '{contract_id}' not found")
            }
            Self::LookupFailed { message } => {
                write!(f, "Organization lookup failed: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidInn(msg) => ApiError::InvalidInput {
            field: String::from("inn"),
            message: msg,
        },
        DomainError::InvalidRole(role) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("'{role}' is not a valid role. Must be 'admin' or 'staff'"),
        },
        DomainError::UnknownField(field) => ApiError::InvalidInput {
            field: String::from("field"),
            message: format!("'{field}' is not an editable contract field"),
        },
        DomainError::InvalidEndDate { value, error } => ApiError::InvalidInput {
            field: String::from("end_date"),
            message: format!("Failed to parse end date '{value}': {error}"),
        },
        DomainError::InvalidValue(msg) => ApiError::InvalidInput {
            field: String::from("value"),
            message: msg,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::ContractNotFound(contract_id) => ApiError::ContractNotFound { contract_id },
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
