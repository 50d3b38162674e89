// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
///
/// Data-shape problems (missing file, malformed rows) are NOT errors:
/// the stores degrade those to empty tables or default values. These
/// variants cover genuine I/O and encoding failures only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A filesystem operation failed.
    Io(String),
    /// CSV encoding or decoding failed.
    Csv(String),
    /// Password hashing failed.
    HashFailed(String),
    /// A persisted row holds a value the schema forbids.
    CorruptRow {
        /// A description of the corruption.
        reason: String,
    },
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::HashFailed(msg) => write!(f, "Password hashing failed: {msg}"),
            Self::CorruptRow { reason } => write!(f, "Corrupt table row: {reason}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for PersistenceError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::HashFailed(err.to_string())
    }
}
