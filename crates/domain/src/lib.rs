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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use status::{ContractStatus, EXPIRY_WARNING_DAYS, StatusUrgency, derive_status};
pub use types::{
    CONTRACT_COLUMNS, Contract, ContractField, ContractId, ContractRow, Inn, Role, UserProfile,
    parse_end_date,
};
pub use validation::validate_contract_fields;
