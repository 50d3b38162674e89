// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Inn;

/// Validates the required fields of a new contract.
///
/// This checks shape only; INN uniqueness across the table is not
/// enforced, several contracts may share one organization.
///
/// # Arguments
///
/// * `name` - The organization name
/// * `inn` - The tax identifier
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The INN is empty, non-numeric, or not 10 or 12 digits long
pub fn validate_contract_fields(name: &str, inn: &Inn) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Organization name cannot be empty",
        )));
    }

    let inn_value: &str = inn.value();

    // Rule: INN must not be empty
    if inn_value.is_empty() {
        return Err(DomainError::InvalidInn(String::from(
            "Tax identifier cannot be empty",
        )));
    }

    // Rule: INN is 10 digits (legal entity) or 12 digits (individual)
    if !inn_value.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidInn(format!(
            "Tax identifier must contain only digits, got '{inn_value}'"
        )));
    }
    if inn_value.len() != 10 && inn_value.len() != 12 {
        return Err(DomainError::InvalidInn(format!(
            "Tax identifier must be 10 or 12 digits long, got {} digits",
            inn_value.len()
        )));
    }

    Ok(())
}
