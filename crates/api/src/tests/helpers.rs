// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for API tests.

use std::path::PathBuf;

use contract_desk_domain::{Contract, ContractId, ContractRow, Inn, derive_status};
use time::macros::date;

/// Fixed "today" so derived statuses are stable across test runs.
pub const TODAY: time::Date = date!(2026 - 08 - 30);

/// Creates a unique scratch directory for store-backed tests.
pub fn temp_data_dir() -> PathBuf {
    let dir: PathBuf =
        std::env::temp_dir().join(format!("contract-desk-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

/// Builds a contract row with a derived status for the fixed test date.
pub fn create_test_row(contract_id: &str, name: &str, end_date: Option<time::Date>) -> ContractRow {
    let contract = Contract {
        contract_id: ContractId::new(contract_id),
        name: name.to_string(),
        director: String::from("Director"),
        address: String::from("Address"),
        inn: Inn::new("7707083893"),
        end_date,
        value: 1000.0,
        comments: String::from("Comments"),
        lawyer: String::from("Lawyer"),
    };
    let status = derive_status(contract.end_date, TODAY);
    ContractRow { contract, status }
}
