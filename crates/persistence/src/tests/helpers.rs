// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use contract_desk_domain::{Contract, ContractId, ContractRow, Inn, derive_status};
use std::path::PathBuf;
use time::Date;

/// Creates a unique, empty data directory under the system temp dir.
pub fn temp_data_dir() -> PathBuf {
    let dir: PathBuf =
        std::env::temp_dir().join(format!("contract-desk-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp data dir");
    dir
}

/// Builds a contract row with its status derived against `today`.
pub fn create_test_row(
    id: &str,
    name: &str,
    inn: &str,
    end_date: Option<Date>,
    today: Date,
) -> ContractRow {
    let contract: Contract = Contract {
        contract_id: ContractId::new(id),
        name: name.to_string(),
        director: String::from("J. Doe"),
        address: String::from("1 Main St"),
        inn: Inn::new(inn),
        end_date,
        value: 1000.0,
        comments: String::new(),
        lawyer: String::from("K. Smith"),
    };
    ContractRow {
        status: derive_status(contract.end_date, today),
        contract,
    }
}
