// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use contract_desk_domain::{Contract, ContractId, ContractRow, Inn, derive_status};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 08 - 30);

/// Builds a contract row with its status derived against [`TODAY`].
pub fn create_test_row(id: &str, name: &str, end_date: Option<Date>) -> ContractRow {
    let contract: Contract = Contract {
        contract_id: ContractId::new(id),
        name: name.to_string(),
        director: String::from("J. Doe"),
        address: String::from("1 Main St"),
        inn: Inn::new("7701234567"),
        end_date,
        value: 1000.0,
        comments: String::new(),
        lawyer: String::from("K. Smith"),
    };
    ContractRow {
        status: derive_status(contract.end_date, TODAY),
        contract,
    }
}

/// Returns the row names in order, for asserting sort results.
pub fn names(rows: &[ContractRow]) -> Vec<String> {
    rows.iter().map(|row| row.contract.name.clone()).collect()
}
