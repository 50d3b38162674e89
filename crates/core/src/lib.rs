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

mod command;
mod error;
mod query;

#[cfg(test)]
mod tests;

pub use command::{
    NewContract, apply_field_edit, edit_contract, generate_contract_id, new_contract,
};
pub use error::CoreError;
pub use query::{filter_contracts, sort_contracts};
