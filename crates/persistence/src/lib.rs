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

//! CSV-backed persistence for ContractDesk.
//!
//! Three flat tables, each owned exclusively by one store:
//! `contracts.csv` ([`ContractStore`]), `users.csv` ([`UserStore`]) and
//! `contract_history.csv` ([`HistoryStore`]). All tables are UTF-8 CSV
//! with a header row and a fixed column order.
//!
//! The stores hold no locks themselves. Callers with concurrent writers
//! must serialize access (the server wraps the stores in a single
//! mutex); full-table writes go through a temp-file-plus-rename swap so
//! a crashed write never truncates the table.

mod contracts;
mod error;
mod history;
mod users;

#[cfg(test)]
mod tests;

pub use contracts::{ContractStore, exists_by_inn, find_by_inn};
pub use error::PersistenceError;
pub use history::HistoryStore;
pub use users::UserStore;
