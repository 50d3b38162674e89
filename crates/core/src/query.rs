// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use contract_desk_domain::ContractRow;
use std::cmp::Ordering;

/// Returns the table in a new order, sorted by the given column.
///
/// Supported columns are `name` (case-insensitive lexicographic) and
/// `end_date` (chronological, with rows that have no end date sorted
/// last regardless of direction). Any other column returns the table
/// unchanged. The source slice is never mutated and the sort is stable.
#[must_use]
pub fn sort_contracts(rows: &[ContractRow], column: &str, ascending: bool) -> Vec<ContractRow> {
    let mut sorted: Vec<ContractRow> = rows.to_vec();
    match column {
        "name" => {
            sorted.sort_by(|a, b| {
                let ordering: Ordering = a
                    .contract
                    .name
                    .to_lowercase()
                    .cmp(&b.contract.name.to_lowercase());
                if ascending { ordering } else { ordering.reverse() }
            });
        }
        "end_date" => {
            sorted.sort_by(|a, b| match (a.contract.end_date, b.contract.end_date) {
                (Some(left), Some(right)) => {
                    if ascending {
                        left.cmp(&right)
                    } else {
                        right.cmp(&left)
                    }
                }
                // Absent dates always sort last, in either direction.
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
        _ => {}
    }
    sorted
}

/// Keeps the rows whose text form contains the search term.
///
/// The term is lower-cased and matched as a plain substring against the
/// lower-cased text form of every column, including the identifier,
/// numeric value, end date and derived status label. A row is kept if
/// ANY column matches. An empty or whitespace-only term returns the
/// table unchanged. No regex, no tokenization.
#[must_use]
pub fn filter_contracts(rows: &[ContractRow], search_term: &str) -> Vec<ContractRow> {
    let needle: String = search_term.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| {
            row.column_texts()
                .iter()
                .any(|text| text.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
