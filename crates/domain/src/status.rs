// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

/// Number of days before the end date at which a contract is flagged
/// as expiring soon. The boundary is inclusive: a contract ending
/// exactly this many days from today is already expiring soon.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Urgency classification derived from a contract's end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusUrgency {
    /// No end date is recorded for the contract.
    None,
    /// The end date has passed.
    Expired,
    /// The end date is within the warning window.
    ExpiringSoon,
    /// The end date is comfortably in the future.
    Active,
}

impl StatusUrgency {
    /// Converts this urgency to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Expired => "expired",
            Self::ExpiringSoon => "expiring_soon",
            Self::Active => "active",
        }
    }
}

impl std::fmt::Display for StatusUrgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A derived contract status: an urgency marker plus a human-readable label.
///
/// Status is a projection of the end date at read time, never a stored
/// source of truth. The persisted status column is overwritten on every
/// load with the result of [`derive_status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractStatus {
    /// The urgency marker.
    pub urgency: StatusUrgency,
    /// The human-readable label (e.g., "expires in 12 days").
    pub label: String,
}

/// Derives a contract status from its end date relative to a reference date.
///
/// Rules, evaluated in order:
/// 1. No end date → `None` / "no end date".
/// 2. End date in the past → `Expired` / "expired N days ago".
/// 3. End date within [`EXPIRY_WARNING_DAYS`] days (inclusive) →
///    `ExpiringSoon` / "expires in N days".
/// 4. Otherwise → `Active` / "active".
///
/// This function is pure and deterministic: `today` must be injected by
/// the caller, never read from the ambient clock.
#[must_use]
pub fn derive_status(end_date: Option<Date>, today: Date) -> ContractStatus {
    let Some(end_date) = end_date else {
        return ContractStatus {
            urgency: StatusUrgency::None,
            label: String::from("no end date"),
        };
    };

    let days_remaining: i64 = (end_date - today).whole_days();

    if days_remaining < 0 {
        ContractStatus {
            urgency: StatusUrgency::Expired,
            label: format!("expired {} days ago", days_remaining.abs()),
        }
    } else if days_remaining <= EXPIRY_WARNING_DAYS {
        ContractStatus {
            urgency: StatusUrgency::ExpiringSoon,
            label: format!("expires in {days_remaining} days"),
        }
    } else {
        ContractStatus {
            urgency: StatusUrgency::Active,
            label: String::from("active"),
        }
    }
}
