//! Elapsed-time calculations relative to the surgery date.

use crate::records::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days from `surgery` to `today`. Negative when surgery is still ahead.
pub fn days_since(surgery: NaiveDate, today: NaiveDate) -> i64 {
    (today - surgery).num_days()
}

/// Days since a stored surgery date.
///
/// Missing, empty or malformed dates yield `None` so callers can hide phase
/// and timeline displays instead of failing.
pub fn days_since_str(surgery: Option<&str>, today: NaiveDate) -> Option<i64> {
    let raw = surgery?.trim();
    if raw.is_empty() {
        return None;
    }
    match parse_date(raw) {
        Ok(date) => Some(days_since(date, today)),
        Err(e) => {
            tracing::debug!("Ignoring surgery date: {}", e);
            None
        }
    }
}

/// Countdown shown next to the surgery date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurgeryCountdown {
    /// Surgery is this many days ahead
    Until(i64),
    /// This many days have passed since surgery
    Since(i64),
}

impl SurgeryCountdown {
    pub fn from_days(days: i64) -> Self {
        if days < 0 {
            SurgeryCountdown::Until(-days)
        } else {
            SurgeryCountdown::Since(days)
        }
    }

    /// Always non-negative.
    pub fn days(&self) -> i64 {
        match self {
            SurgeryCountdown::Until(d) | SurgeryCountdown::Since(d) => *d,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SurgeryCountdown::Until(_) => "Until Surgery",
            SurgeryCountdown::Since(_) => "Since Surgery",
        }
    }
}

/// Length of the tracked recovery, in days.
pub const RECOVERY_TARGET_DAYS: i64 = 180;

/// Share of the six-month recovery elapsed, 0-100 (truncated).
pub fn recovery_percent(days: i64) -> u8 {
    let percent = days.saturating_mul(100) / RECOVERY_TARGET_DAYS;
    percent.clamp(0, 100) as u8
}
