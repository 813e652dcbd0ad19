//! Week windowing over the dashboard's anchor date.
//!
//! The week view shows seven consecutive dates starting on Monday (ISO
//! convention). Paging moves the anchor date by whole weeks; the visible
//! window is always derived from the anchor, never stored.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: i64 = 7;

/// A Monday-started run of seven consecutive dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    start: NaiveDate,
}

impl WeekWindow {
    /// The window containing `anchor`: the Monday on or before it plus the
    /// six following dates.
    pub fn containing(anchor: NaiveDate) -> Self {
        let back = anchor.weekday().num_days_from_monday() as i64;
        Self {
            start: anchor - Duration::days(back),
        }
    }

    /// Monday of the window.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Sunday of the window.
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(DAYS_PER_WEEK - 1)
    }

    /// The seven dates, Monday first.
    pub fn days(&self) -> [NaiveDate; 7] {
        std::array::from_fn(|i| self.start + Duration::days(i as i64))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    pub fn next(&self) -> Self {
        Self {
            start: self.start + Duration::days(DAYS_PER_WEEK),
        }
    }

    pub fn previous(&self) -> Self {
        Self {
            start: self.start - Duration::days(DAYS_PER_WEEK),
        }
    }

    /// Header label, e.g. "Jan 15 - Jan 21, 2024".
    pub fn range_label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%b %-d"),
            self.end().format("%b %-d, %Y")
        )
    }
}

/// Move an anchor one week forward. The anchor keeps its weekday, so the
/// derived window shifts by exactly one row of dates.
pub fn next_week(anchor: NaiveDate) -> NaiveDate {
    anchor + Duration::days(DAYS_PER_WEEK)
}

/// Move an anchor one week back.
pub fn previous_week(anchor: NaiveDate) -> NaiveDate {
    anchor - Duration::days(DAYS_PER_WEEK)
}
