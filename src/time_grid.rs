//! Weekly time-grid slot model.
//!
//! The grid's day is shifted: each column runs from 10:00 through the small
//! hours of the next calendar date, so an event starting at 02:00 on Tuesday
//! renders in Monday's column. Two mappings keep that consistent:
//! `resolve_slot_date` (cell -> real date) and `attributed_date`
//! (event -> column date). Slot membership is an exact "HH:mm" label match
//! on the event start; a start off the 30-minute raster matches no cell,
//! and intake does not reject such starts.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::types::CalendarEvent;

/// Number of 30-minute slots in one day column.
pub const SLOT_COUNT: usize = 46;

/// Minutes between consecutive slots.
pub const SLOT_MINUTES: i64 = 30;

/// Wall-clock hour at which a grid day begins. Earlier hours belong to the
/// previous grid day.
pub const DAY_START_HOUR: u32 = 10;

/// Ordered slot labels: "10:00", "10:30", .. "23:30", "00:00", .. "08:30".
///
/// Deterministic; callers may cache the result.
pub fn slot_labels() -> Vec<String> {
    let base = NaiveTime::from_hms_opt(DAY_START_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
    (0..SLOT_COUNT)
        .map(|i| {
            // NaiveTime addition wraps past midnight, matching the grid.
            let slot = base + Duration::minutes(i as i64 * SLOT_MINUTES);
            slot.format("%H:%M").to_string()
        })
        .collect()
}

fn label_hour(label: &str) -> Option<u32> {
    label.split(':').next()?.parse().ok()
}

/// True for small-hours labels (before 10:00), which address the calendar
/// date after their column's date. The UI shades these cells.
pub fn is_small_hours(label: &str) -> bool {
    matches!(label_hour(label), Some(h) if h < DAY_START_HOUR)
}

/// The calendar date a `(column_date, label)` cell actually addresses.
pub fn resolve_slot_date(column_date: NaiveDate, label: &str) -> NaiveDate {
    if is_small_hours(label) {
        column_date + Duration::days(1)
    } else {
        column_date
    }
}

/// The grid column date an event start belongs to. Inverse of
/// `resolve_slot_date`: starts before 10:00 pull back one date.
pub fn attributed_date(start: NaiveDateTime) -> NaiveDate {
    let day_start = NaiveTime::from_hms_opt(DAY_START_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
    if start.time() < day_start {
        start.date() - Duration::days(1)
    } else {
        start.date()
    }
}

/// "HH:mm" label of an event start.
pub fn start_label(start: NaiveDateTime) -> String {
    start.format("%H:%M").to_string()
}

/// Events occupying the `(column_date, label)` cell, in input order.
///
/// An event matches when its attributed column date equals `column_date`
/// and its formatted start equals `label` exactly. Durations are not
/// consulted; an event never occupies more than one cell.
pub fn events_in_slot<'a>(
    column_date: NaiveDate,
    label: &str,
    events: &'a [CalendarEvent],
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| {
            let start = event.start.naive_local();
            attributed_date(start) == column_date && start_label(start) == label
        })
        .collect()
}
