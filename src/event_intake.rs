//! New-event intake.
//!
//! The new-event dialog submits a date, an "HH:mm" start time, and a
//! duration in minutes. All validation happens here, once: after
//! construction every consumer can rely on `end > start` and on the link
//! fields being real ids or `None`. A click on an empty grid cell seeds the
//! dialog through `prefill_from_slot`.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use uuid::Uuid;

use crate::error::{BoardError, BoardResult};
use crate::time_grid;
use crate::types::{CalendarEvent, EventPrefill, NewEventRequest};

/// Prefill for a click on the `(column_date, label)` grid cell.
///
/// Small-hours cells resolve to the following calendar date before seeding
/// the form, so the created event lands back in the clicked column.
pub fn prefill_from_slot(column_date: NaiveDate, label: &str) -> EventPrefill {
    EventPrefill::from_slot(time_grid::resolve_slot_date(column_date, label), label)
}

/// Build a calendar event from a submitted form.
///
/// `end = start + duration`, so the pair is ordered by construction and no
/// downstream consumer re-checks it.
pub fn build_event(req: &NewEventRequest) -> BoardResult<CalendarEvent> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(BoardError::EmptyTitle);
    }
    if req.duration_minutes == 0 {
        return Err(BoardError::InvalidDuration(req.duration_minutes));
    }
    let time = NaiveTime::parse_from_str(&req.start_time, "%H:%M")
        .map_err(|_| BoardError::InvalidTime(req.start_time.clone()))?;

    let start = resolve_local_start(req.date, time);
    let end = start + Duration::minutes(i64::from(req.duration_minutes));

    Ok(CalendarEvent {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        start,
        end,
        goal_id: normalize_link(req.goal_id.as_deref()),
        task_id: normalize_link(req.task_id.as_deref()),
    })
}

/// The dialog's goal/task selects report "no link" as an absent value, an
/// empty string, or the literal "none" sentinel.
fn normalize_link(raw: Option<&str>) -> Option<String> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() && value != "none" => Some(value.to_string()),
        _ => None,
    }
}

/// Resolve a local wall-clock pair to an instant.
///
/// DST transitions make some wall times ambiguous and others nonexistent.
/// Take the unambiguous reading when there is one, the earliest reading
/// when the clock fell back, and the UTC interpretation when the clock
/// skipped the requested time entirely.
fn resolve_local_start(date: NaiveDate, time: NaiveTime) -> DateTime<Local> {
    let naive = NaiveDateTime::new(date, time);

    if let Some(dt) = Local.from_local_datetime(&naive).single() {
        return dt;
    }

    if let Some(dt) = Local.from_local_datetime(&naive).earliest() {
        log::warn!("Ambiguous local time {}; using earliest reading", naive);
        return dt;
    }

    log::warn!("Local time {} skipped by a clock shift; interpreting as UTC", naive);
    chrono::Utc.from_utc_datetime(&naive).with_timezone(&Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_grid::attributed_date;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(title: &str, start_time: &str, duration_minutes: u32) -> NewEventRequest {
        NewEventRequest {
            title: title.to_string(),
            date: day(2024, 1, 15),
            start_time: start_time.to_string(),
            duration_minutes,
            goal_id: None,
            task_id: None,
        }
    }

    #[test]
    fn test_build_event_from_form() {
        let event = build_event(&request("  Band practice ", "18:00", 90)).unwrap();
        assert_eq!(event.title, "Band practice");
        assert_eq!(
            event.start.naive_local(),
            day(2024, 1, 15).and_hms_opt(18, 0, 0).unwrap()
        );
        assert_eq!(event.duration_minutes(), 90);
        assert!(event.end > event.start);
        assert!(!event.id.is_empty());
    }

    #[test]
    fn test_end_exceeds_start_for_any_positive_duration() {
        for minutes in [1, 15, 60, 24 * 60] {
            let event = build_event(&request("Stretch", "23:30", minutes)).unwrap();
            assert!(event.end > event.start, "duration {}", minutes);
            assert_eq!(event.duration_minutes(), i64::from(minutes));
        }
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let err = build_event(&request("   ", "18:00", 60)).unwrap_err();
        assert!(matches!(err, BoardError::EmptyTitle));
        assert!(err.is_intake());
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let err = build_event(&request("Nap", "18:00", 0)).unwrap_err();
        assert!(matches!(err, BoardError::InvalidDuration(0)));
    }

    #[test]
    fn test_unparseable_time_is_rejected() {
        for bad in ["6pm", "25:00", "18:60", ""] {
            let err = build_event(&request("Film", bad, 60)).unwrap_err();
            assert!(matches!(err, BoardError::InvalidTime(_)), "input {:?}", bad);
        }
    }

    #[test]
    fn test_off_raster_start_is_still_accepted() {
        // 14:15 never matches a grid slot, but intake does not care.
        let event = build_event(&request("Call", "14:15", 30)).unwrap();
        assert_eq!(time_grid::start_label(event.start.naive_local()), "14:15");
    }

    #[test]
    fn test_link_fields_normalize_dialog_sentinels() {
        let mut req = request("Practice", "18:00", 60);
        req.goal_id = Some("none".to_string());
        req.task_id = Some("  ".to_string());
        let event = build_event(&req).unwrap();
        assert!(event.goal_id.is_none());
        assert!(event.task_id.is_none());

        req.goal_id = Some("g1".to_string());
        req.task_id = Some("t1".to_string());
        let linked = build_event(&req).unwrap();
        assert_eq!(linked.goal_id.as_deref(), Some("g1"));
        assert_eq!(linked.task_id.as_deref(), Some("t1"));
    }

    #[test]
    fn test_prefill_resolves_small_hours_to_next_date() {
        let monday = day(2024, 1, 15);

        let evening = prefill_from_slot(monday, "18:00");
        assert_eq!(evening.date, Some(monday));
        assert_eq!(evening.time_label.as_deref(), Some("18:00"));

        let small_hours = prefill_from_slot(monday, "02:00");
        assert_eq!(small_hours.date, Some(day(2024, 1, 16)));
        assert_eq!(small_hours.time_label.as_deref(), Some("02:00"));
    }

    #[test]
    fn test_event_built_from_prefill_lands_in_clicked_column() {
        let monday = day(2024, 1, 15);
        let prefill = prefill_from_slot(monday, "02:00");

        let mut req = request("Night owl", "", 60);
        req.date = prefill.date.unwrap();
        req.start_time = prefill.time_label.unwrap();

        let event = build_event(&req).unwrap();
        assert_eq!(attributed_date(event.start.naive_local()), monday);
    }
}
