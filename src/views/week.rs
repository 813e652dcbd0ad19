//! Week view assembly.
//!
//! Builds the projection the week tab renders: a Monday-start window of
//! seven day columns, each carrying task markers for its weekday and one
//! cell per time slot with the events bucketed there. Cells for the small
//! hours are flagged so the renderer can shade them; a click on one of
//! those must create the event on the following calendar date, which is
//! what `event_intake::prefill_from_slot` resolves.

use chrono::NaiveDate;

use crate::time_grid::{events_in_slot, is_small_hours, slot_labels};
use crate::types::{CalendarEvent, CellEvent, Goal, GridCell, GridDay, TaskMarker, WeekGrid};
use crate::week_window::WeekWindow;
use crate::weekday_tasks;

/// Assemble the week grid for the window containing `anchor`.
pub fn build_week_grid(anchor: NaiveDate, goals: &[Goal], events: &[CalendarEvent]) -> WeekGrid {
    let window = WeekWindow::containing(anchor);
    let labels = slot_labels();

    let days = window
        .days()
        .iter()
        .map(|&date| build_day(date, &labels, goals, events))
        .collect();

    WeekGrid {
        range_label: window.range_label(),
        slot_labels: labels,
        days,
    }
}

fn build_day(
    date: NaiveDate,
    labels: &[String],
    goals: &[Goal],
    events: &[CalendarEvent],
) -> GridDay {
    let tasks = weekday_tasks::scheduled_for_weekday(weekday_tasks::weekday_index(date), goals)
        .into_iter()
        .map(|(_, task)| TaskMarker {
            task_id: task.id.clone(),
            goal_id: task.goal_id.clone(),
            title: task.title.clone(),
            time_slot: task.time_slot.clone(),
            is_completed: task.is_completed,
        })
        .collect();

    let cells = labels
        .iter()
        .map(|label| GridCell {
            slot: label.clone(),
            late_night: is_small_hours(label),
            events: events_in_slot(date, label, events)
                .into_iter()
                .map(to_cell_event)
                .collect(),
        })
        .collect();

    GridDay {
        date,
        day_name: date.format("%a").to_string(),
        tasks,
        cells,
    }
}

fn to_cell_event(event: &CalendarEvent) -> CellEvent {
    CellEvent {
        id: event.id.clone(),
        title: event.title.clone(),
        goal_id: event.goal_id.clone(),
        task_id: event.task_id.clone(),
    }
}
