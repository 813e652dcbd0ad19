//! Dashboard state.
//!
//! Owns the in-memory goals, events, and week anchor behind non-poisoning
//! locks, loads them through the injected store on startup, and persists
//! after every mutation. Collaborators receive cloned snapshots, never
//! guards; the view payloads are assembled from those snapshots.

use chrono::{Local, NaiveDate};
use parking_lot::RwLock;

use crate::error::BoardResult;
use crate::event_intake;
use crate::store::DashboardStore;
use crate::types::{
    CalendarEvent, EventPrefill, Goal, MonthOverview, NewEventRequest, NewGoalRequest,
    ScheduledTask, WeekGrid,
};
use crate::views;
use crate::week_window;

/// Application state for one dashboard instance.
pub struct Dashboard {
    store: Box<dyn DashboardStore>,
    goals: RwLock<Vec<Goal>>,
    events: RwLock<Vec<CalendarEvent>>,
    anchor: RwLock<NaiveDate>,
}

impl Dashboard {
    /// Open against a store, anchoring the week view on today.
    pub fn open(store: impl DashboardStore + 'static) -> Self {
        Self::open_at(store, Local::now().date_naive())
    }

    /// Open with an explicit anchor date.
    pub fn open_at(store: impl DashboardStore + 'static, anchor: NaiveDate) -> Self {
        let goals = store.load_goals();
        let events = store.load_events();
        log::debug!("Loaded {} goals and {} events", goals.len(), events.len());
        Self {
            store: Box::new(store),
            goals: RwLock::new(goals),
            events: RwLock::new(events),
            anchor: RwLock::new(anchor),
        }
    }

    // ---- snapshots ----------------------------------------------------------

    pub fn goals(&self) -> Vec<Goal> {
        self.goals.read().clone()
    }

    pub fn events(&self) -> Vec<CalendarEvent> {
        self.events.read().clone()
    }

    pub fn anchor(&self) -> NaiveDate {
        *self.anchor.read()
    }

    // ---- goal mutations ------------------------------------------------------

    /// Create a goal from the new-goal form and persist.
    pub fn add_goal(&self, req: NewGoalRequest) -> BoardResult<Goal> {
        let goal = Goal::create(req);
        let snapshot = {
            let mut goals = self.goals.write();
            goals.push(goal.clone());
            goals.clone()
        };
        self.store.save_goals(&snapshot)?;
        log::debug!("Added goal {}", goal.id);
        Ok(goal)
    }

    /// Replace a goal wholesale, as the edit dialog saves it.
    ///
    /// Returns false when no goal with that id exists; nothing is written
    /// in that case.
    pub fn update_goal(&self, updated: Goal) -> BoardResult<bool> {
        let snapshot = {
            let mut goals = self.goals.write();
            match goals.iter_mut().find(|goal| goal.id == updated.id) {
                Some(slot) => *slot = updated,
                None => return Ok(false),
            }
            goals.clone()
        };
        self.store.save_goals(&snapshot)?;
        Ok(true)
    }

    // ---- event intake --------------------------------------------------------

    /// Validate a submitted form, append the event, and persist.
    pub fn submit_event(&self, req: &NewEventRequest) -> BoardResult<CalendarEvent> {
        let event = event_intake::build_event(req)?;
        let snapshot = {
            let mut events = self.events.write();
            events.push(event.clone());
            events.clone()
        };
        self.store.save_events(&snapshot)?;
        log::debug!("Added event {} starting {}", event.id, event.start);
        Ok(event)
    }

    /// Prefill for a click on the `(column_date, label)` grid cell.
    pub fn slot_prefill(&self, column_date: NaiveDate, label: &str) -> EventPrefill {
        event_intake::prefill_from_slot(column_date, label)
    }

    // ---- week paging ---------------------------------------------------------

    /// Move the week view forward one week; returns the new anchor.
    pub fn go_next_week(&self) -> NaiveDate {
        let mut anchor = self.anchor.write();
        *anchor = week_window::next_week(*anchor);
        *anchor
    }

    /// Move the week view back one week; returns the new anchor.
    pub fn go_previous_week(&self) -> NaiveDate {
        let mut anchor = self.anchor.write();
        *anchor = week_window::previous_week(*anchor);
        *anchor
    }

    /// Jump the week view to the window containing `date`.
    pub fn go_to(&self, date: NaiveDate) {
        *self.anchor.write() = date;
    }

    // ---- view payloads -------------------------------------------------------

    /// The week grid for the current anchor.
    pub fn week_grid(&self) -> WeekGrid {
        views::week::build_week_grid(self.anchor(), &self.goals(), &self.events())
    }

    /// Month-view badge totals.
    pub fn month_overview(&self) -> MonthOverview {
        views::month::month_overview(&self.goals())
    }

    /// Month-view detail rows for a selected date.
    pub fn day_schedule(&self, date: NaiveDate) -> Vec<ScheduledTask> {
        views::month::day_schedule(date, &self.goals())
    }
}
