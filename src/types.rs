//! Shared type definitions for the dashboard core
//!
//! Three persisted domain shapes (Goal, WeeklyTask, CalendarEvent), the
//! request/prefill shapes the UI host submits, and the read-only payload
//! shapes the view layer assembles for rendering. JSON field names are
//! camelCase to stay compatible with previously persisted data.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Goals and recurring weekly tasks
// =============================================================================

/// Lifecycle status of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "not_started",
            GoalStatus::InProgress => "in_progress",
            GoalStatus::Completed => "completed",
        }
    }

    /// Human-readable form shown on status badges ("not started", ...).
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "not started",
            GoalStatus::InProgress => "in progress",
            GoalStatus::Completed => "completed",
        }
    }

    /// Badge color token for the UI host.
    pub fn badge_color(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "red",
            GoalStatus::InProgress => "yellow",
            GoalStatus::Completed => "green",
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A recurring task attached to a goal, scheduled on a weekday slot.
///
/// `day_of_week` follows the host convention: 0 = Sunday .. 6 = Saturday.
/// Out-of-range values in persisted data pass through untouched; they never
/// match a real weekday, so they are invisible rather than fatal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTask {
    pub id: String,
    /// Back-reference to the owning goal.
    pub goal_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration in minutes.
    pub duration: u32,
    pub day_of_week: u8,
    /// "HH:mm" wall-clock label.
    pub time_slot: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl WeeklyTask {
    /// Blank task as seeded by the goal edit flow: 30 minutes on Monday at
    /// 09:00, title left for the user to fill in.
    pub fn draft(goal_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            goal_id: goal_id.to_string(),
            title: String::new(),
            description: None,
            duration: 30,
            day_of_week: 1,
            time_slot: "09:00".to_string(),
            is_completed: false,
        }
    }
}

/// A tracked goal with its recurring weekly tasks embedded.
///
/// `progress` is 0..100 by convention; persisted out-of-range values pass
/// through unvalidated, mirroring the data this replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default)]
    pub progress: u8,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub weekly_tasks: Vec<WeeklyTask>,
}

/// Form payload for creating a goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalRequest {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub status: GoalStatus,
}

impl Goal {
    /// Fresh goal as created by the new-goal form: zero progress, no tasks.
    pub fn create(req: NewGoalRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: req.title,
            status: req.status,
            progress: 0,
            category: req.category,
            description: None,
            start_date: None,
            target_date: None,
            weekly_tasks: Vec::new(),
        }
    }
}

// =============================================================================
// Calendar events
// =============================================================================

/// A one-off scheduled event.
///
/// `end > start` holds by construction: events are only built by the intake
/// path, which adds a positive duration to the start. Instants are local
/// wall-clock times serialized as ISO-8601 strings with offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

impl CalendarEvent {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

// =============================================================================
// Event intake shapes
// =============================================================================

/// Seed values for the new-event form.
///
/// A slot click produces both fields; the plain "add event" button produces
/// neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPrefill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_label: Option<String>,
}

impl EventPrefill {
    pub fn empty() -> Self {
        Self {
            date: None,
            time_label: None,
        }
    }

    pub fn from_slot(date: NaiveDate, time_label: &str) -> Self {
        Self {
            date: Some(date),
            time_label: Some(time_label.to_string()),
        }
    }
}

/// Form payload for creating an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEventRequest {
    pub title: String,
    pub date: NaiveDate,
    /// "HH:mm" start time.
    pub start_time: String,
    #[serde(default = "default_event_duration")]
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

fn default_event_duration() -> u32 {
    60
}

// =============================================================================
// View payloads (assembled by `views`, consumed by the UI host)
// =============================================================================

/// One event entry inside a grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellEvent {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

/// One slot cell in a day column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub slot: String,
    /// True for small-hours slots (before 10:00) that spill into the next
    /// calendar date; rendered shaded.
    pub late_night: bool,
    pub events: Vec<CellEvent>,
}

/// Summary marker for a recurring task active on a day column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMarker {
    pub task_id: String,
    pub goal_id: String,
    pub title: String,
    pub time_slot: String,
    pub is_completed: bool,
}

/// One day column of the week grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDay {
    pub date: NaiveDate,
    /// Short weekday name ("Mon".."Sun").
    pub day_name: String,
    pub tasks: Vec<TaskMarker>,
    pub cells: Vec<GridCell>,
}

/// The whole week grid, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGrid {
    /// Header label, e.g. "Jan 15 - Jan 21, 2024".
    pub range_label: String,
    pub slot_labels: Vec<String>,
    pub days: Vec<GridDay>,
}

/// A task as listed in the month view's per-date detail panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTask {
    pub task_id: String,
    pub goal_id: String,
    pub title: String,
    pub goal_title: String,
    pub time_slot: String,
    pub duration: u32,
    pub is_completed: bool,
}

/// Per-weekday task totals for month-view badge markers, indexed Sunday=0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthOverview {
    pub weekday_counts: [usize; 7],
}
