//! Persistence boundary.
//!
//! Goals and events live in two JSON documents behind narrow traits, so the
//! core never touches the storage mechanism. Load is total: an unreadable
//! or malformed file degrades to the starter goal set (goals) or an empty
//! calendar (events) with a log line, never an error. Save propagates real
//! failures. All deserialization and legacy coercion happens here; the rest
//! of the crate only sees typed values.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{BoardError, BoardResult};
use crate::seed;
use crate::types::{CalendarEvent, Goal};

const GOALS_FILE: &str = "goals.json";
const EVENTS_FILE: &str = "events.json";
const DEFAULT_DIR: &str = ".goalboard";

pub trait GoalStore: Send + Sync {
    /// Persisted goals, or the starter set when nothing usable is stored.
    fn load_goals(&self) -> Vec<Goal>;
    fn save_goals(&self, goals: &[Goal]) -> BoardResult<()>;
}

pub trait EventStore: Send + Sync {
    /// Persisted events, or an empty calendar when nothing usable is stored.
    fn load_events(&self) -> Vec<CalendarEvent>;
    fn save_events(&self, events: &[CalendarEvent]) -> BoardResult<()>;
}

/// Both halves of the boundary, as the dashboard state consumes it.
pub trait DashboardStore: GoalStore + EventStore {}

impl<T: GoalStore + EventStore> DashboardStore for T {}

// Shared handles delegate, so a host can keep a reference to the store it
// hands the dashboard.
impl<T: GoalStore + ?Sized> GoalStore for std::sync::Arc<T> {
    fn load_goals(&self) -> Vec<Goal> {
        (**self).load_goals()
    }

    fn save_goals(&self, goals: &[Goal]) -> BoardResult<()> {
        (**self).save_goals(goals)
    }
}

impl<T: EventStore + ?Sized> EventStore for std::sync::Arc<T> {
    fn load_events(&self) -> Vec<CalendarEvent> {
        (**self).load_events()
    }

    fn save_events(&self, events: &[CalendarEvent]) -> BoardResult<()> {
        (**self).save_events(events)
    }
}

/// JSON-file store rooted at a directory, `~/.goalboard` by default.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the user's home directory.
    pub fn open_default() -> BoardResult<Self> {
        let home = dirs::home_dir().ok_or(BoardError::HomeDirNotFound)?;
        Ok(Self::new(home.join(DEFAULT_DIR)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn goals_path(&self) -> PathBuf {
        self.dir.join(GOALS_FILE)
    }

    fn events_path(&self) -> PathBuf {
        self.dir.join(EVENTS_FILE)
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> BoardResult<()> {
        fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(value)?;
        fs::write(path, content)?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// Read and parse a JSON file, logging instead of failing.
///
/// A missing file is normal first-run behavior; a malformed one is worth a
/// warning. Either way the caller falls back.
fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            log::debug!("No readable {}: {}", path.display(), err);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Malformed {}: {}; falling back", path.display(), err);
            None
        }
    }
}

/// Older payloads persisted "no link" as an empty string instead of
/// omitting the field.
fn normalize_event(mut event: CalendarEvent) -> CalendarEvent {
    if matches!(event.goal_id.as_deref(), Some(s) if s.trim().is_empty()) {
        event.goal_id = None;
    }
    if matches!(event.task_id.as_deref(), Some(s) if s.trim().is_empty()) {
        event.task_id = None;
    }
    event
}

impl GoalStore for JsonFileStore {
    fn load_goals(&self) -> Vec<Goal> {
        read_json(&self.goals_path()).unwrap_or_else(seed::starter_goals)
    }

    fn save_goals(&self, goals: &[Goal]) -> BoardResult<()> {
        self.write_json(&self.goals_path(), &goals)
    }
}

impl EventStore for JsonFileStore {
    fn load_events(&self) -> Vec<CalendarEvent> {
        let events: Vec<CalendarEvent> = read_json(&self.events_path()).unwrap_or_default();
        events.into_iter().map(normalize_event).collect()
    }

    fn save_events(&self, events: &[CalendarEvent]) -> BoardResult<()> {
        self.write_json(&self.events_path(), &events)
    }
}

/// In-memory store for tests and hosts that opt out of persistence.
///
/// `None` means "nothing ever saved", which loads as the starter set /
/// empty calendar exactly like a missing file would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    goals: Mutex<Option<Vec<Goal>>>,
    events: Mutex<Option<Vec<CalendarEvent>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GoalStore for MemoryStore {
    fn load_goals(&self) -> Vec<Goal> {
        self.goals.lock().clone().unwrap_or_else(seed::starter_goals)
    }

    fn save_goals(&self, goals: &[Goal]) -> BoardResult<()> {
        *self.goals.lock() = Some(goals.to_vec());
        Ok(())
    }
}

impl EventStore for MemoryStore {
    fn load_events(&self) -> Vec<CalendarEvent> {
        self.events.lock().clone().unwrap_or_default()
    }

    fn save_events(&self, events: &[CalendarEvent]) -> BoardResult<()> {
        *self.events.lock() = Some(events.to_vec());
        Ok(())
    }
}
