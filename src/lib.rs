//! Goal-tracking dashboard core.
//!
//! Everything a UI host needs behind the rendering layer: goal and task
//! models, the shifted-day time grid (columns run 10:00 through the small
//! hours), week windowing and paging, month projections, new-event intake,
//! and JSON persistence with graceful fallbacks. The host owns widgets and
//! interaction; this crate owns the data and the scheduling math.

pub mod error;
pub mod event_intake;
pub mod seed;
pub mod state;
pub mod store;
pub mod time_grid;
pub mod types;
pub mod views;
pub mod week_window;
pub mod weekday_tasks;

pub use error::{BoardError, BoardResult};
pub use state::Dashboard;
pub use store::{DashboardStore, EventStore, GoalStore, JsonFileStore, MemoryStore};
pub use week_window::WeekWindow;
