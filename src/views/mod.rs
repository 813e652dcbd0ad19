//! Read-only view assembly for the UI host.
//!
//! Each view turns immutable goal/event snapshots into a serializable
//! payload; nothing in here mutates state or touches storage.

pub mod month;
pub mod week;
