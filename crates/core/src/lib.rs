//! Sheet core data models.
//!
//! This crate defines the state owned by the progress tracker, its persisted
//! snapshot form, and the plain-data view handed to the presentation layer.

#![warn(missing_docs)]

// Core identities
mod id;

// Tracker state and its wire form
mod state;
mod snapshot;

// Presentation-side data
mod layout;
mod frame;

// Re-exports
pub use id::*;

pub use state::{ProgressState, TaskToggle};
pub use snapshot::{Snapshot, SnapshotError};
pub use layout::{SheetLayout, TaskEntry, SkillEntry, parse_skill_list};
pub use frame::{RenderFrame, TaskView, SkillView, RING_CIRCUMFERENCE, completion_percent};
