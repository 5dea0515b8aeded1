//! Progress Tracking
//!
//! Task completion, skill validation, rendering and persistence for an
//! exercise sheet.

#![warn(missing_docs)]

pub mod tracker;
pub mod sink;

pub use tracker::{ProgressTracker, STORAGE_KEY};
pub use sink::{ProgressSink, RecordingSink};
