//! Persisted snapshot of tracker state.
//!
//! Wire form is `{"tasks": [...], "skills": [...]}`. There is no version
//! field; a missing or `null` array reads as empty.

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::{SkillId, TaskId};

/// Errors decoding or encoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The stored text is not a valid snapshot
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialized `{tasks, skills}` form of the tracker sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Completed task ids
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<TaskId>,

    /// Validated skill ids
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<SkillId>,
}

impl Snapshot {
    /// Parse a stored snapshot.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode for storage.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
