//! Progress tracking service.

use sheet_core::{ProgressState, RenderFrame, SheetLayout, SkillId, Snapshot, TaskId, TaskToggle};
use sheet_storage::{KeyValueStore, StorageError};
use tracing::{debug, info, warn};

use crate::sink::ProgressSink;

/// Default key the snapshot is stored under.
pub const STORAGE_KEY: &str = "tp-brulerie-progress";

/// Session-scoped tracker over one exercise sheet.
///
/// Every toggle re-renders to the sink and then writes the snapshot back to
/// the store. Storage failures are logged and absorbed.
pub struct ProgressTracker<S: KeyValueStore, P: ProgressSink> {
    store: S,
    sink: P,
    layout: SheetLayout,
    key: String,
    state: ProgressState,
}

impl<S: KeyValueStore, P: ProgressSink> ProgressTracker<S, P> {
    /// Create a tracker with empty state. Call [`initialize`](Self::initialize)
    /// to load the stored snapshot.
    pub fn new(store: S, layout: SheetLayout, sink: P) -> Self {
        Self {
            store,
            sink,
            layout,
            key: STORAGE_KEY.to_string(),
            state: ProgressState::new(),
        }
    }

    /// Use a different storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Load state from the store.
    ///
    /// An absent, unreadable or malformed snapshot leaves both sets empty.
    /// Does not render.
    pub fn initialize(&mut self) {
        self.state = match self.store.get(&self.key) {
            Ok(Some(json)) => match Snapshot::from_json(&json) {
                Ok(snapshot) => {
                    info!(
                        key = %self.key,
                        tasks = snapshot.tasks.len(),
                        skills = snapshot.skills.len(),
                        "loaded progress"
                    );
                    ProgressState::from_snapshot(snapshot)
                }
                Err(e) => {
                    warn!(key = %self.key, error = %e, "ignoring stored progress");
                    ProgressState::new()
                }
            },
            Ok(None) => {
                debug!(key = %self.key, "no stored progress");
                ProgressState::new()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored progress");
                ProgressState::new()
            }
        };
    }

    /// Toggle a task's completion.
    ///
    /// Completing validates `declared_skills`; reopening leaves skills as
    /// they are. Any id is accepted.
    pub fn toggle_task(&mut self, task_id: &TaskId, declared_skills: &[SkillId]) -> TaskToggle {
        let outcome = self.state.toggle_task(task_id, declared_skills.iter().cloned());
        debug!(task = %task_id, ?outcome, "toggled task");

        self.commit_change();
        outcome
    }

    /// Toggle a skill's validation. Returns whether it is now validated.
    pub fn toggle_skill(&mut self, skill_id: &SkillId) -> bool {
        let validated = self.state.toggle_skill(skill_id);
        debug!(skill = %skill_id, validated, "toggled skill");

        self.commit_change();
        validated
    }

    /// Derive the frame for the current state and push it to the sink.
    pub fn render(&mut self) -> RenderFrame {
        let frame = RenderFrame::compute(&self.state, &self.layout);
        self.sink.present(&frame);
        frame
    }

    /// Write the current snapshot to the store, replacing any prior value.
    pub fn persist(&mut self) -> Result<Snapshot, StorageError> {
        let snapshot = self.state.to_snapshot();
        let json = snapshot.to_json().map_err(|e| StorageError::Other(e.to_string()))?;
        self.store.set(&self.key, &json)?;
        Ok(snapshot)
    }

    /// Current snapshot, without writing.
    pub fn snapshot(&self) -> Snapshot {
        self.state.to_snapshot()
    }

    /// Current state.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Known tasks and skills.
    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The presentation sink.
    pub fn sink(&self) -> &P {
        &self.sink
    }

    /// Tear down the tracker, returning its store and sink.
    pub fn into_parts(self) -> (S, P) {
        (self.store, self.sink)
    }

    fn commit_change(&mut self) {
        self.render();
        if let Err(e) = self.persist() {
            warn!(key = %self.key, error = %e, "failed to save progress");
        }
    }
}
