//! Tracker state: the completed task set and the validated skill set.

use std::collections::BTreeSet;

use crate::id::{SkillId, TaskId};
use crate::snapshot::Snapshot;

/// Outcome of toggling a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskToggle {
    /// The task was added to the completed set.
    Completed,
    /// The task was removed from the completed set.
    Reopened,
}

/// In-memory progress for one sheet session.
///
/// Completing a task validates every skill it declares. Reopening a task
/// leaves the validated skills alone: once validated, a skill only goes away
/// through a direct skill toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    completed_tasks: BTreeSet<TaskId>,
    validated_skills: BTreeSet<SkillId>,
}

impl ProgressState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild state from a persisted snapshot. Duplicate ids collapse.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            completed_tasks: snapshot.tasks.into_iter().collect(),
            validated_skills: snapshot.skills.into_iter().collect(),
        }
    }

    /// Serializable form of the current state.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.completed_tasks.iter().cloned().collect(),
            skills: self.validated_skills.iter().cloned().collect(),
        }
    }

    /// Flip a task's completion.
    ///
    /// When the task becomes complete, every id in `declared_skills` is
    /// added to the validated set.
    pub fn toggle_task<I>(&mut self, task_id: &TaskId, declared_skills: I) -> TaskToggle
    where
        I: IntoIterator<Item = SkillId>,
    {
        if self.completed_tasks.remove(task_id) {
            return TaskToggle::Reopened;
        }

        self.completed_tasks.insert(task_id.clone());
        self.validated_skills.extend(declared_skills);
        TaskToggle::Completed
    }

    /// Flip a skill's validation. Returns whether the skill is now validated.
    pub fn toggle_skill(&mut self, skill_id: &SkillId) -> bool {
        if self.validated_skills.remove(skill_id) {
            false
        } else {
            self.validated_skills.insert(skill_id.clone());
            true
        }
    }

    /// Whether a task is marked complete.
    pub fn is_task_completed(&self, task_id: &TaskId) -> bool {
        self.completed_tasks.contains(task_id)
    }

    /// Whether a skill is validated.
    pub fn is_skill_validated(&self, skill_id: &SkillId) -> bool {
        self.validated_skills.contains(skill_id)
    }

    /// Completed task ids.
    pub fn completed_tasks(&self) -> &BTreeSet<TaskId> {
        &self.completed_tasks
    }

    /// Validated skill ids.
    pub fn validated_skills(&self) -> &BTreeSet<SkillId> {
        &self.validated_skills
    }
}
