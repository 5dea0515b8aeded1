//! Render frame: derived visual state handed to the presentation layer.

use serde::Serialize;

use crate::id::{SkillId, TaskId};
use crate::layout::SheetLayout;
use crate::state::ProgressState;

/// Circumference of the circular progress ring (r = 52).
pub const RING_CIRCUMFERENCE: f64 = 326.73;

/// Visual state of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Task identifier
    pub id: TaskId,
    /// Completed class and checkbox checked state
    pub completed: bool,
}

/// Visual state of one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillView {
    /// Skill identifier
    pub id: SkillId,
    /// Validated class
    pub validated: bool,
}

/// Everything the presentation layer updates after a state change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    /// Rounded completion percentage in [0, 100]
    pub percent: u8,

    /// Known tasks that are complete
    pub completed_count: usize,

    /// Known task count
    pub total_tasks: usize,

    /// Size of the validated skill set
    pub skills_validated: usize,

    /// Stroke dash offset of the progress ring
    pub ring_offset: f64,

    /// All known tasks complete; drives the ring style and the banner
    pub complete: bool,

    /// Per-task state in layout order
    pub tasks: Vec<TaskView>,

    /// Per-skill state in layout order
    pub skills: Vec<SkillView>,
}

impl RenderFrame {
    /// Derive the frame from tracker state and the known layout.
    pub fn compute(state: &ProgressState, layout: &SheetLayout) -> Self {
        let tasks: Vec<TaskView> = layout
            .tasks
            .iter()
            .map(|t| TaskView {
                id: t.id.clone(),
                completed: state.is_task_completed(&t.id),
            })
            .collect();

        let skills = layout
            .skills
            .iter()
            .map(|s| SkillView {
                id: s.id.clone(),
                validated: state.is_skill_validated(&s.id),
            })
            .collect();

        let total_tasks = tasks.len();
        let completed_count = tasks.iter().filter(|t| t.completed).count();
        let percent = completion_percent(completed_count, total_tasks);

        Self {
            percent,
            completed_count,
            total_tasks,
            skills_validated: state.validated_skills().len(),
            ring_offset: ring_offset(percent),
            complete: percent == 100,
            tasks,
            skills,
        }
    }

    /// The `done/total` counter text.
    pub fn counter_text(&self) -> String {
        format!("{}/{}", self.completed_count, self.total_tasks)
    }

    /// Whether the completion banner is shown.
    pub fn banner_visible(&self) -> bool {
        self.complete
    }
}

/// Rounded percentage of `completed` over `total`.
///
/// Zero tasks yields 0. Only a fully complete sheet reaches 100.
pub fn completion_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    if completed == total {
        return 100;
    }

    // Round half up on the exact ratio.
    let rounded = (200 * completed + total) / (2 * total);
    rounded.min(99) as u8
}

fn ring_offset(percent: u8) -> f64 {
    RING_CIRCUMFERENCE - (f64::from(percent) / 100.0) * RING_CIRCUMFERENCE
}
