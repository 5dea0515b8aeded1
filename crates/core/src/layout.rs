//! Sheet layout: the tasks and skills the presentation layer knows about.

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::{SkillId, TaskId};

/// A checklist task as declared by the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    /// Unique identifier
    pub id: TaskId,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Skills validated when this task is completed
    #[serde(default, deserialize_with = "skill_list")]
    pub skills: Vec<SkillId>,
}

impl TaskEntry {
    /// Create a task entry from a comma-delimited skill list.
    pub fn new(id: impl Into<String>, title: impl Into<String>, skills: &str) -> Self {
        Self {
            id: TaskId::new(id),
            title: title.into(),
            skills: parse_skill_list(skills),
        }
    }
}

/// A skill as declared by the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    /// Unique identifier
    pub id: SkillId,

    /// Display label
    #[serde(default)]
    pub label: String,
}

impl SkillEntry {
    /// Create a skill entry.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: SkillId::new(id),
            label: label.into(),
        }
    }
}

/// Ordered tasks and skills rendered by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Tasks in display order
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,

    /// Skills in display order
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
}

impl SheetLayout {
    /// Create a layout.
    pub fn new(tasks: Vec<TaskEntry>, skills: Vec<SkillEntry>) -> Self {
        Self { tasks, skills }
    }

    /// Number of known tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Look up a task entry.
    pub fn task(&self, id: &TaskId) -> Option<&TaskEntry> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Skills declared by a task; empty for unknown ids.
    pub fn declared_skills(&self, id: &TaskId) -> &[SkillId] {
        self.task(id).map(|t| t.skills.as_slice()).unwrap_or(&[])
    }

    /// Whether the layout knows this task.
    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.task(id).is_some()
    }
}

/// Split a comma-delimited skill list, trimming and dropping empty segments.
pub fn parse_skill_list(raw: &str) -> Vec<SkillId> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(SkillId::new)
        .collect()
}

fn skill_list<'de, D>(deserializer: D) -> Result<Vec<SkillId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Delimited(String),
        List(Vec<String>),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Delimited(s) => parse_skill_list(&s),
        Raw::List(items) => items.iter().flat_map(|s| parse_skill_list(s)).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skill_list() {
        assert_eq!(
            parse_skill_list("cafe,encaissement"),
            vec![SkillId::new("cafe"), SkillId::new("encaissement")]
        );
        assert_eq!(parse_skill_list(" cafe , accueil "), vec![SkillId::new("cafe"), SkillId::new("accueil")]);
        assert!(parse_skill_list("").is_empty());
        assert_eq!(parse_skill_list("cafe,,"), vec![SkillId::new("cafe")]);
    }

    #[test]
    fn test_declared_skills_lookup() {
        let layout = SheetLayout::new(
            vec![
                TaskEntry::new("t1", "Prepare espresso", "cafe,encaissement"),
                TaskEntry::new("t2", "Clean grinder", ""),
            ],
            vec![SkillEntry::new("cafe", "Coffee")],
        );

        assert_eq!(layout.task_count(), 2);
        assert_eq!(layout.declared_skills(&TaskId::new("t1")).len(), 2);
        assert!(layout.declared_skills(&TaskId::new("t2")).is_empty());
        assert!(layout.declared_skills(&TaskId::new("ghost")).is_empty());
        assert!(!layout.contains_task(&TaskId::new("ghost")));
    }

    #[test]
    fn test_deserialize_skills_from_string_or_list() {
        let json = r#"{
            "tasks": [
                {"id": "t1", "skills": "cafe, encaissement"},
                {"id": "t2", "skills": ["accueil", "cafe"]},
                {"id": "t3"}
            ],
            "skills": [{"id": "cafe", "label": "Coffee"}]
        }"#;

        let layout: SheetLayout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.tasks[0].skills, vec![SkillId::new("cafe"), SkillId::new("encaissement")]);
        assert_eq!(layout.tasks[1].skills, vec![SkillId::new("accueil"), SkillId::new("cafe")]);
        assert!(layout.tasks[2].skills.is_empty());
        assert_eq!(layout.skills[0].label, "Coffee");
    }
}
