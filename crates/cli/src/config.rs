//! Sheet file loading.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sheet_core::{SheetLayout, SkillEntry, TaskEntry};

/// Exercise sheet definition read from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SheetFile {
    /// Sheet heading
    #[serde(default)]
    pub title: String,

    /// Checklist tasks
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,

    /// Skill grid
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
}

impl SheetFile {
    /// Read and parse a sheet file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read sheet file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid sheet file {}", path.display()))
    }

    /// Parse sheet TOML.
    pub fn parse(raw: &str) -> Result<Self> {
        let sheet: SheetFile = toml::from_str(raw)?;
        sheet.check_unique_ids()?;
        Ok(sheet)
    }

    /// Layout handed to the tracker.
    pub fn layout(&self) -> SheetLayout {
        SheetLayout::new(self.tasks.clone(), self.skills.clone())
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for task in &self.tasks {
            if !seen.insert(task.id.as_str()) {
                anyhow::bail!("duplicate task id: {}", task.id);
            }
        }

        seen.clear();
        for skill in &self.skills {
            if !seen.insert(skill.id.as_str()) {
                anyhow::bail!("duplicate skill id: {}", skill.id);
            }
        }
        Ok(())
    }
}
