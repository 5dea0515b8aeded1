//! Sheet CLI - exercise sheet progress tracker.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sheet_core::{SkillId, TaskId, TaskToggle};
use sheet_progress::{ProgressTracker, STORAGE_KEY};
use sheet_storage::JsonFileStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod terminal;

use config::SheetFile;
use terminal::TerminalSink;

#[derive(Parser)]
#[command(name = "sheet")]
#[command(about = "Exercise sheet progress tracker", long_about = None)]
struct Cli {
    /// Sheet definition (TOML)
    #[arg(long, env = "SHEET_FILE", default_value = "sheet.toml", global = true)]
    sheet: PathBuf,

    /// Directory holding saved progress
    #[arg(long, env = "SHEET_DATA_DIR", default_value = ".sheet", global = true)]
    data_dir: PathBuf,

    /// Storage key for this sheet
    #[arg(long, default_value = STORAGE_KEY, global = true)]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show progress
    Status {
        /// Print the render frame as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a task complete, or reopen it
    ToggleTask {
        /// Task ID
        id: String,
    },
    /// Validate a skill, or clear it
    ToggleSkill {
        /// Skill ID
        id: String,
    },
    /// Print the saved snapshot
    Export,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let sheet = SheetFile::load(&cli.sheet)?;
    let layout = sheet.layout();
    let json = matches!(cli.command, Commands::Status { json: true });
    let sink = TerminalSink::new(sheet.title.clone(), layout.clone(), json);

    let store = JsonFileStore::new(&cli.data_dir)?;
    let mut tracker = ProgressTracker::new(store, layout, sink).with_key(cli.key);
    tracker.initialize();

    match cli.command {
        Commands::Status { .. } => {
            tracker.render();
        }
        Commands::ToggleTask { id } => {
            let task_id = TaskId::new(id);
            let skills = tracker.layout().declared_skills(&task_id).to_vec();
            if !tracker.layout().contains_task(&task_id) {
                info!(task = %task_id, "task is not on this sheet");
            }
            match tracker.toggle_task(&task_id, &skills) {
                TaskToggle::Completed => println!("Completed {}", task_id),
                TaskToggle::Reopened => println!("Reopened {}", task_id),
            }
        }
        Commands::ToggleSkill { id } => {
            let skill_id = SkillId::new(id);
            if tracker.toggle_skill(&skill_id) {
                println!("Validated {}", skill_id);
            } else {
                println!("Cleared {}", skill_id);
            }
        }
        Commands::Export => {
            println!("{}", tracker.snapshot().to_json()?);
        }
    }

    Ok(())
}
