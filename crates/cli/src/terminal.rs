//! Terminal presentation of a render frame.

use std::fmt::Write as _;

use sheet_core::{RenderFrame, SheetLayout};
use sheet_progress::ProgressSink;

const BAR_WIDTH: usize = 20;

/// Prints each frame to stdout.
pub struct TerminalSink {
    title: String,
    layout: SheetLayout,
    json: bool,
}

impl TerminalSink {
    /// Create a sink. `json` prints the raw frame instead of the checklist.
    pub fn new(title: impl Into<String>, layout: SheetLayout, json: bool) -> Self {
        Self {
            title: title.into(),
            layout,
            json,
        }
    }
}

impl ProgressSink for TerminalSink {
    fn present(&mut self, frame: &RenderFrame) {
        if self.json {
            match serde_json::to_string_pretty(frame) {
                Ok(json) => println!("{}", json),
                Err(e) => tracing::warn!(error = %e, "failed to encode frame"),
            }
        } else {
            print!("{}", format_frame(&self.title, &self.layout, frame));
        }
    }
}

/// Render a frame as a text checklist.
pub fn format_frame(title: &str, layout: &SheetLayout, frame: &RenderFrame) -> String {
    let mut out = String::new();

    if !title.is_empty() {
        let _ = writeln!(out, "{}", title);
    }

    let filled = usize::from(frame.percent) * BAR_WIDTH / 100;
    let _ = writeln!(
        out,
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        frame.percent
    );
    let _ = writeln!(out, "Tasks: {}  Skills validated: {}", frame.counter_text(), frame.skills_validated);

    if !frame.tasks.is_empty() {
        let _ = writeln!(out);
        for (view, entry) in frame.tasks.iter().zip(&layout.tasks) {
            let mark = if view.completed { 'x' } else { ' ' };
            let _ = writeln!(out, "  [{}] {:<8} {}", mark, view.id, entry.title);
        }
    }

    if !frame.skills.is_empty() {
        let _ = writeln!(out);
        for (view, entry) in frame.skills.iter().zip(&layout.skills) {
            let mark = if view.validated { '*' } else { '.' };
            let label = if entry.label.is_empty() { view.id.as_str() } else { entry.label.as_str() };
            let _ = writeln!(out, "  {} {}", mark, label);
        }
    }

    if frame.banner_visible() {
        let _ = writeln!(out);
        let _ = writeln!(out, "All tasks complete. Well done!");
    }

    out
}
