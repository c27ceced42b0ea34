//! Rendering of stage statuses.

use std::path::Path;

use crate::ui::UserInterface;

use super::status::{project_status, StageReport, StageStatus};

/// Print a single stage's status line, styled by progress, and its files.
pub fn show_stage(ui: &mut dyn UserInterface, report: &StageReport) {
    let line = format!(
        "{} {} - {}",
        report.status.icon(),
        report.status.label(),
        report.name
    );
    match report.status {
        StageStatus::Complete => ui.success(&line),
        StageStatus::InProgress => ui.warning(&line),
        StageStatus::NotStarted => ui.message(&line),
    }

    if let Some(notebook) = report.notebook {
        ui.message(&format!("      Notebook: {}", notebook));
    }
    if let Some(output) = report.output {
        ui.message(&format!("      Output: {}", output));
    }
}

/// Derive and print the status of every stage.
pub fn show_project_status(ui: &mut dyn UserInterface, project_root: &Path) -> Vec<StageReport> {
    ui.show_header("Project Status");
    let reports = project_status(project_root);
    for report in &reports {
        ui.message("");
        show_stage(ui, report);
    }
    reports
}
