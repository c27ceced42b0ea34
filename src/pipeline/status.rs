//! Stage status derivation.
//!
//! Status is a pure function of filesystem state at query time. Nothing
//! here is cached or persisted; every call re-probes the disk.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::project::{PipelineStage, STAGES};

/// Progress of a single pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// Notebook missing (or none declared).
    NotStarted,
    /// Notebook present, expected output missing.
    InProgress,
    /// Notebook present and output present or not required.
    Complete,
}

impl StageStatus {
    /// Combine the two existence facts into a status.
    pub fn from_facts(notebook_present: bool, output_satisfied: bool) -> Self {
        match (notebook_present, output_satisfied) {
            (true, true) => Self::Complete,
            (true, false) => Self::InProgress,
            (false, _) => Self::NotStarted,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "NOT STARTED",
            Self::InProgress => "IN PROGRESS",
            Self::Complete => "COMPLETE",
        }
    }

    /// Icon for TTY output.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::NotStarted => "◌",
            Self::InProgress => "◐",
            Self::Complete => "✓",
        }
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status of one stage together with the facts it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub name: &'static str,
    pub notebook: Option<&'static str>,
    pub output: Option<&'static str>,
    pub notebook_present: bool,
    pub output_satisfied: bool,
    pub status: StageStatus,
}

/// Derive the status of a single stage.
pub fn derive_stage(stage: &PipelineStage, project_root: &Path) -> StageReport {
    let notebook_present = stage
        .notebook
        .map(|nb| project_root.join(nb).exists())
        .unwrap_or(false);
    let output_satisfied = stage
        .output
        .map(|out| project_root.join(out).exists())
        .unwrap_or(true);

    StageReport {
        name: stage.name,
        notebook: stage.notebook,
        output: stage.output,
        notebook_present,
        output_satisfied,
        status: StageStatus::from_facts(notebook_present, output_satisfied),
    }
}

/// Derive the status of every stage in `stages`, preserving order.
pub fn derive_stages(stages: &[PipelineStage], project_root: &Path) -> Vec<StageReport> {
    stages
        .iter()
        .map(|stage| derive_stage(stage, project_root))
        .collect()
}

/// Derive the status of the project's pipeline.
pub fn project_status(project_root: &Path) -> Vec<StageReport> {
    derive_stages(STAGES, project_root)
}
