//! Data artifact presence checks.

use std::path::Path;

use crate::project::ArtifactSpec;
use crate::ui::UserInterface;

/// Presence of a single artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPresence {
    pub spec: ArtifactSpec,
    pub present: bool,
}

/// Result of checking a set of artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
    pub items: Vec<ArtifactPresence>,
}

impl ArtifactReport {
    /// Whether every artifact exists.
    pub fn all_present(&self) -> bool {
        self.items.iter().all(|i| i.present)
    }

    /// Artifacts that were not found.
    pub fn missing(&self) -> impl Iterator<Item = &ArtifactSpec> {
        self.items.iter().filter(|i| !i.present).map(|i| &i.spec)
    }
}

/// Check existence of each artifact relative to the project root.
pub fn locate_artifacts(project_root: &Path, specs: &[ArtifactSpec]) -> ArtifactReport {
    let items = specs
        .iter()
        .map(|spec| {
            let present = spec.resolve(project_root).exists();
            tracing::debug!("Artifact {} ({}): present={}", spec.name, spec.path, present);
            ArtifactPresence {
                spec: *spec,
                present,
            }
        })
        .collect();

    ArtifactReport { items }
}

/// Print one line per artifact.
pub fn show_artifacts(ui: &mut dyn UserInterface, report: &ArtifactReport) {
    ui.message("Checking data files...");
    for item in &report.items {
        if item.present {
            ui.success(&format!("{}: {}", item.spec.name, item.spec.path));
        } else {
            ui.warning(&format!(
                "{}: {} (NOT FOUND)",
                item.spec.name, item.spec.path
            ));
        }
    }
}

/// Check and print the artifacts. Returns whether all were found.
pub fn check_artifacts(
    ui: &mut dyn UserInterface,
    project_root: &Path,
    specs: &[ArtifactSpec],
) -> ArtifactReport {
    let report = locate_artifacts(project_root, specs);
    show_artifacts(ui, &report);
    report
}
