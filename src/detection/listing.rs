//! Notebook and visualization listings.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::project::{NOTEBOOKS, VISUALIZATIONS_DIR, VISUALIZATION_EXTENSION};
use crate::ui::UserInterface;

/// A notebook and whether it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookEntry {
    pub name: &'static str,
    pub present: bool,
}

/// Check which notebooks exist.
pub fn list_notebooks(project_root: &Path, notebooks: &[&'static str]) -> Vec<NotebookEntry> {
    notebooks
        .iter()
        .map(|name| NotebookEntry {
            name,
            present: project_root.join(name).exists(),
        })
        .collect()
}

/// List files with the given extension in `dir`, sorted by name.
///
/// Returns `Ok(None)` when the directory does not exist.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Option<Vec<String>>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == extension);
        if matches {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.push(name.to_string());
            }
        }
    }
    files.sort();
    Ok(Some(files))
}

/// List generated charts in the visualizations directory.
pub fn list_visualizations(project_root: &Path) -> Result<Option<Vec<String>>> {
    list_files_with_extension(
        &project_root.join(VISUALIZATIONS_DIR),
        VISUALIZATION_EXTENSION,
    )
}

/// Print the notebooks with existence markers and how to open them.
pub fn show_notebooks(ui: &mut dyn UserInterface, project_root: &Path) {
    ui.show_header("Available Notebooks");
    for (i, entry) in list_notebooks(project_root, NOTEBOOKS).iter().enumerate() {
        let line = format!("{}. {}", i + 1, entry.name);
        if entry.present {
            ui.success(&line);
        } else {
            ui.warning(&format!("{} (NOT FOUND)", line));
        }
    }
    ui.message("");
    ui.show_hint("To open a notebook, run: jupyter notebook <filename>");
    ui.show_hint("Or run: jupyter lab (to open all notebooks)");
}

/// Print the generated visualizations, if any.
pub fn show_visualizations(ui: &mut dyn UserInterface, project_root: &Path) {
    ui.show_header("Generated Visualizations");
    match list_visualizations(project_root) {
        Ok(None) => ui.warning("Visualizations directory not found!"),
        Ok(Some(files)) if files.is_empty() => {
            ui.warning("No visualizations found!");
            ui.show_hint(
                "Run the exploratory_data_analysis.ipynb notebook to generate visualizations",
            );
        }
        Ok(Some(files)) => {
            ui.message(&format!("Found {} visualizations:", files.len()));
            for file in files {
                ui.message(&format!("  • {}", file));
            }
        }
        Err(e) => ui.error(&format!("Could not read {}: {}", VISUALIZATIONS_DIR, e)),
    }
}
