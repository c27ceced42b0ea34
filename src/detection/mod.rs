//! Filesystem probes for project files.
//!
//! - [`artifacts`] checks the data files the pipeline produces
//! - [`listing`] enumerates notebooks and generated charts
//!
//! Files are only ever tested for existence; contents are never read.

pub mod artifacts;
pub mod listing;

pub use artifacts::{
    check_artifacts, locate_artifacts, show_artifacts, ArtifactPresence, ArtifactReport,
};
pub use listing::{
    list_files_with_extension, list_notebooks, list_visualizations, show_notebooks,
    show_visualizations, NotebookEntry,
};
