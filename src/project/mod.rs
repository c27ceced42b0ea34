//! Fixed layout of the crime data analysis project.
//!
//! Everything launchpad knows about the project lives in the tables below:
//! the libraries the notebooks import, the data files they produce, the
//! pipeline stages and the files the menu actions point at. Paths are
//! relative to the project root.

use std::path::{Path, PathBuf};

/// An importable Python library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryRequirement {
    /// Module name passed to `import`.
    pub module: &'static str,
}

/// A data file whose existence is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactSpec {
    /// Display name (e.g., "Raw Data").
    pub name: &'static str,
    /// Path relative to the project root.
    pub path: &'static str,
}

impl ArtifactSpec {
    /// Resolve against a project root.
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        project_root.join(self.path)
    }
}

/// One phase of the data pipeline.
///
/// A stage without a notebook can never be started; a stage without an
/// output is finished as soon as its notebook exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStage {
    /// Display name.
    pub name: &'static str,
    /// Authoring artifact for the stage.
    pub notebook: Option<&'static str>,
    /// Artifact the stage is expected to produce.
    pub output: Option<&'static str>,
}

/// Libraries every notebook needs. Probed in order.
pub const REQUIRED_LIBRARIES: &[LibraryRequirement] = &[
    LibraryRequirement { module: "pandas" },
    LibraryRequirement { module: "numpy" },
    LibraryRequirement {
        module: "matplotlib",
    },
    LibraryRequirement { module: "seaborn" },
    LibraryRequirement { module: "sklearn" },
];

/// Library only the dashboard needs.
pub const DASHBOARD_LIBRARY: LibraryRequirement = LibraryRequirement {
    module: "streamlit",
};

pub const RAW_DATA: &str = "data/Crime_Data_from_2020_to_Present_50k.csv";
pub const CLEANED_DATA: &str = "data/Crime_Data_Cleaned.csv";
pub const TRANSFORMED_DATA: &str = "data/Crime_Data_Transformed.csv";

/// Data files reported at startup.
pub const ARTIFACTS: &[ArtifactSpec] = &[
    ArtifactSpec {
        name: "Raw Data",
        path: RAW_DATA,
    },
    ArtifactSpec {
        name: "Cleaned Data",
        path: CLEANED_DATA,
    },
    ArtifactSpec {
        name: "Transformed Data",
        path: TRANSFORMED_DATA,
    },
];

/// Dashboard entry point, passed to `streamlit run`.
pub const ENTRY_POINT: &str = "streamlit_app.py";

/// Dependency manifest, passed to `pip install -r`.
pub const MANIFEST: &str = "requirements.txt";

/// Notebooks listed by the notebooks action.
pub const NOTEBOOKS: &[&str] = &[
    "data_cleaning.ipynb",
    "data_transformation.ipynb",
    "exploratory_data_analysis.ipynb",
];

/// Pipeline stages in execution order.
pub const STAGES: &[PipelineStage] = &[
    PipelineStage {
        name: "Data Cleaning",
        notebook: Some("data_cleaning.ipynb"),
        output: Some(CLEANED_DATA),
    },
    PipelineStage {
        name: "Data Transformation",
        notebook: Some("data_transformation.ipynb"),
        output: Some(TRANSFORMED_DATA),
    },
    PipelineStage {
        name: "Exploratory Data Analysis",
        notebook: Some("exploratory_data_analysis.ipynb"),
        output: None,
    },
    PipelineStage {
        name: "Streamlit Dashboard",
        notebook: Some(ENTRY_POINT),
        output: None,
    },
];

/// Directory the analysis notebook writes charts into.
pub const VISUALIZATIONS_DIR: &str = "visualizations";

/// Extension of generated charts.
pub const VISUALIZATION_EXTENSION: &str = "png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_required_libraries_in_order() {
        let modules: Vec<_> = REQUIRED_LIBRARIES.iter().map(|l| l.module).collect();
        assert_eq!(
            modules,
            ["pandas", "numpy", "matplotlib", "seaborn", "sklearn"]
        );
    }

    #[test]
    fn dashboard_library_is_not_required() {
        assert!(!REQUIRED_LIBRARIES.contains(&DASHBOARD_LIBRARY));
    }

    #[test]
    fn stages_are_ordered() {
        let names: Vec<_> = STAGES.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "Data Cleaning",
                "Data Transformation",
                "Exploratory Data Analysis",
                "Streamlit Dashboard"
            ]
        );
    }

    #[test]
    fn stage_outputs_are_tracked_artifacts() {
        for stage in STAGES {
            if let Some(output) = stage.output {
                assert!(ARTIFACTS.iter().any(|a| a.path == output), "{}", output);
            }
        }
    }

    #[test]
    fn artifact_resolves_against_root() {
        let root = Path::new("/project");
        assert_eq!(
            ARTIFACTS[0].resolve(root),
            PathBuf::from("/project/data/Crime_Data_from_2020_to_Present_50k.csv")
        );
    }
}
