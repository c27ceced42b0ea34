//! Pipeline progress model.
//!
//! Each stage's status is derived from whether its notebook exists and
//! whether its expected output exists. See [`status`]; [`display`] renders
//! the result.

pub mod display;
pub mod status;

pub use display::{show_project_status, show_stage};
pub use status::{derive_stage, derive_stages, project_status, StageReport, StageStatus};
