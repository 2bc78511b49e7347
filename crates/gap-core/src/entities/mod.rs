//! Entity structs for the snapshot the engine reads and the reports it writes.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so snapshots can
//! be loaded from JSON and reports handed to a display layer unchanged.

mod analysis;
mod document;
mod finding;
mod outline;
mod report;
mod snapshot;

pub use analysis::{AnalysisReport, AnalysisState, Constraints, LearnerProfile, SuccessMetric};
pub use document::DesignDocument;
pub use finding::Finding;
pub use outline::{CourseOutline, LearningObjective, Lesson, Module};
pub use report::{ALL_CLEAR_SUMMARY, ChecklistResult, Report};
pub use snapshot::ProjectSnapshot;
