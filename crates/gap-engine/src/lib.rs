//! # gap-engine
//!
//! Completeness and gap-analysis engine for Gapcheck.
//!
//! A [`Battery`] of rules runs over a [`ProjectSnapshot`] read fresh from the
//! collaborator interfaces in [`reader`]. The checklist items of the battery
//! feed the completeness [`scorer`]; all rules emit findings. The result is
//! stored per (project, battery) in a [`ReportStore`], where findings can be
//! resolved without rerunning.
//!
//! [`GapService`] wires these together:
//!
//! ```no_run
//! use gap_engine::{Battery, EngineSettings, GapService, InMemoryProjects};
//! use gap_core::entities::ProjectSnapshot;
//!
//! let projects: InMemoryProjects = [ProjectSnapshot::empty("prj-1")].into_iter().collect();
//! let mut service = GapService::new(projects, Battery::standard(), EngineSettings::default());
//! let report = service.run_analysis("prj-1");
//! assert_eq!(report.score, 0);
//! ```
//!
//! [`ProjectSnapshot`]: gap_core::entities::ProjectSnapshot

pub mod battery;
pub mod classify;
pub mod error;
pub mod reader;
pub mod report;
pub mod rules;
pub mod scorer;
pub mod service;
pub mod settings;
pub mod store;

pub use battery::{Battery, Evaluation};
pub use error::EngineError;
pub use reader::{AnalysisSource, DocumentSource, InMemoryProjects, OutlineSource, ProjectSource};
pub use service::GapService;
pub use settings::EngineSettings;
pub use store::{ReportKey, ReportStore};
