//! Rule battery thresholds and run behaviour.

use gap_core::enums::ResolutionPolicy;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_battery() -> String {
    "completeness".to_string()
}

const fn default_min_modules() -> u32 {
    3
}

const fn default_min_lessons_per_module() -> u32 {
    2
}

const fn default_ratio() -> f64 {
    0.5
}

fn default_summative_keywords() -> Vec<String> {
    ["summative", "final exam", "final assessment", "capstone"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Name reports are stored under.
    #[serde(default = "default_battery")]
    pub battery: String,

    /// Courses with fewer modules get an info finding.
    #[serde(default = "default_min_modules")]
    pub min_modules: u32,

    /// Modules with fewer lessons get an info finding.
    #[serde(default = "default_min_lessons_per_module")]
    pub min_lessons_per_module: u32,

    /// Share of modules that must have a design document.
    #[serde(default = "default_ratio")]
    pub module_coverage_ratio: f64,

    /// A module is flagged when the share of its lessons without an
    /// assessment type exceeds this.
    #[serde(default = "default_ratio")]
    pub lesson_assessment_gap_ratio: f64,

    /// Words that mark an assessment strategy as summative (case-insensitive).
    #[serde(default = "default_summative_keywords")]
    pub summative_keywords: Vec<String>,

    /// Whether resolved findings survive a rerun.
    #[serde(default)]
    pub resolution_policy: ResolutionPolicy,

    /// Emit `pass` findings for satisfied checklist items.
    #[serde(default)]
    pub report_passes: bool,

    /// Rule ids to leave out of the battery.
    #[serde(default)]
    pub disabled_rules: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            battery: default_battery(),
            min_modules: default_min_modules(),
            min_lessons_per_module: default_min_lessons_per_module(),
            module_coverage_ratio: default_ratio(),
            lesson_assessment_gap_ratio: default_ratio(),
            summative_keywords: default_summative_keywords(),
            resolution_policy: ResolutionPolicy::default(),
            report_passes: false,
            disabled_rules: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Reject values the engine cannot interpret.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank battery name, a ratio
    /// outside `0.0..=1.0`, or a summative keyword list with no usable entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.battery.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "engine.battery".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        for (field, value) in [
            ("engine.module_coverage_ratio", self.module_coverage_ratio),
            (
                "engine.lesson_assessment_gap_ratio",
                self.lesson_assessment_gap_ratio,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("{value} is outside 0.0..=1.0"),
                });
            }
        }

        if self.summative_keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "engine.summative_keywords".to_string(),
                reason: "at least one non-empty keyword is required".to_string(),
            });
        }

        Ok(())
    }
}
