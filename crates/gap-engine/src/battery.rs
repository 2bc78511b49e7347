//! Named, ordered rule batteries and their evaluation.

use gap_core::entities::{ChecklistResult, ProjectSnapshot};
use gap_core::responses::RuleDescriptor;

use crate::error::EngineError;
use crate::rules::{self, Gap, Rule, RuleContext};
use crate::settings::EngineSettings;

/// Everything one battery run produced, before ids and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Gaps in battery order, then emission order within a rule.
    pub gaps: Vec<Gap>,
    /// One entry per checklist item, in battery order.
    pub checklist: Vec<ChecklistResult>,
}

/// A named, ordered list of rules.
#[derive(Debug, Clone)]
pub struct Battery {
    name: String,
    rules: Vec<Rule>,
}

impl Battery {
    /// Name of the standard battery.
    pub const STANDARD: &'static str = "completeness";

    /// The full completeness battery: lifecycle checklist, assessment
    /// alignment, content coverage, then structure.
    #[must_use]
    pub fn standard() -> Self {
        let rules = [
            rules::lifecycle::rules(),
            rules::assessment::rules(),
            rules::coverage::rules(),
            rules::structure::rules(),
        ]
        .concat();
        Self {
            name: Self::STANDARD.to_string(),
            rules,
        }
    }

    /// Rename the battery; reports are stored under the new name.
    #[must_use]
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Drop the rules with the given ids.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnknownRule` for an id not in the battery.
    pub fn without<S: AsRef<str>>(mut self, ids: &[S]) -> Result<Self, EngineError> {
        for id in ids {
            let id = id.as_ref();
            if !self.rules.iter().any(|rule| rule.id == id) {
                return Err(EngineError::UnknownRule(id.to_string()));
            }
        }
        self.rules
            .retain(|rule| !ids.iter().any(|id| id.as_ref() == rule.id));
        Ok(self)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn descriptors(&self) -> Vec<RuleDescriptor> {
        self.rules.iter().map(Rule::descriptor).collect()
    }

    /// Run every rule against `snapshot` in battery order.
    #[must_use]
    pub fn evaluate(&self, snapshot: &ProjectSnapshot, settings: &EngineSettings) -> Evaluation {
        let ctx = RuleContext { snapshot, settings };
        let mut evaluation = Evaluation::default();
        for rule in &self.rules {
            let outcome = rule.evaluate(&ctx);
            tracing::debug!(
                battery = %self.name,
                rule = rule.id,
                gaps = outcome.gaps.len(),
                "rule evaluated"
            );
            evaluation.gaps.extend(outcome.gaps);
            evaluation.checklist.extend(outcome.checklist);
        }
        evaluation
    }
}

impl Default for Battery {
    fn default() -> Self {
        Self::standard()
    }
}
