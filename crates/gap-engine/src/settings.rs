//! Thresholds the rule battery reads at evaluation time.

use gap_config::EngineConfig;
use gap_core::enums::ResolutionPolicy;

/// Evaluation settings derived from [`EngineConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub min_modules: usize,
    pub min_lessons_per_module: usize,
    pub module_coverage_ratio: f64,
    pub lesson_assessment_gap_ratio: f64,
    /// Lower-cased, trimmed, blanks removed.
    pub summative_keywords: Vec<String>,
    pub resolution_policy: ResolutionPolicy,
    pub report_passes: bool,
}

impl EngineSettings {
    /// Whether `text` mentions any summative keyword (case-insensitive).
    #[must_use]
    pub fn mentions_summative(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.summative_keywords
            .iter()
            .any(|keyword| text.contains(keyword.as_str()))
    }
}

impl From<&EngineConfig> for EngineSettings {
    fn from(config: &EngineConfig) -> Self {
        Self {
            min_modules: config.min_modules as usize,
            min_lessons_per_module: config.min_lessons_per_module as usize,
            module_coverage_ratio: config.module_coverage_ratio,
            lesson_assessment_gap_ratio: config.lesson_assessment_gap_ratio,
            summative_keywords: config
                .summative_keywords
                .iter()
                .map(|keyword| keyword.trim().to_lowercase())
                .filter(|keyword| !keyword.is_empty())
                .collect(),
            resolution_policy: config.resolution_policy,
            report_passes: config.report_passes,
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_normalized() {
        let config = EngineConfig {
            summative_keywords: vec!["  Capstone ".into(), String::new()],
            ..EngineConfig::default()
        };
        let settings = EngineSettings::from(&config);
        assert_eq!(settings.summative_keywords, vec!["capstone".to_string()]);
    }

    #[test]
    fn summative_match_is_case_insensitive() {
        let settings = EngineSettings::default();
        assert!(settings.mentions_summative("Weekly quizzes and a SUMMATIVE practical"));
        assert!(settings.mentions_summative("Final exam in week 6"));
        assert!(!settings.mentions_summative("Weekly quizzes"));
    }
}
