use serde::{Deserialize, Serialize};

/// Quality grade recorded upstream for verified observations.
pub const RESEARCH_GRADE: &str = "research";

/// Dataset-wide quality gate applied before indexing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityGate {
    /// Keep only observations whose quality grade is `research`.
    #[default]
    ResearchOnly,
    /// Keep every observation regardless of grade.
    Any,
}

impl QualityGate {
    /// The single grade an observation must carry, if the gate restricts grades.
    pub fn required_grade(&self) -> Option<&'static str> {
        match self {
            QualityGate::ResearchOnly => Some(RESEARCH_GRADE),
            QualityGate::Any => None,
        }
    }

    /// Adjective used in user-facing counters ("research grade observations").
    pub fn describe(&self) -> &'static str {
        match self {
            QualityGate::ResearchOnly => "research grade ",
            QualityGate::Any => "",
        }
    }
}

/// What to do with a row that fails its required-field checks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPolicy {
    /// Drop the row, log it, and count it in the load report.
    #[default]
    Skip,
    /// Fail the whole load on the first malformed row.
    Strict,
}

/// Settings for the load-enrich-index pipeline.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub quality_gate: QualityGate,
    pub row_policy: RowPolicy,
    /// Exclude observations that end up without a common name after the join.
    pub require_common_name: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_research_only_and_lenient() {
        let config = PipelineConfig::default();
        assert_eq!(config.quality_gate, QualityGate::ResearchOnly);
        assert_eq!(config.row_policy, RowPolicy::Skip);
        assert!(!config.require_common_name);
    }

    #[test]
    fn research_gate_requires_research_grade() {
        assert_eq!(QualityGate::ResearchOnly.required_grade(), Some("research"));
        assert_eq!(QualityGate::Any.required_grade(), None);
    }
}
