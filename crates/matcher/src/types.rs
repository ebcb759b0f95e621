use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reply returned for every query that clears no catalog entry past the
/// acceptance threshold. Fixed and never empty.
pub const FALLBACK_REPLY: &str = "Sorry, I don't understand. Can you rephrase?";

/// Configuration for match acceptance.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs or passed across process boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Acceptance cutoff on the 0..=100 score scale. A candidate is accepted
    /// only when its score is strictly greater than this value.
    #[serde(default = "MatchConfig::default_threshold")]
    pub threshold: u8,
}

impl MatchConfig {
    pub(crate) fn default_threshold() -> u8 {
        60
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.threshold > 100 {
            return Err(MatchError::InvalidConfig(
                "threshold must be between 0 and 100".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
        }
    }
}

/// The outcome of matching a single query against the catalog.
///
/// Constructed and consumed within one request; `answer` is always
/// non-empty — either a catalog answer or [`FALLBACK_REPLY`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    /// Whether the best candidate cleared the acceptance threshold.
    pub matched: bool,
    /// The reply to hand back to the user.
    pub answer: String,
    /// Score of the best candidate, 0..=100.
    pub score: u8,
    /// The catalog question that produced the answer, when matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_question: Option<String>,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid engine configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// The catalog holds zero entries; there is nothing to rank against.
    /// A deployment/data problem, never a bad query.
    #[error("catalog contains no entries to match against")]
    EmptyCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.threshold, 60);
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        let cfg = MatchConfig { threshold: 101 };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("threshold")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn threshold_deserializes_with_default() {
        let cfg: MatchConfig = serde_json::from_str("{}").expect("empty config parses");
        assert_eq!(cfg.threshold, 60);
        let cfg: MatchConfig = serde_json::from_str(r#"{"threshold": 75}"#).expect("parses");
        assert_eq!(cfg.threshold, 75);
    }

    #[test]
    fn fallback_reply_is_fixed_and_non_empty() {
        assert!(!FALLBACK_REPLY.is_empty());
        assert_eq!(FALLBACK_REPLY, "Sorry, I don't understand. Can you rephrase?");
    }
}
