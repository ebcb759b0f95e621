//! Configuration for the normalization pipeline.
//!
//! Any change to normalization behavior (even a bug fix) must be accompanied
//! by a `version` bump: the matching layer caches normalized catalog keys,
//! and a silent behavior change would make cached keys and fresh queries
//! disagree.

use serde::{Deserialize, Serialize};

/// Controls how raw text is reduced to its comparable normal form.
///
/// Cheap to clone and serde-friendly so it can live inside higher-level
/// configuration files.
///
/// ```rust
/// use normalize::NormalizeConfig;
///
/// let cfg = NormalizeConfig::default();
/// assert_eq!(cfg.version, 1);
/// assert!(cfg.normalize_unicode);
/// assert!(cfg.lowercase);
/// assert!(cfg.lemmatize);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Version of the normalization behavior. Must be >= 1; version 0 is
    /// reserved and rejected.
    pub version: u32,

    /// Apply Unicode NFKC normalization before segmentation, so composed
    /// and decomposed forms of the same text normalize identically.
    pub normalize_unicode: bool,

    /// Lowercase every token (Unicode-aware, locale-free).
    pub lowercase: bool,

    /// Reduce each token to its base form ("playing" -> "play",
    /// "guitars" -> "guitar"). Disable to compare surface forms only.
    pub lemmatize: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
            lowercase: true,
            lemmatize: true,
        }
    }
}
