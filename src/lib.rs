//! Workspace umbrella crate for faqbot.
//!
//! This crate stitches together normalization, the catalog, and the
//! matching engine so callers can answer queries with a single API entry
//! point, and hosts the YAML pipeline configuration.
//!
//! The HTTP surface lives in the `faqbot-server` crate; it consumes the
//! same engine this crate re-exports.

pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use matcher::{
    levenshtein, partial_ratio, ratio, similarity, token_set_ratio, token_sort_ratio, Engine,
    MatchConfig, MatchError, MatchResult, FALLBACK_REPLY,
};
pub use normalize::{normalize, tokenize, NormalizeConfig, NormalizeError, Token};

mod config;

pub use crate::config::{ConfigLoadError, FaqbotConfig};

use std::sync::Arc;

/// Answer a single query against a catalog with explicit configuration.
///
/// Builds a throwaway [`Engine`] for the call. Convenient for scripts and
/// tests; services that answer many queries should build one [`Engine`] and
/// reuse it, since construction normalizes every catalog key.
pub fn answer_once(
    query: &str,
    catalog: &Catalog,
    normalize_cfg: &NormalizeConfig,
    match_cfg: &MatchConfig,
) -> Result<MatchResult, MatchError> {
    let engine = Engine::new(
        Arc::new(catalog.clone()),
        normalize_cfg.clone(),
        match_cfg.clone(),
    )?;
    engine.answer(query)
}

/// Answer a single query with default stage configurations.
pub fn answer(query: &str, catalog: &Catalog) -> Result<MatchResult, MatchError> {
    answer_once(
        query,
        catalog,
        &NormalizeConfig::default(),
        &MatchConfig::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::from_entries(vec![
            CatalogEntry::new("What is your name?", "My full name is Suman Das."),
            CatalogEntry::new(
                "What are your hobbies?",
                "I enjoy playing the guitar, singing, cricket, and online gaming.",
            ),
        ])
    }

    #[test]
    fn answer_exact_question() {
        let result = answer("What is your name?", &sample_catalog()).expect("catalog non-empty");
        assert!(result.matched);
        assert_eq!(result.answer, "My full name is Suman Das.");
    }

    #[test]
    fn answer_unrelated_question_yields_fallback() {
        let result =
            answer("What is the capital of India?", &sample_catalog()).expect("catalog non-empty");
        assert!(!result.matched);
        assert_eq!(result.answer, FALLBACK_REPLY);
    }

    #[test]
    fn answer_once_honors_explicit_threshold() {
        let strict = MatchConfig { threshold: 99 };
        let result = answer_once(
            "Tell me about your hobbies",
            &sample_catalog(),
            &NormalizeConfig::default(),
            &strict,
        )
        .expect("catalog non-empty");
        assert!(!result.matched);
    }

    #[test]
    fn answer_empty_catalog_is_an_error() {
        let result = answer("anything", &Catalog::default());
        assert!(matches!(result, Err(MatchError::EmptyCatalog)));
    }
}
