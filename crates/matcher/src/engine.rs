use std::sync::Arc;

use catalog::{Catalog, CatalogEntry};
use normalize::{normalize, NormalizeConfig};

use crate::score::similarity;
use crate::types::{MatchConfig, MatchError, MatchResult, FALLBACK_REPLY};

#[cfg(test)]
mod tests;

/// The query-answering engine: normalization, ranking, and threshold gating
/// composed behind a single `answer` call.
///
/// Holds only immutable state — the shared catalog, the two stage configs,
/// and the pre-normalized catalog keys — so one instance can serve any
/// number of concurrent callers without locking.
pub struct Engine {
    catalog: Arc<Catalog>,
    /// Catalog questions passed through the same normalization queries get,
    /// computed once at construction. Index-aligned with `catalog.entries()`.
    keys: Vec<String>,
    normalize_cfg: NormalizeConfig,
    match_cfg: MatchConfig,
}

impl Engine {
    /// Construct an engine over a shared catalog with explicit configs.
    ///
    /// Validates the match configuration and normalizes every catalog key up
    /// front. An empty catalog is accepted here; it surfaces as
    /// [`MatchError::EmptyCatalog`] per call instead.
    pub fn new(
        catalog: Arc<Catalog>,
        normalize_cfg: NormalizeConfig,
        match_cfg: MatchConfig,
    ) -> Result<Self, MatchError> {
        match_cfg.validate()?;
        let keys = catalog
            .entries()
            .iter()
            .map(|entry| normalize(&entry.question, &normalize_cfg))
            .collect();
        Ok(Self {
            catalog,
            keys,
            normalize_cfg,
            match_cfg,
        })
    }

    /// Convenience constructor with default stage configs.
    pub fn with_defaults(catalog: Arc<Catalog>) -> Result<Self, MatchError> {
        Self::new(catalog, NormalizeConfig::default(), MatchConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn match_config(&self) -> &MatchConfig {
        &self.match_cfg
    }

    /// Rank the normalized query against every catalog entry and return the
    /// best-scoring one.
    ///
    /// Selection is by strictly highest score; ties go to the
    /// earliest-loaded entry so results are reproducible across runs.
    pub fn best_match(&self, normalized_query: &str) -> Result<(&CatalogEntry, u8), MatchError> {
        let entries = self.catalog.entries();
        if entries.is_empty() {
            return Err(MatchError::EmptyCatalog);
        }

        let mut best_idx = 0usize;
        let mut best_score = similarity(normalized_query, &self.keys[0]);
        for (idx, key) in self.keys.iter().enumerate().skip(1) {
            let score = similarity(normalized_query, key);
            if score > best_score {
                best_score = score;
                best_idx = idx;
            }
        }
        Ok((&entries[best_idx], best_score))
    }

    /// Apply the acceptance threshold to a ranked candidate.
    ///
    /// Strict inequality: a score equal to the threshold is rejected.
    pub fn decide(&self, entry: &CatalogEntry, score: u8) -> MatchResult {
        if score > self.match_cfg.threshold {
            MatchResult {
                matched: true,
                answer: entry.answer.clone(),
                score,
                matched_question: Some(entry.question.clone()),
            }
        } else {
            MatchResult {
                matched: false,
                answer: FALLBACK_REPLY.to_string(),
                score,
                matched_question: None,
            }
        }
    }

    /// Answer a raw query: normalize, rank, gate, return.
    ///
    /// A single deterministic pass with no retries and no per-call state.
    /// Fails only with [`MatchError::EmptyCatalog`]; normalization never
    /// fails, and an unmatched query is a successful fallback result, not
    /// an error.
    pub fn answer(&self, raw_query: &str) -> Result<MatchResult, MatchError> {
        let query = normalize(raw_query, &self.normalize_cfg);
        let (entry, score) = self.best_match(&query)?;
        let result = self.decide(entry, score);
        if result.matched {
            tracing::debug!(score, matched_question = %entry.question, "query matched catalog entry");
        } else {
            tracing::debug!(score, "no catalog entry above threshold");
        }
        Ok(result)
    }
}
