//! # faqbot matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the normalization layer (`normalize`) and the
//! catalog layer (`catalog`). It turns a free-text query into its normal
//! form, scores it against every catalog question with an edit-distance
//! similarity metric, selects the best candidate, and gates acceptance by a
//! confidence threshold.
//!
//! In a typical deployment you will:
//! - Use `catalog` to load the question/answer dataset once at startup.
//! - Build one [`Engine`] over that catalog and share it across requests.
//! - Call [`Engine::answer`] per query and hand the [`MatchResult`] to the
//!   HTTP layer.
//!
//! ## Core Types
//!
//! - [`MatchConfig`]: the acceptance threshold (default 60, strict cutoff).
//! - [`MatchResult`]: matched flag, reply text, 0..=100 score, and the
//!   matched catalog question when accepted.
//! - [`MatchError`]: configuration errors and the empty-catalog condition.
//! - [`Engine`]: normalization + ranking + gating behind one `answer` call.
//!
//! The scoring primitives ([`similarity`], [`ratio`], [`partial_ratio`],
//! [`token_sort_ratio`], [`token_set_ratio`], [`levenshtein`]) are exported
//! for tuning and tests.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use catalog::{Catalog, CatalogEntry};
//! use matcher::Engine;
//!
//! let catalog = Arc::new(Catalog::from_entries(vec![
//!     CatalogEntry::new("What is your name?", "My full name is Suman Das."),
//! ]));
//! let engine = Engine::with_defaults(catalog).expect("valid config");
//!
//! let result = engine.answer("what is your name").expect("catalog non-empty");
//! assert!(result.matched);
//! assert_eq!(result.answer, "My full name is Suman Das.");
//! ```

pub mod engine;
pub mod score;
pub mod types;

pub use crate::engine::Engine;
pub use crate::score::{
    levenshtein, partial_ratio, ratio, similarity, token_set_ratio, token_sort_ratio,
};
pub use crate::types::{MatchConfig, MatchError, MatchResult, FALLBACK_REPLY};
