//! faqbot text normalization layer.
//!
//! This module turns raw user text into a deterministic, comparable normal
//! form. The matching layer relies on both queries and catalog keys passing
//! through here before any similarity score is computed.
//!
//! ## What we do
//!
//! - Unicode normalization (NFKC by default, configurable)
//! - Word segmentation on Unicode word boundaries (punctuation and
//!   whitespace separate tokens; word-internal apostrophes do not)
//! - Lowercasing
//! - Base-form reduction per token (rule-based lemmatization)
//! - Rejoining with single spaces, preserving token order
//!
//! ## Total function guarantee
//!
//! [`normalize`] never fails and never panics. The fallible inner pipeline
//! ([`try_normalize`]) degrades to the case-folded input on error, because a
//! normalization hiccup must never block answering a query.
//!
//! ## Invariants worth knowing
//!
//! - Output depends only on text + config, on any machine
//! - No I/O, no clock calls, no locale dependence
//! - Empty input and punctuation-only input normalize to the empty string
//!
//! Bottom line: same input + same config = same output forever.

mod config;
mod error;
mod lemma;
mod pipeline;
mod token;

pub use crate::config::NormalizeConfig;
pub use crate::error::NormalizeError;
pub use crate::lemma::lemmatize;
pub use crate::pipeline::{normalize, try_normalize};
pub use crate::token::{tokenize, Token};
