use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::error::NormalizeError;
use crate::lemma::lemmatize;
use crate::token::tokenize;

/// Main entry point. Reduces raw text to its comparable normal form.
///
/// This is a total function: it never fails and never panics. If the inner
/// pipeline rejects the configuration, the case-folded input is returned
/// unchanged rather than propagating an error — a normalization hiccup must
/// never block answering.
pub fn normalize(text: &str, cfg: &NormalizeConfig) -> String {
    match try_normalize(text, cfg) {
        Ok(normalized) => normalized,
        Err(_) => text.to_lowercase(),
    }
}

/// Fallible pipeline behind [`normalize`].
///
/// Exposed for callers that want configuration errors surfaced instead of
/// degraded output (e.g. config validation at startup).
pub fn try_normalize(text: &str, cfg: &NormalizeConfig) -> Result<String, NormalizeError> {
    // Config validation: version 0 is reserved and invalid.
    if cfg.version == 0 {
        return Err(NormalizeError::InvalidConfig(
            "config version must be >= 1".into(),
        ));
    }

    // Unicode normalization first, as it can affect word boundaries.
    // Cow avoids the allocation when normalization is disabled.
    let folded: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(text.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(text)
    };

    let tokens = tokenize(folded.as_ref());
    let mut out = String::with_capacity(folded.len());
    for token in &tokens {
        let lowered = if cfg.lowercase {
            token.text.to_lowercase()
        } else {
            token.text.clone()
        };
        let base = if cfg.lemmatize {
            lemmatize(&lowered)
        } else {
            lowered
        };
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&base);
    }

    Ok(out)
}
