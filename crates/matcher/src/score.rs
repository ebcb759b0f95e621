//! Edit-distance similarity scoring.
//!
//! Everything here operates on already-normalized text and produces integer
//! scores on the 0..=100 scale, where 100 means identical strings and 0
//! means no shared content. The metric is implemented in-repo rather than
//! pulled from a string-similarity crate so its behavior is explicit,
//! versionable, and fully covered by the tests below.

/// Character-level edit distance with substitutions weighted 2.
///
/// Weighting a substitution like a delete-plus-insert makes the distance
/// directly convertible to a similarity ratio over the combined length of
/// both strings. Two-row dynamic programming, O(|a|·|b|) time, O(|b|) space.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = if ca == cb { prev[j] } else { prev[j] + 2 };
            curr[j + 1] = substitute.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Whole-string similarity: `100 * (|a| + |b| - distance) / (|a| + |b|)`,
/// rounded. Identical strings (including two empty strings) score exactly
/// 100; strings with no characters in common score 0.
pub fn ratio(a: &str, b: &str) -> u8 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 100;
    }
    let dist = levenshtein(a, b);
    (((total - dist) as f64 * 100.0) / total as f64).round() as u8
}

/// Best [`ratio`] of the shorter string against every same-length character
/// window of the longer, so a query buried inside a longer key still scores
/// like a direct comparison.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short: Vec<char> = shorter.chars().collect();
    let long: Vec<char> = longer.chars().collect();
    if short.is_empty() {
        return if long.is_empty() { 100 } else { 0 };
    }
    if short.len() == long.len() {
        return ratio(shorter, longer);
    }

    let mut best = 0u8;
    for window in long.windows(short.len()) {
        let window: String = window.iter().collect();
        let score = ratio(shorter, &window);
        if score > best {
            best = score;
        }
        if best == 100 {
            break;
        }
    }
    best
}

/// [`ratio`] over whitespace tokens in sorted order, so word-order changes
/// do not cost anything.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_joined(a), &sorted_joined(b))
}

/// Fuzzywuzzy-style token-set comparison: score the shared-token core
/// against each side's core-plus-remainder and take the best. A query whose
/// tokens are a subset of the key's tokens scores 100 here.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    use std::collections::BTreeSet;

    let set_a: BTreeSet<&str> = a.split_whitespace().collect();
    let set_b: BTreeSet<&str> = b.split_whitespace().collect();
    // A tokenless side carries no content to share; without this guard the
    // empty intersection would compare equal to the empty combination and
    // score 100 against everything.
    if set_a.is_empty() || set_b.is_empty() {
        return if set_a.is_empty() && set_b.is_empty() {
            100
        } else {
            0
        };
    }
    let common = join_tokens(set_a.intersection(&set_b));
    let only_a = join_tokens(set_a.difference(&set_b));
    let only_b = join_tokens(set_b.difference(&set_a));

    let combined_a = join_nonempty(&common, &only_a);
    let combined_b = join_nonempty(&common, &only_b);

    ratio(&common, &combined_a)
        .max(ratio(&common, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

/// The ranker metric: the best of the whole-string, token-sort, and
/// token-set ratios, plus a 0.9-discounted window score when the inputs
/// diverge in length enough that the whole-string ratio underestimates.
///
/// Not symmetric by design: a query that is a subset of a key's tokens
/// scores high through the token-set and window paths.
pub fn similarity(query: &str, key: &str) -> u8 {
    let base = ratio(query, key);
    if base == 100 {
        return 100;
    }

    let mut best = base
        .max(token_sort_ratio(query, key))
        .max(token_set_ratio(query, key));

    let len_q = query.chars().count().max(1);
    let len_k = key.chars().count().max(1);
    let (shorter, longer) = if len_q <= len_k {
        (len_q, len_k)
    } else {
        (len_k, len_q)
    };
    if longer as f64 / shorter as f64 > 1.5 {
        let windowed = (f64::from(partial_ratio(query, key)) * 0.9).round() as u8;
        best = best.max(windowed);
    }
    best
}

fn sorted_joined(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_tokens<'a>(tokens: impl Iterator<Item = &'a &'a str>) -> String {
    tokens.copied().collect::<Vec<&str>>().join(" ")
}

fn join_nonempty(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        (false, false) => format!("{head} {tail}"),
    }
}
