//! Lexical similarity between product names.
//!
//! Names are reduced to sets of case-folded, whitespace-delimited tokens and
//! compared with the Jaccard index. No stemming, stop-word removal or
//! punctuation handling is applied: `"$100,000"` and `"$100k"` are different
//! tokens.

use std::collections::HashSet;

/// Split a product name into its set of lowercase tokens.
#[must_use]
pub fn tokens(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Jaccard similarity of the token sets of `a` and `b`.
///
/// Returns a value in `[0, 1]`: `1.0` when the token sets are identical and
/// `0.0` when they are disjoint or either side has no tokens. The function is
/// symmetric.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let left = tokens(a);
    let right = tokens(b);
    jaccard(&left, &right)
}

/// Jaccard index of two pre-tokenized sets.
#[must_use]
pub fn jaccard(left: &HashSet<String>, right: &HashSet<String>) -> f64 {
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let intersection = left.intersection(right).count();
    let union = left.len() + right.len() - intersection;

    intersection as f64 / union as f64
}
