//! String similarity used by the fuzzy stage.
//!
//! Both inputs are expected to be normalized already (see
//! [`crate::index::normalize`]).

use std::collections::HashSet;

/// Strings at least this long skip the edit-distance fallback.
const EDIT_DISTANCE_MAX_CHARS: usize = 20;

/// Composite similarity in `[0, 1]`.
///
/// | Relation | Score |
/// |----------|-------|
/// | identical | 1.0 |
/// | one contains the other | 0.6 + (shorter / longer) × 0.3 |
/// | shared words (Jaccard `J > 0`) | 0.5 + J × 0.4 |
/// | both shorter than 20 chars | (1 − distance / longest) × 0.6 |
/// | otherwise | 0.0 |
pub fn composite(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a.contains(b) || b.contains(a) {
        let (shorter, longer) = if a_len < b_len { (a_len, b_len) } else { (b_len, a_len) };
        return 0.6 + (shorter as f64 / longer as f64) * 0.3;
    }

    let jaccard = jaccard(a, b);
    if jaccard > 0.0 {
        return 0.5 + jaccard * 0.4;
    }

    if a_len < EDIT_DISTANCE_MAX_CHARS && b_len < EDIT_DISTANCE_MAX_CHARS {
        return edit_similarity(a, b) * 0.6;
    }

    0.0
}

/// Jaccard index of the whitespace-separated word sets.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let left: HashSet<&str> = a.split_whitespace().collect();
    let right: HashSet<&str> = b.split_whitespace().collect();
    if left.is_empty() && right.is_empty() {
        return 0.0;
    }
    let shared = left.intersection(&right).count();
    let union = left.union(&right).count();
    shared as f64 / union as f64
}

/// `1 − levenshtein / max_len`, measured in characters.
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - strsim::levenshtein(a, b) as f64 / longest as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identical_strings_score_one() {
        assert!(approx(composite("rotate", "rotate"), 1.0));
    }

    #[test]
    fn containment_scales_with_length_ratio() {
        // "spin" (4) inside "spin it" (7)
        assert!(approx(composite("spin it", "spin"), 0.6 + 4.0 / 7.0 * 0.3));
    }

    #[test]
    fn shared_words_use_jaccard() {
        // {fade, out} vs {fade, away}: 1 shared of 3
        assert!(approx(composite("fade out", "fade away"), 0.5 + (1.0 / 3.0) * 0.4));
    }

    #[test]
    fn short_strings_fall_back_to_edit_distance() {
        // one substitution over six characters
        assert!(approx(composite("rotata", "rotate"), (5.0 / 6.0) * 0.6));
    }

    #[test]
    fn long_unrelated_strings_score_zero() {
        assert_eq!(
            composite("completely unrelated sentence", "another long phrase here"),
            0.0
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(approx(edit_similarity("旋转", "旋轉"), 0.5));
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(composite("", "rotate"), 0.0);
    }
}
