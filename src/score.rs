//! The scoring kernel (spec §4.5): score-only, via two rolling rows.

use crate::Needle;
use crate::Score;
use crate::bonus::{MATCH_MAX_LEN, SCORE_MAX, SCORE_MIN};
use crate::haystack::{Haystack, precompute_bonus, quick_match};
use crate::matrix::{RollingRows, run_forward_pass};

/// Scores `haystack` against `needle`, returning a value in
/// `[SCORE_MIN, SCORE_MAX]`.
///
/// Rejections (needle empty, haystack empty, no subsequence match, haystack
/// longer than [`MATCH_MAX_LEN`] code points, or needle longer than
/// haystack) all return [`SCORE_MIN`] — there is no separate error type,
/// per spec §7.
pub fn score(needle: &Needle, haystack: &[u8]) -> Score {
    let mut hay = Haystack::default();
    score_into(needle, haystack, &mut hay)
}

/// Same as [`score`], but lets the caller supply (and reuse) the scratch
/// [`Haystack`] buffer instead of allocating one per call.
pub fn score_into(needle: &Needle, haystack: &[u8], hay: &mut Haystack) -> Score {
    if needle.is_empty() {
        return SCORE_MIN;
    }
    if !quick_match(needle, haystack, hay) {
        return SCORE_MIN;
    }

    let n = needle.len();
    let m = hay.len();

    if hay.truncated() || n > m {
        log::trace!("rejecting haystack of {m} code points against needle of {n}: exceeds MATCH_MAX_LEN or needle longer than haystack");
        return SCORE_MIN;
    }
    if n == m {
        return SCORE_MAX;
    }

    precompute_bonus(hay);

    let mut rows = RollingRows::new(m);
    run_forward_pass(needle.chars(), needle.folded(), hay, &mut rows)
}

/// Scores `haystack[offset..]` against `needle`.
///
/// The caller is responsible for `offset` being a valid byte boundary —
/// this simply slices and delegates to [`score`], matching spec §6's
/// `score-with-offset` contract.
pub fn score_with_offset(needle: &Needle, haystack: &[u8], offset: usize) -> Score {
    score(needle, &haystack[offset..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(needle: &str, haystack: &str) -> Score {
        score(&Needle::prepare(needle.as_bytes()), haystack.as_bytes())
    }

    #[test]
    fn scenario_amor_order() {
        assert!(s("amor", "app/models/order.rb") > 0.0);
    }

    #[test]
    fn scenario_amor_no_match() {
        // no 'r' anywhere in the haystack, so the subsequence can't complete.
        assert_eq!(s("amor", "app/models/xyz.js"), SCORE_MIN);
    }

    #[test]
    fn scenario_amor_order_scores_higher_than_zrder() {
        // "zrder" is still a subsequence match (via the 'o' in "models" and
        // the 'r' in "zrder" itself) but scores lower than the variant where
        // "order" lines up as a contiguous, boundary-anchored run.
        assert!(s("amor", "app/models/order") > s("amor", "app/models/zrder"));
    }

    #[test]
    fn scenario_equal_length_is_max() {
        assert_eq!(s("abc", "ABC"), SCORE_MAX);
    }

    #[test]
    fn scenario_empty_needle() {
        assert_eq!(s("", "anything"), SCORE_MIN);
    }

    #[test]
    fn scenario_empty_haystack() {
        assert_eq!(s("abc", ""), SCORE_MIN);
    }

    #[test]
    fn scenario_oversized_haystack() {
        let long = "a".repeat(MATCH_MAX_LEN + 1);
        assert_eq!(s("aaa", &long), SCORE_MIN);
    }

    #[test]
    fn has_match_iff_score_above_min() {
        assert!(s("amor", "app/models/order.rb") > SCORE_MIN);
        assert_eq!(s("amor", "app/models/xyz.js"), SCORE_MIN);
    }

    #[test]
    fn case_insensitive_scoring() {
        let lower = s("amor", "app/models/order.rb");
        let upper = s("amor", "APP/MODELS/ORDER.RB");
        assert_eq!(lower, upper);
    }

    #[test]
    fn deterministic() {
        assert_eq!(s("amor", "app/models/order.rb"), s("amor", "app/models/order.rb"));
    }

    #[test]
    fn consecutive_beats_scattered() {
        let consecutive = s("foo", "foobar");
        let scattered = s("foo", "fxoxo");
        assert!(consecutive > scattered);
    }

    #[test]
    fn word_boundary_beats_inner_match() {
        let boundary = s("fbb", "foo_bar_baz");
        let inner = s("fbb", "fooobarbaz");
        assert!(boundary > inner);
    }

    #[test]
    fn with_offset_skips_prefix() {
        let needle = Needle::prepare(b"bar");
        let full = score(&needle, b"foo/bar");
        let offset = score_with_offset(&needle, b"xxxx/bar", 5);
        // both match "bar" with a preceding separator; scores should agree
        // once the offset lands exactly on "bar" too
        let at_bar = score_with_offset(&needle, b"foo/bar", 4);
        assert_eq!(at_bar, SCORE_MAX);
        assert!(full > SCORE_MIN);
        assert!(offset > SCORE_MIN);
    }
}
