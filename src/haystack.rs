//! Haystack buffer: bounded haystack decode, boundary bonus precompute, and
//! the fused quick-match subsequence check.

use crate::Needle;
use crate::Score;
use crate::bonus::{MATCH_MAX_LEN, compute_bonus};
use crate::decode::decode_one;

/// A bounded, transient decode of one candidate string.
///
/// Holds up to [`MATCH_MAX_LEN`] code points plus a parallel per-position
/// boundary bonus, matching spec §3's `haystack_info` layout. A `Haystack`
/// never outlives a single scoring call — it's meant to be built fresh (or
/// reused from a [`crate::matcher::Matcher`]'s scratch buffer) for each
/// candidate rather than retained.
#[derive(Clone)]
pub struct Haystack {
    chars: [u32; MATCH_MAX_LEN],
    bonus: [Score; MATCH_MAX_LEN],
    len: usize,
    truncated: bool,
}

impl Default for Haystack {
    fn default() -> Self {
        Haystack {
            chars: [0u32; MATCH_MAX_LEN],
            bonus: [0.0; MATCH_MAX_LEN],
            len: 0,
            truncated: false,
        }
    }
}

impl Haystack {
    /// Decoded code points actually populated (`chars()[..len()]`).
    pub fn chars(&self) -> &[u32] {
        &self.chars[..self.len]
    }

    /// Boundary bonus for each populated position, parallel to
    /// [`Haystack::chars`].
    pub fn bonus(&self) -> &[Score] {
        &self.bonus[..self.len]
    }

    /// Number of code points decoded into this haystack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing was decoded into this haystack.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether decoding hit [`MATCH_MAX_LEN`] before reaching the end of the
    /// candidate string — i.e. the real haystack has more code points than
    /// `len()` reports. Scoring/positions must reject these per spec §4.5's
    /// "haystack longer than `MATCH_MAX_LEN`" guard, since `len()` alone
    /// can never exceed the cap and so can't detect this on its own.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
    }
}

/// Decodes `haystack` into `out` (up to [`MATCH_MAX_LEN`] code points,
/// stopping at end-of-string or the cap) and, in the same pass, checks
/// whether `needle`'s characters appear in order — matching either the
/// original or folded form at each position. `out.truncated()` reports
/// whether the cap was hit before the end of `haystack` — callers that must
/// reject oversized haystacks (spec §4.5/§4.6) check that rather than
/// `out.len()`, which can never itself exceed [`MATCH_MAX_LEN`].
///
/// Returns `false` immediately (with `out` left however far decoding got)
/// when `haystack` is empty. This only performs the pure subsequence check;
/// it does not apply spec's "empty needle is never a match" policy — that
/// lives in [`crate::matcher`]'s `has_match`, which is what callers should
/// reach for directly.
pub fn quick_match(needle: &Needle, haystack: &[u8], out: &mut Haystack) -> bool {
    out.clear();

    if haystack.is_empty() {
        return false;
    }

    let n_chars = needle.chars();
    let n_folded = needle.folded();
    let mut needle_pos = 0usize;

    let mut rest = haystack;
    while !rest.is_empty() && out.len < MATCH_MAX_LEN {
        let (cp, len) = decode_one(rest);
        out.chars[out.len] = cp;
        out.len += 1;
        rest = &rest[len..];

        if needle_pos < n_chars.len() && (cp == n_chars[needle_pos] || cp == n_folded[needle_pos]) {
            needle_pos += 1;
        }
    }

    out.truncated = !rest.is_empty();

    needle_pos == n_chars.len()
}

/// Fills `haystack.bonus()` from the boundary table, treating the position
/// before index 0 as if preceded by a path separator (`'/'`), per spec §4.4.
pub fn precompute_bonus(haystack: &mut Haystack) {
    let mut prev = '/' as u32;
    for i in 0..haystack.len {
        let ch = haystack.chars[i];
        haystack.bonus[i] = compute_bonus(prev, ch);
        prev = ch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_haystack_is_false() {
        let needle = Needle::prepare(b"a");
        let mut hay = Haystack::default();
        assert!(!quick_match(&needle, b"", &mut hay));
        assert!(hay.is_empty());
    }

    #[test]
    fn subsequence_found_in_order() {
        let needle = Needle::prepare(b"amor");
        let mut hay = Haystack::default();
        assert!(quick_match(&needle, b"app/models/order.rb", &mut hay));
        assert_eq!(hay.len(), "app/models/order.rb".len());
    }

    #[test]
    fn subsequence_not_found() {
        // no 'r' anywhere in the haystack, so "amor" can't complete.
        let needle = Needle::prepare(b"amor");
        let mut hay = Haystack::default();
        assert!(!quick_match(&needle, b"app/models/xyz.js", &mut hay));
    }

    #[test]
    fn case_insensitive_via_folded_form() {
        let needle = Needle::prepare(b"abc");
        let mut hay = Haystack::default();
        assert!(quick_match(&needle, b"ABC", &mut hay));
    }

    #[test]
    fn decode_stops_at_match_max_len() {
        let needle = Needle::prepare(b"a");
        let long = "a".repeat(MATCH_MAX_LEN + 100);
        let mut hay = Haystack::default();
        // still a match (the 'a' appears early), but decode is capped
        assert!(quick_match(&needle, long.as_bytes(), &mut hay));
        assert_eq!(hay.len(), MATCH_MAX_LEN);
        assert!(hay.truncated());
    }

    #[test]
    fn not_truncated_when_haystack_fits() {
        let needle = Needle::prepare(b"a");
        let mut hay = Haystack::default();
        assert!(quick_match(&needle, b"app/models/order.rb", &mut hay));
        assert!(!hay.truncated());
    }

    #[test]
    fn bonus_start_of_string_is_slash_like() {
        let needle = Needle::prepare(b"f");
        let mut hay = Haystack::default();
        quick_match(&needle, b"foo", &mut hay);
        precompute_bonus(&mut hay);
        assert_eq!(hay.bonus()[0], crate::bonus::SCORE_MATCH_SLASH);
    }

    #[test]
    fn bonus_tracks_previous_char() {
        let needle = Needle::prepare(b"f");
        let mut hay = Haystack::default();
        quick_match(&needle, b"src/lib/foo.rs", &mut hay);
        precompute_bonus(&mut hay);
        // index of 'f' in "foo" after the second '/'
        let idx = "src/lib/foo.rs".find("foo").unwrap();
        assert_eq!(hay.bonus()[idx], crate::bonus::SCORE_MATCH_SLASH);
    }
}
