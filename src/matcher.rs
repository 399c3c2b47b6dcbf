//! An ergonomic, `Option`-returning façade over the sentinel-based core.
//!
//! Mirrors `skim`'s `FzyMatcher`: the DP kernels speak the C API's native
//! sentinel contract (`SCORE_MIN` on rejection), which is what a ranking
//! layer comparing many candidates wants, but a one-off caller usually just
//! wants `Option<Score>`. [`fuzzy_match`]/[`fuzzy_indices`] provide that;
//! [`Matcher`] adds thread-local scratch reuse for callers scoring many
//! candidates against the same needle, avoiding a fresh ~4 MB matrix
//! allocation per [`Matcher::fuzzy_indices`] call.

use std::cell::RefCell;

use thread_local::ThreadLocal;

use crate::Needle;
use crate::Score;
use crate::bonus::SCORE_MIN;
use crate::haystack::Haystack;
use crate::matrix::{FullMatrix, RollingRows, run_forward_pass};

/// Reports whether `needle`'s characters appear in order inside `haystack`
/// (case-insensitively), applying spec's "empty needle never matches"
/// policy on top of the raw [`crate::haystack::quick_match`] subsequence
/// check — this is the ergonomic `has-match` entry point from spec §6.
pub fn has_match(needle: &Needle, haystack: &[u8]) -> bool {
    if needle.is_empty() {
        return false;
    }
    let mut hay = Haystack::default();
    crate::haystack::quick_match(needle, haystack, &mut hay)
}

/// Scores `haystack` against `needle`, returning `None` on any rejection
/// instead of the raw [`SCORE_MIN`] sentinel.
pub fn fuzzy_match(needle: &Needle, haystack: &[u8]) -> Option<Score> {
    let s = crate::score::score(needle, haystack);
    (s > SCORE_MIN).then_some(s)
}

/// Scores `haystack` against `needle` and recovers the matched positions,
/// returning `None` on any rejection.
pub fn fuzzy_indices(needle: &Needle, haystack: &[u8]) -> Option<(Score, Vec<usize>)> {
    let mut positions = vec![0usize; needle.len()];
    let s = crate::positions::positions(needle, haystack, &mut positions);
    (s > SCORE_MIN).then_some((s, positions))
}

/// Reusable scratch buffers for scoring many candidates against different
/// needles from the same thread, without re-allocating the haystack decode
/// buffer or the DP matrices on every call.
///
/// Each [`Matcher`] keeps its buffers behind a [`ThreadLocal`], so sharing
/// one `Matcher` across threads is safe (each thread gets its own scratch
/// space) but the buffers themselves are never shared — exactly the
/// discipline spec §5 requires.
#[derive(Default)]
pub struct Matcher {
    haystack: ThreadLocal<RefCell<Haystack>>,
    rolling: ThreadLocal<RefCell<Option<RollingRows>>>,
    full: ThreadLocal<RefCell<Option<FullMatrix>>>,
}

impl Matcher {
    /// Builds a matcher with empty (lazily-initialized) scratch buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores `haystack` against `needle`, reusing this matcher's
    /// thread-local haystack buffer.
    pub fn fuzzy_match(&self, needle: &Needle, haystack: &[u8]) -> Option<Score> {
        let mut hay = self.haystack.get_or(|| RefCell::new(Haystack::default())).borrow_mut();

        if needle.is_empty() {
            return None;
        }
        if !crate::haystack::quick_match(needle, haystack, &mut hay) {
            return None;
        }

        let n = needle.len();
        let m = hay.len();
        if hay.truncated() || n > m {
            return None;
        }
        if n == m {
            return Some(crate::bonus::SCORE_MAX);
        }

        crate::haystack::precompute_bonus(&mut hay);

        let mut rolling_slot = self.rolling.get_or(|| RefCell::new(None)).borrow_mut();
        let rolling = rolling_slot.get_or_insert_with(|| RollingRows::new(m));
        rolling.reset(m);

        Some(run_forward_pass(needle.chars(), needle.folded(), &hay, rolling))
    }

    /// Scores `haystack` against `needle` and recovers matched positions,
    /// reusing this matcher's thread-local scratch buffers.
    pub fn fuzzy_indices(&self, needle: &Needle, haystack: &[u8]) -> Option<(Score, Vec<usize>)> {
        let mut hay = self.haystack.get_or(|| RefCell::new(Haystack::default())).borrow_mut();

        if needle.is_empty() {
            return None;
        }
        if !crate::haystack::quick_match(needle, haystack, &mut hay) {
            return None;
        }

        let n = needle.len();
        let m = hay.len();
        if hay.truncated() || n > m {
            return None;
        }
        if n == m {
            return Some((crate::bonus::SCORE_MAX, (0..n).collect()));
        }

        crate::haystack::precompute_bonus(&mut hay);

        let mut full_slot = self.full.get_or(|| RefCell::new(None)).borrow_mut();
        let full = full_slot.get_or_insert_with(|| FullMatrix::new(n, m));
        full.reset(n, m);

        let score = run_forward_pass(needle.chars(), needle.folded(), &hay, full);

        let mut positions = vec![0usize; n];
        crate::positions::backtrace_into(full, n, m, &mut positions);

        Some((score, positions))
    }
}
