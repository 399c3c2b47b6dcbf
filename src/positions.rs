//! The positions kernel (spec §4.6): full D/M matrices plus backtrace.

use crate::Needle;
use crate::Score;
use crate::bonus::{MATCH_MAX_LEN, SCORE_MATCH_CONSECUTIVE, SCORE_MIN};
use crate::haystack::{Haystack, precompute_bonus, quick_match};
use crate::matrix::{FullMatrix, run_forward_pass};

/// Scores `haystack` against `needle` and fills `positions` with the
/// haystack *code-point column index* (not byte offset) each needle
/// character aligns to in the optimal match.
///
/// `positions` must have length `>= needle.len()`; only the first
/// `needle.len()` entries are written. Returns [`SCORE_MIN`] on the same
/// size/empty rejections as [`crate::score::score`] — in that case
/// `positions`'s contents are unspecified, matching spec §4.6's edge case:
/// callers should have already validated with `score`/`has_match`.
pub fn positions(needle: &Needle, haystack: &[u8], positions: &mut [usize]) -> Score {
    let mut hay = Haystack::default();
    positions_into(needle, haystack, positions, &mut hay)
}

/// Same as [`positions`], but lets the caller supply the scratch
/// [`Haystack`] buffer.
pub fn positions_into(needle: &Needle, haystack: &[u8], out_positions: &mut [usize], hay: &mut Haystack) -> Score {
    debug_assert!(out_positions.len() >= needle.len());

    if needle.is_empty() {
        return SCORE_MIN;
    }
    if !quick_match(needle, haystack, hay) {
        return SCORE_MIN;
    }

    let n = needle.len();
    let m = hay.len();

    if hay.truncated() || n > m {
        return SCORE_MIN;
    }
    if n == m {
        for (i, slot) in out_positions.iter_mut().take(n).enumerate() {
            *slot = i;
        }
        return crate::bonus::SCORE_MAX;
    }

    precompute_bonus(hay);

    let mut matrix = FullMatrix::new(n, m);
    let final_score = run_forward_pass(needle.chars(), needle.folded(), hay, &mut matrix);

    backtrace_into(&matrix, n, m, out_positions);

    final_score
}

/// Recovers the optimal alignment from a filled [`FullMatrix`].
///
/// `match_required` is the subtle invariant from spec §4.6/§9: once a
/// cell's `M` value was realized by extending a consecutive-match run
/// (`D[i-1][j-1] + SCORE_MATCH_CONSECUTIVE`), the immediately preceding
/// needle character *must* land on the immediately preceding haystack
/// column — the backtrace must not skip columns at that step.
pub(crate) fn backtrace_into(matrix: &FullMatrix, n: usize, m: usize, out_positions: &mut [usize]) {
    let mut match_required = false;
    let mut j = m - 1;

    for i in (0..n).rev() {
        loop {
            let d = matrix.get_d(i, j);
            let mval = matrix.get_m(i, j);

            if d > SCORE_MIN && (match_required || d == mval) {
                match_required = i > 0 && j > 0 && mval == matrix.get_d(i - 1, j - 1) + SCORE_MATCH_CONSECUTIVE;
                out_positions[i] = j;
                j = j.saturating_sub(1);
                break;
            }

            if j == 0 {
                break;
            }
            j -= 1;
        }
    }
}
