//! The shared D/M forward pass.
//!
//! Design note (spec §9): "a shared forward-pass routine parameterized by a
//! retain-all-rows switch is natural." [`run_forward_pass`] is that routine:
//! it implements the recurrence from spec §4.5/§4.6 exactly once, against a
//! small [`RowStore`] trait, instead of the two near-identical copies the
//! teacher's C source (and its direct Rust port in `fzy.rs`) carries — one
//! for the rolling-row score-only path, one for the full-matrix
//! position-recovering path. [`RollingRows`] and [`FullMatrix`] are the two
//! `RowStore` implementations; [`score`](crate::score) uses the former,
//! [`positions`](crate::positions) the latter.

use crate::Score;
use crate::bonus::{SCORE_GAP_INNER, SCORE_GAP_LEADING, SCORE_GAP_TRAILING, SCORE_MATCH_CONSECUTIVE, SCORE_MIN};
use crate::haystack::Haystack;

/// Storage strategy for the D/M forward pass.
///
/// A row is filled left to right via [`RowStore::set_curr`] and committed
/// with [`RowStore::advance`]; [`RowStore::last_d`]/[`RowStore::last_m`]
/// read back the *previous* committed row. This is exactly the
/// `curr_D`/`curr_M`/`last_D`/`last_M` shape the C source threads through
/// `match_first_row`/`match_row`.
pub trait RowStore {
    /// Haystack width this store was built for.
    fn width(&self) -> usize;
    /// `D` value at column `j` of the previously committed row.
    fn last_d(&self, j: usize) -> Score;
    /// `M` value at column `j` of the previously committed row.
    fn last_m(&self, j: usize) -> Score;
    /// Writes the D/M values for column `j` of the row currently being
    /// filled.
    fn set_curr(&mut self, j: usize, d: Score, m: Score);
    /// Commits the row currently being filled so it becomes "previous" for
    /// the next row.
    fn advance(&mut self);
}

/// Two rolling rows of length `MATCH_MAX_LEN`, reused across needle rows.
/// Uses `O(MATCH_MAX_LEN)` memory regardless of needle length — the
/// storage [`score`](crate::score) needs, since it only ever reads the
/// final cell.
pub struct RollingRows {
    curr_d: Vec<Score>,
    curr_m: Vec<Score>,
    last_d: Vec<Score>,
    last_m: Vec<Score>,
    width: usize,
}

impl RollingRows {
    /// Builds fresh rolling rows sized for a haystack of `width` columns.
    pub fn new(width: usize) -> Self {
        RollingRows {
            curr_d: vec![SCORE_MIN; width],
            curr_m: vec![SCORE_MIN; width],
            last_d: vec![SCORE_MIN; width],
            last_m: vec![SCORE_MIN; width],
            width,
        }
    }

    /// Reuses an existing allocation for a haystack of `width` columns,
    /// resizing only if it grew. Used by [`crate::matcher::Matcher`]'s
    /// scratch buffers to avoid a fresh allocation per candidate.
    pub fn reset(&mut self, width: usize) {
        self.width = width;
        for buf in [&mut self.curr_d, &mut self.curr_m, &mut self.last_d, &mut self.last_m] {
            buf.resize(width, SCORE_MIN);
            buf.fill(SCORE_MIN);
        }
    }
}

impl RowStore for RollingRows {
    fn width(&self) -> usize {
        self.width
    }

    fn last_d(&self, j: usize) -> Score {
        self.last_d[j]
    }

    fn last_m(&self, j: usize) -> Score {
        self.last_m[j]
    }

    fn set_curr(&mut self, j: usize, d: Score, m: Score) {
        self.curr_d[j] = d;
        self.curr_m[j] = m;
    }

    fn advance(&mut self) {
        std::mem::swap(&mut self.curr_d, &mut self.last_d);
        std::mem::swap(&mut self.curr_m, &mut self.last_m);
    }
}

/// The full `n x width` D/M matrices, retained in full so
/// [`positions`](crate::positions) can backtrace through them after the
/// forward pass completes. Heap-allocated per spec §5's resource
/// discipline — at `MATCH_MAX_LEN = 512` this is up to ~4 MB for a
/// maximum-length needle/haystack pair and must never land on the stack.
pub struct FullMatrix {
    d: Vec<Score>,
    m: Vec<Score>,
    width: usize,
    rows: usize,
    /// Row currently being filled; `row - 1` is "last" for `RowStore`.
    row: usize,
}

impl FullMatrix {
    /// Builds a full matrix for `rows` needle rows and `width` haystack
    /// columns.
    pub fn new(rows: usize, width: usize) -> Self {
        FullMatrix {
            d: vec![SCORE_MIN; rows * width],
            m: vec![SCORE_MIN; rows * width],
            width,
            rows,
            row: 0,
        }
    }

    /// Reuses an existing allocation for `rows` x `width`, resizing and
    /// clearing only if the shape changed or grew.
    pub fn reset(&mut self, rows: usize, width: usize) {
        self.rows = rows;
        self.width = width;
        let needed = rows * width;
        self.d.resize(needed, SCORE_MIN);
        self.m.resize(needed, SCORE_MIN);
        self.d[..needed].fill(SCORE_MIN);
        self.m[..needed].fill(SCORE_MIN);
        self.row = 0;
    }

    /// Reads `D[i][j]`. Only meaningful for rows already committed via
    /// [`RowStore::advance`].
    pub fn get_d(&self, i: usize, j: usize) -> Score {
        self.d[i * self.width + j]
    }

    /// Reads `M[i][j]`. Only meaningful for rows already committed via
    /// [`RowStore::advance`].
    pub fn get_m(&self, i: usize, j: usize) -> Score {
        self.m[i * self.width + j]
    }
}

impl RowStore for FullMatrix {
    fn width(&self) -> usize {
        self.width
    }

    fn last_d(&self, j: usize) -> Score {
        debug_assert!(self.row > 0);
        self.get_d(self.row - 1, j)
    }

    fn last_m(&self, j: usize) -> Score {
        debug_assert!(self.row > 0);
        self.get_m(self.row - 1, j)
    }

    fn set_curr(&mut self, j: usize, d: Score, m: Score) {
        let idx = self.row * self.width + j;
        self.d[idx] = d;
        self.m[idx] = m;
    }

    fn advance(&mut self) {
        self.row += 1;
    }
}

/// Runs the D/M recurrence for `needle` against `haystack`, writing rows
/// through `store`, and returns the final score `M[n-1][m-1]`.
///
/// Callers must have already handled the early exits from spec §4.5
/// (empty needle, failed quick-match, oversized haystack, equal-length
/// exact match) — this function always runs the full two-row recurrence.
pub fn run_forward_pass<S: RowStore>(
    needle_chars: &[u32],
    needle_folded: &[u32],
    haystack: &Haystack,
    store: &mut S,
) -> Score {
    let n = needle_chars.len();
    let m = haystack.len();
    debug_assert_eq!(store.width(), m);

    let hay_chars = haystack.chars();
    let hay_bonus = haystack.bonus();

    // Row 0: no previous row to consult.
    {
        let gap_score = if n == 1 { SCORE_GAP_TRAILING } else { SCORE_GAP_INNER };
        let mut prev_m = SCORE_MIN;
        for j in 0..m {
            if hay_chars[j] == needle_chars[0] || hay_chars[j] == needle_folded[0] {
                let score = (j as Score) * SCORE_GAP_LEADING + hay_bonus[j];
                prev_m = score.max(prev_m + gap_score);
                store.set_curr(j, score, prev_m);
            } else {
                prev_m += gap_score;
                store.set_curr(j, SCORE_MIN, prev_m);
            }
        }
    }
    store.advance();

    // Rows 1..n-1: consult the previous committed row.
    for i in 1..n {
        let gap_score = if i == n - 1 { SCORE_GAP_TRAILING } else { SCORE_GAP_INNER };
        let needle_char = needle_chars[i];
        let needle_fold = needle_folded[i];

        let mut prev_m = SCORE_MIN + gap_score;
        store.set_curr(0, SCORE_MIN, prev_m);

        for j in 1..m {
            let d = if hay_chars[j] == needle_char || hay_chars[j] == needle_fold {
                (store.last_m(j - 1) + hay_bonus[j]).max(store.last_d(j - 1) + SCORE_MATCH_CONSECUTIVE)
            } else {
                SCORE_MIN
            };
            prev_m = d.max(prev_m + gap_score);
            store.set_curr(j, d, prev_m);
        }
        store.advance();
    }

    store.last_m(m - 1)
}
