//! A fuzzy string matching scoring core.
//!
//! Given a short query (the "needle") and a candidate string (the
//! "haystack"), this crate decides whether the needle's characters appear
//! in order inside the haystack (case-insensitively), assigns a numeric
//! score reflecting match quality, and — on demand — reports the exact
//! haystack positions that form the optimal match. Matches at word
//! boundaries, consecutive runs, and whole-string equality score higher;
//! gaps are penalized.
//!
//! This is the core of the algorithm — needle preparation, haystack
//! transcoding and boundary-bonus precompute, the two-matrix dynamic
//! programming recurrence, and the position backtrace. It is deliberately
//! *not* a candidate-list ranking layer: no I/O, no terminal rendering, no
//! tie-breaking across many candidates, no thread pool. Callers who need
//! those build them on top, the way a fuzzy-finder UI sits on top of its
//! matching core.
//!
//! # Example
//!
//! ```
//! use fzmatch_core::{Needle, fuzzy_indices};
//!
//! let needle = Needle::prepare(b"amor");
//! let (score, positions) = fuzzy_indices(&needle, b"app/models/order.rb").unwrap();
//! assert!(score > 0.0);
//! assert_eq!(positions, vec![0, 4, 11, 12]);
//! ```

#![warn(missing_docs)]

pub mod bonus;
pub mod decode;
pub mod fold;
pub mod haystack;
pub mod matcher;
pub mod matrix;
pub mod needle;
pub mod positions;
pub mod score;

pub use crate::bonus::{
    INITIAL_CAPACITY, MATCH_MAX_LEN, SCORE_GAP_INNER, SCORE_GAP_LEADING, SCORE_GAP_TRAILING, SCORE_MATCH_CAPITAL,
    SCORE_MATCH_CONSECUTIVE, SCORE_MATCH_DOT, SCORE_MATCH_SLASH, SCORE_MATCH_WORD, SCORE_MAX, SCORE_MIN,
};
pub use crate::haystack::{Haystack, quick_match};
pub use crate::matcher::{Matcher, fuzzy_indices, fuzzy_match, has_match};
pub use crate::needle::Needle;
pub use crate::positions::positions;
pub use crate::score::{score, score_with_offset};

/// A match quality score, in `[SCORE_MIN, SCORE_MAX]`.
///
/// Plain `f64` rather than a newtype: spec's recurrence does unconstrained
/// arithmetic (`max`, addition, scaling by column index) on these values at
/// every DP cell, and a newtype would buy type safety at the cost of
/// `.0`-unwrapping every arithmetic site without preventing any real bug —
/// there's no unit confusion to guard against, just one kind of number.
pub type Score = f64;
