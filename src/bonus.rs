//! Scoring constants and the boundary-bonus table.
//!
//! Mirrors `fzy.rs`'s split between "score constants" and "what bonus does
//! this transition earn" — kept as plain `const`s rather than a config file,
//! since these are compile-time tunables, not runtime configuration (see
//! spec §6).

use crate::Score;

/// Worst possible score: a non-match, an unreachable DP cell, or a
/// rejected (too-long) candidate.
pub const SCORE_MIN: Score = -10.0;
/// Best possible score: the needle and haystack are identical under folding.
pub const SCORE_MAX: Score = 100.0;

/// Gap penalty charged in the first needle row, scaled by column index.
pub const SCORE_GAP_LEADING: Score = -0.005;
/// Gap penalty charged on the last needle row.
pub const SCORE_GAP_TRAILING: Score = -0.005;
/// Gap penalty charged on every other row.
pub const SCORE_GAP_INNER: Score = -0.01;

/// Bonus for extending a run of consecutive matches.
pub const SCORE_MATCH_CONSECUTIVE: Score = 1.0;
/// Bonus for matching right after a path separator (`/`).
pub const SCORE_MATCH_SLASH: Score = 0.9;
/// Bonus for matching right after a word separator (`-`, `_`, ` `).
pub const SCORE_MATCH_WORD: Score = 0.8;
/// Bonus for matching an uppercase letter right after a lowercase one
/// (camelCase transition).
pub const SCORE_MATCH_CAPITAL: Score = 0.7;
/// Bonus for matching right after a `.` (file extensions).
pub const SCORE_MATCH_DOT: Score = 0.6;

/// Maximum haystack length, in code points, that will be scored.
pub const MATCH_MAX_LEN: usize = 512;
/// Initial backing capacity for a freshly-prepared needle.
pub const INITIAL_CAPACITY: usize = 32;

/// Classifies a code point as matched by §4.4's boundary table: a plain
/// character (no bonus possible), a lowercase letter/digit (eligible for
/// slash/word/dot bonuses), or an uppercase letter (eligible for those plus
/// the camelCase capital bonus).
#[derive(Clone, Copy, PartialEq, Eq)]
enum BonusGroup {
    Plain,
    LowerOrDigit,
    Upper,
}

fn bonus_group(cp: u32) -> BonusGroup {
    match char::from_u32(cp) {
        Some(ch) if ch.is_ascii_uppercase() => BonusGroup::Upper,
        Some(ch) if ch.is_ascii_lowercase() || ch.is_ascii_digit() => BonusGroup::LowerOrDigit,
        _ => BonusGroup::Plain,
    }
}

/// `COMPUTE_BONUS(prev, current)`: the bonus earned by matching `current`
/// when it's immediately preceded by `prev` in the haystack.
pub fn compute_bonus(prev_cp: u32, cp: u32) -> Score {
    const SLASH: u32 = '/' as u32;
    const DASH: u32 = '-' as u32;
    const UNDERSCORE: u32 = '_' as u32;
    const SPACE: u32 = ' ' as u32;
    const DOT: u32 = '.' as u32;

    match bonus_group(cp) {
        BonusGroup::Plain => 0.0,
        BonusGroup::LowerOrDigit => match prev_cp {
            SLASH => SCORE_MATCH_SLASH,
            DASH | UNDERSCORE | SPACE => SCORE_MATCH_WORD,
            DOT => SCORE_MATCH_DOT,
            _ => 0.0,
        },
        BonusGroup::Upper => match prev_cp {
            SLASH => SCORE_MATCH_SLASH,
            DASH | UNDERSCORE | SPACE => SCORE_MATCH_WORD,
            DOT => SCORE_MATCH_DOT,
            _ => match char::from_u32(prev_cp) {
                Some(ch) if ch.is_ascii_lowercase() => SCORE_MATCH_CAPITAL,
                _ => 0.0,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_character_has_no_bonus() {
        assert_eq!(compute_bonus('a' as u32, '.' as u32), 0.0);
    }

    #[test]
    fn slash_boundary() {
        assert_eq!(compute_bonus('/' as u32, 'f' as u32), SCORE_MATCH_SLASH);
        assert_eq!(compute_bonus('/' as u32, 'F' as u32), SCORE_MATCH_SLASH);
    }

    #[test]
    fn word_boundary() {
        assert_eq!(compute_bonus('-' as u32, 'f' as u32), SCORE_MATCH_WORD);
        assert_eq!(compute_bonus('_' as u32, 'f' as u32), SCORE_MATCH_WORD);
        assert_eq!(compute_bonus(' ' as u32, 'f' as u32), SCORE_MATCH_WORD);
    }

    #[test]
    fn dot_boundary() {
        assert_eq!(compute_bonus('.' as u32, 'f' as u32), SCORE_MATCH_DOT);
    }

    #[test]
    fn camel_case_boundary() {
        assert_eq!(compute_bonus('o' as u32, 'B' as u32), SCORE_MATCH_CAPITAL);
        // lowercase after lowercase earns nothing
        assert_eq!(compute_bonus('o' as u32, 'b' as u32), 0.0);
    }

    #[test]
    fn start_of_string_sentinel_behaves_like_slash() {
        // precompute_bonus in haystack.rs seeds prev as '/'
        assert_eq!(compute_bonus('/' as u32, 'a' as u32), SCORE_MATCH_SLASH);
    }
}
