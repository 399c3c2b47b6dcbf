//! Needle preparation: the owned, immutable representation of a query.

use crate::decode::decode_one;
use crate::fold::fold;

/// A prepared query string.
///
/// Holds two parallel code-point sequences — `chars` (the needle as typed)
/// and `folded` (each code point run through [`fold`]) — so every scoring
/// call can compare a haystack character against both the original and the
/// folded form without re-folding on every comparison.
///
/// A `Needle` is cheap to clone and carries no borrowed state, so it can be
/// prepared once and reused across many `score`/`positions` calls, including
/// from multiple threads concurrently (see the crate's concurrency notes).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Needle {
    chars: Vec<u32>,
    folded: Vec<u32>,
}

impl Needle {
    /// Decodes `bytes` into a prepared needle.
    ///
    /// An empty byte string produces a length-0 needle, which every scoring
    /// entry point treats as a non-match (spec §4.5/§7) — there is no
    /// separate "null handle" state in this representation.
    pub fn prepare(bytes: &[u8]) -> Needle {
        let mut chars = Vec::with_capacity(crate::bonus::INITIAL_CAPACITY);
        let mut folded = Vec::with_capacity(crate::bonus::INITIAL_CAPACITY);

        let mut rest = bytes;
        while !rest.is_empty() {
            let (cp, len) = decode_one(rest);
            chars.push(cp);
            folded.push(fold(cp));
            rest = &rest[len..];
        }

        Needle { chars, folded }
    }

    /// Releases the needle.
    ///
    /// `Needle` has no manually-managed resources — `Drop` already does
    /// this — but the method exists so call sites that mirror the
    /// underlying C API's explicit `prepare`/`release` pairing (and any
    /// code generated against that shape) have something to call.
    pub fn release(self) {}

    /// The needle's code points, in input order.
    pub fn chars(&self) -> &[u32] {
        &self.chars
    }

    /// The needle's folded code points, parallel to [`Needle::chars`].
    pub fn folded(&self) -> &[u32] {
        &self.folded
    }

    /// Number of code points in the needle.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the needle is empty (prepared from an empty byte string).
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
