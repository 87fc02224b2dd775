//! The external-collaborator seam (§6): morphological analysis itself is
//! out of scope for the core, which only ever consumes a sequence of
//! already-tagged [`Morpheme`](crate::morpheme::Morpheme) records.

use crate::morpheme::Morpheme;

/// A source of morphemes for a piece of text, in the UniDic short-unit
/// scheme. The core ships no implementation of this trait: a real
/// instance wraps a morphological analyzer (e.g. a MeCab/UniDic or
/// Lindera binding) kept entirely on the caller's side.
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> Vec<Morpheme>;
}
