//! Morphological analysis seam.
//!
//! The normalizer only needs one capability: resolve a word to its
//! dictionary (lemma) form. The trait keeps the analyzer injectable so
//! tests can substitute a fixed table.

pub mod dict;

pub use dict::DictLemmatizer;

pub trait Lemmatizer {
    /// Resolve a word to its dictionary form. `None` means the analyzer
    /// has no candidate parse; the caller drops the word.
    fn lemmatize(&self, word: &str) -> Option<String>;
}
