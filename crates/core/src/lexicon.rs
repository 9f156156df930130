//! Seam between the morphology dictionaries and the analyzer that consumes
//! them: dictionary data is kept separate from the code that walks it.

use crate::morphology_types::{AdjectiveInfo, AdverbInfo, TailInfo, VerbInfo};

/// Read-only access to the closed Japanese lexicon sets used by the
/// morphology analyzer.
///
/// Implementations look up `text` by substring containment, not tokenized
/// exact match — the analyzer decides iteration order and priority, the
/// lexicon only knows how to test one surface form against its tables.
pub trait Lexicon: Send + Sync {
    /// Every verb entry whose surface form occurs as a substring of `text`.
    fn match_verbs(&self, text: &str) -> Vec<VerbInfo>;

    /// Every adjective entry whose surface form occurs as a substring of `text`.
    fn match_adjectives(&self, text: &str) -> Vec<AdjectiveInfo>;

    /// Every adverb entry whose surface form occurs as a substring of `text`.
    fn match_adverbs(&self, text: &str) -> Vec<AdverbInfo>;

    /// The first matching sentence-tail pattern in priority order, if any —
    /// list order is priority order, so the first match wins even when a
    /// later pattern would also match.
    fn match_tail(&self, text: &str) -> Option<TailInfo>;
}
