//! Static, bundled Japanese lexicon data.

pub mod adjectives;
pub mod adverbs;
pub mod tails;
pub mod verbs;
