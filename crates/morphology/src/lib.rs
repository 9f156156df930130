//! Rule-based Japanese morphology feature extraction and PIVOT inference
//! from those features.
//!
//! Deliberately not a tokenizer: every lookup is a substring match against a
//! closed, bundled dictionary, so this crate has no model weights and no
//! external data dependency.

pub mod analyzer;
pub mod dictionaries;
pub mod inference;

pub use analyzer::{MorphologyAnalyzer, StaticLexicon};
pub use inference::{infer, MorphologyVerdict};
