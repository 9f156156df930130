//! Feature bundle produced by the morphology analyzer.
//!
//! Modeled as a product type, not a string-keyed bag, so every consumer
//! gets compile-time checked field access instead of stringly-typed lookup.

use serde::{Deserialize, Serialize};

use crate::voice::Voice;

/// Closed set of verb categories. Anything not recognized by the lexicon is
/// simply absent from `MorphologyFeatures::verbs` (there is no `Neutral`
/// variant stored — neutrality is the absence of a match).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbCategory {
    Obstacle,
    Difficulty,
    Loss,
    Desire,
    Rejection,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbInfo {
    pub surface: String,
    pub category: VerbCategory,
}

/// Closed set of adjective-sentiment buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjectiveSentiment {
    Positive,
    Negative,
    Anxiety,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjectiveInfo {
    pub surface: String,
    pub sentiment: AdjectiveSentiment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdverbInfo {
    pub surface: String,
    pub degree_factor: f32,
    pub frequency_factor: f32,
}

/// Sentence-tail certainty/type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailType {
    Assertion,
    Experience,
    Speculation,
    Hearsay,
    Desire,
    NegativeDesire,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailInfo {
    pub pattern: String,
    pub certainty: f32,
    pub tail_type: TailType,
    pub pivot_bias: Voice,
}

/// Extracted linguistic features for one utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MorphologyFeatures {
    pub verbs: Vec<VerbInfo>,
    pub adjectives: Vec<AdjectiveInfo>,
    pub adverbs: Vec<AdverbInfo>,
    pub tail: Option<TailInfo>,
    pub degree_factor: f32,
    pub frequency_factor: f32,
    pub certainty: f32,
    /// In `[-1, 1]`; `0.0` when no adjectives matched.
    pub sentiment_score: f32,
    pub pivot_tendency: Option<Voice>,
}

impl Default for MorphologyFeatures {
    fn default() -> Self {
        Self {
            verbs: Vec::new(),
            adjectives: Vec::new(),
            adverbs: Vec::new(),
            tail: None,
            degree_factor: 1.0,
            frequency_factor: 1.0,
            certainty: 1.0,
            sentiment_score: 0.0,
            pivot_tendency: None,
        }
    }
}

impl MorphologyFeatures {
    pub fn has_verb_category(&self, category: VerbCategory) -> bool {
        self.verbs.iter().any(|v| v.category == category)
    }

    pub fn has_adjective_sentiment(&self, sentiment: AdjectiveSentiment) -> bool {
        self.adjectives.iter().any(|a| a.sentiment == sentiment)
    }
}
