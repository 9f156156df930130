//! PIVOT inference from morphology features: a priority-ordered decision
//! table where the first matching rule wins.

use insight_core::{MorphologyFeatures, Voice};
use insight_core::VerbCategory::{Desire, Difficulty, Loss, Obstacle, Rejection, Success};

/// One fired rule: voice, confidence, and a human-readable trace.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphologyVerdict {
    pub voice: Voice,
    pub confidence: f32,
    pub reason: String,
}

/// Evaluate the decision table against a feature bundle. Returns `None` when
/// no rule fires ("no morphology verdict").
pub fn infer(features: &MorphologyFeatures) -> Option<MorphologyVerdict> {
    let has = |cat| features.has_verb_category(cat);

    if (has(Obstacle) || has(Difficulty)) && features.sentiment_score < 0.0 && features.certainty >= 0.9 {
        return Some(verdict(Voice::Pain, 0.90, "obstacle/difficulty verb with negative sentiment and high certainty"));
    }
    if has(Loss) {
        return Some(verdict(Voice::Insecurity, 0.85, "loss verb"));
    }
    if features.has_adjective_sentiment(insight_core::AdjectiveSentiment::Anxiety) {
        return Some(verdict(Voice::Insecurity, 0.80, "anxiety adjective"));
    }
    if features.certainty <= 0.6 && features.pivot_tendency == Some(Voice::Insecurity) {
        return Some(verdict(Voice::Insecurity, 0.75, "low certainty tail biased toward insecurity"));
    }
    if has(Desire) {
        return Some(verdict(Voice::Vision, 0.85, "desire verb"));
    }
    if features.pivot_tendency == Some(Voice::Vision) {
        return Some(verdict(Voice::Vision, 0.80, "tail pattern biased toward vision"));
    }
    if has(Rejection) {
        return Some(verdict(Voice::Objection, 0.85, "rejection verb"));
    }
    if features.pivot_tendency == Some(Voice::Objection) {
        return Some(verdict(Voice::Objection, 0.80, "tail pattern biased toward objection"));
    }
    if has(Success) && features.sentiment_score > 0.0 {
        return Some(verdict(Voice::Traction, 0.90, "success verb with positive sentiment"));
    }
    if has(Success) {
        return Some(verdict(Voice::Traction, 0.70, "success verb"));
    }
    if features.sentiment_score < -0.5 {
        return Some(verdict(Voice::Pain, 0.60, "strongly negative sentiment"));
    }
    if features.sentiment_score > 0.5 {
        return Some(verdict(Voice::Traction, 0.60, "strongly positive sentiment"));
    }

    None
}

fn verdict(voice: Voice, confidence: f32, reason: &str) -> MorphologyVerdict {
    MorphologyVerdict {
        voice,
        confidence,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_core::{AdjectiveInfo, AdjectiveSentiment, VerbInfo};

    fn base_features() -> MorphologyFeatures {
        MorphologyFeatures::default()
    }

    fn with_verb(mut f: MorphologyFeatures, category: insight_core::VerbCategory) -> MorphologyFeatures {
        f.verbs.push(VerbInfo { surface: "x".into(), category });
        f
    }

    #[test]
    fn rule1_obstacle_with_negative_sentiment_and_high_certainty_fires_pain() {
        let mut f = with_verb(base_features(), Obstacle);
        f.sentiment_score = -0.5;
        f.certainty = 0.95;
        let verdict = infer(&f).expect("rule 1 should fire");
        assert_eq!(verdict.voice, Voice::Pain);
        assert_eq!(verdict.confidence, 0.90);
    }

    #[test]
    fn rule1_does_not_fire_below_certainty_threshold() {
        let mut f = with_verb(base_features(), Obstacle);
        f.sentiment_score = -0.6;
        f.certainty = 0.8;
        // Falls through to rule 11 (sentiment < -0.5) instead.
        let verdict = infer(&f).expect("some later rule should fire");
        assert_eq!(verdict.voice, Voice::Pain);
        assert_eq!(verdict.confidence, 0.60);
    }

    #[test]
    fn rule2_loss_verb_fires_insecurity() {
        let f = with_verb(base_features(), Loss);
        let verdict = infer(&f).unwrap();
        assert_eq!(verdict.voice, Voice::Insecurity);
        assert_eq!(verdict.confidence, 0.85);
    }

    #[test]
    fn rule3_anxiety_adjective_fires_insecurity() {
        let mut f = base_features();
        f.adjectives.push(AdjectiveInfo {
            surface: "不安".into(),
            sentiment: AdjectiveSentiment::Anxiety,
        });
        let verdict = infer(&f).unwrap();
        assert_eq!(verdict.voice, Voice::Insecurity);
        assert_eq!(verdict.confidence, 0.80);
    }

    #[test]
    fn rule4_low_certainty_tail_biased_insecurity_fires() {
        let mut f = base_features();
        f.certainty = 0.5;
        f.pivot_tendency = Some(Voice::Insecurity);
        let verdict = infer(&f).unwrap();
        assert_eq!(verdict.voice, Voice::Insecurity);
        assert_eq!(verdict.confidence, 0.75);
    }

    #[test]
    fn rule5_desire_verb_fires_vision() {
        let f = with_verb(base_features(), Desire);
        let verdict = infer(&f).unwrap();
        assert_eq!(verdict.voice, Voice::Vision);
        assert_eq!(verdict.confidence, 0.85);
    }

    #[test]
    fn rule6_tail_bias_vision_fires_when_no_desire_verb() {
        let mut f = base_features();
        f.pivot_tendency = Some(Voice::Vision);
        let verdict = infer(&f).unwrap();
        assert_eq!(verdict.voice, Voice::Vision);
        assert_eq!(verdict.confidence, 0.80);
    }

    #[test]
    fn rule7_rejection_verb_fires_objection() {
        let f = with_verb(base_features(), Rejection);
        let verdict = infer(&f).unwrap();
        assert_eq!(verdict.voice, Voice::Objection);
        assert_eq!(verdict.confidence, 0.85);
    }

    #[test]
    fn rule9_success_with_positive_sentiment_outranks_rule10() {
        let mut f = with_verb(base_features(), Success);
        f.sentiment_score = 0.3;
        let verdict = infer(&f).unwrap();
        assert_eq!(verdict.voice, Voice::Traction);
        assert_eq!(verdict.confidence, 0.90);
    }

    #[test]
    fn rule10_success_without_positive_sentiment_fires_lower_confidence() {
        let f = with_verb(base_features(), Success);
        let verdict = infer(&f).unwrap();
        assert_eq!(verdict.voice, Voice::Traction);
        assert_eq!(verdict.confidence, 0.70);
    }

    #[test]
    fn rule11_and_12_sentiment_only_fallbacks() {
        let mut f = base_features();
        f.sentiment_score = -0.8;
        assert_eq!(infer(&f).unwrap().voice, Voice::Pain);

        let mut f = base_features();
        f.sentiment_score = 0.8;
        assert_eq!(infer(&f).unwrap().voice, Voice::Traction);
    }

    #[test]
    fn otherwise_no_verdict() {
        let f = base_features();
        assert!(infer(&f).is_none());
    }
}
