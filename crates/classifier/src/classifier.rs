//! PIVOT classifier orchestration: signal fusion over morphology inference
//! and pattern classification, assembled into `PIVOTInsight`s and sorted by
//! domain-weighted confidence.

use insight_config::{weights_for, ClassifierConfig};
use insight_core::{
    ClassificationResult, ExtractionMethod, PIVOTInsight, Utterance, Voice,
};
use insight_morphology::{infer, MorphologyAnalyzer};
use uuid::Uuid;

use crate::layers::LayerExtractor;
use crate::pattern::PatternClassifier;
use crate::temperature::TemperatureDetector;

/// Confidence floor above which a morphology verdict is trusted over the
/// pattern-classifier fallback.
const MORPHOLOGY_TRUST_THRESHOLD: f32 = 0.6;

/// Top-level entry point: utterances in, scored and sorted insights out.
pub struct PIVOTClassifier {
    config: ClassifierConfig,
    morphology: MorphologyAnalyzer,
    pattern: PatternClassifier,
    layers: LayerExtractor,
    temperature: TemperatureDetector,
}

impl PIVOTClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            morphology: MorphologyAnalyzer::default(),
            pattern: PatternClassifier::new(),
            layers: LayerExtractor::new(),
            temperature: TemperatureDetector::new(),
        }
    }

    /// Classify one utterance. Returns `None` when the utterance is blank or
    /// the emitted confidence falls below `min_confidence`.
    pub fn classify_one(&self, utterance: &Utterance) -> Option<PIVOTInsight> {
        if utterance.is_blank() {
            return None;
        }

        let text = utterance.text.as_str();
        let features = self.morphology.analyze(text);

        let morphology_verdict = if self.config.use_morphology {
            infer(&features).filter(|v| v.confidence >= MORPHOLOGY_TRUST_THRESHOLD)
        } else {
            None
        };

        let (voice, confidence, matched_keywords, matched_patterns, reasoning, method) =
            match morphology_verdict {
                Some(verdict) => {
                    let surfaces: Vec<String> = features
                        .verbs
                        .iter()
                        .map(|v| v.surface.clone())
                        .chain(features.adjectives.iter().map(|a| a.surface.clone()))
                        .collect();
                    (
                        verdict.voice,
                        verdict.confidence,
                        surfaces,
                        vec![verdict.reason.clone()],
                        verdict.reason,
                        ExtractionMethod::MorphologyBased,
                    )
                }
                None => {
                    let fallback = self.pattern.classify(text)?;
                    (
                        fallback.voice,
                        fallback.confidence,
                        fallback.matched_keywords,
                        fallback.matched_patterns,
                        "keyword/pattern".to_string(),
                        ExtractionMethod::RuleBased,
                    )
                }
            };

        if confidence < self.config.min_confidence {
            return None;
        }

        let target_layers = self.layers.extract(text);
        let temperature = self.temperature.detect(text);
        let intensity_score =
            voice.base_score() as f64 * features.degree_factor as f64 * features.certainty as f64;

        Some(PIVOTInsight {
            id: Uuid::new_v4().to_string(),
            voice,
            label: voice.label(),
            base_score: voice.base_score(),
            target_layers,
            title: PIVOTInsight::truncate_title(text, 40),
            body: text.to_string(),
            confidence,
            temperature,
            matched_keywords,
            matched_patterns,
            provenance: utterance.provenance.clone(),
            intensity_score,
            degree_factor: features.degree_factor,
            certainty: features.certainty,
            reasoning,
            extraction_method: method,
        })
    }

    /// Classify a batch, dropping unscored utterances and sorting by
    /// `confidence * domain_weight` descending, stable on input order.
    pub fn classify(&self, utterances: &[Utterance]) -> ClassificationResult {
        let weights = weights_for(self.config.domain);

        let mut items: Vec<PIVOTInsight> = utterances
            .iter()
            .filter_map(|u| self.classify_one(u))
            .collect();

        items.sort_by(|a, b| {
            let key_a = a.confidence * weights.get(a.voice);
            let key_b = b.confidence * weights.get(b.voice);
            key_b.partial_cmp(&key_a).unwrap_or(std::cmp::Ordering::Equal)
        });

        ClassificationResult::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utterance(text: &str) -> Utterance {
        Utterance::new("u1", text)
    }

    #[test]
    fn blank_utterance_produces_no_insight() {
        let classifier = PIVOTClassifier::new(ClassifierConfig::default());
        assert!(classifier.classify_one(&utterance("   ")).is_none());
    }

    #[test]
    fn pattern_fallback_fires_when_morphology_is_silent() {
        // Neither keyword matches any verb/adjective/adverb/tail entry, so
        // the morphology analyzer stays silent and this falls through to
        // the pattern classifier.
        let classifier = PIVOTClassifier::new(ClassifierConfig::default());
        let insight = classifier
            .classify_one(&utterance("達成した、好調"))
            .unwrap();
        assert_eq!(insight.voice, Voice::Traction);
        assert_eq!(insight.extraction_method, ExtractionMethod::RuleBased);
    }

    #[test]
    fn morphology_verdict_wins_when_confident() {
        // Obstacle verb + negative adjective gives rule 1 both a negative
        // sentiment score and high certainty (no tail pattern), so it
        // outranks the pattern-classifier fallback.
        let classifier = PIVOTClassifier::new(ClassifierConfig::default());
        let insight = classifier
            .classify_one(&utterance("引き継ぎが大変で困っている"))
            .unwrap();
        assert_eq!(insight.extraction_method, ExtractionMethod::MorphologyBased);
    }

    #[test]
    fn low_confidence_insight_is_dropped_by_min_confidence_floor() {
        let mut config = ClassifierConfig::default();
        config.min_confidence = 0.99;
        let classifier = PIVOTClassifier::new(config);
        assert!(classifier.classify_one(&utterance("うまくいっている")).is_none());
    }

    #[test]
    fn intensity_score_matches_the_formula() {
        let classifier = PIVOTClassifier::new(ClassifierConfig::default());
        let insight = classifier.classify_one(&utterance("うまくいっている")).unwrap();
        let expected =
            insight.voice.base_score() as f64 * insight.degree_factor as f64 * insight.certainty as f64;
        assert_eq!(insight.intensity_score, expected);
    }

    #[test]
    fn domain_weights_can_flip_sort_order_on_equal_confidence() {
        // Both utterances score an identical 0.2 pattern-classifier
        // confidence, so the uniform baseline keeps input order (Pain
        // first); the retrospective profile's much larger traction weight
        // should be enough to flip it.
        let mut uniform_config = ClassifierConfig::default();
        uniform_config.min_confidence = 0.0;
        let uniform = PIVOTClassifier::new(uniform_config);

        let utterances = vec![utterance("トラブル"), utterance("好調")];
        let baseline = uniform.classify(&utterances);
        assert_eq!(baseline.items[0].voice, Voice::Pain);

        let mut weighted_config = ClassifierConfig::default();
        weighted_config.min_confidence = 0.0;
        weighted_config.domain = Some(insight_config::Domain::Retrospective);
        let weighted = PIVOTClassifier::new(weighted_config);
        let reordered = weighted.classify(&utterances);
        assert_eq!(reordered.items[0].voice, Voice::Traction);
    }
}
