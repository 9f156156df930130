//! Morphology analyzer: text -> feature bundle.

use insight_core::{
    AdjectiveInfo, AdverbInfo, Lexicon, MorphologyFeatures, TailInfo, VerbInfo,
};

use crate::dictionaries::{adjectives, adverbs, tails, verbs};

/// Default `Lexicon` backed by the bundled static dictionaries.
///
/// Carries no state of its own — every lookup walks the same `const`
/// tables, so instances are interchangeable and cheap to construct.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticLexicon;

impl Lexicon for StaticLexicon {
    fn match_verbs(&self, text: &str) -> Vec<VerbInfo> {
        verbs::VERBS
            .iter()
            .filter(|(surface, _)| text.contains(surface))
            .map(|(surface, category)| VerbInfo {
                surface: surface.to_string(),
                category: *category,
            })
            .collect()
    }

    fn match_adjectives(&self, text: &str) -> Vec<AdjectiveInfo> {
        adjectives::ADJECTIVES
            .iter()
            .filter(|(surface, _)| text.contains(surface))
            .map(|(surface, sentiment)| AdjectiveInfo {
                surface: surface.to_string(),
                sentiment: *sentiment,
            })
            .collect()
    }

    fn match_adverbs(&self, text: &str) -> Vec<AdverbInfo> {
        let degree = adverbs::DEGREE_ADVERBS
            .iter()
            .filter(|(surface, _)| text.contains(surface))
            .map(|(surface, factor)| AdverbInfo {
                surface: surface.to_string(),
                degree_factor: *factor,
                frequency_factor: 1.0,
            });

        let frequency = adverbs::FREQUENCY_ADVERBS
            .iter()
            .filter(|(surface, _)| text.contains(surface))
            .map(|(surface, factor)| AdverbInfo {
                surface: surface.to_string(),
                degree_factor: 1.0,
                frequency_factor: *factor,
            });

        degree.chain(frequency).collect()
    }

    fn match_tail(&self, text: &str) -> Option<TailInfo> {
        tails::TAIL_PATTERNS.iter().find_map(|pattern| {
            pattern.regex.find(text).map(|m| TailInfo {
                pattern: m.as_str().to_string(),
                certainty: pattern.certainty,
                tail_type: pattern.tail_type,
                pivot_bias: pattern.pivot_bias,
            })
        })
    }
}

/// Stateless morphology analyzer. Holds a `Lexicon` so tests (and future
/// calibration work) can swap in a smaller dictionary.
pub struct MorphologyAnalyzer<L: Lexicon = StaticLexicon> {
    lexicon: L,
}

impl Default for MorphologyAnalyzer<StaticLexicon> {
    fn default() -> Self {
        Self::new(StaticLexicon)
    }
}

impl<L: Lexicon> MorphologyAnalyzer<L> {
    pub fn new(lexicon: L) -> Self {
        Self { lexicon }
    }

    /// Extract the full feature bundle for one utterance's text.
    pub fn analyze(&self, text: &str) -> MorphologyFeatures {
        let verbs = self.lexicon.match_verbs(text);
        let adjectives = self.lexicon.match_adjectives(text);
        let adverbs = self.lexicon.match_adverbs(text);
        let tail = self.lexicon.match_tail(text);

        let degree_factor = adverbs
            .iter()
            .map(|a| a.degree_factor)
            .fold(1.0_f32, f32::max);
        let frequency_factor = adverbs
            .iter()
            .map(|a| a.frequency_factor)
            .fold(1.0_f32, f32::max);
        let certainty = tail.as_ref().map(|t| t.certainty).unwrap_or(1.0);
        let sentiment_score = sentiment_score(&adjectives);
        let pivot_tendency = tail.as_ref().map(|t| t.pivot_bias);

        MorphologyFeatures {
            verbs,
            adjectives,
            adverbs,
            tail,
            degree_factor,
            frequency_factor,
            certainty,
            sentiment_score,
            pivot_tendency,
        }
    }
}

/// `(pos - neg - anx) / (pos + neg + anx)`, clamped to `[-1, 1]`; `0.0` when
/// no adjectives matched.
fn sentiment_score(adjectives: &[AdjectiveInfo]) -> f32 {
    use insight_core::AdjectiveSentiment::*;

    if adjectives.is_empty() {
        return 0.0;
    }

    let (mut pos, mut neg, mut anx) = (0i32, 0i32, 0i32);
    for adj in adjectives {
        match adj.sentiment {
            Positive => pos += 1,
            Negative => neg += 1,
            Anxiety => anx += 1,
        }
    }

    let total = pos + neg + anx;
    if total == 0 {
        return 0.0;
    }

    ((pos - neg - anx) as f32 / total as f32).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_yields_neutral_defaults() {
        let analyzer = MorphologyAnalyzer::default();
        let features = analyzer.analyze("今日は晴れです");
        assert!(features.verbs.is_empty());
        assert!(features.adjectives.is_empty());
        assert_eq!(features.degree_factor, 1.0);
        assert_eq!(features.frequency_factor, 1.0);
        assert_eq!(features.certainty, 1.0);
        assert_eq!(features.sentiment_score, 0.0);
        assert_eq!(features.pivot_tendency, None);
    }

    #[test]
    fn obstacle_verb_is_detected() {
        let analyzer = MorphologyAnalyzer::default();
        let features = analyzer.analyze("在庫管理で困っている");
        assert!(features.has_verb_category(insight_core::VerbCategory::Obstacle));
    }

    #[test]
    fn degree_adverb_sets_multiplier() {
        let analyzer = MorphologyAnalyzer::default();
        let features = analyzer.analyze("非常に困っている");
        assert_eq!(features.degree_factor, 1.5);
    }

    #[test]
    fn sentiment_score_mixes_polarities() {
        let analyzer = MorphologyAnalyzer::default();
        // one positive, one negative -> (1 - 1 - 0) / 2 = 0.0
        let features = analyzer.analyze("便利だが悪い");
        assert_eq!(features.sentiment_score, 0.0);
    }

    #[test]
    fn sentiment_score_all_anxiety_is_minus_one() {
        let analyzer = MorphologyAnalyzer::default();
        let features = analyzer.analyze("不安で心配だ");
        assert_eq!(features.sentiment_score, -1.0);
    }

    #[test]
    fn tail_pattern_sets_certainty_and_bias() {
        let analyzer = MorphologyAnalyzer::default();
        let features = analyzer.analyze("改善してほしい");
        let tail = features.tail.expect("tail pattern should match");
        assert_eq!(tail.certainty, 0.75);
        assert_eq!(features.pivot_tendency, Some(insight_core::Voice::Vision));
    }

    #[test]
    fn absence_of_tail_defaults_to_assertive_certainty() {
        let analyzer = MorphologyAnalyzer::default();
        let features = analyzer.analyze("これは通常の業務連絡です");
        assert!(features.tail.is_none());
        assert_eq!(features.certainty, 1.0);
    }
}
