//! Output of classifying a list of utterances.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::insight::PIVOTInsight;
use crate::voice::Voice;

/// Aggregate counts alongside the scored result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationStats {
    pub total_items: usize,
    pub by_voice_counts: HashMap<Voice, u32>,
}

/// Immutable result of classifying a batch of utterances.
///
/// `items` is the authoritative, already-ordered list (sorted by
/// `confidence * domain_weight` descending). `by_voice` buckets reference
/// that same ordering rather than re-sorting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub items: Vec<PIVOTInsight>,
    /// Indices into `items`, grouped by voice, preserving `items` order.
    by_voice_index: HashMap<Voice, Vec<usize>>,
    /// process label -> voice -> count of surviving items.
    pub by_process: HashMap<String, HashMap<Voice, u32>>,
    /// tool label -> voice -> count of surviving items.
    pub by_tool: HashMap<String, HashMap<Voice, u32>>,
    pub total_score: i32,
    pub sentiment_index: f64,
    pub stats: ClassificationStats,
}

impl ClassificationResult {
    /// Build a result from an already-ordered item list (the caller sorts
    /// before this constructor runs).
    pub fn new(items: Vec<PIVOTInsight>) -> Self {
        let mut by_voice_index: HashMap<Voice, Vec<usize>> = HashMap::new();
        let mut by_process: HashMap<String, HashMap<Voice, u32>> = HashMap::new();
        let mut by_tool: HashMap<String, HashMap<Voice, u32>> = HashMap::new();
        let mut by_voice_counts: HashMap<Voice, u32> = HashMap::new();
        let mut total_score = 0i32;

        for (idx, item) in items.iter().enumerate() {
            by_voice_index.entry(item.voice).or_default().push(idx);
            *by_voice_counts.entry(item.voice).or_insert(0) += 1;
            total_score += item.base_score;

            if let Some(process) = item.target_layers.process.as_ref() {
                *by_process
                    .entry(process.clone())
                    .or_default()
                    .entry(item.voice)
                    .or_insert(0) += 1;
            }
            if let Some(tool) = item.target_layers.tool.as_ref() {
                *by_tool
                    .entry(tool.clone())
                    .or_default()
                    .entry(item.voice)
                    .or_insert(0) += 1;
            }
        }

        let sentiment_index = if items.is_empty() {
            0.0
        } else {
            total_score as f64 / items.len() as f64
        };

        let stats = ClassificationStats {
            total_items: items.len(),
            by_voice_counts,
        };

        Self {
            items,
            by_voice_index,
            by_process,
            by_tool,
            total_score,
            sentiment_index,
            stats,
        }
    }

    /// Insights with the given voice, in the same relative order as `items`.
    pub fn by_voice(&self, voice: Voice) -> impl Iterator<Item = &PIVOTInsight> {
        self.by_voice_index
            .get(&voice)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.items[idx])
    }

    /// First `n` insights for a voice, in ranked order.
    pub fn top_by_voice(&self, voice: Voice, n: usize) -> Vec<&PIVOTInsight> {
        self.by_voice(voice).take(n).collect()
    }

    /// All insights above a confidence threshold, ranked-order preserved —
    /// the Rust counterpart of `get_urgent_items`.
    pub fn above_confidence(&self, threshold: f32) -> Vec<&PIVOTInsight> {
        self.items.iter().filter(|i| i.confidence >= threshold).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::ExtractionMethod;
    use crate::layer::TargetLayers;
    use crate::temperature::Temperature;
    use crate::utterance::Provenance;

    fn make_insight(voice: Voice, confidence: f32, process: Option<&str>) -> PIVOTInsight {
        let mut target_layers = TargetLayers::default();
        if let Some(p) = process {
            target_layers.process = Some(p.to_string());
        }
        PIVOTInsight {
            id: format!("pivot_{:?}", voice),
            voice,
            label: voice.label(),
            base_score: voice.base_score(),
            target_layers,
            title: "t".into(),
            body: "b".into(),
            confidence,
            temperature: Temperature::Medium,
            matched_keywords: vec![],
            matched_patterns: vec![],
            provenance: Provenance::default(),
            intensity_score: voice.base_score() as f64,
            degree_factor: 1.0,
            certainty: 1.0,
            reasoning: "r".into(),
            extraction_method: ExtractionMethod::RuleBased,
        }
    }

    #[test]
    fn bucket_law_holds() {
        let items = vec![
            make_insight(Voice::Pain, 0.9, Some("工程管理")),
            make_insight(Voice::Insecurity, 0.8, None),
            make_insight(Voice::Pain, 0.7, Some("工程管理")),
        ];
        let result = ClassificationResult::new(items);

        let total: usize = Voice::ALL.iter().map(|v| result.by_voice(*v).count()).sum();
        assert_eq!(total, result.items.len());
        assert_eq!(result.by_voice(Voice::Pain).count(), 2);
        assert_eq!(result.by_voice(Voice::Insecurity).count(), 1);
        assert_eq!(result.by_voice(Voice::Vision).count(), 0);
    }

    #[test]
    fn sentiment_law_holds() {
        let items = vec![
            make_insight(Voice::Pain, 0.9, None),   // -2
            make_insight(Voice::Traction, 0.9, None), // +2
            make_insight(Voice::Objection, 0.9, None), // -1
        ];
        let result = ClassificationResult::new(items);
        assert_eq!(result.total_score, -1);
        assert!((result.sentiment_index - (-1.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn empty_result_has_zero_sentiment_index() {
        let result = ClassificationResult::new(vec![]);
        assert_eq!(result.sentiment_index, 0.0);
        assert_eq!(result.total_score, 0);
    }

    #[test]
    fn by_process_counts_per_voice() {
        let items = vec![
            make_insight(Voice::Pain, 0.9, Some("工程管理")),
            make_insight(Voice::Insecurity, 0.8, Some("工程管理")),
        ];
        let result = ClassificationResult::new(items);
        let counts = result.by_process.get("工程管理").unwrap();
        assert_eq!(*counts.get(&Voice::Pain).unwrap(), 1);
        assert_eq!(*counts.get(&Voice::Insecurity).unwrap(), 1);
    }
}
