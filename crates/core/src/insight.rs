//! A single classified, scored utterance.

use serde::{Deserialize, Serialize};

use crate::layer::TargetLayers;
use crate::temperature::Temperature;
use crate::utterance::Provenance;
use crate::voice::Voice;

/// How an insight's voice was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    RuleBased,
    MorphologyBased,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PIVOTInsight {
    pub id: String,
    pub voice: Voice,
    pub label: &'static str,
    pub base_score: i32,
    pub target_layers: TargetLayers,
    pub title: String,
    pub body: String,
    pub confidence: f32,
    pub temperature: Temperature,
    pub matched_keywords: Vec<String>,
    pub matched_patterns: Vec<String>,
    pub provenance: Provenance,
    pub intensity_score: f64,
    pub degree_factor: f32,
    pub certainty: f32,
    pub reasoning: String,
    pub extraction_method: ExtractionMethod,
}

impl PIVOTInsight {
    /// Truncated body used as `title`, capped at a ~40 char convention.
    pub fn truncate_title(body: &str, max_chars: usize) -> String {
        let mut chars = body.chars();
        let truncated: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{truncated}…")
        } else {
            truncated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_truncation_adds_ellipsis_only_when_needed() {
        assert_eq!(PIVOTInsight::truncate_title("short", 10), "short");
        assert_eq!(
            PIVOTInsight::truncate_title("a very long body of text", 5),
            "a ver…"
        );
    }
}
