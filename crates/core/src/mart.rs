//! Denormalized records emitted to the insight mart.
//!
//! A `MartRecord` is a tagged sum (`Insight | Summary`), not a string-keyed
//! bag — serialization to JSON happens only at the boundary, via serde.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::voice::Voice;

/// `source_ref` on a per-insight record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRef {
    pub doc_id: String,
    pub section_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_no: Option<usize>,
}

/// `source_time` on a per-insight record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceTime {
    pub observed_at: String,
}

/// `keywords` on a per-insight record — surface forms as matched, their
/// normalized form, and any recognized named entities among them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordsField {
    pub surface: Vec<String>,
    pub normalized: Vec<String>,
    #[serde(default)]
    pub entities: Vec<String>,
}

/// `morphology` on a per-insight record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MorphologyField {
    pub intensity_score: f64,
    pub degree_factor: f32,
    pub certainty: f32,
    pub reasoning: String,
}

/// `payload` on a per-insight record — the raw material the insight was
/// derived from, kept for auditability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadField {
    pub raw_utterance: String,
    pub matched_keywords: Vec<String>,
    pub matched_patterns: Vec<String>,
}

use crate::layer::TargetLayers;

/// One `pivot_insight` mart record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRecord {
    pub id: String,
    pub mart_type: &'static str,
    pub pivot_voice: Voice,
    pub pivot_label: &'static str,
    pub pivot_score: i32,
    pub target_layers: TargetLayers,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub keywords: KeywordsField,
    pub temperature: crate::temperature::Temperature,
    pub frequency: u32,
    pub source_ref: SourceRef,
    pub source_time: SourceTime,
    pub confidence: f32,
    pub extraction_method: crate::insight::ExtractionMethod,
    pub morphology: MorphologyField,
    pub payload: PayloadField,
}

/// `period` on a summary record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRef {
    #[serde(rename = "type")]
    pub period_type: String,
    pub start: String,
    pub end: String,
}

/// One entry of `pivot_distribution`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PivotDistributionEntry {
    pub count: u32,
    pub score: i32,
}

/// Per-process or per-tool bucket in a summary record: voice counts plus a
/// combined score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessBucket {
    pub voice_counts: HashMap<Voice, u32>,
    pub score: i32,
}

/// A process label's priority classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent,
    QuickWin,
    Watch,
    Unclassified,
}

impl Priority {
    /// Human-readable label for a priority bucket.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::QuickWin => "Quick Win",
            Priority::Watch => "Watch",
            Priority::Unclassified => "Unclassified",
        }
    }
}

/// `priority_matrix` on a summary record — process label to its bucket.
pub type PriorityMatrix = HashMap<String, Priority>;

/// Condensed insight used in a summary record's `top_items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopItemSummary {
    pub id: String,
    pub title: String,
    pub confidence: f32,
    pub temperature: crate::temperature::Temperature,
}

/// One `pivot_summary` mart record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: String,
    pub mart_type: &'static str,
    pub period: PeriodRef,
    pub pivot_distribution: HashMap<Voice, PivotDistributionEntry>,
    pub total_score: i32,
    pub sentiment_index: f64,
    pub by_process: HashMap<String, ProcessBucket>,
    pub by_tool: HashMap<String, ProcessBucket>,
    pub priority_matrix: PriorityMatrix,
    pub top_items: HashMap<Voice, Vec<TopItemSummary>>,
}

/// Sum type written to the mart — one JSON object per line for insights, a
/// single indented object for the summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MartRecord {
    Insight(InsightRecord),
    Summary(SummaryRecord),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_labels_are_human_readable() {
        assert_eq!(Priority::Urgent.label(), "Urgent");
        assert_eq!(Priority::QuickWin.label(), "Quick Win");
        assert_eq!(Priority::Watch.label(), "Watch");
        assert_eq!(Priority::Unclassified.label(), "Unclassified");
    }
}
