//! Mart emission: `ClassificationResult` -> per-insight JSONL records plus a
//! period-summary JSON record.
//!
//! Opens the destination once, writes everything, and relies on a
//! `BufWriter` whose `Drop` flushes on scope exit regardless of which branch
//! returned. No database session to manage — mart output is flat files.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use insight_classifier::build_priority_matrix;
use insight_core::{
    mart::Priority, ClassificationResult, InsightRecord, KeywordsField, MartRecord, PIVOTInsight,
    PeriodRef, PivotDistributionEntry, ProcessBucket, SourceRef, SourceTime, SummaryRecord, Voice,
};
use insight_core::mart::{MorphologyField, PayloadField, TopItemSummary};
use insight_core::Result as CoreResult;

const TOP_ITEMS_PER_VOICE: usize = 5;

/// Round to two decimal places. Rounding happens only here, at mart
/// emission, never during internal aggregation.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn section_path(item: &PIVOTInsight) -> String {
    match item.provenance.question_no {
        Some(n) => format!("Q{n}"),
        None => String::new(),
    }
}

fn to_insight_record(item: &PIVOTInsight, doc_id: &str, observed_at: &str) -> InsightRecord {
    InsightRecord {
        id: format!("pivot_{}", uuid::Uuid::new_v4()),
        mart_type: "pivot_insight",
        pivot_voice: item.voice,
        pivot_label: item.label,
        pivot_score: item.base_score,
        target_layers: item.target_layers.clone(),
        title: item.title.clone(),
        body: item.body.clone(),
        speaker: item.provenance.speaker_id.clone(),
        context: item.provenance.question_text.clone(),
        keywords: KeywordsField {
            // No tokenizer is available, so the "normalized" form is the
            // matched surface unchanged; `entities` stays empty since there
            // is no NER stage.
            normalized: item.matched_keywords.clone(),
            surface: item.matched_keywords.clone(),
            entities: Vec::new(),
        },
        temperature: item.temperature,
        frequency: 1,
        source_ref: SourceRef {
            doc_id: doc_id.to_string(),
            section_path: section_path(item),
            line_no: item.provenance.line_no,
        },
        source_time: SourceTime {
            observed_at: observed_at.to_string(),
        },
        confidence: item.confidence,
        extraction_method: item.extraction_method,
        morphology: MorphologyField {
            intensity_score: round2(item.intensity_score),
            degree_factor: item.degree_factor,
            certainty: item.certainty,
            reasoning: item.reasoning.clone(),
        },
        payload: PayloadField {
            raw_utterance: item.body.clone(),
            matched_keywords: item.matched_keywords.clone(),
            matched_patterns: item.matched_patterns.clone(),
        },
    }
}

fn bucket_score(voice_counts: &HashMap<Voice, u32>) -> i32 {
    voice_counts
        .iter()
        .map(|(voice, count)| voice.base_score() * (*count as i32))
        .sum()
}

fn to_process_buckets(by: &HashMap<String, HashMap<Voice, u32>>) -> HashMap<String, ProcessBucket> {
    by.iter()
        .map(|(label, voice_counts)| {
            (
                label.clone(),
                ProcessBucket {
                    voice_counts: voice_counts.clone(),
                    score: bucket_score(voice_counts),
                },
            )
        })
        .collect()
}

fn to_summary_record(
    result: &ClassificationResult,
    period_type: &str,
    period_start: &str,
    period_end: &str,
) -> SummaryRecord {
    let mut pivot_distribution = HashMap::new();
    for voice in Voice::ALL {
        let items: Vec<&PIVOTInsight> = result.by_voice(voice).collect();
        let count = items.len() as u32;
        let score: i32 = items.iter().map(|i| i.base_score).sum();
        pivot_distribution.insert(voice, PivotDistributionEntry { count, score });
    }

    let mut top_items = HashMap::new();
    for voice in Voice::ALL {
        let entries = result
            .top_by_voice(voice, TOP_ITEMS_PER_VOICE)
            .into_iter()
            .map(|item| TopItemSummary {
                id: item.id.clone(),
                title: item.title.clone(),
                confidence: item.confidence,
                temperature: item.temperature,
            })
            .collect();
        top_items.insert(voice, entries);
    }

    let priority_matrix: HashMap<String, Priority> = build_priority_matrix(result);

    SummaryRecord {
        id: format!("pivot_summary_{}", uuid::Uuid::new_v4()),
        mart_type: "pivot_summary",
        period: PeriodRef {
            period_type: period_type.to_string(),
            start: period_start.to_string(),
            end: period_end.to_string(),
        },
        pivot_distribution,
        total_score: result.total_score,
        sentiment_index: round2(result.sentiment_index),
        by_process: to_process_buckets(&result.by_process),
        by_tool: to_process_buckets(&result.by_tool),
        priority_matrix,
        top_items,
    }
}

/// Writes one `pivot_insight` JSON object per line, opening the destination
/// once and flushing on every exit path.
pub fn save_marts(
    result: &ClassificationResult,
    path: impl AsRef<Path>,
    doc_id: &str,
    observed_at: &str,
) -> CoreResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    for item in &result.items {
        let record = MartRecord::Insight(to_insight_record(item, doc_id, observed_at));
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes a single indented `pivot_summary` JSON object.
pub fn save_summary_mart(
    result: &ClassificationResult,
    path: impl AsRef<Path>,
    period_start: &str,
    period_end: &str,
    period_type: &str,
) -> CoreResult<()> {
    let summary = to_summary_record(result, period_type, period_start, period_end);
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &MartRecord::Summary(summary))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_classifier::PIVOTClassifier;
    use insight_config::ClassifierConfig;
    use insight_core::Utterance;
    use std::io::Read;

    fn sample_result() -> ClassificationResult {
        let classifier = PIVOTClassifier::new(ClassifierConfig::default());
        let utterances = vec![
            Utterance::new("u1", "工程管理が非常に遅くて困っている"),
            Utterance::new("u2", "ガントチャート機能を導入して工程管理を改善したい"),
        ];
        classifier.classify(&utterances)
    }

    #[test]
    fn save_marts_writes_one_json_object_per_line() {
        let result = sample_result();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        save_marts(&result, &path, "doc1", "2026-07-28").unwrap();

        let mut contents = String::new();
        File::open(&path).unwrap().read_to_string(&mut contents).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), result.items.len());
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["mart_type"], "pivot_insight");
        }
    }

    #[test]
    fn save_summary_mart_writes_indented_json() {
        let result = sample_result();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.summary.json");
        save_summary_mart(&result, &path, "2026-07-01", "2026-07-31", "monthly").unwrap();

        let mut contents = String::new();
        File::open(&path).unwrap().read_to_string(&mut contents).unwrap();
        assert!(contents.contains('\n'), "pretty JSON should be multi-line");
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["mart_type"], "pivot_summary");
        assert_eq!(value["total_score"], result.total_score);
    }

    #[test]
    fn intensity_score_is_rounded_only_at_emission() {
        let result = sample_result();
        let unrounded = result.items[0].intensity_score;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        save_marts(&result, &path, "doc1", "2026-07-28").unwrap();

        let mut contents = String::new();
        File::open(&path).unwrap().read_to_string(&mut contents).unwrap();
        let first: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        let rounded = first["morphology"]["intensity_score"].as_f64().unwrap();
        assert_eq!(rounded, round2(unrounded));
    }
}
