//! `Engine`: wires the splitter, interview parser, and PIVOT classifier into
//! a small set of entry points.
//!
//! A surrounding deployment would additionally poll a remote-config cache
//! for feature flags and API keys, and validate a license key before
//! allowing the engine to run — those collaborators are external to this
//! crate and are not wired in here; the engine only consumes their eventual
//! output (e.g. a resolved `ClassifierConfig`) if a caller chooses to source
//! it that way.

use std::path::Path;

use chrono::Local;
use insight_classifier::PIVOTClassifier;
use insight_core::{ClassificationResult, Provenance, Utterance};
use insight_parser::{InterviewParser, UtteranceSplitter};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::mart;

pub struct Engine {
    config: EngineConfig,
    classifier: PIVOTClassifier,
    splitter: UtteranceSplitter,
    parser: InterviewParser,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            classifier: PIVOTClassifier::new(config.classifier),
            splitter: UtteranceSplitter::new(config.classifier.splitter),
            parser: InterviewParser::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Classify a full interview document: parse title/metadata/Q&A
    /// sections, split every answer block into utterances, then classify
    /// the combined utterance list.
    #[tracing::instrument(skip(self, document))]
    pub fn process(&self, document: &str) -> ClassificationResult {
        let parsed = self.parser.parse(document);
        tracing::debug!(
            sections = parsed.sections.len(),
            title = ?parsed.title,
            "parsed interview document"
        );

        let mut utterances = Vec::new();
        for section in &parsed.sections {
            let provenance = Provenance {
                interview_id: parsed.metadata.interview_id.clone(),
                question_no: Some(section.question_no),
                question_text: Some(section.question_text.clone()),
                line_no: None,
                speaker_id: parsed.metadata.respondent.clone(),
                role: parsed.metadata.role.clone(),
                department: parsed.metadata.department.clone(),
            };
            utterances.extend(self.splitter.split(&section.answer_text, &provenance, section.line_no));
        }

        tracing::debug!(utterances = utterances.len(), "split document into utterances");
        self.classifier.classify(&utterances)
    }

    /// Classify a single question/answer pair.
    #[tracing::instrument(skip(self, question_text, answer))]
    pub fn process_qa(&self, question_no: i32, question_text: &str, answer: &str) -> ClassificationResult {
        let provenance = Provenance {
            question_no: Some(question_no),
            question_text: Some(question_text.to_string()),
            ..Provenance::default()
        };
        let utterances = self.splitter.split(answer, &provenance, 1);
        self.classifier.classify(&utterances)
    }

    /// Classify a bare list of already-atomic texts, with no splitting
    /// applied — the caller has already decided where the utterance
    /// boundaries are.
    #[tracing::instrument(skip(self, texts))]
    pub fn process_texts(&self, texts: &[String]) -> ClassificationResult {
        let utterances: Vec<Utterance> = texts
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let provenance = Provenance {
                    line_no: Some(idx + 1),
                    ..Provenance::default()
                };
                Utterance::new(uuid::Uuid::new_v4().to_string(), text.clone())
                    .with_provenance(provenance)
            })
            .collect();
        self.classifier.classify(&utterances)
    }

    /// Write one `pivot_insight` record per line. `observed_at` defaults to
    /// today (`YYYY-MM-DD`) when omitted.
    pub fn save_marts(
        &self,
        result: &ClassificationResult,
        path: impl AsRef<Path>,
        doc_id: &str,
        observed_at: Option<&str>,
    ) -> Result<()> {
        let observed_at = observed_at
            .map(str::to_string)
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
        mart::save_marts(result, path, doc_id, &observed_at)?;
        Ok(())
    }

    /// Write a single indented `pivot_summary` record.
    pub fn save_summary_mart(
        &self,
        result: &ClassificationResult,
        path: impl AsRef<Path>,
        period_start: &str,
        period_end: &str,
        period_type: &str,
    ) -> Result<()> {
        mart::save_summary_mart(result, path, period_start, period_end, period_type)?;
        Ok(())
    }
}
