//! Utterance splitter: answer block -> length-normalized utterances.

use insight_config::SplitterConfig;
use insight_core::{Provenance, Utterance};
use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[。．！？\n]+").unwrap());

/// Conjunctive particle immediately followed by a comma — the fragment is
/// split right after the comma.
static CONJUNCTION_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(が、|しかし、|また、|ただ、|一方、|それに、|けれど、)").unwrap());

/// Splits an answer block into utterances, applying sentence/conjunction
/// splitting and then length normalization.
pub struct UtteranceSplitter {
    config: SplitterConfig,
}

impl UtteranceSplitter {
    pub fn new(config: SplitterConfig) -> Self {
        Self { config }
    }

    /// Split `text` into utterances. `base_provenance` is cloned onto every
    /// produced utterance, with `line_no` set starting at `base_line_no` and
    /// incrementing by one per utterance.
    pub fn split(
        &self,
        text: &str,
        base_provenance: &Provenance,
        base_line_no: usize,
    ) -> Vec<Utterance> {
        let fragments = self.fragments(text);
        let segments = self.normalize_length(fragments);

        segments
            .into_iter()
            .enumerate()
            .map(|(i, segment)| {
                let mut provenance = base_provenance.clone();
                provenance.line_no = Some(base_line_no + i);
                Utterance::new(uuid::Uuid::new_v4().to_string(), segment)
                    .with_provenance(provenance)
            })
            .collect()
    }

    fn fragments(&self, text: &str) -> Vec<String> {
        let mut fragments: Vec<String> = if self.config.split_by_sentence {
            SENTENCE_BOUNDARY
                .split(text)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            vec![text.trim().to_string()].into_iter().filter(|s| !s.is_empty()).collect()
        };

        if self.config.split_by_conjunction {
            fragments = fragments
                .into_iter()
                .flat_map(|fragment| split_on_conjunction(&fragment))
                .collect();
        }

        fragments
    }

    /// Accumulate fragments into a buffer, flushing whenever the combined
    /// length leaves `[min_length, max_length]`.
    fn normalize_length(&self, fragments: Vec<String>) -> Vec<String> {
        let min_length = self.config.min_length;
        let max_length = self.config.max_length;
        let mut segments = Vec::new();
        let mut buffer = String::new();

        for fragment in fragments {
            let combined = format!("{buffer}{fragment}");
            let combined_len = combined.chars().count();

            if combined_len < min_length {
                buffer = combined;
                continue;
            }

            if combined_len > max_length {
                if !buffer.is_empty() {
                    segments.push(std::mem::take(&mut buffer));
                }
                let mut remainder: Vec<char> = fragment.chars().collect();
                while remainder.len() > max_length {
                    let chunk: String = remainder.drain(..max_length).collect();
                    segments.push(chunk);
                }
                buffer = remainder.into_iter().collect();
                continue;
            }

            if !buffer.is_empty() {
                segments.push(std::mem::take(&mut buffer));
            }
            segments.push(fragment);
        }

        if !buffer.is_empty() {
            segments.push(buffer);
        }

        segments
    }
}

fn split_on_conjunction(fragment: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for m in CONJUNCTION_BOUNDARY.find_iter(fragment) {
        let cut = m.end();
        pieces.push(fragment[last..cut].to_string());
        last = cut;
    }
    if last < fragment.len() {
        pieces.push(fragment[last..].to_string());
    }
    if pieces.is_empty() {
        pieces.push(fragment.to_string());
    }

    pieces.into_iter().map(|p| p.trim().to_string()).filter(|p| !p.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter(min_length: usize, max_length: usize) -> UtteranceSplitter {
        UtteranceSplitter::new(SplitterConfig {
            split_by_sentence: true,
            split_by_conjunction: true,
            min_length,
            max_length,
        })
    }

    #[test]
    fn splits_on_sentence_terminators() {
        let result = splitter(1, 500).split("困っている。改善したい。", &Provenance::default(), 1);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "困っている");
        assert_eq!(result[1].text, "改善したい");
    }

    #[test]
    fn splits_on_conjunction_with_comma() {
        let result = splitter(1, 500).split("忙しいが、何とかなっている", &Provenance::default(), 1);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "忙しいが、");
        assert_eq!(result[1].text, "何とかなっている");
    }

    #[test]
    fn short_fragments_are_accumulated_until_min_length() {
        let result = splitter(10, 500).split("短い。文。続く文章です。", &Provenance::default(), 1);
        // All three fragments combined are still under 500 and the first
        // two alone are under min_length 10, so they merge with the third.
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn oversized_fragment_is_chunked_at_max_length() {
        let long_fragment = "あ".repeat(25);
        let result = splitter(1, 10).split(&long_fragment, &Provenance::default(), 1);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text.chars().count(), 10);
        assert_eq!(result[1].text.chars().count(), 10);
        assert_eq!(result[2].text.chars().count(), 5);
    }

    #[test]
    fn line_numbers_increment_from_base() {
        let result = splitter(1, 500).split("困っている。改善したい。", &Provenance::default(), 5);
        assert_eq!(result[0].provenance.line_no, Some(5));
        assert_eq!(result[1].provenance.line_no, Some(6));
    }

    #[test]
    fn provenance_fields_propagate_to_every_utterance() {
        let mut provenance = Provenance::default();
        provenance.speaker_id = Some("s1".to_string());
        provenance.question_no = Some(2);
        let result = splitter(1, 500).split("困っている。改善したい。", &provenance, 1);
        for utterance in &result {
            assert_eq!(utterance.provenance.speaker_id.as_deref(), Some("s1"));
            assert_eq!(utterance.provenance.question_no, Some(2));
        }
    }

    #[test]
    fn empty_text_produces_no_utterances() {
        let result = splitter(10, 500).split("", &Provenance::default(), 1);
        assert!(result.is_empty());
    }
}
