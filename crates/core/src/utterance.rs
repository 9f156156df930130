//! One atomic unit of speech after splitting.

use serde::{Deserialize, Serialize};

/// Provenance of an utterance, copied by value into a `PIVOTInsight` rather
/// than held as a back-reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub interview_id: Option<String>,
    pub question_no: Option<i32>,
    pub question_text: Option<String>,
    pub line_no: Option<usize>,
    pub speaker_id: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
}

/// One atomic unit of speech, produced by the splitter and consumed by the
/// classifier. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub id: String,
    pub text: String,
    pub provenance: Provenance,
}

impl Utterance {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            provenance: Provenance::default(),
        }
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    /// Empty or whitespace-only utterance text produces no insight.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }
}
