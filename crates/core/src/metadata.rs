//! Interview document metadata and Q&A sections, produced by the parser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Header fields extracted from an interview document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewMetadata {
    pub interview_id: Option<String>,
    pub respondent: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub date: Option<String>,
    pub interviewer: Option<String>,
    pub duration: Option<String>,
    /// Unmatched `key: value` pairs, keyed by the raw (lowercased) key.
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl InterviewMetadata {
    pub fn is_empty(&self) -> bool {
        self.interview_id.is_none()
            && self.respondent.is_none()
            && self.company.is_none()
            && self.role.is_none()
            && self.department.is_none()
            && self.date.is_none()
            && self.interviewer.is_none()
            && self.duration.is_none()
            && self.extra.is_empty()
    }
}

/// One question with its concatenated answer block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QASection {
    pub question_no: i32,
    pub question_text: String,
    pub answer_text: String,
    pub line_no: usize,
}
