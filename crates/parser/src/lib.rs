//! Utterance splitting and interview document parsing for the PIVOT
//! pipeline.

pub mod interview;
pub mod splitter;

pub use interview::{InterviewParser, ParsedInterview};
pub use splitter::UtteranceSplitter;
