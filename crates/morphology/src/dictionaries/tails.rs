//! Sentence-tail regex patterns, priority-ordered: list order IS priority,
//! and the first match wins.

use insight_core::{TailType, Voice};
use once_cell::sync::Lazy;
use regex::Regex;

pub struct TailPattern {
    pub regex: Regex,
    pub certainty: f32,
    pub tail_type: TailType,
    pub pivot_bias: Voice,
}

pub static TAIL_PATTERNS: Lazy<Vec<TailPattern>> = Lazy::new(|| {
    vec![
        TailPattern {
            regex: Regex::new(r"(はずがない|わけがない)$").unwrap(),
            certainty: 0.95,
            tail_type: TailType::Assertion,
            pivot_bias: Voice::Objection,
        },
        TailPattern {
            regex: Regex::new(r"(に違いない|間違いない)$").unwrap(),
            certainty: 0.95,
            tail_type: TailType::Assertion,
            pivot_bias: Voice::Pain,
        },
        TailPattern {
            regex: Regex::new(r"(たことがある|経験がある)$").unwrap(),
            certainty: 0.85,
            tail_type: TailType::Experience,
            pivot_bias: Voice::Traction,
        },
        TailPattern {
            regex: Regex::new(r"(かもしれない|かも)$").unwrap(),
            certainty: 0.5,
            tail_type: TailType::Speculation,
            pivot_bias: Voice::Insecurity,
        },
        TailPattern {
            regex: Regex::new(r"(そうだ|らしい|とのことだ)$").unwrap(),
            certainty: 0.45,
            tail_type: TailType::Hearsay,
            pivot_bias: Voice::Insecurity,
        },
        TailPattern {
            regex: Regex::new(r"(たい|てほしい|てもらいたい)$").unwrap(),
            certainty: 0.75,
            tail_type: TailType::Desire,
            pivot_bias: Voice::Vision,
        },
        TailPattern {
            regex: Regex::new(r"(たくない|てほしくない|ないでほしい)$").unwrap(),
            certainty: 0.7,
            tail_type: TailType::NegativeDesire,
            pivot_bias: Voice::Objection,
        },
    ]
});
