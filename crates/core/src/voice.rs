//! The PIVOT voice taxonomy
//!
//! Pain, Insecurity, Vision, Objection, Traction — the five-category voice
//! classification at the heart of the pipeline.

use serde::{Deserialize, Serialize};

/// One of the five PIVOT voices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Voice {
    /// Pain — something is actively broken or slow.
    Pain,
    /// Insecurity — uncertainty, worry about the future.
    Insecurity,
    /// Vision — a desired future state.
    Vision,
    /// Objection — past or present rejection of an approach or tool.
    Objection,
    /// Traction — something is already working well.
    Traction,
}

impl Voice {
    /// Fixed tie-break / iteration order: P, I, V, O, T.
    pub const ALL: [Voice; 5] = [
        Voice::Pain,
        Voice::Insecurity,
        Voice::Vision,
        Voice::Objection,
        Voice::Traction,
    ];

    /// Single-letter code used in mart records and display.
    pub fn code(&self) -> &'static str {
        match self {
            Voice::Pain => "P",
            Voice::Insecurity => "I",
            Voice::Vision => "V",
            Voice::Objection => "O",
            Voice::Traction => "T",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Voice::Pain => "Pain",
            Voice::Insecurity => "Insecurity",
            Voice::Vision => "Vision",
            Voice::Objection => "Objection",
            Voice::Traction => "Traction",
        }
    }

    /// Longer human-readable description of what this voice represents.
    pub fn description(&self) -> &'static str {
        match self {
            Voice::Pain => "Something is actively broken, slow, or causing friction",
            Voice::Insecurity => "Uncertainty or worry about handover, continuity, or risk",
            Voice::Vision => "A desired future state or capability not yet realized",
            Voice::Objection => "A past or present rejection of a tool or approach",
            Voice::Traction => "Something is already working well and worth reinforcing",
        }
    }

    pub fn base_score(&self) -> i32 {
        SCORES[*self as usize]
    }

    pub fn from_code(code: &str) -> Option<Voice> {
        match code {
            "P" => Some(Voice::Pain),
            "I" => Some(Voice::Insecurity),
            "V" => Some(Voice::Vision),
            "O" => Some(Voice::Objection),
            "T" => Some(Voice::Traction),
            _ => None,
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Base score per voice, indexed by `Voice as usize` (matches `Voice::ALL` order).
pub const SCORES: [i32; 5] = [-2, -1, 1, -1, 2];
