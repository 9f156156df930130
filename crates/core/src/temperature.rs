//! Temperature: a coarse intensity tag derived from intensifier/hedge words.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    Low,
    Medium,
    High,
}

impl Temperature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::Low => "low",
            Temperature::Medium => "medium",
            Temperature::High => "high",
        }
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Temperature::Medium
    }
}
