//! Utterance splitter configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    pub split_by_sentence: bool,
    pub split_by_conjunction: bool,
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            split_by_sentence: true,
            split_by_conjunction: true,
            min_length: 10,
            max_length: 500,
        }
    }
}

impl SplitterConfig {
    /// Rejects `min_length > max_length` at construction rather than letting
    /// the splitter guess what an inverted bound is supposed to mean.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.min_length > self.max_length {
            return Err(ConfigError::InvalidValue {
                field: "splitter.min_length".to_string(),
                message: format!(
                    "min_length ({}) must not exceed max_length ({})",
                    self.min_length, self.max_length
                ),
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sentence_and_conjunction_split_with_default_bounds() {
        let cfg = SplitterConfig::default();
        assert!(cfg.split_by_sentence);
        assert!(cfg.split_by_conjunction);
        assert_eq!(cfg.min_length, 10);
        assert_eq!(cfg.max_length, 500);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let cfg = SplitterConfig {
            min_length: 100,
            max_length: 50,
            ..SplitterConfig::default()
        };
        assert!(cfg.validated().is_err());
    }
}
