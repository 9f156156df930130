//! Classifier configuration: domain, confidence floor, and feature toggles.

use serde::{Deserialize, Serialize};

use crate::domain_weights::Domain;
use crate::splitter_config::SplitterConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub domain: Option<Domain>,
    pub min_confidence: f32,
    pub use_morphology: bool,
    pub splitter: SplitterConfig,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            domain: None,
            min_confidence: 0.3,
            use_morphology: true,
            splitter: SplitterConfig::default(),
        }
    }
}
