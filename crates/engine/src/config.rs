//! Top-level engine configuration.

use insight_config::ClassifierConfig;
use serde::{Deserialize, Serialize};

/// Bundles the classifier configuration (which itself carries the splitter
/// flags) for `Engine::new`. Kept as its own type, rather than handing
/// `ClassifierConfig` straight to `Engine`, so the engine layer has a seam
/// to grow engine-only settings (output layout, concurrency knobs) without
/// disturbing the classifier's own config surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub classifier: ClassifierConfig,
}

impl EngineConfig {
    pub fn new(classifier: ClassifierConfig) -> Self {
        Self { classifier }
    }
}
