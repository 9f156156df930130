//! Top-level settings, layered from defaults, an environment-specific file,
//! and environment variables.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::classifier_config::ClassifierConfig;
use crate::error::ConfigError;

/// Logging configuration consumed by the CLI's `tracing-subscriber` setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub log_json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub classifier: ClassifierConfig,
    pub observability: ObservabilityConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates invariants that span fields, so a bad config is rejected at
    /// load time rather than surfacing as a puzzling runtime result.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.classifier.splitter.validated()?;

        if !(0.0..=1.0).contains(&self.classifier.min_confidence) {
            return Err(ConfigError::InvalidValue {
                field: "classifier.min_confidence".to_string(),
                message: format!(
                    "must be between 0.0 and 1.0, got {}",
                    self.classifier.min_confidence
                ),
            });
        }

        Ok(())
    }
}

/// Load settings from files and environment.
///
/// Priority (highest to lowest):
/// 1. Environment variables (`INSIGHT_` prefix, `__` nesting separator)
/// 2. `config/{env}.yaml` (if `env` is given)
/// 3. `config/default.yaml`
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{env_name}")).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("INSIGHT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}
