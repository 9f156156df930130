//! Layered configuration for the PIVOT interview insight pipeline.
//!
//! Supports loading configuration from:
//! - YAML files (`config/default.yaml`, `config/{env}.yaml`)
//! - Environment variables (`INSIGHT_` prefix)
//! - Programmatic defaults

pub mod classifier_config;
pub mod domain_weights;
pub mod error;
pub mod settings;
pub mod splitter_config;

pub use classifier_config::ClassifierConfig;
pub use domain_weights::{weights_for, Domain, DomainWeights};
pub use error::ConfigError;
pub use settings::{load_settings, ObservabilityConfig, Settings};
pub use splitter_config::SplitterConfig;
