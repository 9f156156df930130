//! Engine-level error type: wraps the core crate's mart-write/serialize
//! failures and configuration errors surfaced while wiring the pipeline
//! together.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] insight_core::Error),

    #[error(transparent)]
    Config(#[from] insight_config::ConfigError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
