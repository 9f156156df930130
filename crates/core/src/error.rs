//! Crate-wide error type
//!
//! Empty-input and no-verdict are deliberately *not* represented here as
//! variants that get constructed — they are modeled as `Option::None` at
//! the call site. This enum only covers conditions that are genuine
//! failures (bad configuration, I/O, serialization).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to write mart output: {0}")]
    MartWrite(#[from] std::io::Error),

    #[error("failed to serialize mart record: {0}")]
    MartSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
