//! Configuration error type.
//!
//! Sub-crates define their own error enums and either convert into the
//! simulation-level error via `From` impls or stay separate.  Core only
//! owns the construction-time configuration failure.

use thiserror::Error;

/// Rejections produced by [`ModelConfig::validate`](crate::ModelConfig::validate).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive (got {width}x{height})")]
    EmptyGrid { width: u32, height: u32 },
}

/// Shorthand result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
