//! Core error type.
//!
//! Sub-crates define their own error enums (`GridError`, `AgentError`, …)
//! and either wrap `CoreError` as a variant or convert via `From`.

use thiserror::Error;

/// Errors raised by `forage-core` validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `forage-core`.
pub type CoreResult<T> = Result<T, CoreError>;
