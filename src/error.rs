//! Error taxonomy for the manager core.
//!
//! Validation and parse failures are recovered locally with defaults;
//! backend failures are logged and surfaced, never retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HangarError {
    /// Lookup of a chain or service template failed.
    #[error("config not found: {0}")]
    ConfigNotFound(String),

    /// Aux-config shape is invalid; callers decide the UI feedback.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The backend rejected a request.
    #[error("backend error: {method} {path} -> {status}: {body}")]
    Backend {
        method: &'static str,
        path: String,
        status: u16,
        body: String,
    },

    /// Stop or start failed during the restart sequence. No automatic
    /// retry; the caller decides whether to try again.
    #[error("restart failed during {stage}")]
    Restart {
        stage: &'static str,
        #[source]
        source: anyhow::Error,
    },
}
