//! Core error types for the a11y-forms crates.
//!
//! Field validation messages are ordinary data and never show up here. This
//! module only covers failures of the renderer itself: callers breaking the
//! render contract, bad configuration, and I/O while loading configuration.

use thiserror::Error;

/// The primary error type for the a11y-forms crates.
#[derive(Error, Debug)]
pub enum FormsError {
    // ── Render contract ──────────────────────────────────────────────

    /// The caller handed the renderer a descriptor it cannot render
    /// (blank name, wrong field kind for the operation, ...).
    ///
    /// These are programming errors. Rendering aborts and no partial
    /// markup is produced.
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration source is missing or could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The settings parsed but are not usable (e.g. an `auto_id` without `%s`).
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FormsError {
    /// Returns `true` if this error was caused by the caller rather than by
    /// configuration or the environment.
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation(_))
    }
}

/// A convenience type alias for `Result<T, FormsError>`.
pub type FormsResult<T> = Result<T, FormsError>;
