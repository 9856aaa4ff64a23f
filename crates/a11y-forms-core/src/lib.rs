//! # a11y-forms-core
//!
//! Core types, settings, and error types for the a11y-forms crates.
//! This crate has no dependency on the renderer and provides the foundation
//! it builds on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`utils`] - Text helpers (`humanize`, `capfirst`, HTML escaping)
//! - [`settings`] - Rendering settings
//! - [`settings_loader`] - Loading settings from TOML/JSON files and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{FormsError, FormsResult};
pub use settings::Settings;
