//! Utility functions for the a11y-forms crates.
//!
//! - [`text`]: String helpers (humanize, capfirst, HTML escaping, id sanitizing).

pub mod text;
