//! Settings loading from configuration files.
//!
//! This module provides functions to load [`Settings`] from TOML files, JSON
//! files, and to apply environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! Loaded settings are validated with [`Settings::validate`] before they are
//! returned.
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `A11Y_FORMS_DEBUG` | `debug` |
//! | `A11Y_FORMS_LOG_LEVEL` | `log_level` |
//! | `A11Y_FORMS_AUTO_ID` | `auto_id` |
//! | `A11Y_FORMS_LABEL_TEXT_CLASS` | `label_text_class` |
//! | `A11Y_FORMS_ERROR_TEXT_CLASS` | `error_text_class` |
//! | `A11Y_FORMS_FIELDSET_CLASS` | `fieldset_class` (empty unsets it) |
//! | `A11Y_FORMS_DESCRIBE_ERRORS` | `describe_errors` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use a11y_forms_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file("config/forms.toml").unwrap();
//! let settings = settings_loader::from_toml_file_with_env("config/forms.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::FormsError;
use crate::settings::Settings;

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "A11Y_FORMS_";

/// Loads settings from a TOML string.
///
/// Any fields not present in the TOML keep their default values.
///
/// # Errors
///
/// Returns an error if the TOML is malformed, cannot be deserialized, or
/// yields settings that fail validation.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, FormsError> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| FormsError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    merge_over_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, FormsError> {
    from_toml_str(&read_config(path.as_ref(), "TOML")?)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the TOML is malformed, or the
/// overridden settings fail validation.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, FormsError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Loads settings from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, cannot be deserialized, or
/// yields settings that fail validation.
pub fn from_json_str(json_str: &str) -> Result<Settings, FormsError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| FormsError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;

    merge_over_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, FormsError> {
    from_json_str(&read_config(path.as_ref(), "JSON")?)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the JSON is malformed, or the
/// overridden settings fail validation.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> Result<Settings, FormsError> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
///
/// # Errors
///
/// Returns an error if the overridden settings fail validation.
pub fn from_env() -> Result<Settings, FormsError> {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Applies environment variable overrides to a settings struct.
///
/// Boolean variables accept "true"/"1"/"yes" as true; anything else is false.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Some(val) = env_var("DEBUG") {
        settings.debug = parse_bool(&val);
    }

    if let Some(val) = env_var("LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Some(val) = env_var("AUTO_ID") {
        settings.auto_id = val;
    }

    if let Some(val) = env_var("LABEL_TEXT_CLASS") {
        settings.label_text_class = val;
    }

    if let Some(val) = env_var("ERROR_TEXT_CLASS") {
        settings.error_text_class = val;
    }

    if let Some(val) = env_var("FIELDSET_CLASS") {
        let val = val.trim().to_string();
        settings.fieldset_class = if val.is_empty() { None } else { Some(val) };
    }

    if let Some(val) = env_var("DESCRIBE_ERRORS") {
        settings.describe_errors = parse_bool(&val);
    }
}

// ============================================================
// Helpers
// ============================================================

fn env_var(name: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{name}")).ok()
}

fn parse_bool(val: &str) -> bool {
    matches!(val.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

fn read_config(path: &Path, format: &str) -> Result<String, FormsError> {
    std::fs::read_to_string(path).map_err(|e| {
        FormsError::ConfigurationError(format!(
            "Failed to read {format} file '{}': {e}",
            path.display()
        ))
    })
}

/// Merges a parsed document over the default settings, deserializes and
/// validates the result.
fn merge_over_defaults(value: serde_json::Value, format: &str) -> Result<Settings, FormsError> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        FormsError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, value);
    let settings: Settings = serde_json::from_value(merged).map_err(|e| {
        FormsError::ConfigurationError(format!(
            "Failed to deserialize settings from {format}: {e}"
        ))
    })?;
    settings.validate()?;
    Ok(settings)
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}
