//! Rendering settings.
//!
//! [`Settings`] holds everything the renderer and the logging setup read:
//! how input ids are generated, which CSS classes mark the label and error
//! text, and whether errors are additionally wired up through ARIA
//! attributes. There is no global instance; settings are handed to the
//! renderer when it is built.

use serde::{Deserialize, Serialize};

use crate::error::{FormsError, FormsResult};

/// The placeholder in [`Settings::auto_id`] replaced by a field's html name.
pub const AUTO_ID_PLACEHOLDER: &str = "%s";

/// The complete set of rendering settings.
///
/// # Examples
///
/// ```
/// use a11y_forms_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.auto_id, "%s");
/// assert_eq!(settings.label_text_class, "label-text");
/// assert_eq!(settings.id_for("street"), "street");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    // ── Logging ──────────────────────────────────────────────────────

    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,
    /// The logging filter directive (e.g. "info", "`a11y_forms=debug`").
    pub log_level: String,

    // ── Markup ───────────────────────────────────────────────────────

    /// Template for generated input ids. `%s` is replaced by the field's
    /// html name, with `[`/`]` flattened to underscores.
    pub auto_id: String,
    /// CSS class of the span holding the humanized label text.
    pub label_text_class: String,
    /// CSS class of the span holding the inline error message.
    pub error_text_class: String,
    /// Optional CSS class added to radio-group fieldsets.
    pub fieldset_class: Option<String>,
    /// When set, the error span gets an id and the input points at it via
    /// `aria-describedby` and is flagged `aria-invalid="true"`.
    pub describe_errors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            auto_id: AUTO_ID_PLACEHOLDER.to_string(),
            label_text_class: "label-text".to_string(),
            error_text_class: "error-text".to_string(),
            fieldset_class: None,
            describe_errors: false,
        }
    }
}

impl Settings {
    /// Checks that these settings can be used for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`FormsError::ImproperlyConfigured`] if `auto_id` lacks the
    /// `%s` placeholder or a CSS class name is blank.
    pub fn validate(&self) -> FormsResult<()> {
        if !self.auto_id.contains(AUTO_ID_PLACEHOLDER) {
            return Err(FormsError::ImproperlyConfigured(format!(
                "auto_id '{}' must contain the '{AUTO_ID_PLACEHOLDER}' placeholder",
                self.auto_id
            )));
        }
        if self.label_text_class.trim().is_empty() {
            return Err(FormsError::ImproperlyConfigured(
                "label_text_class must not be blank".to_string(),
            ));
        }
        if self.error_text_class.trim().is_empty() {
            return Err(FormsError::ImproperlyConfigured(
                "error_text_class must not be blank".to_string(),
            ));
        }
        if matches!(&self.fieldset_class, Some(class) if class.trim().is_empty()) {
            return Err(FormsError::ImproperlyConfigured(
                "fieldset_class must not be blank when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the generated input id for a field's html name.
    ///
    /// Bracketed names such as `address[street]` become `address_street`.
    pub fn id_for(&self, html_name: &str) -> String {
        let flat = html_name
            .strip_suffix(']')
            .unwrap_or(html_name)
            .replace("][", "_")
            .replace(['[', ']'], "_");
        self.auto_id.replace(AUTO_ID_PLACEHOLDER, &flat)
    }
}
