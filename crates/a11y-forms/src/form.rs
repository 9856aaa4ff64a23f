//! Per-render form state.
//!
//! A page template does not hand the renderer a model; it builds a
//! [`FormContext`] holding the model's current values and validation
//! messages, then asks it for one field at a time. The context turns each
//! request into a [`FieldDescriptor`] and delegates to the
//! [`AccessibleFieldRenderer`].
//!
//! With a prefix (the model's name), html names become `prefix[field]` and
//! ids `prefix_field`, while labels and error lookups keep using the bare
//! field name.

use std::collections::HashMap;

use a11y_forms_core::error::{FormsError, FormsResult};
use a11y_forms_core::utils::text::humanize;

use crate::field::{FieldDescriptor, FieldKind, RadioOption};
use crate::field_errors::FieldErrors;
use crate::markup::SafeHtml;
use crate::renderer::AccessibleFieldRenderer;
use crate::widgets::InputOptions;

/// Explicit form state for one render pass.
///
/// # Examples
///
/// ```
/// use a11y_forms::field_errors::FieldErrors;
/// use a11y_forms::form::FormContext;
/// use a11y_forms::renderer::AccessibleFieldRenderer;
/// use a11y_forms::widgets::InputOptions;
///
/// let renderer = AccessibleFieldRenderer::default();
/// let errors: FieldErrors = [("zip", "can't be blank")].into_iter().collect();
/// let form = FormContext::new(&renderer).prefix("address").errors(errors);
///
/// let html = form.text_field("zip", &InputOptions::new()).unwrap();
/// assert!(html.as_str().starts_with(r#"<label for="address_zip">"#));
/// assert!(html.as_str().contains("can't be blank"));
/// ```
#[derive(Debug)]
pub struct FormContext<'r> {
    renderer: &'r AccessibleFieldRenderer,
    prefix: Option<String>,
    values: HashMap<String, String>,
    errors: FieldErrors,
}

impl<'r> FormContext<'r> {
    /// Creates an empty context rendering through `renderer`.
    pub fn new(renderer: &'r AccessibleFieldRenderer) -> Self {
        Self {
            renderer,
            prefix: None,
            values: HashMap::new(),
            errors: FieldErrors::new(),
        }
    }

    /// Namespaces html names under `prefix`.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = if prefix.trim().is_empty() {
            None
        } else {
            Some(prefix)
        };
        self
    }

    /// Sets the current value of a field.
    #[must_use]
    pub fn value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Replaces all current values.
    #[must_use]
    pub fn values(mut self, values: HashMap<String, String>) -> Self {
        self.values = values;
        self
    }

    /// Sets the validation messages.
    #[must_use]
    pub fn errors(mut self, errors: FieldErrors) -> Self {
        self.errors = errors;
        self
    }

    /// Returns the context's validation messages.
    pub const fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the html `name` for a field.
    pub fn html_name(&self, field: &str) -> String {
        match &self.prefix {
            Some(p) => format!("{p}[{field}]"),
            None => field.to_string(),
        }
    }

    /// Builds the descriptor the renderer receives for `field`.
    pub fn descriptor(&self, field: &str, kind: FieldKind) -> FieldDescriptor {
        let mut descriptor = FieldDescriptor::new(self.html_name(field), kind)
            .label(humanize(field))
            .with_errors_from(&self.errors, field);
        if let Some(value) = self.values.get(field) {
            descriptor = descriptor.value(value.as_str());
        }
        descriptor
    }

    /// Renders a labelled text field.
    ///
    /// # Errors
    ///
    /// Propagates contract violations from the renderer (e.g. a blank field
    /// name).
    pub fn text_field(&self, field: &str, options: &InputOptions) -> FormsResult<SafeHtml> {
        require_field(field)?;
        let descriptor = self.descriptor(field, FieldKind::Text);
        self.renderer.render_text_field(&descriptor, options)
    }

    /// Renders a radio group in a fieldset.
    ///
    /// # Errors
    ///
    /// Propagates contract violations from the renderer (e.g. a blank field
    /// name).
    pub fn radio_group(&self, field: &str, options: &[RadioOption]) -> FormsResult<SafeHtml> {
        require_field(field)?;
        let descriptor = self.descriptor(field, FieldKind::RadioGroup);
        self.renderer.render_radio_group(&descriptor, options)
    }
}

/// Rejects a blank field name before any prefix is applied.
fn require_field(field: &str) -> FormsResult<()> {
    if field.trim().is_empty() {
        return Err(FormsError::ContractViolation(
            "form field name is blank".to_string(),
        ));
    }
    Ok(())
}
