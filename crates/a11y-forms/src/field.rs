//! Field descriptors: the per-render metadata the renderer works from.
//!
//! A [`FieldDescriptor`] is built for a single render call from form and
//! model state, handed to the renderer, and dropped. It never changes after
//! construction other than through its consuming builder methods.

use std::fmt;

use serde::{Deserialize, Serialize};

use a11y_forms_core::error::{FormsError, FormsResult};
use a11y_forms_core::utils::text::humanize;

use crate::field_errors::FieldErrors;

/// The kinds of field the accessible renderer knows how to wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A single input wrapped in its label.
    Text,
    /// A set of mutually exclusive radio options inside a fieldset.
    RadioGroup,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::RadioGroup => "radio_group",
        };
        write!(f, "{name}")
    }
}

/// One choice within a radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioOption {
    /// The submitted value.
    pub value: String,
    /// The text shown in the option's label.
    pub display_text: String,
}

impl RadioOption {
    /// Creates a new option.
    pub fn new(value: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display_text: display_text.into(),
        }
    }
}

impl<V: Into<String>, D: Into<String>> From<(V, D)> for RadioOption {
    fn from((value, display_text): (V, D)) -> Self {
        Self::new(value, display_text)
    }
}

/// Metadata describing one field to render.
///
/// # Examples
///
/// ```
/// use a11y_forms::field::{FieldDescriptor, FieldKind};
///
/// let field = FieldDescriptor::text("zip_code").errors(vec!["can't be blank".into()]);
/// assert_eq!(field.kind, FieldKind::Text);
/// assert_eq!(field.human_label, "Zip code");
/// assert_eq!(field.first_error(), Some("can't be blank"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// The field's html `name`.
    pub name: String,
    /// The label text, humanized from `name` unless overridden.
    pub human_label: String,
    /// What kind of markup the field renders as.
    pub kind: FieldKind,
    /// Validation messages for this field, in order. Only the first is shown.
    pub errors: Vec<String>,
    /// The field's current value, if any.
    pub value: Option<String>,
}

impl FieldDescriptor {
    /// Creates a descriptor of the given kind with a humanized label.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        let human_label = humanize(&name);
        Self {
            name,
            human_label,
            kind,
            errors: Vec::new(),
            value: None,
        }
    }

    /// Creates a text field descriptor.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Creates a radio group descriptor.
    pub fn radio_group(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::RadioGroup)
    }

    /// Overrides the humanized label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.human_label = label.into();
        self
    }

    /// Sets the validation messages.
    #[must_use]
    pub fn errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    /// Takes this field's messages from a form-wide error map.
    ///
    /// The lookup uses `key`, the field's own name in the model (which may
    /// differ from the html `name` when the form is prefixed).
    #[must_use]
    pub fn with_errors_from(mut self, errors: &FieldErrors, key: &str) -> Self {
        self.errors = errors.get(key).to_vec();
        self
    }

    /// Sets the current value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Returns the message to display, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    /// Returns `true` if the field has validation messages.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Checks the parts of the render contract that belong to the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`FormsError::ContractViolation`] when the name is blank or the
    /// kind is not `expected`.
    pub fn check_contract(&self, expected: FieldKind) -> FormsResult<()> {
        if self.name.trim().is_empty() {
            return Err(FormsError::ContractViolation(format!(
                "{expected} field descriptor has a blank name"
            )));
        }
        if self.kind != expected {
            return Err(FormsError::ContractViolation(format!(
                "field '{}' is a {} field but was rendered as {expected}",
                self.name, self.kind
            )));
        }
        Ok(())
    }
}
