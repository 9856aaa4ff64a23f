//! The address form rendered by the demo.
//!
//! A street and zip text field plus the billing/mailing radio group, with
//! the submitted values and validation messages a failed save would leave
//! behind.

use a11y_forms::{FieldErrors, FormContext, InputOptions, RadioOption, SafeHtml};
use a11y_forms_core::FormsResult;

/// A submitted address whose zip failed validation.
pub struct AddressSubmission {
    pub street: String,
    pub zip: String,
    pub address_type: String,
}

impl AddressSubmission {
    pub fn sample() -> Self {
        Self {
            street: "1 Main St".to_string(),
            zip: String::new(),
            address_type: "mailing".to_string(),
        }
    }

    /// Validates the submission the way the model would.
    pub fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.street.trim().is_empty() {
            errors.add("street", "can't be blank");
        }
        if self.zip.trim().is_empty() {
            errors.add("zip", "can't be blank");
        }
        if !self.zip.chars().all(|c| c.is_ascii_digit()) || self.zip.len() != 5 {
            errors.add("zip", "must be five digits");
        }
        if !["billing", "mailing"].contains(&self.address_type.as_str()) {
            errors.add("type", "is not included in the list");
        }
        errors
    }
}

fn address_types() -> Vec<RadioOption> {
    vec![
        RadioOption::new("billing", "Billing Address"),
        RadioOption::new("mailing", "Mailing Address"),
    ]
}

/// Renders the whole form body.
pub fn render(form: &FormContext<'_>) -> FormsResult<SafeHtml> {
    let parts = [
        form.text_field("street", &InputOptions::new().class("wide"))?,
        form.text_field(
            "zip",
            &InputOptions::new().placeholder("12345").flag("required"),
        )?,
        form.radio_group("type", &address_types())?,
    ];
    Ok(SafeHtml::concat(parts.iter()))
}
