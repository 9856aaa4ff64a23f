//! The accessible field renderer.
//!
//! [`AccessibleFieldRenderer`] decorates the output of a [`Primitives`]
//! collaborator so the resulting markup satisfies Section 508:
//!
//! - a text input is wrapped in its `<label>`, which also carries a `for`
//!   attribute pointing at the input id;
//! - a radio group sits in a `<fieldset>` whose `<legend>` names the group,
//!   and each option carries its own label;
//! - the first validation message, if any, is rendered next to the field
//!   inside the same label or fieldset.
//!
//! Rendering is a pure function of the descriptor, the options, the
//! renderer's [`Settings`], and the collaborator's output.

use std::collections::HashSet;

use a11y_forms_core::error::{FormsError, FormsResult};
use a11y_forms_core::settings::Settings;
use a11y_forms_core::utils::text::{escape_attr, escape_text, sanitize_id_fragment};

use crate::field::{FieldDescriptor, FieldKind, RadioOption};
use crate::markup::SafeHtml;
use crate::widgets::{HtmlPrimitives, InputOptions, Primitives};

/// Wraps primitive inputs with labels, legends, and error text.
///
/// # Examples
///
/// ```
/// use a11y_forms::field::FieldDescriptor;
/// use a11y_forms::renderer::AccessibleFieldRenderer;
/// use a11y_forms::widgets::InputOptions;
///
/// let renderer = AccessibleFieldRenderer::default();
/// let html = renderer
///     .render_text_field(&FieldDescriptor::text("street"), &InputOptions::new())
///     .unwrap();
/// assert_eq!(
///     html.as_str(),
///     r#"<label for="street"><span class="label-text">Street</span><input type="text" name="street" id="street" /></label>"#
/// );
/// ```
#[derive(Debug)]
pub struct AccessibleFieldRenderer {
    primitives: Box<dyn Primitives>,
    settings: Settings,
}

impl Default for AccessibleFieldRenderer {
    fn default() -> Self {
        Self {
            primitives: Box::new(HtmlPrimitives),
            settings: Settings::default(),
        }
    }
}

impl AccessibleFieldRenderer {
    /// Creates a renderer around the given collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`FormsError::ImproperlyConfigured`] if `settings` fail
    /// validation.
    pub fn new(primitives: Box<dyn Primitives>, settings: Settings) -> FormsResult<Self> {
        settings.validate()?;
        Ok(Self {
            primitives,
            settings,
        })
    }

    /// Creates a renderer using [`HtmlPrimitives`] and the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`FormsError::ImproperlyConfigured`] if `settings` fail
    /// validation.
    pub fn with_settings(settings: Settings) -> FormsResult<Self> {
        Self::new(Box::new(HtmlPrimitives), settings)
    }

    /// Returns the renderer's settings.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Renders a text field wrapped in its label.
    ///
    /// Produces `<label for="{id}"><span class="label-text">{label}</span>{input}</label>`,
    /// with `<span class="error-text">{errors[0]}</span>` before the closing
    /// `</label>` when the field has errors. An `id` in `options` wins over
    /// the generated one.
    ///
    /// # Errors
    ///
    /// Returns [`FormsError::ContractViolation`] if the descriptor has a blank
    /// name or is not a text field.
    pub fn render_text_field(
        &self,
        descriptor: &FieldDescriptor,
        options: &InputOptions,
    ) -> FormsResult<SafeHtml> {
        Self::check(descriptor, FieldKind::Text)?;

        let mut options = options.clone();
        if let Some(value) = &descriptor.value {
            options = options.attr_or_keep("value", value.as_str());
        }
        options = options.attr_or_keep("id", self.settings.id_for(&descriptor.name));
        let input_id = options.get("id").unwrap_or_default().to_string();

        let error_id = format!("{input_id}_error");
        if self.settings.describe_errors && descriptor.has_errors() {
            options = options
                .attr("aria-describedby", error_id.as_str())
                .attr("aria-invalid", "true");
        }

        let input = self.primitives.render_input(&descriptor.name, &options);

        let mut html = format!(
            r#"<label for="{}"><span class="{}">{}</span>{input}"#,
            escape_attr(&input_id),
            escape_attr(&self.settings.label_text_class),
            escape_text(&descriptor.human_label),
        );
        html.push_str(&self.error_span(descriptor, &error_id));
        html.push_str("</label>");

        tracing::debug!(
            field = %descriptor.name,
            id = %input_id,
            errors = descriptor.errors.len(),
            "rendered text field"
        );
        Ok(SafeHtml::from_trusted(html))
    }

    /// Renders a radio group inside a fieldset with a legend.
    ///
    /// Options keep their order. Each option id is the group id followed by
    /// the sanitized option value, or by the option's position when the value
    /// sanitizes to nothing; ids that would repeat within the group get a
    /// numeric suffix. The option matching the descriptor's current value is
    /// checked. The error span, when present, follows the last option inside
    /// the fieldset, which then points at it through `aria-describedby` if
    /// `describe_errors` is set.
    ///
    /// # Errors
    ///
    /// Returns [`FormsError::ContractViolation`] if the descriptor has a blank
    /// name or is not a radio group.
    pub fn render_radio_group(
        &self,
        descriptor: &FieldDescriptor,
        options: &[RadioOption],
    ) -> FormsResult<SafeHtml> {
        Self::check(descriptor, FieldKind::RadioGroup)?;

        let group_id = self.settings.id_for(&descriptor.name);
        let error_id = format!("{group_id}_error");
        let current = descriptor.value.as_deref();

        let mut html = String::from("<fieldset");
        if self.settings.describe_errors && descriptor.has_errors() {
            html.push_str(&format!(r#" aria-describedby="{}""#, escape_attr(&error_id)));
        }
        if let Some(class) = &self.settings.fieldset_class {
            html.push_str(&format!(r#" class="{}""#, escape_attr(class)));
        }
        html.push_str(&format!(
            "><legend>{}</legend>",
            escape_text(&descriptor.human_label)
        ));

        let mut used_ids = HashSet::new();
        for (index, option) in options.iter().enumerate() {
            let option_id = unique_option_id(&group_id, index, &option.value, &mut used_ids);
            let checked = current == Some(option.value.as_str());
            let pair = self
                .primitives
                .render_radio_option(&descriptor.name, option, &option_id, checked);
            html.push_str(pair.as_str());
        }

        html.push_str(&self.error_span(descriptor, &error_id));
        html.push_str("</fieldset>");

        tracing::debug!(
            field = %descriptor.name,
            options = options.len(),
            errors = descriptor.errors.len(),
            "rendered radio group"
        );
        Ok(SafeHtml::from_trusted(html))
    }

    /// Renders a field according to its kind.
    ///
    /// `input_options` is used for text fields and `radio_options` for radio
    /// groups; the other argument is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FormsError::ContractViolation`] if the descriptor has a blank
    /// name.
    pub fn render_field(
        &self,
        descriptor: &FieldDescriptor,
        input_options: &InputOptions,
        radio_options: &[RadioOption],
    ) -> FormsResult<SafeHtml> {
        match descriptor.kind {
            FieldKind::Text => self.render_text_field(descriptor, input_options),
            FieldKind::RadioGroup => self.render_radio_group(descriptor, radio_options),
        }
    }

    fn check(descriptor: &FieldDescriptor, expected: FieldKind) -> FormsResult<()> {
        descriptor.check_contract(expected).map_err(|err: FormsError| {
            tracing::warn!(field = %descriptor.name, error = %err, "refusing to render field");
            err
        })
    }

    /// The error span for the first message, or an empty string.
    fn error_span(&self, descriptor: &FieldDescriptor, error_id: &str) -> String {
        let Some(message) = descriptor.first_error() else {
            return String::new();
        };
        let id_attr = if self.settings.describe_errors {
            format!(r#" id="{}""#, escape_attr(error_id))
        } else {
            String::new()
        };
        format!(
            r#"<span class="{}"{id_attr}>{}</span>"#,
            escape_attr(&self.settings.error_text_class),
            escape_text(message)
        )
    }
}

/// Builds an option id not yet present in `used`, and records it.
fn unique_option_id(
    group_id: &str,
    index: usize,
    value: &str,
    used: &mut HashSet<String>,
) -> String {
    let fragment = sanitize_id_fragment(value);
    let base = if fragment.is_empty() {
        format!("{group_id}_{index}")
    } else {
        format!("{group_id}_{fragment}")
    };

    let mut candidate = base.clone();
    let mut suffix = index;
    while !used.insert(candidate.clone()) {
        candidate = format!("{base}_{suffix}");
        suffix += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn billing_options() -> Vec<RadioOption> {
        vec![
            RadioOption::new("billing", "Billing Address"),
            RadioOption::new("mailing", "Mailing Address"),
        ]
    }

    #[test]
    fn test_text_field_without_errors() {
        let renderer = AccessibleFieldRenderer::default();
        let html = renderer
            .render_text_field(&FieldDescriptor::text("street"), &InputOptions::new())
            .unwrap();
        assert_eq!(
            html.as_str(),
            r#"<label for="street"><span class="label-text">Street</span><input type="text" name="street" id="street" /></label>"#
        );
    }

    #[test]
    fn test_text_field_with_error() {
        let renderer = AccessibleFieldRenderer::default();
        let field = FieldDescriptor::text("zip").errors(vec!["can't be blank".to_string()]);
        let html = renderer.render_text_field(&field, &InputOptions::new()).unwrap();
        assert_eq!(
            html.as_str(),
            r#"<label for="zip"><span class="label-text">Zip</span><input type="text" name="zip" id="zip" /><span class="error-text">can't be blank</span></label>"#
        );
    }

    #[test]
    fn test_text_field_shows_only_first_error() {
        let renderer = AccessibleFieldRenderer::default();
        let field = FieldDescriptor::text("zip").errors(vec![
            "can't be blank".to_string(),
            "is not a number".to_string(),
        ]);
        let html = renderer.render_text_field(&field, &InputOptions::new()).unwrap();
        assert!(html.as_str().contains("can't be blank"));
        assert!(!html.as_str().contains("is not a number"));
    }

    #[test]
    fn test_text_field_explicit_id_wins() {
        let renderer = AccessibleFieldRenderer::default();
        let html = renderer
            .render_text_field(
                &FieldDescriptor::text("street"),
                &InputOptions::new().id("shipping-street"),
            )
            .unwrap();
        assert!(html.as_str().starts_with(r#"<label for="shipping-street">"#));
        assert!(html.as_str().contains(r#"id="shipping-street""#));
    }

    #[test]
    fn test_text_field_passes_options_through() {
        let renderer = AccessibleFieldRenderer::default();
        let html = renderer
            .render_text_field(
                &FieldDescriptor::text("zip"),
                &InputOptions::new().placeholder("12345").class("short"),
            )
            .unwrap();
        assert!(html.as_str().contains(r#"placeholder="12345""#));
        assert!(html.as_str().contains(r#"class="short""#));
    }

    #[test]
    fn test_text_field_value_from_descriptor() {
        let renderer = AccessibleFieldRenderer::default();
        let field = FieldDescriptor::text("street").value("1 Main St");
        let html = renderer.render_text_field(&field, &InputOptions::new()).unwrap();
        assert!(html.as_str().contains(r#"value="1 Main St""#));

        let html = renderer
            .render_text_field(&field, &InputOptions::new().value("override"))
            .unwrap();
        assert!(html.as_str().contains(r#"value="override""#));
        assert!(!html.as_str().contains("1 Main St"));
    }

    #[test]
    fn test_text_field_escapes_label_and_error() {
        let renderer = AccessibleFieldRenderer::default();
        let field = FieldDescriptor::text("street")
            .label("Street <b>")
            .errors(vec!["<script>".to_string()]);
        let html = renderer.render_text_field(&field, &InputOptions::new()).unwrap();
        assert!(html.as_str().contains("Street &lt;b&gt;"));
        assert!(html.as_str().contains("&lt;script&gt;"));
        assert!(!html.as_str().contains("<script>"));
    }

    #[test]
    fn test_text_field_custom_classes_and_auto_id() {
        let settings = Settings {
            auto_id: "id_%s".to_string(),
            label_text_class: "caption".to_string(),
            error_text_class: "problem".to_string(),
            ..Settings::default()
        };
        let renderer = AccessibleFieldRenderer::with_settings(settings).unwrap();
        let field = FieldDescriptor::text("zip").errors(vec!["bad".to_string()]);
        let html = renderer.render_text_field(&field, &InputOptions::new()).unwrap();
        assert!(html.as_str().starts_with(r#"<label for="id_zip"><span class="caption">"#));
        assert!(html.as_str().contains(r#"id="id_zip""#));
        assert!(html.as_str().contains(r#"<span class="problem">bad</span>"#));
    }

    #[test]
    fn test_text_field_describe_errors() {
        let settings = Settings {
            describe_errors: true,
            ..Settings::default()
        };
        let renderer = AccessibleFieldRenderer::with_settings(settings).unwrap();
        let field = FieldDescriptor::text("zip").errors(vec!["can't be blank".to_string()]);
        let html = renderer.render_text_field(&field, &InputOptions::new()).unwrap();
        assert!(html.as_str().contains(r#"aria-describedby="zip_error""#));
        assert!(html.as_str().contains(r#"aria-invalid="true""#));
        assert!(html
            .as_str()
            .contains(r#"<span class="error-text" id="zip_error">can't be blank</span>"#));
    }

    #[test]
    fn test_describe_errors_without_errors_adds_nothing() {
        let settings = Settings {
            describe_errors: true,
            ..Settings::default()
        };
        let renderer = AccessibleFieldRenderer::with_settings(settings).unwrap();
        let html = renderer
            .render_text_field(&FieldDescriptor::text("zip"), &InputOptions::new())
            .unwrap();
        assert!(!html.as_str().contains("aria-"));
        assert!(!html.as_str().contains("error-text"));
    }

    #[test]
    fn test_text_field_rejects_blank_name() {
        let renderer = AccessibleFieldRenderer::default();
        let err = renderer
            .render_text_field(&FieldDescriptor::text(""), &InputOptions::new())
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_text_field_rejects_radio_descriptor() {
        let renderer = AccessibleFieldRenderer::default();
        let err = renderer
            .render_text_field(&FieldDescriptor::radio_group("type"), &InputOptions::new())
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_radio_group_markup() {
        let renderer = AccessibleFieldRenderer::default();
        let html = renderer
            .render_radio_group(&FieldDescriptor::radio_group("type"), &billing_options())
            .unwrap();
        assert_eq!(
            html.as_str(),
            concat!(
                "<fieldset><legend>Type</legend>",
                r#"<input type="radio" name="type" id="type_billing" value="billing" /><label for="type_billing">Billing Address</label>"#,
                r#"<input type="radio" name="type" id="type_mailing" value="mailing" /><label for="type_mailing">Mailing Address</label>"#,
                "</fieldset>"
            )
        );
    }

    #[test]
    fn test_radio_group_checks_current_value() {
        let renderer = AccessibleFieldRenderer::default();
        let field = FieldDescriptor::radio_group("type").value("mailing");
        let html = renderer.render_radio_group(&field, &billing_options()).unwrap();
        assert!(html
            .as_str()
            .contains(r#"id="type_mailing" value="mailing" checked="checked""#));
        assert_eq!(html.as_str().matches(r#"checked="checked""#).count(), 1);
    }

    #[test]
    fn test_radio_group_error_inside_fieldset() {
        let renderer = AccessibleFieldRenderer::default();
        let field = FieldDescriptor::radio_group("type")
            .errors(vec!["must be selected".to_string(), "second".to_string()]);
        let html = renderer.render_radio_group(&field, &billing_options()).unwrap();
        assert!(html
            .as_str()
            .ends_with(r#"<span class="error-text">must be selected</span></fieldset>"#));
        assert!(!html.as_str().contains("second"));
    }

    #[test]
    fn test_radio_group_fieldset_class() {
        let settings = Settings {
            fieldset_class: Some("radio-group".to_string()),
            ..Settings::default()
        };
        let renderer = AccessibleFieldRenderer::with_settings(settings).unwrap();
        let html = renderer
            .render_radio_group(&FieldDescriptor::radio_group("type"), &billing_options())
            .unwrap();
        assert!(html
            .as_str()
            .starts_with(r#"<fieldset class="radio-group"><legend>Type</legend>"#));
    }

    #[test]
    fn test_radio_group_ids_unique_when_values_sanitize_alike() {
        let renderer = AccessibleFieldRenderer::default();
        let options = vec![
            RadioOption::new("Yes", "Yes"),
            RadioOption::new("yes", "yes"),
            RadioOption::new("a b", "A B"),
            RadioOption::new("a_b", "A underscore B"),
            RadioOption::new("+", "Plus"),
            RadioOption::new("?", "Unsure"),
        ];
        let html = renderer
            .render_radio_group(&FieldDescriptor::radio_group("choice"), &options)
            .unwrap();
        let html = html.as_str();

        for id in [
            "choice_yes",
            "choice_yes_1",
            "choice_a_b",
            "choice_a_b_3",
            "choice_4",
            "choice_5",
        ] {
            assert_eq!(html.matches(&format!(r#"id="{id}""#)).count(), 1, "{id}");
            assert_eq!(html.matches(&format!(r#"for="{id}""#)).count(), 1, "{id}");
        }
        assert!(html.contains(r#"id="choice_yes_1" value="yes""#));
    }

    #[test]
    fn test_radio_group_identical_values_get_distinct_ids() {
        let renderer = AccessibleFieldRenderer::default();
        let options = vec![RadioOption::new("x", "First"), RadioOption::new("x", "Second")];
        let html = renderer
            .render_radio_group(&FieldDescriptor::radio_group("pick"), &options)
            .unwrap();
        assert!(html
            .as_str()
            .contains(r#"id="pick_x_1" value="x" /><label for="pick_x_1">Second</label>"#));
    }

    #[test]
    fn test_radio_group_describe_errors() {
        let settings = Settings {
            describe_errors: true,
            fieldset_class: Some("choices".to_string()),
            ..Settings::default()
        };
        let renderer = AccessibleFieldRenderer::with_settings(settings).unwrap();
        let field = FieldDescriptor::radio_group("type").errors(vec!["must be selected".to_string()]);
        let html = renderer.render_radio_group(&field, &billing_options()).unwrap();
        assert!(html.as_str().starts_with(
            r#"<fieldset aria-describedby="type_error" class="choices"><legend>Type</legend>"#
        ));
        assert!(html.as_str().ends_with(
            r#"<span class="error-text" id="type_error">must be selected</span></fieldset>"#
        ));

        let html = renderer
            .render_radio_group(&FieldDescriptor::radio_group("type"), &billing_options())
            .unwrap();
        assert!(!html.as_str().contains("aria-"));
    }

    #[test]
    fn test_radio_group_without_options() {
        let renderer = AccessibleFieldRenderer::default();
        let html = renderer
            .render_radio_group(&FieldDescriptor::radio_group("type"), &[])
            .unwrap();
        assert_eq!(html.as_str(), "<fieldset><legend>Type</legend></fieldset>");
    }

    #[test]
    fn test_radio_group_rejects_text_descriptor() {
        let renderer = AccessibleFieldRenderer::default();
        let err = renderer
            .render_radio_group(&FieldDescriptor::text("type"), &billing_options())
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_render_field_dispatches_on_kind() {
        let renderer = AccessibleFieldRenderer::default();
        let text = renderer
            .render_field(&FieldDescriptor::text("zip"), &InputOptions::new(), &[])
            .unwrap();
        assert!(text.as_str().starts_with("<label"));

        let radio = renderer
            .render_field(
                &FieldDescriptor::radio_group("type"),
                &InputOptions::new(),
                &billing_options(),
            )
            .unwrap();
        assert!(radio.as_str().starts_with("<fieldset>"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let renderer = AccessibleFieldRenderer::default();
        let field = FieldDescriptor::text("zip").errors(vec!["can't be blank".to_string()]);
        let first = renderer.render_text_field(&field, &InputOptions::new()).unwrap();
        let second = renderer.render_text_field(&field, &InputOptions::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            auto_id: "no-placeholder".to_string(),
            ..Settings::default()
        };
        assert!(AccessibleFieldRenderer::with_settings(settings).is_err());
    }

    #[derive(Debug)]
    struct BracketPrimitives;

    impl Primitives for BracketPrimitives {
        fn render_input(&self, name: &str, options: &InputOptions) -> SafeHtml {
            SafeHtml::from_trusted(format!(
                "<input data-custom name=\"{name}\" id=\"{}\">",
                options.get("id").unwrap_or_default()
            ))
        }

        fn render_radio_option(
            &self,
            _name: &str,
            option: &RadioOption,
            id: &str,
            _checked: bool,
        ) -> SafeHtml {
            SafeHtml::from_trusted(format!(
                "<input data-custom type=\"radio\" id=\"{id}\"><label for=\"{id}\">[{}]</label>",
                option.display_text
            ))
        }
    }

    #[test]
    fn test_custom_primitives_are_decorated() {
        let renderer =
            AccessibleFieldRenderer::new(Box::new(BracketPrimitives), Settings::default()).unwrap();
        let html = renderer
            .render_text_field(&FieldDescriptor::text("street"), &InputOptions::new())
            .unwrap();
        assert_eq!(
            html.as_str(),
            r#"<label for="street"><span class="label-text">Street</span><input data-custom name="street" id="street"></label>"#
        );

        let html = renderer
            .render_radio_group(&FieldDescriptor::radio_group("type"), &billing_options())
            .unwrap();
        assert!(html.as_str().contains("[Billing Address]"));
        assert!(html.as_str().starts_with("<fieldset><legend>Type</legend>"));
    }
}
