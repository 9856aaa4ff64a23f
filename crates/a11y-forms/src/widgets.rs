//! Primitive input rendering.
//!
//! The accessible renderer never writes `<input>` elements itself. It asks a
//! [`Primitives`] implementation for the bare input (or radio option) and
//! decorates what comes back with labels, legends, and error text.
//! [`HtmlPrimitives`] is the built-in implementation; applications embedding
//! the renderer in a larger framework can plug in that framework's own input
//! rendering instead.

use std::collections::BTreeMap;
use std::fmt;

use a11y_forms_core::utils::text::{escape_attr, escape_text};

use crate::field::RadioOption;
use crate::markup::SafeHtml;

/// The input type used when [`InputOptions`] does not name one.
pub const DEFAULT_INPUT_TYPE: &str = "text";

/// Pass-through options for a primitive input.
///
/// The accessible renderer only ever reads and sets the `id` (and, when
/// errors are described through ARIA, the `aria-*` attributes); everything
/// else is handed to the [`Primitives`] implementation untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOptions {
    input_type: Option<String>,
    attrs: BTreeMap<String, String>,
}

impl InputOptions {
    /// Creates an empty set of options (a plain text input).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `type` attribute (`email`, `password`, ...).
    #[must_use]
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    /// Sets an explicit `id`, overriding the generated one.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Sets the `value` attribute.
    #[must_use]
    pub fn value(self, value: impl Into<String>) -> Self {
        self.attr("value", value)
    }

    /// Sets the `placeholder` attribute.
    #[must_use]
    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        self.attr("placeholder", placeholder)
    }

    /// Sets the `class` attribute.
    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Sets a boolean attribute such as `required` (`required="required"`).
    #[must_use]
    pub fn flag(self, name: &str) -> Self {
        self.attr(name, name)
    }

    /// Sets an arbitrary attribute. `type` and `name` are ignored here; the
    /// type goes through [`input_type`](Self::input_type) and the name
    /// always comes from the field.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if key != "type" && key != "name" {
            self.attrs.insert(key, value.into());
        }
        self
    }

    /// Sets an attribute only when it is not already present.
    #[must_use]
    pub fn attr_or_keep(mut self, key: &str, value: impl Into<String>) -> Self {
        if !self.attrs.contains_key(key) {
            self = self.attr(key, value);
        }
        self
    }

    /// Returns the input type, defaulting to `text`.
    pub fn get_input_type(&self) -> &str {
        self.input_type.as_deref().unwrap_or(DEFAULT_INPUT_TYPE)
    }

    /// Returns an attribute value, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Iterates over attributes in sorted key order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// The "render primitive" collaborator wrapped by the accessible renderer.
///
/// Implementations must return markup that is already HTML-escaped.
pub trait Primitives: Send + Sync + fmt::Debug {
    /// Renders a bare input element for `name`.
    fn render_input(&self, name: &str, options: &InputOptions) -> SafeHtml;

    /// Renders one radio option: an `<input type="radio">` with the given
    /// `id`, immediately followed by its own `<label for="{id}">`.
    fn render_radio_option(
        &self,
        name: &str,
        option: &RadioOption,
        id: &str,
        checked: bool,
    ) -> SafeHtml;
}

/// Formats attributes into a string like ` key="value" key2="value2"`.
fn render_attrs<'a>(attrs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    attrs
        .map(|(k, v)| format!(r#" {k}="{}""#, escape_attr(v)))
        .collect()
}

/// Plain HTML rendering of inputs and radio options.
///
/// Attributes are written in sorted order so identical options always
/// produce identical markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPrimitives;

impl Primitives for HtmlPrimitives {
    fn render_input(&self, name: &str, options: &InputOptions) -> SafeHtml {
        SafeHtml::from_trusted(format!(
            r#"<input type="{}" name="{}"{} />"#,
            escape_attr(options.get_input_type()),
            escape_attr(name),
            render_attrs(options.attrs())
        ))
    }

    fn render_radio_option(
        &self,
        name: &str,
        option: &RadioOption,
        id: &str,
        checked: bool,
    ) -> SafeHtml {
        let id = escape_attr(id);
        let checked_attr = if checked { r#" checked="checked""# } else { "" };
        SafeHtml::from_trusted(format!(
            r#"<input type="radio" name="{}" id="{id}" value="{}"{checked_attr} /><label for="{id}">{}</label>"#,
            escape_attr(name),
            escape_attr(&option.value),
            escape_text(&option.display_text)
        ))
    }
}
