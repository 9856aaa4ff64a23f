//! HTML-safe markup fragments.
//!
//! A [`SafeHtml`] value is markup that can be written into a page as-is.
//! The only ways to get one are escaping plain text, or being a
//! [`Primitives`](crate::widgets::Primitives) implementation or the renderer
//! and vouching for the markup with [`SafeHtml::from_trusted`].

use std::fmt;

use serde::{Serialize, Serializer};

use a11y_forms_core::utils::text::escape_text;

/// An immutable, HTML-safe markup fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wraps markup the caller guarantees is already safe.
    pub fn from_trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Escapes plain text so it renders literally.
    pub fn escape(text: &str) -> Self {
        Self(escape_text(text))
    }

    /// Returns the markup as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the fragment, returning the markup.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenates fragments in order.
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a Self>) -> Self {
        Self(parts.into_iter().map(Self::as_str).collect())
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for SafeHtml {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
