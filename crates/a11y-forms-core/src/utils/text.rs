//! String utility functions.
//!
//! Helpers used when turning field metadata into markup: deriving a
//! human-readable label from a field name, escaping text and attribute
//! values, and turning option values into id fragments.

use regex::Regex;
use std::sync::OnceLock;

/// Turns a field name into a human-readable label.
///
/// A trailing `_id` is dropped, underscores become spaces, surrounding
/// whitespace is trimmed, the text is lowercased and its first character is
/// capitalized.
///
/// # Examples
///
/// ```
/// use a11y_forms_core::utils::text::humanize;
///
/// assert_eq!(humanize("street"), "Street");
/// assert_eq!(humanize("zip_code"), "Zip code");
/// assert_eq!(humanize("author_id"), "Author");
/// ```
pub fn humanize(name: &str) -> String {
    static ID_SUFFIX: OnceLock<Regex> = OnceLock::new();
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();

    let id_suffix = ID_SUFFIX.get_or_init(|| Regex::new(r"(?i)_id$").unwrap());
    let separators = SEPARATORS.get_or_init(|| Regex::new(r"[_\s]+").unwrap());

    let s = id_suffix.replace(name, "");
    let s = separators.replace_all(&s, " ");
    capfirst(&s.trim().to_lowercase())
}

/// Capitalizes the first character of a string.
///
/// # Examples
///
/// ```
/// use a11y_forms_core::utils::text::capfirst;
///
/// assert_eq!(capfirst("hello"), "Hello");
/// assert_eq!(capfirst(""), "");
/// assert_eq!(capfirst("HELLO"), "HELLO");
/// ```
pub fn capfirst(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |c| {
        let mut result = c.to_uppercase().to_string();
        result.extend(chars);
        result
    })
}

/// Escapes a string for use as HTML text content.
///
/// Only `&`, `<` and `>` are replaced; quotes are left alone because they
/// carry no meaning outside attribute values.
///
/// # Examples
///
/// ```
/// use a11y_forms_core::utils::text::escape_text;
///
/// assert_eq!(escape_text("can't be blank"), "can't be blank");
/// assert_eq!(escape_text("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
/// ```
pub fn escape_text(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(ch),
        }
    }
    output
}

/// Escapes a string for safe insertion into an HTML attribute value.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their HTML entity equivalents.
///
/// # Examples
///
/// ```
/// use a11y_forms_core::utils::text::escape_attr;
///
/// assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
/// ```
pub fn escape_attr(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(ch),
        }
    }
    output
}

/// Turns an option value into a fragment usable inside an element id.
///
/// Whitespace and dots become underscores, anything that is not a word
/// character or hyphen is dropped, and the result is lowercased.
///
/// # Examples
///
/// ```
/// use a11y_forms_core::utils::text::sanitize_id_fragment;
///
/// assert_eq!(sanitize_id_fragment("Billing Address"), "billing_address");
/// assert_eq!(sanitize_id_fragment("v1.2"), "v1_2");
/// assert_eq!(sanitize_id_fragment("a&b"), "ab");
/// ```
pub fn sanitize_id_fragment(value: &str) -> String {
    static SPACING: OnceLock<Regex> = OnceLock::new();
    static INVALID: OnceLock<Regex> = OnceLock::new();

    let spacing = SPACING.get_or_init(|| Regex::new(r"[\s.]").unwrap());
    let invalid = INVALID.get_or_init(|| Regex::new(r"[^\w-]").unwrap());

    let s = spacing.replace_all(value, "_");
    invalid.replace_all(&s, "").to_lowercase()
}
