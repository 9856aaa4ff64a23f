//! Accessibility audit of rendered fragments.
//!
//! Parses a markup fragment and reports the Section 508 / WCAG problems the
//! renderer exists to prevent. Anything the renderer produces should audit
//! clean; the audit is also useful on hand-written template fragments.
//!
//! Rules:
//! - `input-no-label` (WCAG 3.3.2): an input, select, or textarea that is
//!   neither inside a `<label>`, nor targeted by a `label[for]`, nor named
//!   through `aria-label`/`aria-labelledby`;
//! - `duplicate-id` (WCAG 4.1.1): an `id` shared by several elements, which
//!   leaves all but the first unreachable from a `label[for]`;
//! - `radio-outside-fieldset` (WCAG 1.3.1): a radio input with no
//!   `<fieldset>` ancestor;
//! - `fieldset-no-legend` (WCAG 1.3.1): a fieldset without exactly one
//!   `<legend>` child;
//! - `legend-not-first`: a legend that is not the fieldset's first element;
//! - `error-text-detached`: an error-text span outside any label or fieldset.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use a11y_forms_core::settings::Settings;

use crate::markup::SafeHtml;

/// Input types that do not need a label.
const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "submit", "reset", "button", "image"];

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Assistive technology will misreport the form.
    Error,
    /// Technically reachable, but poorly announced.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// One problem found in a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Stable rule identifier, e.g. `input-no-label`.
    pub code: &'static str,
    /// How serious the problem is.
    pub severity: Severity,
    /// Human-readable description naming the offending element.
    pub message: String,
}

impl Finding {
    fn error(code: &'static str, message: String) -> Self {
        Self {
            code,
            severity: Severity::Error,
            message,
        }
    }

    fn warning(code: &'static str, message: String) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            message,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)
    }
}

fn selector(cell: &'static OnceLock<Selector>, css: &str) -> &'static Selector {
    cell.get_or_init(|| Selector::parse(css).expect("valid selector"))
}

/// Audits a fragment. Findings are ordered by rule, then document order.
pub fn audit_fragment(html: &SafeHtml, settings: &Settings) -> Vec<Finding> {
    let document = Html::parse_fragment(html.as_str());
    let mut findings = Vec::new();

    check_labels(&document, &mut findings);
    check_duplicate_ids(&document, &mut findings);
    check_radio_grouping(&document, &mut findings);
    check_legends(&document, &mut findings);
    check_error_text(&document, &settings.error_text_class, &mut findings);

    tracing::debug!(findings = findings.len(), "audited fragment");
    findings
}

/// Returns `true` if the fragment has no error-level findings.
pub fn is_accessible(html: &SafeHtml, settings: &Settings) -> bool {
    audit_fragment(html, settings)
        .iter()
        .all(|f| f.severity != Severity::Error)
}

fn has_ancestor(element: ElementRef<'_>, tag: &str) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| a.value().name() == tag)
}

fn describe(element: ElementRef<'_>) -> String {
    let el = element.value();
    let mut out = format!("<{}", el.name());
    for attr in ["type", "name", "id"] {
        if let Some(v) = el.attr(attr) {
            out.push_str(&format!(r#" {attr}="{v}""#));
        }
    }
    out.push('>');
    out
}

fn check_labels(document: &Html, findings: &mut Vec<Finding>) {
    static FIELDS: OnceLock<Selector> = OnceLock::new();
    static LABEL_FOR: OnceLock<Selector> = OnceLock::new();

    let label_fors: HashSet<&str> = document
        .select(selector(&LABEL_FOR, "label[for]"))
        .filter_map(|l| l.value().attr("for"))
        .collect();

    for field in document.select(selector(&FIELDS, "input, select, textarea")) {
        let el = field.value();
        if el.name() == "input" {
            let input_type = el.attr("type").unwrap_or("text");
            if EXEMPT_INPUT_TYPES.contains(&input_type) {
                continue;
            }
        }

        let wrapped = has_ancestor(field, "label");
        let targeted = el.attr("id").is_some_and(|id| label_fors.contains(id));
        let aria = el.attr("aria-label").is_some() || el.attr("aria-labelledby").is_some();

        if !wrapped && !targeted && !aria {
            findings.push(Finding::error(
                "input-no-label",
                format!("{} has no associated label", describe(field)),
            ));
        }
    }
}

fn check_duplicate_ids(document: &Html, findings: &mut Vec<Finding>) {
    static WITH_ID: OnceLock<Selector> = OnceLock::new();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();
    for element in document.select(selector(&WITH_ID, "[id]")) {
        let Some(id) = element.value().attr("id") else {
            continue;
        };
        if !seen.insert(id) && reported.insert(id) {
            findings.push(Finding::error(
                "duplicate-id",
                format!(r#"id="{id}" is used by more than one element"#),
            ));
        }
    }
}

fn check_radio_grouping(document: &Html, findings: &mut Vec<Finding>) {
    static RADIOS: OnceLock<Selector> = OnceLock::new();

    for radio in document.select(selector(&RADIOS, r#"input[type="radio"]"#)) {
        if !has_ancestor(radio, "fieldset") {
            findings.push(Finding::error(
                "radio-outside-fieldset",
                format!("{} is not grouped in a fieldset", describe(radio)),
            ));
        }
    }
}

fn check_legends(document: &Html, findings: &mut Vec<Finding>) {
    static FIELDSETS: OnceLock<Selector> = OnceLock::new();

    for fieldset in document.select(selector(&FIELDSETS, "fieldset")) {
        let children: Vec<ElementRef<'_>> =
            fieldset.children().filter_map(ElementRef::wrap).collect();
        let legends = children
            .iter()
            .filter(|c| c.value().name() == "legend")
            .count();

        if legends != 1 {
            findings.push(Finding::error(
                "fieldset-no-legend",
                format!("<fieldset> has {legends} legends, expected exactly one"),
            ));
        } else if children.first().map(|c| c.value().name()) != Some("legend") {
            findings.push(Finding::warning(
                "legend-not-first",
                "<legend> is not the first element of its <fieldset>".to_string(),
            ));
        }
    }
}

fn check_error_text(document: &Html, error_class: &str, findings: &mut Vec<Finding>) {
    static SPANS: OnceLock<Selector> = OnceLock::new();

    for span in document.select(selector(&SPANS, "span")) {
        if !span.value().classes().any(|c| c == error_class) {
            continue;
        }
        if !has_ancestor(span, "label") && !has_ancestor(span, "fieldset") {
            let text: String = span.text().collect();
            findings.push(Finding::warning(
                "error-text-detached",
                format!("error text '{}' is outside any label or fieldset", text.trim()),
            ));
        }
    }
}
