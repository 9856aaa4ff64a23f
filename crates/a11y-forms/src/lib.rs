//! # a11y-forms
//!
//! Accessible form rendering. Wraps primitive HTML inputs so generated forms
//! meet Section 508: every input is labelled, radio groups sit in a
//! fieldset with a legend, and the first validation message is rendered
//! inside the field's label or fieldset.
//!
//! ## Modules
//!
//! - [`renderer`] - [`AccessibleFieldRenderer`], the decorating renderer
//! - [`widgets`] - The [`Primitives`] collaborator and its HTML implementation
//! - [`field`] - Field descriptors and radio options
//! - [`field_errors`] - Validation messages keyed by field name
//! - [`form`] - [`FormContext`], explicit per-render form state
//! - [`markup`] - [`SafeHtml`] fragments
//! - [`audit`] - Accessibility checks over rendered fragments

pub mod audit;
pub mod field;
pub mod field_errors;
pub mod form;
pub mod markup;
pub mod renderer;
pub mod widgets;

pub use field::{FieldDescriptor, FieldKind, RadioOption};
pub use field_errors::FieldErrors;
pub use form::FormContext;
pub use markup::SafeHtml;
pub use renderer::AccessibleFieldRenderer;
pub use widgets::{HtmlPrimitives, InputOptions, Primitives};
