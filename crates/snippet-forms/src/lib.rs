//! # snippet-forms
//!
//! Form field definitions, required-field validation and Bootstrap 5 widgets.
//!
//! This crate provides:
//! - Form field definitions with validators
//! - Bootstrap 5 form widgets
//! - Form rendering helpers, including trailing action buttons
//! - Validation errors keyed by field name
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use snippet_forms::fields::{char_field, choice_field};
//! use snippet_forms::{render_bootstrap_form, validate_fields, FormAction, FormBuilder};
//!
//! let fields = FormBuilder::new()
//!     .field(char_field("name", "Name", Some("Name is required")))
//!     .field(choice_field(
//!         "language",
//!         "Language",
//!         &[("JavaScript", "JavaScript"), ("CSS", "CSS")],
//!         Some("Language is required"),
//!     ))
//!     .build();
//!
//! let mut values = HashMap::new();
//! values.insert("language".to_string(), "CSS".to_string());
//!
//! let errors = validate_fields(&fields, &values);
//! assert_eq!(errors.first("name"), Some("Name is required"));
//! assert!(!errors.has("language"));
//!
//! let html = render_bootstrap_form(
//!     &fields, &values, &errors, "/save", "post",
//!     &[FormAction::submit("Save")],
//! );
//! assert!(html.contains("Name is required"));
//! ```
//!
//! ## Widgets
//!
//! - `BootstrapTextInput` - single-line text input
//! - `BootstrapTextarea` - multi-line text input
//! - `BootstrapSelect` - dropdown select
//! - `HiddenInput` - hidden value carried with the form

mod error;
pub mod fields;
mod form;
pub mod validation;
pub mod widgets;

pub use error::{FormError, ValidationErrors, NON_FIELD_ERRORS};
pub use form::{
    render_bootstrap_field, render_bootstrap_form, validate_fields, FormAction, FormBuilder,
    FormFieldDef,
};
