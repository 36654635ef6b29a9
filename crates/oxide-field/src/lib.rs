//! # oxide-field
//!
//! Fluent builder for Bootstrap form fields with inline validation feedback.
//!
//! This crate provides:
//! - [`FormField`], a chainable field configuration rendered to one HTML
//!   fragment (group wrapper, label, input, addons, feedback)
//! - A pluggable [`FieldRenderer`](backend::FieldRenderer) backend with a
//!   plain HTML default
//! - An [`ErrorBag`] seam for request-scoped validation errors
//! - JSON-loadable [`FieldConfig`](config::FieldConfig)
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_field::{FieldType, FormField, ValidationErrors};
//!
//! let errors = ValidationErrors::new().with("email", "The email is invalid.");
//!
//! let html = FormField::new("email")
//!     .type_(FieldType::Email)
//!     .only_placeholder()
//!     .prepend("@")
//!     .required(true)
//!     .to_html_with(&errors);
//!
//! assert!(html.contains(r#"placeholder="Email""#));
//! assert!(html.contains("The email is invalid."));
//! ```
//!
//! ## Field Helpers
//!
//! ```rust
//! use oxide_field::fields::{checkbox_field, select_field, textarea_field};
//!
//! let fields = vec![
//!     select_field("role", vec![("user", "User"), ("admin", "Administrator")])
//!         .selected("admin"),
//!     checkbox_field("remember_me", true),
//!     textarea_field("bio", 4).help("Markdown is supported."),
//! ];
//!
//! let html: String = fields.iter().map(|f| f.to_html()).collect();
//! assert!(html.contains(r#"<option value="admin" selected>"#));
//! ```

pub mod assets;
pub mod backend;
pub mod config;
mod error;
mod field;
mod field_type;
pub mod fields;
pub mod naming;

pub use error::{ErrorBag, FieldError, Result, ValidationErrors};
pub use field::{Feedback, FormField};
pub use field_type::FieldType;
