//! HTML Builder API
//!
//! A fluent API for constructing element trees.
//!
//! ## Example
//!
//! ```
//! use formgen_pages::builder::html::{div, label, span};
//!
//! let group = div()
//!     .class("form-group")
//!     .child(
//!         label()
//!             .attr("for", "name")
//!             .text("Name")
//!             .child(span().class("required-indicator").text(" *").build())
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(
//!     group.to_html(),
//!     r#"<div class="form-group"><label for="name">Name<span class="required-indicator"> *</span></label></div>"#
//! );
//! ```

pub mod html;

pub use html::*;
