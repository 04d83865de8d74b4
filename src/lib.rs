//! percent-template - named-placeholder string templates
//!
//! Templates contain `%{name}` markers that are replaced with values from a
//! [`BindingSet`]. Marker-like text that is not well formed (`% {name}`,
//! `%{ name}`, `%{}`, an unclosed `%{`) is copied through unchanged.
//!
//! # Example
//!
//! ```rust
//! use percent_template::{render, BindingSet};
//!
//! let bindings = BindingSet::new().with("first", 1).with("second", true);
//! let out = render("%{first} %{second} % {third}", &bindings).unwrap();
//! assert_eq!(out, "1 true % {third}");
//! ```

pub mod bindings;
pub mod error;
pub mod parser;
pub mod renderer;
pub mod template;
pub mod text;

pub use bindings::{BindingFile, BindingSet, BindingsError, Value};
pub use error::MissingBindingError;
pub use template::Template;
pub use text::{is_palindrome, reverse, Palindrome};

/// Render template source against a binding set
///
/// This is the main entry point for the library. It parses the source and
/// substitutes every placeholder. Either the whole output is produced or the
/// first placeholder without a binding is reported.
///
/// # Example
///
/// ```rust
/// use percent_template::{render, BindingSet};
///
/// let bindings = BindingSet::new().with("f", 22).with("g", 43);
/// assert_eq!(render("%{f} and %{g}", &bindings).unwrap(), "22 and 43");
///
/// let err = render("%{x}", &BindingSet::new()).unwrap_err();
/// assert_eq!(err.name, "x");
/// ```
pub fn render(template: &str, bindings: &BindingSet) -> Result<String, MissingBindingError> {
    Template::parse(template).render(bindings)
}
