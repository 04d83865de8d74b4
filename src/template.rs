//! Parsed templates
//!
//! A [`Template`] is template source that has been lexed and parsed once, so it
//! can be rendered against many binding sets.
//!
//! # Example
//!
//! ```rust
//! use percent_template::{BindingSet, Template};
//!
//! let template = Template::parse("%{f} and %{g}");
//! let out = template
//!     .render(&BindingSet::new().with("f", 22).with("g", 43))
//!     .unwrap();
//! assert_eq!(out, "22 and 43");
//! ```

use std::collections::HashSet;

use crate::bindings::BindingSet;
use crate::error::MissingBindingError;
use crate::parser::{self, Segment, Spanned};

/// Template source together with its parsed segments
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    segments: Vec<Spanned<Segment>>,
}

impl Template {
    /// Parse template source
    ///
    /// Any string is a valid template; malformed markers become literal text.
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let segments = parser::parse(&source);
        let template = Self { source, segments };
        tracing::debug!(
            segments = template.segments.len(),
            placeholders = template.placeholders().count(),
            "parsed template"
        );
        template
    }

    /// The original source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Segments in source order; literal spans index into [`Template::source`]
    pub fn segments(&self) -> &[Spanned<Segment>] {
        &self.segments
    }

    /// Placeholder names in order of appearance, repeats included
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter_map(|s| s.node.name())
            .map(|n| n.as_str())
    }

    /// Distinct placeholder names with no binding, in order of first appearance
    pub fn missing_bindings(&self, bindings: &BindingSet) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.placeholders()
            .filter(|name| !bindings.contains(name) && seen.insert(*name))
            .collect()
    }

    /// Substitute `bindings` into this template
    pub fn render(&self, bindings: &BindingSet) -> Result<String, MissingBindingError> {
        crate::renderer::render_template(self, bindings)
    }
}
