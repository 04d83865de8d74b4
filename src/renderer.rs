//! Substitution of binding values into parsed templates

use std::fmt::Write;

use crate::bindings::BindingSet;
use crate::error::MissingBindingError;
use crate::parser::Segment;
use crate::template::Template;

/// Render a parsed template against a binding set
///
/// Output is only returned once every placeholder has been resolved; on the
/// first missing binding the partial output is dropped.
pub fn render_template(
    template: &Template,
    bindings: &BindingSet,
) -> Result<String, MissingBindingError> {
    let source = template.source();
    let mut out = String::with_capacity(source.len());

    for segment in template.segments() {
        match &segment.node {
            Segment::Literal => out.push_str(&source[segment.span.clone()]),
            Segment::Placeholder(name) => match bindings.get(name.as_str()) {
                // Writing into a String cannot fail
                Some(value) => {
                    let _ = write!(out, "{}", value);
                }
                None => {
                    tracing::debug!(name = %name, span = ?segment.span, "missing binding");
                    return Err(MissingBindingError::new(name.as_str(), segment.span.clone()));
                }
            },
        }
    }

    tracing::trace!(input_len = source.len(), output_len = out.len(), "rendered template");
    Ok(out)
}
