//! Error types for rendering templates

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A well-formed placeholder had no entry in the binding set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing binding for placeholder '{name}'")]
pub struct MissingBindingError {
    /// Placeholder name as written between the sentinels
    pub name: String,
    /// Byte range of the whole `%{name}` marker
    pub span: Span,
}

impl MissingBindingError {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, self.span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, self.span.clone()))
                    .with_message(format!("no binding named '{}'", self.name))
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
