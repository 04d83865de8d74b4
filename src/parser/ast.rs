//! Syntax tree types for parsed templates

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A node with its source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Placeholder name: non-empty, no `}`, never starts with whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(pub String);

impl Name {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One piece of a template
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Text copied verbatim; the content is the span of the source it covers
    Literal,
    /// A well-formed `%{name}` marker
    Placeholder(Name),
}

impl Segment {
    pub fn is_literal(&self) -> bool {
        matches!(self, Segment::Literal)
    }

    /// Placeholder name, if this is a placeholder
    pub fn name(&self) -> Option<&Name> {
        match self {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal => None,
        }
    }
}
