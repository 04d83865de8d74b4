//! Lexer for template source using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Template tokens.
///
/// Every character of the source belongs to exactly one token, so the lexer
/// never reports an error for valid UTF-8 input.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Marker sentinels
    #[token("%")]
    Percent,
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,

    #[regex(r"\s+", |lex| lex.slice().to_string())]
    Whitespace(String),

    /// Run of characters other than sentinels and whitespace
    #[regex(r"[^%{}\s]+", |lex| lex.slice().to_string())]
    Word(String),
}

impl Token {
    /// The source text this token was lexed from
    pub fn text(&self) -> &str {
        match self {
            Token::Percent => "%",
            Token::BraceOpen => "{",
            Token::BraceClose => "}",
            Token::Whitespace(s) | Token::Word(s) => s,
        }
    }
}

/// Tokenize template source into (token, span) pairs
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}
