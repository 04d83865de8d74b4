//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::parser::ast::*;
use crate::parser::lexer::Token;

/// Parse template source into an ordered list of segments
///
/// Adjacent literal tokens are merged, so a template without placeholders
/// yields at most one segment. Every token sequence is a valid template, so
/// parsing cannot fail.
pub fn parse(input: &str) -> Vec<Spanned<Segment>> {
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    match segments_parser().parse(token_stream).into_result() {
        Ok(segments) => coalesce_literals(segments),
        Err(errs) => {
            tracing::debug!(errors = errs.len(), "template did not parse, treating as literal");
            whole_literal(len)
        }
    }
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn segments_parser<'a, I>(
) -> impl Parser<'a, I, Vec<Spanned<Segment>>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    // A name starts right after `%{` with anything but whitespace or `}`
    // and runs up to the next `}`
    let name_start =
        any().filter(|t: &Token| !matches!(t, Token::Whitespace(_) | Token::BraceClose));
    let name_rest = any()
        .filter(|t: &Token| *t != Token::BraceClose)
        .map(|t: Token| t.text().to_string())
        .repeated()
        .collect::<Vec<_>>();

    let placeholder = just(Token::Percent)
        .ignore_then(just(Token::BraceOpen))
        .ignore_then(name_start)
        .then(name_rest)
        .then_ignore(just(Token::BraceClose))
        .map(|(first, rest)| {
            let mut name = first.text().to_string();
            name.push_str(&rest.concat());
            Segment::Placeholder(Name::new(name))
        });

    // Anything that does not start a well-formed marker is copied through,
    // one token at a time, so a failed marker resumes right after its `%`
    let literal = any().to(Segment::Literal);

    choice((placeholder, literal))
        .map_with(|s, e| Spanned::new(s, span_range(&e.span())))
        .repeated()
        .collect()
        .then_ignore(end())
}

fn coalesce_literals(segments: Vec<Spanned<Segment>>) -> Vec<Spanned<Segment>> {
    let mut merged: Vec<Spanned<Segment>> = Vec::with_capacity(segments.len());
    for seg in segments {
        match merged.last_mut() {
            Some(prev) if prev.node.is_literal() && seg.node.is_literal() => {
                prev.span.end = seg.span.end;
            }
            _ => merged.push(seg),
        }
    }
    merged
}

fn whole_literal(len: usize) -> Vec<Spanned<Segment>> {
    if len == 0 {
        Vec::new()
    } else {
        vec![Spanned::new(Segment::Literal, 0..len)]
    }
}
