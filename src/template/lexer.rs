//! Lexer for template text using logos

use logos::Logos;

use crate::error::Span;

/// Template tokens. Every byte of input is covered: anything that is not a
/// brace is a `Text` run, and a lone brace lexes as `Brace` so it can be
/// treated as literal text by the parser.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[token("{{")]
    Open,

    #[token("}}")]
    Close,

    #[regex(r"[^{}]+")]
    Text,

    #[regex(r"[{}]")]
    Brace,
}

/// Lex template text into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}
