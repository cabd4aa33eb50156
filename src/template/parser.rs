//! Parser assembling lexed tokens into a Template

use crate::error::TemplateError;
use crate::template::ast::{Placeholder, Segment, Template};
use crate::template::lexer::{lex, Token};

/// Parse template text into a [`Template`].
///
/// A `{{` opens a placeholder which runs to the next `}}`; everything in
/// between is kept verbatim. A `{{` with no closing `}}` before end of
/// input is an error. All other tokens, including lone braces and an
/// unmatched `}}`, accumulate into literal segments.
pub fn parse(source: &str) -> Result<Template, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut tokens = lex(source);

    while let Some((token, span)) = tokens.next() {
        match token {
            Token::Open => {
                let open_start = span.start;
                let text_start = span.end;
                let mut close = None;
                for (token, span) in tokens.by_ref() {
                    if token == Token::Close {
                        close = Some(span);
                        break;
                    }
                }
                let close_span = close.ok_or(TemplateError::UnclosedPlaceholder {
                    span: open_start..source.len(),
                })?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(Placeholder {
                    text: source[text_start..close_span.start].to_string(),
                    span: open_start..close_span.end,
                }));
            }
            _ => literal.push_str(&source[span]),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(Template { segments })
}
