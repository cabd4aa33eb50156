//! Parsed template representation

use crate::error::Span;

/// A parsed template: an ordered sequence of literal and placeholder
/// segments. Concatenating the segments in order (placeholders in their
/// delimited `{{ ... }}` form) reproduces the source byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text copied into the output unchanged
    Literal(String),
    /// Markup to be rendered by the external collaborator
    Placeholder(Placeholder),
}

/// A placeholder span. `text` is the exact source text between the
/// delimiters, with no trimming; `span` covers the delimiters too.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub text: String,
    pub span: Span,
}

impl Template {
    /// Iterate placeholders in document order
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(p),
            Segment::Literal(_) => None,
        })
    }

    /// Reconstruct the template source
    pub fn source(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(p) => {
                    out.push_str("{{");
                    out.push_str(&p.text);
                    out.push_str("}}");
                }
            }
        }
        out
    }
}
