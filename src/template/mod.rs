//! Template language: literal text with embedded `{{ ... }}` placeholders
//!
//! A template is an ordered sequence of literal segments and placeholder
//! segments. Placeholder contents are forwarded to the rendering
//! collaborator verbatim, delimiters excluded:
//!
//! ```text
//! # {{\LaTeX}}clippings
//! ```
//!
//! Single braces and an unmatched `}}` are ordinary literal text. There is
//! no nesting and no escape syntax.

pub mod ast;
mod lexer;
mod parser;

pub use ast::{Placeholder, Segment, Template};
pub use parser::parse;
