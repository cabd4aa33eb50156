//! Error types for template parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in template source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("unclosed placeholder starting at byte {}", .span.start)]
    UnclosedPlaceholder { span: Span },
}

impl TemplateError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            TemplateError::UnclosedPlaceholder { span } => {
                Report::build(ReportKind::Error, filename, span.start)
                    .with_message("unclosed placeholder")
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message("this `{{` is never closed by a matching `}}`")
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
            }
        }
        String::from_utf8(buf).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_includes_filename_and_message() {
        let err = TemplateError::UnclosedPlaceholder { span: 2..10 };
        let report = err.format("# {{\\LaTeX", "README.template");
        assert!(report.contains("README.template"));
        assert!(report.contains("unclosed placeholder"));
    }
}
