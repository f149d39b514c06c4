//! Parse errors with source-anchored diagnostics

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in the SMILES source string
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid SMILES at {span:?}: {message}")]
    Syntax { span: Span, message: String },

    #[error("ring-closure digit {digit} is opened but never closed")]
    UnclosedRing { digit: u8, span: Span },

    #[error("branch is opened but never closed")]
    UnclosedBranch { span: Span },

    #[error("empty SMILES input")]
    Empty,
}

impl ParseError {
    fn span(&self) -> Span {
        match self {
            ParseError::Syntax { span, .. }
            | ParseError::UnclosedRing { span, .. }
            | ParseError::UnclosedBranch { span } => span.clone(),
            ParseError::Empty => 0..0,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span();
        let mut buf = Vec::new();
        Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }
}
