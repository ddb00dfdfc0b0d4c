//! Error types for template parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Bad arguments in an `> offset` or `> base` directive
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },

    /// No layers, or layers that do not share one shape
    #[error("Malformed template at {span:?}: {message}")]
    Malformed { span: Span, message: String },
}

impl ParseError {
    pub fn malformed(span: Span, message: impl Into<String>) -> Self {
        Self::Malformed {
            span,
            message: message.into(),
        }
    }

    /// Source span of the error
    pub fn span(&self) -> &Span {
        match self {
            ParseError::Syntax { span, .. } | ParseError::Malformed { span, .. } => span,
        }
    }

    /// Move the span by `offset` bytes; directive bodies are lexed on their own
    pub(crate) fn shifted(mut self, offset: usize) -> Self {
        match &mut self {
            ParseError::Syntax { span, .. } | ParseError::Malformed { span, .. } => {
                *span = span.start + offset..span.end + offset;
            }
        }
        self
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (span, message, note) = match self {
            ParseError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };
                (span, message, expected_str)
            }
            ParseError::Malformed { span, message } => (span, message, String::new()),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(message)
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(format!("{}{}", message, note))
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        if written.is_err() {
            return self.to_string();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<'a> From<chumsky::error::Rich<'a, crate::parser::lexer::Token>> for ParseError {
    fn from(err: chumsky::error::Rich<'a, crate::parser::lexer::Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => {
                let found_str = match found {
                    Some(tok) => format_token(tok),
                    None => "end of line".to_string(),
                };
                format!("Unexpected {}", found_str)
            }
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of line".to_string()),
                chumsky::error::RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                chumsky::error::RichPattern::Any => Some("any token".to_string()),
                chumsky::error::RichPattern::SomethingElse => None,
            })
            .collect();

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &crate::parser::lexer::Token) -> String {
    use crate::parser::lexer::Token;
    match tok {
        Token::Colon => "':'".to_string(),
        Token::Number(n) => format!("integer {}", n),
        Token::Word(w) => format!("word '{}'", w),
        Token::Invalid(s) => format!("'{}'", s),
    }
}
