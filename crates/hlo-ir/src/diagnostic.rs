//! Diagnostic messages emitted while parsing assembly text.

use derive_more::Display;

use crate::location::Span;

/// A diagnostic message (error, warning, or note) with source location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Display)]
#[display("{severity} at {}: {message}", span.start)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub severity: DiagnosticSeverity,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            severity: DiagnosticSeverity::Error,
        }
    }
}

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum DiagnosticSeverity {
    #[display("error")]
    Error,
    #[display("warning")]
    Warning,
    #[display("note")]
    Note,
}
