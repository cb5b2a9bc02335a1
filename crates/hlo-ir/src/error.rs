//! Error types for assembly parsing.

use derive_more::Display;

use crate::location::Span;

pub type ParseResult<T> = Result<T, AsmError>;

/// A parse failure. The matching [`crate::Diagnostic`] has already been
/// recorded by the parser that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
#[display("{kind} (at offset {})", span.start)]
pub struct AsmError {
    kind: Box<AsmErrorKind>,
    span: Span,
}

impl AsmError {
    pub fn new(kind: AsmErrorKind, span: Span) -> Self {
        Self {
            kind: Box::new(kind),
            span,
        }
    }

    pub fn kind(&self) -> &AsmErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl std::error::Error for AsmError {}

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum AsmErrorKind {
    // ---- Tokens ----
    #[display("expected type")]
    ExpectedType,

    #[display("invalid type syntax '{_0}'")]
    InvalidTypeSyntax(String),

    #[display("expected keyword")]
    ExpectedKeyword,

    #[display("expected SSA operand")]
    ExpectedOperand,

    #[display("expected ','")]
    ExpectedComma,

    // ---- Type signatures ----
    #[display("{present} operands present, but expected {expected}")]
    ArityMismatch { present: usize, expected: usize },

    #[display("expected single output")]
    SingleResultExpected,

    #[display("expected tuple type")]
    ExpectedTupleType,

    #[display("expected type list")]
    ExpectedTypeList,

    #[display("expected tensor with complex element type")]
    ExpectedComplexTensorType,

    #[display("expected functional type or list of two types")]
    InvalidSelectTypeSyntax,

    // ---- Attributes ----
    #[display("expected exponent mantissa in format e#m#, saw {_0}")]
    MalformedExponentMantissa(String),

    #[display("unable to parse exponent '{_0}'")]
    InvalidExponentDigits(String),

    #[display("unable to parse mantissa '{_0}'")]
    InvalidMantissaDigits(String),
}
