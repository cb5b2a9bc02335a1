//! HLO IR infrastructure for textual assembly.
//!
//! This crate provides what the custom assembly formats of an HLO dialect
//! are written against: interned types, integer attributes, source spans,
//! diagnostics, and the parser/printer contexts that read and write the
//! textual form of types.

pub mod attributes;
pub mod diagnostic;
pub mod error;
pub mod location;
pub mod operand;
pub mod parser;
pub mod printer;
pub mod refs;
pub mod types;

pub use attributes::IntegerAttr;
pub use diagnostic::{Diagnostic, DiagnosticSeverity};
pub use error::{AsmError, AsmErrorKind, ParseResult};
pub use location::Span;
pub use operand::OperandRef;
pub use parser::AsmParser;
pub use printer::{AsmPrinter, PrintConfig, print_type};
pub use refs::TypeRef;
pub use types::{
    Dim, FloatKind, FunctionType, Signedness, TensorShape, TensorType, TypeData, TypeInterner,
    TypeVec,
};

// Re-export smallvec for the type lists that cross the crate boundary
pub use smallvec;
