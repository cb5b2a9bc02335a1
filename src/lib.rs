//! Custom assembly formats for HLO tensor operations.
//!
//! The generic assembly form spells out every signature as
//! `(T1, T2) -> T3`. The printers and parsers in this crate write a compact,
//! operation-specific syntax whenever the omitted types can be recovered by
//! a fixed rule, and fall back to the functional form otherwise. For every
//! format, parsing the printed text yields the types it was printed from.
//!
//! Parsers return structured values and report failures through
//! [`AsmParser::emit_error`](hlo_ir::AsmParser::emit_error), so the
//! diagnostics are left on the parser for the caller to inspect.

// === Shared signature helpers ===
pub mod function_type;

// === Per-operation formats ===
pub mod complex;
pub mod exponent_mantissa;
pub mod pairwise;
pub mod same_type;
pub mod select;
pub mod tuple;
pub mod variadic_operand;

pub use complex::{ComplexOpTypes, parse_complex_op_type, print_complex_op_type};
pub use exponent_mantissa::{ExponentMantissa, parse_exponent_mantissa, print_exponent_mantissa};
pub use function_type::{SignatureTypes, assign_from_function_type};
pub use pairwise::{PairwiseTypes, parse_pairwise_op_type, print_pairwise_op_type};
pub use same_type::{
    parse_same_operands_and_result_type, parse_variadic_same_operands_and_result_type,
    print_same_operands_and_result_type, print_variadic_same_operands_and_result_type,
};
pub use select::{SelectOpTypes, parse_select_op_type, print_select_op_type};
pub use tuple::{TupleOpTypes, parse_tuple_op_type, print_tuple_op_type};
pub use variadic_operand::{
    parse_variadic_operand_with_attribute, print_variadic_operand_with_attribute,
};
