//! Signatures whose operands usually share the result type.
//!
//! When every operand has the result type, only the result type is printed:
//!
//! ```text
//! tensor<4xf32>
//! ```
//!
//! Otherwise the full signature is printed:
//!
//! ```text
//! (tensor<4xf32>, tensor<4xi32>) -> tensor<4xf32>
//! ```
//!
//! Nullary operations print their result type alone. A bare type carries no
//! operand count, so the parser takes it from the caller.

use std::fmt;

use hlo_ir::{AsmParser, AsmPrinter, OperandRef, ParseResult, TypeRef};
use tracing::trace;

use crate::function_type::{SignatureTypes, assign_from_function_type};

pub fn print_same_operands_and_result_type(
    p: &mut AsmPrinter<'_>,
    operands: &[TypeRef],
    result: TypeRef,
) -> fmt::Result {
    // A bare function-typed result would read back as a signature.
    let compact = !p.config().functional_signatures
        && !p.types().is_function(result)
        && operands.iter().all(|&ty| ty == result);
    if compact {
        trace!(operands = operands.len(), "printing shared operand and result type");
        p.print_type(result)
    } else {
        trace!(operands = operands.len(), "printing functional signature");
        p.print_functional_type(operands, &[result])
    }
}

pub fn print_variadic_same_operands_and_result_type(
    p: &mut AsmPrinter<'_>,
    operands: &[TypeRef],
    result: TypeRef,
) -> fmt::Result {
    print_same_operands_and_result_type(p, operands, result)
}

/// Parse the types of an operation with exactly `N` operands.
pub fn parse_same_operands_and_result_type<const N: usize>(
    parser: &mut AsmParser<'_>,
) -> ParseResult<([TypeRef; N], TypeRef)> {
    parse_same_types(parser, N).map(SignatureTypes::into_fixed::<N>)
}

/// Parse the types of a variadic operation whose operands were already
/// parsed.
pub fn parse_variadic_same_operands_and_result_type(
    parser: &mut AsmParser<'_>,
    operands: &[OperandRef],
) -> ParseResult<SignatureTypes> {
    parse_same_types(parser, operands.len())
}

fn parse_same_types(
    parser: &mut AsmParser<'_>,
    operand_count: usize,
) -> ParseResult<SignatureTypes> {
    let loc = parser.current_location();
    let ty = parser.parse_type()?;
    match parser.types().as_function(ty).cloned() {
        Some(func) => {
            trace!(operand_count, "parsed functional signature");
            assign_from_function_type(parser, loc, operand_count, &func)
        }
        None => Ok(SignatureTypes::uniform(ty, operand_count)),
    }
}
