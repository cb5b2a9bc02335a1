//! Operations whose results are their operands passed through one to one.
//! Only the operand types are printed.
//!
//! ```text
//! tensor<4xf32>, !stablehlo.token
//! ```

use std::fmt;

use hlo_ir::{AsmErrorKind, AsmParser, AsmPrinter, ParseResult, TypeRef, TypeVec};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairwiseTypes {
    pub operands: TypeVec,
    pub results: TypeVec,
}

pub fn print_pairwise_op_type(p: &mut AsmPrinter<'_>, operands: &[TypeRef]) -> fmt::Result {
    p.print_types(operands)
}

pub fn parse_pairwise_op_type(parser: &mut AsmParser<'_>) -> ParseResult<PairwiseTypes> {
    let loc = parser.current_location();
    match parser.parse_type_list() {
        Ok(operands) => Ok(PairwiseTypes {
            results: operands.clone(),
            operands,
        }),
        Err(_) => Err(parser.emit_error(loc, AsmErrorKind::ExpectedTypeList)),
    }
}
