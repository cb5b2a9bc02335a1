//! Variadic operands followed by an attribute. Every operand, including the
//! last, is followed by `,`:
//!
//! ```text
//! %lhs, %rhs, dim = 1
//! ```
//!
//! Only the operand list and its commas belong to this format. Parsing
//! stops at the first token that does not start an operand.

use std::fmt::{self, Write};

use hlo_ir::smallvec::SmallVec;
use hlo_ir::{AsmParser, AsmPrinter, OperandRef, ParseResult};

pub fn print_variadic_operand_with_attribute(
    p: &mut AsmPrinter<'_>,
    operands: &[OperandRef],
) -> fmt::Result {
    p.print_operands(operands)?;
    p.write_char(',')
}

pub fn parse_variadic_operand_with_attribute(
    parser: &mut AsmParser<'_>,
) -> ParseResult<SmallVec<[OperandRef; 4]>> {
    let mut operands = SmallVec::new();
    while let Some(operand) = parser.parse_optional_operand() {
        operands.push(operand?);
        parser.parse_comma()?;
    }
    Ok(operands)
}
