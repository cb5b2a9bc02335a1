//! Floating-point format descriptors written as a single `e#m#` keyword:
//! `e5m10` has a 5-bit exponent and a 10-bit mantissa.

use std::fmt::{self, Write};

use hlo_ir::{AsmErrorKind, AsmParser, AsmPrinter, IntegerAttr, ParseResult};
use winnow::ascii::digit1;
use winnow::combinator::preceded;
use winnow::prelude::*;

/// Exponent and mantissa bit counts as 32-bit integer attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExponentMantissa {
    pub exponent: IntegerAttr,
    pub mantissa: IntegerAttr,
}

pub fn print_exponent_mantissa(
    p: &mut AsmPrinter<'_>,
    exponent: &IntegerAttr,
    mantissa: &IntegerAttr,
) -> fmt::Result {
    p.write_char('e')?;
    p.print_attribute_without_type(exponent)?;
    p.write_char('m')?;
    p.print_attribute_without_type(mantissa)
}

/// The two digit runs of `e<digits>m<digits>`.
fn exponent_mantissa<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    (preceded('e', digit1), preceded('m', digit1)).parse_next(input)
}

pub fn parse_exponent_mantissa(parser: &mut AsmParser<'_>) -> ParseResult<ExponentMantissa> {
    let loc = parser.current_location();
    let keyword = parser.parse_keyword()?;

    let Ok((exponent, mantissa)) = exponent_mantissa.parse(keyword) else {
        return Err(parser.emit_error(
            loc,
            AsmErrorKind::MalformedExponentMantissa(keyword.to_owned()),
        ));
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return Err(parser.emit_error(loc, AsmErrorKind::InvalidExponentDigits(exponent.to_owned())));
    };
    let Ok(mantissa) = mantissa.parse::<i32>() else {
        return Err(parser.emit_error(loc, AsmErrorKind::InvalidMantissaDigits(mantissa.to_owned())));
    };

    Ok(ExponentMantissa {
        exponent: parser.i32_integer_attr(exponent),
        mantissa: parser.i32_integer_attr(mantissa),
    })
}
