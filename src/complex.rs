//! Complex construction from real and imaginary tensors.
//!
//! Both operands normally have the result's shape with the `complex<>`
//! wrapper removed from the element type, and only the result is printed:
//!
//! ```text
//! tensor<4xcomplex<f32>>
//! ```

use std::fmt;

use hlo_ir::{AsmErrorKind, AsmParser, AsmPrinter, ParseResult, TypeRef};
use tracing::trace;

use crate::function_type::assign_from_function_type;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComplexOpTypes {
    pub lhs: TypeRef,
    pub rhs: TypeRef,
    pub result: TypeRef,
}

pub fn print_complex_op_type(
    p: &mut AsmPrinter<'_>,
    lhs: TypeRef,
    rhs: TypeRef,
    result: TypeRef,
) -> fmt::Result {
    let types = p.types();
    // An operand type that was never interned cannot be the real type.
    let real = types.lookup_real_type(result);
    let compact = !p.config().functional_signatures
        && types.is_complex_tensor(result)
        && real == Some(lhs)
        && real == Some(rhs);
    if compact {
        trace!("printing complex result type");
        p.print_type(result)
    } else {
        trace!("printing functional signature");
        p.print_functional_type(&[lhs, rhs], &[result])
    }
}

pub fn parse_complex_op_type(parser: &mut AsmParser<'_>) -> ParseResult<ComplexOpTypes> {
    let loc = parser.current_location();
    let ty = parser.parse_type()?;

    if let Some(func) = parser.types().as_function(ty).cloned() {
        let ([lhs, rhs], result) =
            assign_from_function_type(parser, loc, 2, &func)?.into_fixed::<2>();
        return Ok(ComplexOpTypes { lhs, rhs, result });
    }

    if !parser.types().is_complex_tensor(ty) {
        return Err(parser.emit_error(loc, AsmErrorKind::ExpectedComplexTensorType));
    }
    let real = parser.types_mut().real_type(ty);
    Ok(ComplexOpTypes {
        lhs: real,
        rhs: real,
        result: ty,
    })
}
