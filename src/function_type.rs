//! Distributing a parsed functional type over operand and result types.
//!
//! Every format with a functional fallback ends up here once it has parsed
//! a `(T1, ..., Tn) -> R` type, so arity errors are reported in one place.

use hlo_ir::smallvec::smallvec;
use hlo_ir::{AsmErrorKind, AsmParser, FunctionType, ParseResult, Span, TypeRef, TypeVec};

/// Operand and result types recovered from a signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureTypes {
    pub operands: TypeVec,
    pub result: TypeRef,
}

impl SignatureTypes {
    /// `ty` for every one of `operand_count` operands and for the result.
    pub fn uniform(ty: TypeRef, operand_count: usize) -> Self {
        Self {
            operands: smallvec![ty; operand_count],
            result: ty,
        }
    }

    /// Split into a fixed number of operand types and the result type.
    ///
    /// The operand count must be `N`.
    pub(crate) fn into_fixed<const N: usize>(self) -> ([TypeRef; N], TypeRef) {
        debug_assert_eq!(self.operands.len(), N);
        (std::array::from_fn(|i| self.operands[i]), self.result)
    }
}

/// Assign the inputs of `func` to `operand_count` operands, and its single
/// output to the result.
///
/// Errors are reported at `loc`, the location of the functional type.
pub fn assign_from_function_type(
    parser: &mut AsmParser<'_>,
    loc: Span,
    operand_count: usize,
    func: &FunctionType,
) -> ParseResult<SignatureTypes> {
    if func.inputs.len() != operand_count {
        return Err(parser.emit_error(
            loc,
            AsmErrorKind::ArityMismatch {
                present: operand_count,
                expected: func.inputs.len(),
            },
        ));
    }
    let &[result] = func.outputs.as_slice() else {
        return Err(parser.emit_error(loc, AsmErrorKind::SingleResultExpected));
    };
    Ok(SignatureTypes {
        operands: func.inputs.clone(),
        result,
    })
}
