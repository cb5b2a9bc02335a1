//! Select: a predicate chooses between two values of the result type.
//! The compact form prints the predicate type and the shared type:
//!
//! ```text
//! tensor<2xi1>, tensor<2xf32>
//! ```
//!
//! When either branch differs from the result, the full
//! `(pred, on_true, on_false) -> result` signature is printed.

use std::fmt::{self, Write};

use hlo_ir::{AsmErrorKind, AsmParser, AsmPrinter, ParseResult, TypeRef};
use tracing::trace;

use crate::function_type::assign_from_function_type;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOpTypes {
    pub pred: TypeRef,
    pub on_true: TypeRef,
    pub on_false: TypeRef,
    pub result: TypeRef,
}

pub fn print_select_op_type(p: &mut AsmPrinter<'_>, types: &SelectOpTypes) -> fmt::Result {
    let compact = !p.config().functional_signatures
        && types.on_true == types.result
        && types.on_false == types.result;
    if compact {
        trace!("printing predicate and shared type");
        p.print_type(types.pred)?;
        p.write_str(", ")?;
        p.print_type(types.result)
    } else {
        trace!("printing functional signature");
        p.print_functional_type(&[types.pred, types.on_true, types.on_false], &[types.result])
    }
}

pub fn parse_select_op_type(parser: &mut AsmParser<'_>) -> ParseResult<SelectOpTypes> {
    let loc = parser.current_location();
    let Ok(tys) = parser.parse_type_list() else {
        return Err(parser.emit_error(loc, AsmErrorKind::InvalidSelectTypeSyntax));
    };

    match *tys.as_slice() {
        [pred, shared] => Ok(SelectOpTypes {
            pred,
            on_true: shared,
            on_false: shared,
            result: shared,
        }),
        [ty] => {
            let Some(func) = parser.types().as_function(ty).cloned() else {
                return Err(parser.emit_error(loc, AsmErrorKind::InvalidSelectTypeSyntax));
            };
            let ([pred, on_true, on_false], result) =
                assign_from_function_type(parser, loc, 3, &func)?.into_fixed::<3>();
            Ok(SelectOpTypes {
                pred,
                on_true,
                on_false,
                result,
            })
        }
        _ => Err(parser.emit_error(loc, AsmErrorKind::InvalidSelectTypeSyntax)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hlo_ir::TypeInterner;
    use insta::assert_snapshot;

    fn parse(types: &mut TypeInterner, text: &str) -> Result<SelectOpTypes, String> {
        let mut parser = AsmParser::new(types, text);
        parse_select_op_type(&mut parser).map_err(|err| err.to_string())
    }

    #[test]
    fn test_parse_compact_and_functional_agree() {
        let mut types = TypeInterner::new();
        let compact = parse(&mut types, "i1, i32").unwrap();
        let functional = parse(&mut types, "(i1, i32, i32) -> i32").unwrap();

        let i1 = types.signless(1);
        let i32_ty = types.signless(32);
        let expected = SelectOpTypes {
            pred: i1,
            on_true: i32_ty,
            on_false: i32_ty,
            result: i32_ty,
        };
        assert_eq!(compact, expected);
        assert_eq!(functional, expected);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        let mut types = TypeInterner::new();
        assert_snapshot!(
            parse(&mut types, "i1, i32, i32").unwrap_err(),
            @"expected functional type or list of two types (at offset 0)"
        );
        assert_snapshot!(
            parse(&mut types, "i32").unwrap_err(),
            @"expected functional type or list of two types (at offset 0)"
        );
        assert_snapshot!(
            parse(&mut types, "{}").unwrap_err(),
            @"expected functional type or list of two types (at offset 0)"
        );
    }

    #[test]
    fn test_parse_functional_arity() {
        let mut types = TypeInterner::new();
        assert_snapshot!(
            parse(&mut types, "(i1, i32) -> i32").unwrap_err(),
            @"3 operands present, but expected 2 (at offset 0)"
        );
    }

    #[test]
    fn test_print_both_forms() {
        let mut types = TypeInterner::new();
        let i1 = types.signless(1);
        let i32_ty = types.signless(32);
        let i64_ty = types.signless(64);

        let mut p = AsmPrinter::new(&types);
        let same = SelectOpTypes {
            pred: i1,
            on_true: i32_ty,
            on_false: i32_ty,
            result: i32_ty,
        };
        print_select_op_type(&mut p, &same).unwrap();
        assert_snapshot!(p.finish(), @"i1, i32");

        let mut p = AsmPrinter::new(&types);
        let mixed = SelectOpTypes {
            on_false: i64_ty,
            ..same
        };
        print_select_op_type(&mut p, &mixed).unwrap();
        assert_snapshot!(p.finish(), @"(i1, i32, i64) -> i32");
    }
}
