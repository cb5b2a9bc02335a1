//! Tuple construction: only the tuple type is printed, and the operand
//! types are its members.
//!
//! ```text
//! tuple<tensor<f32>, !stablehlo.token>
//! ```

use std::fmt;

use hlo_ir::{AsmErrorKind, AsmParser, AsmPrinter, ParseResult, TypeRef, TypeVec};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TupleOpTypes {
    pub operands: TypeVec,
    pub result: TypeRef,
}

pub fn print_tuple_op_type(p: &mut AsmPrinter<'_>, result: TypeRef) -> fmt::Result {
    p.print_type(result)
}

pub fn parse_tuple_op_type(parser: &mut AsmParser<'_>) -> ParseResult<TupleOpTypes> {
    let loc = parser.current_location();
    let result = parser.parse_type()?;
    let Some(operands) = parser.types().as_tuple(result).map(TypeVec::from) else {
        return Err(parser.emit_error(loc, AsmErrorKind::ExpectedTupleType));
    };
    Ok(TupleOpTypes { operands, result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hlo_ir::{FloatKind, TypeInterner};
    use insta::assert_snapshot;

    #[test]
    fn test_parse_tuple_members() {
        let mut types = TypeInterner::new();
        let parsed = {
            let mut parser = AsmParser::new(&mut types, "tuple<i32, f32>");
            parse_tuple_op_type(&mut parser).unwrap()
        };
        let i32_ty = types.signless(32);
        let f32_ty = types.float(FloatKind::F32);
        assert_eq!(parsed.operands.as_slice(), &[i32_ty, f32_ty]);
        assert_eq!(parsed.result, types.tuple([i32_ty, f32_ty]));
    }

    #[test]
    fn test_parse_empty_tuple() {
        let mut types = TypeInterner::new();
        let mut parser = AsmParser::new(&mut types, "tuple<>");
        let parsed = parse_tuple_op_type(&mut parser).unwrap();
        assert!(parsed.operands.is_empty());
    }

    #[test]
    fn test_parse_non_tuple() {
        let mut types = TypeInterner::new();
        let mut parser = AsmParser::new(&mut types, "  tensor<i32>");
        let err = parse_tuple_op_type(&mut parser).unwrap_err();
        assert_snapshot!(err, @"expected tuple type (at offset 2)");
        assert_snapshot!(parser.diagnostics()[0], @"error at 2: expected tuple type");
    }

    #[test]
    fn test_print_tuple() {
        let mut types = TypeInterner::new();
        let token = types.token();
        let i1 = types.signless(1);
        let tuple = types.tuple([i1, token]);

        let mut p = AsmPrinter::new(&types);
        print_tuple_op_type(&mut p, tuple).unwrap();
        assert_snapshot!(p.finish(), @"tuple<i1, !stablehlo.token>");
    }
}
