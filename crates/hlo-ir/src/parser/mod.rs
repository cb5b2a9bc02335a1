//! Parser context for custom assembly formats.
//!
//! [`AsmParser`] is the cursor a custom format parses from. It recognizes
//! types, type lists, operand references, keywords, and punctuation, and
//! records a [`Diagnostic`] for every error it reports. Types are parsed in
//! two stages: winnow combinators in [`raw`] produce `RawType`s, which are
//! then interned into the borrowed [`TypeInterner`].

pub(crate) mod raw;

use tracing::debug;
use winnow::prelude::*;

use crate::attributes::IntegerAttr;
use crate::diagnostic::Diagnostic;
use crate::error::{AsmError, AsmErrorKind, ParseResult};
use crate::location::Span;
use crate::operand::OperandRef;
use crate::refs::TypeRef;
use crate::types::{TypeInterner, TypeVec};

/// Parser state over one piece of assembly text.
///
/// The parser only borrows the interner, so a fresh parser can be created
/// per parse call while types stay comparable across calls.
pub struct AsmParser<'a> {
    source: &'a str,
    rest: &'a str,
    types: &'a mut TypeInterner,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> AsmParser<'a> {
    pub fn new(types: &'a mut TypeInterner, source: &'a str) -> Self {
        Self {
            source,
            rest: source,
            types,
            diagnostics: Vec::new(),
        }
    }

    pub fn types(&self) -> &TypeInterner {
        self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeInterner {
        self.types
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    /// Check if only whitespace remains.
    pub fn is_at_end(&mut self) -> bool {
        self.skip_ws();
        self.rest.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn offset(&self) -> usize {
        self.source.len() - self.rest.len()
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
    }

    /// Location of the next token.
    pub fn current_location(&mut self) -> Span {
        self.skip_ws();
        Span::point(self.offset())
    }

    /// Record an error diagnostic at `span` and return the error to propagate.
    pub fn emit_error(&mut self, span: Span, kind: AsmErrorKind) -> AsmError {
        let error = AsmError::new(kind, span);
        debug!(offset = span.start, message = %error.kind(), "assembly format error");
        self.diagnostics
            .push(Diagnostic::error(error.kind().to_string(), span));
        error
    }

    /// Error for input that should have been a type.
    fn type_error(&mut self, loc: Span) -> AsmError {
        let token: &str = self
            .rest
            .split(|c: char| c.is_ascii_whitespace() || c == ',')
            .next()
            .unwrap_or_default();
        let looks_like_type =
            token.starts_with(|c: char| c.is_ascii_alphabetic() || c == '(' || c == '!');
        let kind = if looks_like_type {
            AsmErrorKind::InvalidTypeSyntax(token.to_owned())
        } else {
            AsmErrorKind::ExpectedType
        };
        self.emit_error(loc, kind)
    }

    // ---- Types ----

    /// Parse a single type.
    pub fn parse_type(&mut self) -> ParseResult<TypeRef> {
        let loc = self.current_location();
        let mut input = self.rest;
        match raw::raw_type.parse_next(&mut input) {
            Ok(ty) => {
                self.rest = input;
                Ok(raw::build_type(self.types, &ty))
            }
            Err(_) => Err(self.type_error(loc)),
        }
    }

    /// Parse one or more comma-separated types.
    ///
    /// A `,` commits to another type, so `i32, %x` is an error at `%x`.
    pub fn parse_type_list(&mut self) -> ParseResult<TypeVec> {
        let mut tys = TypeVec::new();
        tys.push(self.parse_type()?);
        while self.parse_optional_comma() {
            tys.push(self.parse_type()?);
        }
        Ok(tys)
    }

    // ---- Operands ----

    /// Parse an operand reference if the next token starts one.
    ///
    /// Returns `None` without consuming input when the next token does not
    /// start with `%`.
    pub fn parse_optional_operand(&mut self) -> Option<ParseResult<OperandRef>> {
        let loc = self.current_location();
        if !self.rest.starts_with('%') {
            return None;
        }
        let mut input = self.rest;
        Some(match raw::operand_ref.parse_next(&mut input) {
            Ok((name, number)) => {
                self.rest = input;
                Ok(OperandRef::new(name).with_number(number))
            }
            Err(_) => Err(self.emit_error(loc, AsmErrorKind::ExpectedOperand)),
        })
    }

    /// Parse an operand reference.
    pub fn parse_operand(&mut self) -> ParseResult<OperandRef> {
        match self.parse_optional_operand() {
            Some(result) => result,
            None => {
                let loc = self.current_location();
                Err(self.emit_error(loc, AsmErrorKind::ExpectedOperand))
            }
        }
    }

    // ---- Punctuation and keywords ----

    /// Consume a `,` if it is the next token.
    pub fn parse_optional_comma(&mut self) -> bool {
        self.skip_ws();
        match self.rest.strip_prefix(',') {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    pub fn parse_comma(&mut self) -> ParseResult<()> {
        let loc = self.current_location();
        if self.parse_optional_comma() {
            Ok(())
        } else {
            Err(self.emit_error(loc, AsmErrorKind::ExpectedComma))
        }
    }

    /// Parse a bare keyword: [a-zA-Z_][a-zA-Z0-9_$.]*
    pub fn parse_keyword(&mut self) -> ParseResult<&'a str> {
        let loc = self.current_location();
        let mut input = self.rest;
        match raw::keyword.parse_next(&mut input) {
            Ok(keyword) => {
                self.rest = input;
                Ok(keyword)
            }
            Err(_) => Err(self.emit_error(loc, AsmErrorKind::ExpectedKeyword)),
        }
    }

    // ---- Attributes ----

    pub fn i32_integer_attr(&mut self, value: i32) -> IntegerAttr {
        IntegerAttr::i32(self.types, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::print_type;
    use insta::assert_snapshot;

    fn reprint(text: &str) -> String {
        let mut types = TypeInterner::new();
        let mut parser = AsmParser::new(&mut types, text);
        let ty = parser.parse_type().expect("should parse type");
        assert!(parser.is_at_end(), "trailing input: {}", parser.rest());
        print_type(&types, ty)
    }

    #[test]
    fn test_reprint_types() {
        assert_snapshot!(reprint("tensor<4xf32>"), @"tensor<4xf32>");
        assert_snapshot!(reprint("  tensor<?x3xcomplex<f32>>"), @"tensor<?x3xcomplex<f32>>");
        assert_snapshot!(reprint("tuple<tensor<i32>, !stablehlo.token>"), @"tuple<tensor<i32>, !stablehlo.token>");
        assert_snapshot!(reprint("tuple<>"), @"tuple<>");
        assert_snapshot!(reprint("(tensor<2xi1>,tensor<2xf32>) -> tensor<2xf32>"), @"(tensor<2xi1>, tensor<2xf32>) -> tensor<2xf32>");
        assert_snapshot!(reprint("() -> ()"), @"() -> ()");
        assert_snapshot!(reprint("(f32) -> (f32, f64)"), @"(f32) -> (f32, f64)");
    }

    #[test]
    fn test_parse_type_interns() {
        let mut types = TypeInterner::new();
        let mut parser = AsmParser::new(&mut types, "tensor<4xf32>, tensor<4xf32>");
        let list = parser.parse_type_list().expect("should parse list");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], list[1]);
    }

    #[test]
    fn test_parse_type_list_commits_after_comma() {
        let mut types = TypeInterner::new();
        let mut parser = AsmParser::new(&mut types, "i32, %x");
        let err = parser.parse_type_list().expect_err("operand after comma");
        assert_eq!(err.kind(), &AsmErrorKind::ExpectedType);
        assert_eq!(err.span(), Span::point(5));
    }

    #[test]
    fn test_parse_type_error_location() {
        let mut types = TypeInterner::new();
        let mut parser = AsmParser::new(&mut types, "   %0");
        let err = parser.parse_type().expect_err("operand is not a type");
        assert_eq!(err.kind(), &AsmErrorKind::ExpectedType);
        assert_eq!(err.span(), Span::point(3));
        assert_eq!(parser.rest(), "%0", "failed parse must not consume input");

        let diagnostics = parser.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_snapshot!(diagnostics[0].to_string(), @"error at 3: expected type");
    }

    #[test]
    fn test_parse_malformed_type() {
        let mut types = TypeInterner::new();
        let mut parser = AsmParser::new(&mut types, "tensor<4xf32");
        let err = parser.parse_type().expect_err("unterminated tensor");
        assert_eq!(
            err.kind(),
            &AsmErrorKind::InvalidTypeSyntax("tensor<4xf32".to_owned())
        );
    }

    #[test]
    fn test_parse_optional_operand() {
        let mut types = TypeInterner::new();
        let mut parser = AsmParser::new(&mut types, "%x, %0#1 i32");

        let first = parser.parse_optional_operand().expect("operand present");
        assert_eq!(first.expect("valid operand"), OperandRef::new("x"));
        parser.parse_comma().expect("comma");

        let second = parser.parse_operand().expect("valid operand");
        assert_eq!(second.to_string(), "%0#1");

        assert!(parser.parse_optional_operand().is_none());
        assert_eq!(parser.rest(), "i32");
    }

    #[test]
    fn test_parse_comma_error() {
        let mut types = TypeInterner::new();
        let mut parser = AsmParser::new(&mut types, "%a %b");
        parser.parse_operand().expect("operand");
        let err = parser.parse_comma().expect_err("missing comma");
        assert_eq!(err.kind(), &AsmErrorKind::ExpectedComma);
        assert_eq!(err.span(), Span::point(3));
    }

    #[test]
    fn test_parse_keyword() {
        let mut types = TypeInterner::new();
        let mut parser = AsmParser::new(&mut types, " e4m3 ");
        assert_eq!(parser.parse_keyword().expect("keyword"), "e4m3");
        assert!(parser.is_at_end());

        let mut parser = AsmParser::new(&mut types, "42");
        let err = parser.parse_keyword().expect_err("digits are not a keyword");
        assert_eq!(err.kind(), &AsmErrorKind::ExpectedKeyword);
    }
}
