//! Raw (uninterned) type syntax and the winnow combinators for it.
//!
//! This is the "stage 1" parser: text → `RawType`. [`build_type`] is
//! stage 2, interning a `RawType` into a [`TypeInterner`].
//!
//! ```text
//! type    := int | float | 'index' | '!stablehlo.token'
//!          | 'complex' '<' type '>'
//!          | 'tensor' '<' (dim 'x')* type '>' | 'tensor' '<' '*' 'x' type '>'
//!          | 'tuple' '<' (type (',' type)*)? '>'
//!          | '(' (type (',' type)*)? ')' '->' (type | '(' (type (',' type)*)? ')')
//! dim     := [0-9]+ | '?'
//! ```

use winnow::ascii::dec_uint;
use winnow::combinator::{alt, delimited, opt, preceded, separated, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::refs::TypeRef;
use crate::types::{Dim, FloatKind, Signedness, TypeInterner, TypeVec};

// ============================================================================
// Raw type
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawType {
    Integer {
        width: u32,
        signedness: Signedness,
    },
    Float(FloatKind),
    Index,
    Token,
    Complex(Box<RawType>),
    /// `shape` is `None` for unranked tensors.
    Tensor {
        shape: Option<Vec<Dim>>,
        element: Box<RawType>,
    },
    Tuple(Vec<RawType>),
    Function {
        inputs: Vec<RawType>,
        outputs: Vec<RawType>,
    },
}

fn backtrack<T>() -> ModalResult<T> {
    Err(ErrMode::Backtrack(ContextError::new()))
}

// ============================================================================
// Tokens
// ============================================================================

/// Skip whitespace.
pub(crate) fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse an identifier: [a-zA-Z_][a-zA-Z0-9_]*
fn ident<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

/// Parse a bare keyword: [a-zA-Z_][a-zA-Z0-9_$.]*
pub(crate) fn keyword<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.')
        }),
    )
        .take()
        .parse_next(input)
}

/// Parse an operand reference: %name or %name#N
pub(crate) fn operand_ref<'a>(input: &mut &'a str) -> ModalResult<(&'a str, Option<u32>)> {
    let name = preceded(
        '%',
        take_while(1.., |c: char| {
            c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.' | '-')
        }),
    )
    .parse_next(input)?;
    let number = opt(preceded('#', dec_uint::<_, u32, _>)).parse_next(input)?;
    Ok((name, number))
}

// ============================================================================
// Types
// ============================================================================

/// Parse a single type.
pub(crate) fn raw_type(input: &mut &str) -> ModalResult<RawType> {
    alt((function_type, token_type, named_type)).parse_next(input)
}

/// Parse zero or more comma-separated types.
fn raw_type_list0(input: &mut &str) -> ModalResult<Vec<RawType>> {
    separated(0.., delimited(ws, raw_type, ws), ',').parse_next(input)
}

fn parenthesized_types(input: &mut &str) -> ModalResult<Vec<RawType>> {
    delimited(('(', ws), raw_type_list0, (ws, ')')).parse_next(input)
}

/// Parse `(inputs) -> result` or `(inputs) -> (results)`.
fn function_type(input: &mut &str) -> ModalResult<RawType> {
    let inputs = parenthesized_types.parse_next(input)?;
    (ws, "->", ws).parse_next(input)?;
    let outputs = alt((parenthesized_types, raw_type.map(|ty| vec![ty]))).parse_next(input)?;
    Ok(RawType::Function { inputs, outputs })
}

fn token_type(input: &mut &str) -> ModalResult<RawType> {
    "!stablehlo.token".value(RawType::Token).parse_next(input)
}

/// Parse a type introduced by a keyword: scalars, `complex<>`, `tensor<>`, `tuple<>`.
fn named_type(input: &mut &str) -> ModalResult<RawType> {
    let name = ident.parse_next(input)?;
    match name {
        "index" => Ok(RawType::Index),
        "complex" => delimited(('<', ws), raw_type, (ws, '>'))
            .map(|element| RawType::Complex(Box::new(element)))
            .parse_next(input),
        "tensor" => tensor_body.parse_next(input),
        "tuple" => delimited(('<', ws), raw_type_list0, (ws, '>'))
            .map(RawType::Tuple)
            .parse_next(input),
        _ => match scalar_type(name) {
            Some(ty) => Ok(ty),
            None => backtrack(),
        },
    }
}

/// Map `i32`, `si8`, `ui16`, `f32`, ... to a scalar type.
fn scalar_type(name: &str) -> Option<RawType> {
    if let Some(kind) = FloatKind::from_keyword(name) {
        return Some(RawType::Float(kind));
    }
    let (signedness, digits) = if let Some(rest) = name.strip_prefix("si") {
        (Signedness::Signed, rest)
    } else if let Some(rest) = name.strip_prefix("ui") {
        (Signedness::Unsigned, rest)
    } else {
        (Signedness::Signless, name.strip_prefix('i')?)
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let width: u32 = digits.parse().ok()?;
    (width > 0).then_some(RawType::Integer { width, signedness })
}

/// Parse the `<...>` part of a tensor type.
fn tensor_body(input: &mut &str) -> ModalResult<RawType> {
    ('<', ws).parse_next(input)?;
    let shape = if opt(('*', 'x')).parse_next(input)?.is_some() {
        None
    } else {
        let mut dims = Vec::new();
        while let Some(dim) = opt(terminated(dim, 'x')).parse_next(input)? {
            dims.push(dim);
        }
        Some(dims)
    };
    let element = raw_type.parse_next(input)?;
    (ws, '>').parse_next(input)?;
    Ok(RawType::Tensor {
        shape,
        element: Box::new(element),
    })
}

fn dim(input: &mut &str) -> ModalResult<Dim> {
    alt(('?'.value(Dim::Dynamic), dec_uint::<_, u64, _>.map(Dim::Static))).parse_next(input)
}

// ============================================================================
// Interning
// ============================================================================

/// Intern a raw type and all of its component types.
pub(crate) fn build_type(types: &mut TypeInterner, raw: &RawType) -> TypeRef {
    match raw {
        RawType::Integer { width, signedness } => types.integer(*width, *signedness),
        RawType::Float(kind) => types.float(*kind),
        RawType::Index => types.index(),
        RawType::Token => types.token(),
        RawType::Complex(element) => {
            let element = build_type(types, element);
            types.complex(element)
        }
        RawType::Tensor { shape, element } => {
            let element = build_type(types, element);
            match shape {
                Some(dims) => types.ranked_tensor(dims.iter().copied(), element),
                None => types.unranked_tensor(element),
            }
        }
        RawType::Tuple(members) => {
            let members: TypeVec = members.iter().map(|m| build_type(types, m)).collect();
            types.tuple(members)
        }
        RawType::Function { inputs, outputs } => {
            let inputs: TypeVec = inputs.iter().map(|t| build_type(types, t)).collect();
            let outputs: TypeVec = outputs.iter().map(|t| build_type(types, t)).collect();
            types.function(inputs, outputs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar_types() {
        let cases = [
            ("i1", RawType::Integer { width: 1, signedness: Signedness::Signless }),
            ("si8", RawType::Integer { width: 8, signedness: Signedness::Signed }),
            ("ui64", RawType::Integer { width: 64, signedness: Signedness::Unsigned }),
            ("bf16", RawType::Float(FloatKind::BF16)),
            ("f8E4M3FN", RawType::Float(FloatKind::F8E4M3FN)),
            ("index", RawType::Index),
            ("!stablehlo.token", RawType::Token),
        ];
        for (text, expected) in cases {
            let mut input = text;
            let raw = raw_type.parse_next(&mut input).expect("should parse type");
            assert_eq!(raw, expected, "failed for input: {}", text);
            assert!(input.is_empty(), "unconsumed input for: {}", text);
        }
    }

    #[test]
    fn test_reject_non_types() {
        for text in ["i", "i0", "x32", "f31", "%0", "tensor", "complex<>", "tensor<4x>"] {
            let mut input = text;
            assert!(
                raw_type.parse_next(&mut input).is_err(),
                "should reject: {}",
                text
            );
        }
    }

    #[test]
    fn test_parse_tensor_shapes() {
        let mut input = "tensor<4x?xf32>";
        let raw = raw_type.parse_next(&mut input).expect("should parse tensor");
        assert_eq!(
            raw,
            RawType::Tensor {
                shape: Some(vec![Dim::Static(4), Dim::Dynamic]),
                element: Box::new(RawType::Float(FloatKind::F32)),
            }
        );

        let mut input = "tensor<i1>";
        let raw = raw_type.parse_next(&mut input).expect("should parse rank-0");
        assert!(matches!(raw, RawType::Tensor { shape: Some(ref dims), .. } if dims.is_empty()));

        let mut input = "tensor<*xcomplex<f64>>";
        let raw = raw_type.parse_next(&mut input).expect("should parse unranked");
        assert!(matches!(raw, RawType::Tensor { shape: None, .. }));
        assert!(input.is_empty());
    }

    #[test]
    fn test_parse_function_types() {
        let mut input = "(i32, f32) -> i32";
        let raw = raw_type.parse_next(&mut input).expect("should parse");
        assert!(
            matches!(raw, RawType::Function { ref inputs, ref outputs } if inputs.len() == 2 && outputs.len() == 1)
        );

        let mut input = "() -> (i32, i64)";
        let raw = raw_type.parse_next(&mut input).expect("should parse");
        assert!(
            matches!(raw, RawType::Function { ref inputs, ref outputs } if inputs.is_empty() && outputs.len() == 2)
        );
    }

    #[test]
    fn test_type_list_stops_before_non_type() {
        let mut input = "i1, tensor<2xi32> {foo}";
        let raws = raw_type_list0.parse_next(&mut input).expect("should parse");
        assert_eq!(raws.len(), 2);
        assert_eq!(input, "{foo}");
    }

    #[test]
    fn test_parse_operand_refs() {
        let mut input = "%arg0, %1#2";
        assert_eq!(operand_ref.parse_next(&mut input).expect("name"), ("arg0", None));
        assert_eq!(input, ", %1#2");

        let mut input = "%1#2";
        assert_eq!(operand_ref.parse_next(&mut input).expect("number"), ("1", Some(2)));

        let mut input = "%";
        assert!(operand_ref.parse_next(&mut input).is_err());
    }

    #[test]
    fn test_parse_keyword() {
        let mut input = "e5m10 rest";
        assert_eq!(keyword.parse_next(&mut input).expect("keyword"), "e5m10");

        let mut input = "5m10";
        assert!(keyword.parse_next(&mut input).is_err());
    }
}
