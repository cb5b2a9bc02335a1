//! Printer context for custom assembly formats.
//!
//! Types print in the same syntax [`crate::parser`] reads:
//!
//! ```text
//! tensor<4x?xcomplex<f32>>
//! tuple<tensor<i32>, !stablehlo.token>
//! (tensor<4xf32>, tensor<4xf32>) -> tensor<4xcomplex<f32>>
//! ```

use std::fmt::{self, Write};

use crate::attributes::IntegerAttr;
use crate::operand::OperandRef;
use crate::refs::TypeRef;
use crate::types::{Dim, Signedness, TensorShape, TypeData, TypeInterner};

/// Configuration for assembly printing.
#[derive(Debug, Clone, Default)]
pub struct PrintConfig {
    /// Print the full `(operands) -> result` signature even where a compact
    /// form would round-trip. Default: false.
    pub functional_signatures: bool,
}

/// Printer state: the interner types are read from, and the output buffer.
pub struct AsmPrinter<'a> {
    types: &'a TypeInterner,
    config: PrintConfig,
    output: String,
}

impl<'a> AsmPrinter<'a> {
    pub fn new(types: &'a TypeInterner) -> Self {
        Self::with_config(types, PrintConfig::default())
    }

    pub fn with_config(types: &'a TypeInterner, config: PrintConfig) -> Self {
        Self {
            types,
            config,
            output: String::new(),
        }
    }

    pub fn types(&self) -> &'a TypeInterner {
        self.types
    }

    pub fn config(&self) -> &PrintConfig {
        &self.config
    }

    /// Output printed so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Get the accumulated output.
    pub fn finish(self) -> String {
        self.output
    }

    pub fn print_type(&mut self, ty: TypeRef) -> fmt::Result {
        write_type(self.types, &mut self.output, ty)
    }

    /// Print types separated by `, `.
    pub fn print_types(&mut self, tys: &[TypeRef]) -> fmt::Result {
        write_type_list(self.types, &mut self.output, tys)
    }

    /// Print operand references separated by `, `.
    pub fn print_operands(&mut self, operands: &[OperandRef]) -> fmt::Result {
        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            write!(self.output, "{operand}")?;
        }
        Ok(())
    }

    /// Print `(inputs) -> outputs`.
    pub fn print_functional_type(&mut self, inputs: &[TypeRef], outputs: &[TypeRef]) -> fmt::Result {
        write_function_type(self.types, &mut self.output, inputs, outputs)
    }

    pub fn print_attribute_without_type(&mut self, attr: &IntegerAttr) -> fmt::Result {
        write!(self.output, "{attr}")
    }
}

impl Write for AsmPrinter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.output.push_str(s);
        Ok(())
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Print a type as assembly text.
pub fn print_type(types: &TypeInterner, ty: TypeRef) -> String {
    let mut out = String::new();
    write_type(types, &mut out, ty).expect("fmt::Write to String never fails");
    out
}

// ============================================================================
// Type printing
// ============================================================================

fn write_type(types: &TypeInterner, f: &mut impl Write, ty: TypeRef) -> fmt::Result {
    match types.get(ty) {
        TypeData::Integer { width, signedness } => {
            let prefix = match signedness {
                Signedness::Signless => "i",
                Signedness::Signed => "si",
                Signedness::Unsigned => "ui",
            };
            write!(f, "{prefix}{width}")
        }
        TypeData::Float(kind) => f.write_str(kind.keyword()),
        TypeData::Index => f.write_str("index"),
        TypeData::Token => f.write_str("!stablehlo.token"),
        TypeData::Complex(element) => {
            f.write_str("complex<")?;
            write_type(types, f, *element)?;
            f.write_char('>')
        }
        TypeData::Tensor(tensor) => {
            f.write_str("tensor<")?;
            match &tensor.shape {
                TensorShape::Unranked => f.write_str("*x")?,
                TensorShape::Ranked(dims) => {
                    for dim in dims {
                        match dim {
                            Dim::Static(size) => write!(f, "{size}x")?,
                            Dim::Dynamic => f.write_str("?x")?,
                        }
                    }
                }
            }
            write_type(types, f, tensor.element)?;
            f.write_char('>')
        }
        TypeData::Tuple(members) => {
            f.write_str("tuple<")?;
            write_type_list(types, f, members)?;
            f.write_char('>')
        }
        TypeData::Function(func) => write_function_type(types, f, &func.inputs, &func.outputs),
    }
}

fn write_type_list(types: &TypeInterner, f: &mut impl Write, tys: &[TypeRef]) -> fmt::Result {
    for (i, &ty) in tys.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_type(types, f, ty)?;
    }
    Ok(())
}

/// A single non-function result prints bare; anything else is parenthesized.
fn write_function_type(
    types: &TypeInterner,
    f: &mut impl Write,
    inputs: &[TypeRef],
    outputs: &[TypeRef],
) -> fmt::Result {
    f.write_char('(')?;
    write_type_list(types, f, inputs)?;
    f.write_str(") -> ")?;
    match outputs {
        &[output] if !types.is_function(output) => write_type(types, f, output),
        _ => {
            f.write_char('(')?;
            write_type_list(types, f, outputs)?;
            f.write_char(')')
        }
    }
}
