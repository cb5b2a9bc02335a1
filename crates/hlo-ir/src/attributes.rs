//! Integer attributes.

use std::fmt;

use crate::refs::TypeRef;
use crate::types::TypeInterner;

/// An integer-valued attribute with its integer type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntegerAttr {
    value: i64,
    ty: TypeRef,
}

impl IntegerAttr {
    pub fn new(value: i64, ty: TypeRef) -> Self {
        Self { value, ty }
    }

    /// A 32-bit signless integer attribute.
    pub fn i32(types: &mut TypeInterner, value: i32) -> Self {
        let ty = types.signless(32);
        Self::new(i64::from(value), ty)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn ty(&self) -> TypeRef {
        self.ty
    }
}

/// Prints the value without its type suffix.
impl fmt::Display for IntegerAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
