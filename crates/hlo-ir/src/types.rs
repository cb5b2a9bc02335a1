//! Type data and the deduplicating type interner.
//!
//! The type hierarchy is closed: every type is one [`TypeData`] variant, and
//! the checked downcasts on [`TypeInterner`] return `None` instead of
//! asserting when a type is of a different kind.

use std::collections::HashMap;

use cranelift_entity::PrimaryMap;
use smallvec::SmallVec;

use crate::refs::TypeRef;

/// Small vector for type lists (operand types, tuple members, function inputs).
pub type TypeVec = SmallVec<[TypeRef; 4]>;

// ============================================================================
// TypeData
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    Signless,
    Signed,
    Unsigned,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatKind {
    F8E4M3FN,
    F8E5M2,
    BF16,
    F16,
    F32,
    F64,
}

impl FloatKind {
    pub const ALL: [FloatKind; 6] = [
        FloatKind::F8E4M3FN,
        FloatKind::F8E5M2,
        FloatKind::BF16,
        FloatKind::F16,
        FloatKind::F32,
        FloatKind::F64,
    ];

    /// The keyword spelling of this float type.
    pub fn keyword(self) -> &'static str {
        match self {
            FloatKind::F8E4M3FN => "f8E4M3FN",
            FloatKind::F8E5M2 => "f8E5M2",
            FloatKind::BF16 => "bf16",
            FloatKind::F16 => "f16",
            FloatKind::F32 => "f32",
            FloatKind::F64 => "f64",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }
}

/// A single tensor dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dim {
    Static(u64),
    /// Printed as `?`.
    Dynamic,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TensorShape {
    Ranked(SmallVec<[Dim; 4]>),
    /// Printed as `*`.
    Unranked,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TensorType {
    pub shape: TensorShape,
    pub element: TypeRef,
}

/// A `(inputs) -> outputs` signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub inputs: TypeVec,
    pub outputs: SmallVec<[TypeRef; 2]>,
}

/// Data for a single interned type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Integer {
        width: u32,
        signedness: Signedness,
    },
    Float(FloatKind),
    Index,
    Token,
    /// `complex<element>`
    Complex(TypeRef),
    Tensor(TensorType),
    Tuple(TypeVec),
    Function(FunctionType),
}

// ============================================================================
// TypeInterner
// ============================================================================

/// Deduplicating type interner. Same `TypeData` always yields the same `TypeRef`.
pub struct TypeInterner {
    types: PrimaryMap<TypeRef, TypeData>,
    dedup: HashMap<TypeData, TypeRef>,
}

impl TypeInterner {
    pub fn new() -> Self {
        Self {
            types: PrimaryMap::new(),
            dedup: HashMap::default(),
        }
    }

    /// Intern a type, returning an existing ref if the data matches.
    pub fn intern(&mut self, data: TypeData) -> TypeRef {
        if let Some(&existing) = self.dedup.get(&data) {
            return existing;
        }
        let r = self.types.push(data.clone());
        self.dedup.insert(data, r);
        r
    }

    /// Find the ref of an already interned type without interning it.
    pub fn lookup(&self, data: &TypeData) -> Option<TypeRef> {
        self.dedup.get(data).copied()
    }

    /// Look up type data by reference.
    pub fn get(&self, r: TypeRef) -> &TypeData {
        &self.types[r]
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    // ---- Constructors ----

    pub fn integer(&mut self, width: u32, signedness: Signedness) -> TypeRef {
        self.intern(TypeData::Integer { width, signedness })
    }

    /// Signless integer type (`i1`, `i32`, ...).
    pub fn signless(&mut self, width: u32) -> TypeRef {
        self.integer(width, Signedness::Signless)
    }

    pub fn float(&mut self, kind: FloatKind) -> TypeRef {
        self.intern(TypeData::Float(kind))
    }

    pub fn index(&mut self) -> TypeRef {
        self.intern(TypeData::Index)
    }

    pub fn token(&mut self) -> TypeRef {
        self.intern(TypeData::Token)
    }

    pub fn complex(&mut self, element: TypeRef) -> TypeRef {
        self.intern(TypeData::Complex(element))
    }

    pub fn ranked_tensor(&mut self, dims: impl IntoIterator<Item = Dim>, element: TypeRef) -> TypeRef {
        self.intern(TypeData::Tensor(TensorType {
            shape: TensorShape::Ranked(dims.into_iter().collect()),
            element,
        }))
    }

    pub fn unranked_tensor(&mut self, element: TypeRef) -> TypeRef {
        self.intern(TypeData::Tensor(TensorType {
            shape: TensorShape::Unranked,
            element,
        }))
    }

    pub fn tuple(&mut self, members: impl IntoIterator<Item = TypeRef>) -> TypeRef {
        self.intern(TypeData::Tuple(members.into_iter().collect()))
    }

    pub fn function(
        &mut self,
        inputs: impl IntoIterator<Item = TypeRef>,
        outputs: impl IntoIterator<Item = TypeRef>,
    ) -> TypeRef {
        self.intern(TypeData::Function(FunctionType {
            inputs: inputs.into_iter().collect(),
            outputs: outputs.into_iter().collect(),
        }))
    }

    // ---- Checked downcasts ----

    pub fn as_function(&self, ty: TypeRef) -> Option<&FunctionType> {
        match self.get(ty) {
            TypeData::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_tensor(&self, ty: TypeRef) -> Option<&TensorType> {
        match self.get(ty) {
            TypeData::Tensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    /// Member types if `ty` is a tuple.
    pub fn as_tuple(&self, ty: TypeRef) -> Option<&[TypeRef]> {
        match self.get(ty) {
            TypeData::Tuple(members) => Some(members),
            _ => None,
        }
    }

    /// The wrapped real type if `ty` is `complex<...>`.
    pub fn as_complex(&self, ty: TypeRef) -> Option<TypeRef> {
        match self.get(ty) {
            TypeData::Complex(element) => Some(*element),
            _ => None,
        }
    }

    /// Element type of a tensor.
    pub fn element_type(&self, ty: TypeRef) -> Option<TypeRef> {
        self.as_tensor(ty).map(|tensor| tensor.element)
    }

    pub fn is_function(&self, ty: TypeRef) -> bool {
        self.as_function(ty).is_some()
    }

    /// Check if `ty` is a tensor whose element type is complex.
    pub fn is_complex_tensor(&self, ty: TypeRef) -> bool {
        self.as_tensor(ty)
            .is_some_and(|tensor| self.as_complex(tensor.element).is_some())
    }

    // ---- Complex/real conversion ----

    /// Tensor data with the complex wrapper stripped from the element type.
    ///
    /// Returns `None` if `ty` is not a tensor. A tensor with a real element
    /// type maps to itself.
    fn real_type_data(&self, ty: TypeRef) -> Option<TypeData> {
        let tensor = self.as_tensor(ty)?;
        let element = self.as_complex(tensor.element).unwrap_or(tensor.element);
        Some(TypeData::Tensor(TensorType {
            shape: tensor.shape.clone(),
            element,
        }))
    }

    /// The real counterpart of a complex tensor type: same shape, element
    /// type unwrapped from `complex<...>`. Non-tensor types map to themselves.
    pub fn real_type(&mut self, ty: TypeRef) -> TypeRef {
        match self.real_type_data(ty) {
            Some(data) => self.intern(data),
            None => ty,
        }
    }

    /// Like [`Self::real_type`], but only finds a real type that is already
    /// interned. A type that was never interned cannot equal any existing ref.
    pub fn lookup_real_type(&self, ty: TypeRef) -> Option<TypeRef> {
        self.lookup(&self.real_type_data(ty)?)
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}
