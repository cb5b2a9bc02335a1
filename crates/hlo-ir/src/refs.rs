//! Entity references for interned IR objects.
//!
//! Each ref type is a thin `u32` wrapper providing type-safe indexing
//! into `PrimaryMap` storage.

use cranelift_entity::entity_impl;

/// Reference to an interned type in a [`crate::TypeInterner`].
///
/// Types are deduplicated on interning, so two refs from the same interner
/// compare equal exactly when the types are structurally equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeRef(u32);
entity_impl!(TypeRef, "ty");
