//! SSA operand references as they appear in assembly text.

use std::fmt;

/// An unresolved use of an SSA value: `%name` or `%name#N` for the `N`th
/// result of a multi-result operation.
///
/// Only the spelling is kept; resolving the name to a value is up to the
/// caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OperandRef {
    name: String,
    number: Option<u32>,
}

impl OperandRef {
    /// Create a reference from a name without the leading `%`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: None,
        }
    }

    pub fn with_number(mut self, number: Option<u32>) -> Self {
        self.number = number;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> Option<u32> {
        self.number
    }
}

impl fmt::Display for OperandRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.name)?;
        if let Some(number) = self.number {
            write!(f, "#{number}")?;
        }
        Ok(())
    }
}
