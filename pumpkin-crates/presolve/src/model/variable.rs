use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Not;

use crate::containers::StorageKey;
use crate::pumpkin_assert_simple;

/// The id of a decision variable in a [`Model`](crate::Model).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId {
    pub id: u32,
}

impl VariableId {
    pub fn new(id: u32) -> Self {
        VariableId { id }
    }

    /// The reference to this variable itself.
    pub fn positive(self) -> VarRef {
        VarRef::new(self, false)
    }

    /// The reference to the negation of this variable.
    pub fn negative(self) -> VarRef {
        VarRef::new(self, true)
    }
}

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        pumpkin_assert_simple!(index <= u32::MAX as usize, "variable index {index} out of range");
        VariableId { id: index as u32 }
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl Debug for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

/// A signed reference to a variable; the doubled variable space in which dominance is computed.
///
/// The reference with index `2 * v` denotes the variable `v`, the reference with index `2 * v + 1`
/// denotes its negation. The value of a negated reference is the negated value of the variable.
/// When the variable is a 0-1 variable, a reference is also a literal: the positive reference is
/// true when the variable is 1, the negated reference is true when the variable is 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarRef {
    index: u32,
}

impl VarRef {
    pub fn new(variable: VariableId, is_negated: bool) -> Self {
        VarRef {
            index: 2 * variable.id + is_negated as u32,
        }
    }

    pub fn variable(self) -> VariableId {
        VariableId::new(self.index >> 1)
    }

    pub fn is_negated(self) -> bool {
        self.index & 1 == 1
    }

    pub fn is_positive(self) -> bool {
        !self.is_negated()
    }

    /// The value of this reference given the values of all variables.
    pub fn evaluate(self, values: &[i64]) -> i64 {
        let value = values[self.variable().id as usize];
        if self.is_negated() {
            -value
        } else {
            value
        }
    }

    /// Whether this reference, interpreted as a literal, is true given the values of all
    /// variables.
    pub fn is_true_in(self, values: &[i64]) -> bool {
        let value = values[self.variable().id as usize];
        if self.is_negated() {
            value == 0
        } else {
            value == 1
        }
    }
}

impl From<VariableId> for VarRef {
    fn from(variable: VariableId) -> Self {
        variable.positive()
    }
}

impl Not for VarRef {
    type Output = VarRef;

    fn not(self) -> Self::Output {
        VarRef {
            index: self.index ^ 1,
        }
    }
}

impl StorageKey for VarRef {
    fn index(&self) -> usize {
        self.index as usize
    }

    fn create_from_index(index: usize) -> Self {
        pumpkin_assert_simple!(index <= u32::MAX as usize, "reference index {index} out of range");
        VarRef {
            index: index as u32,
        }
    }
}

impl Display for VarRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_negated() {
            write!(f, "-{}", self.variable())
        } else {
            write!(f, "{}", self.variable())
        }
    }
}

impl Debug for VarRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_is_an_involution() {
        let x = VariableId::new(7).positive();

        assert_ne!(x, !x);
        assert_eq!(x, !!x);
        assert_eq!((!x).variable(), x.variable());
        assert!((!x).is_negated());
    }

    #[test]
    fn references_are_dense_storage_keys() {
        let x = VariableId::new(3);

        assert_eq!(x.positive().index(), 6);
        assert_eq!(x.negative().index(), 7);
        assert_eq!(VarRef::create_from_index(7), x.negative());
    }

    #[test]
    fn negated_reference_evaluates_to_negated_value() {
        let values = [4, 0];
        let x = VariableId::new(0);
        let b = VariableId::new(1);

        assert_eq!(x.negative().evaluate(&values), -4);
        assert!(b.negative().is_true_in(&values));
        assert!(!b.positive().is_true_in(&values));
    }
}
