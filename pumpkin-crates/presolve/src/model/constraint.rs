use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

use itertools::Itertools;

use super::LinearConstraint;
use super::VarRef;
use super::VariableId;
use crate::containers::StorageKey;
use crate::pumpkin_assert_simple;

/// The id of a constraint in a [`Model`](crate::Model).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId {
    pub id: u32,
}

impl StorageKey for ConstraintId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        pumpkin_assert_simple!(index <= u32::MAX as usize, "constraint index {index} out of range");
        ConstraintId { id: index as u32 }
    }
}

impl Display for ConstraintId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.id)
    }
}

impl Debug for ConstraintId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.id)
    }
}

/// A constraint which only has to hold when all of its enforcement literals are true.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub enforcement: Vec<VarRef>,
    pub kind: ConstraintKind,
}

/// The payload of a [`Constraint`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// At least one of the literals is true.
    BoolOr(Vec<VarRef>),
    /// All of the literals are true.
    BoolAnd(Vec<VarRef>),
    /// At most one of the literals is true.
    AtMostOne(Vec<VarRef>),
    /// Exactly one of the literals is true.
    ExactlyOne(Vec<VarRef>),
    Linear(LinearConstraint),
    /// All variables take pairwise different values.
    AllDifferent(Vec<VariableId>),
    /// The variables take the values of one of the tuples.
    Table {
        variables: Vec<VariableId>,
        tuples: Vec<Vec<i64>>,
    },
    /// `target == Π factors`.
    IntProduct {
        target: VariableId,
        factors: Vec<VariableId>,
    },
    /// A constraint which was removed from the model.
    Empty,
}

impl Constraint {
    pub fn new(kind: ConstraintKind) -> Constraint {
        Constraint {
            enforcement: vec![],
            kind,
        }
    }

    pub fn enforced_by(
        enforcement: impl IntoIterator<Item = VarRef>,
        kind: ConstraintKind,
    ) -> Constraint {
        Constraint {
            enforcement: enforcement.into_iter().collect(),
            kind,
        }
    }

    /// `antecedent -> consequent`, encoded as an enforced [`ConstraintKind::BoolAnd`].
    pub fn implication(antecedent: VarRef, consequent: VarRef) -> Constraint {
        Constraint::enforced_by([antecedent], ConstraintKind::BoolAnd(vec![consequent]))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, ConstraintKind::Empty)
    }

    /// The variables of the constraint, including those of the enforcement, in order of
    /// appearance and possibly containing duplicates.
    pub fn variables(&self) -> Vec<VariableId> {
        let mut variables = self
            .enforcement
            .iter()
            .map(|literal| literal.variable())
            .collect::<Vec<_>>();

        match &self.kind {
            ConstraintKind::BoolOr(literals)
            | ConstraintKind::BoolAnd(literals)
            | ConstraintKind::AtMostOne(literals)
            | ConstraintKind::ExactlyOne(literals) => {
                variables.extend(literals.iter().map(|literal| literal.variable()))
            }
            ConstraintKind::Linear(linear) => variables.extend(linear.expression.variables()),
            ConstraintKind::AllDifferent(vars) => variables.extend(vars.iter().copied()),
            ConstraintKind::Table { variables: vars, .. } => {
                variables.extend(vars.iter().copied())
            }
            ConstraintKind::IntProduct { target, factors } => {
                variables.push(*target);
                variables.extend(factors.iter().copied());
            }
            ConstraintKind::Empty => {}
        }

        variables
    }

    /// Whether some variable occurs more than once in the constraint.
    pub fn has_duplicate_variables(&self) -> bool {
        !self.variables().into_iter().all_unique()
    }

    pub fn is_satisfied(&self, values: &[i64]) -> bool {
        if !self
            .enforcement
            .iter()
            .all(|literal| literal.is_true_in(values))
        {
            return true;
        }

        let num_true =
            |literals: &[VarRef]| literals.iter().filter(|l| l.is_true_in(values)).count();
        let value = |variable: &VariableId| values[variable.id as usize];

        match &self.kind {
            ConstraintKind::BoolOr(literals) => num_true(literals) >= 1,
            ConstraintKind::BoolAnd(literals) => num_true(literals) == literals.len(),
            ConstraintKind::AtMostOne(literals) => num_true(literals) <= 1,
            ConstraintKind::ExactlyOne(literals) => num_true(literals) == 1,
            ConstraintKind::Linear(linear) => linear.is_satisfied(values),
            ConstraintKind::AllDifferent(variables) => variables.iter().map(value).all_unique(),
            ConstraintKind::Table { variables, tuples } => tuples.iter().any(|tuple| {
                tuple.len() == variables.len()
                    && variables
                        .iter()
                        .zip(tuple)
                        .all(|(variable, &expected)| value(variable) == expected)
            }),
            ConstraintKind::IntProduct { target, factors } => {
                let product = factors
                    .iter()
                    .try_fold(1_i64, |product, factor| product.checked_mul(value(factor)));
                product == Some(value(target))
            }
            ConstraintKind::Empty => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Domain;

    #[test]
    fn enforcement_relaxes_the_constraint() {
        let a = VariableId::new(0);
        let b = VariableId::new(1);
        let implication = Constraint::implication(a.positive(), b.positive());

        assert!(implication.is_satisfied(&[0, 0]));
        assert!(!implication.is_satisfied(&[1, 0]));
        assert!(implication.is_satisfied(&[1, 1]));
    }

    #[test]
    fn duplicate_variables_are_detected_across_enforcement() {
        let a = VariableId::new(0);
        let x = VariableId::new(1);
        let constraint = Constraint::enforced_by(
            [a.negative()],
            ConstraintKind::Linear(LinearConstraint::new(
                [(x.positive(), 1), (a.positive(), 2)],
                Domain::new(0, 3),
            )),
        );

        assert!(constraint.has_duplicate_variables());
        assert!(!Constraint::new(ConstraintKind::AtMostOne(vec![a.positive(), x.negative()]))
            .has_duplicate_variables());
    }

    #[test]
    fn product_overflow_is_not_satisfied() {
        let x = VariableId::new(0);
        let y = VariableId::new(1);
        let z = VariableId::new(2);
        let product = Constraint::new(ConstraintKind::IntProduct {
            target: z,
            factors: vec![x, y],
        });

        assert!(product.is_satisfied(&[3, 4, 12]));
        assert!(!product.is_satisfied(&[i64::MAX, 2, 0]));
    }
}
