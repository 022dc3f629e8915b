use thiserror::Error;

use crate::model::ConstraintId;
use crate::model::VariableId;

/// Errors which indicate that the model was proven infeasible during presolve.
///
/// Once one of these is returned the [`PresolveContext`](crate::PresolveContext) is flagged as
/// unsatisfiable and no further reductions are performed.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PresolveError {
    /// Restricting the domain of a variable left no values.
    #[error("the domain of {variable} became empty")]
    EmptyDomain { variable: VariableId },
    /// The activity bounds of a constraint can no longer reach its right-hand side.
    #[error("constraint {constraint} can no longer be satisfied")]
    InfeasibleConstraint { constraint: ConstraintId },
    /// Two variables were related by an affine relation which no pair of values satisfies.
    #[error("the affine relation between {x} and {y} has no solution")]
    InfeasibleAffineRelation { x: VariableId, y: VariableId },
}
