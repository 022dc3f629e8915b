//! The presolve context: the model under presolve together with the affine relations, value
//! encodings and solution hint maintained alongside it.
mod affine_relation;
mod presolve_context;
mod solution_crush;

pub use affine_relation::AffineRelation;
pub use affine_relation::Relation;
pub use presolve_context::PresolveContext;
pub use solution_crush::SolutionCrush;
