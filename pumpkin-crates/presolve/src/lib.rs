//! Presolve reductions for constraint programming models based on dominance between variables.
//!
//! A [`Model`] is wrapped in a [`PresolveContext`], which keeps track of the variable usage, the
//! affine relations between variables and an optional solution hint. The reductions in
//! [`dominance`] then shrink the domains and rewrite the constraints of the model while
//! preserving at least one optimal solution, keeping the hint feasible when it was feasible.
//!
//! # Example
//! ```rust
//! # use pumpkin_presolve::dominance::detect_dominance_relations;
//! # use pumpkin_presolve::dominance::DominanceOptions;
//! # use pumpkin_presolve::model::Constraint;
//! # use pumpkin_presolve::model::ConstraintKind;
//! # use pumpkin_presolve::model::Model;
//! # use pumpkin_presolve::model::Objective;
//! # use pumpkin_presolve::containers::StorageKey;
//! # use pumpkin_presolve::model::ConstraintId;
//! # use pumpkin_presolve::PresolveContext;
//! let mut model = Model::default();
//! let x = model.new_boolean();
//! let y = model.new_boolean();
//! let _ = model.add_constraint(Constraint::new(ConstraintKind::BoolOr(vec![
//!     x.positive(),
//!     y.positive(),
//! ])));
//! model.set_objective(Objective::minimise([(x.positive(), 2), (y.positive(), 1)]));
//!
//! let mut context = PresolveContext::new(model);
//! detect_dominance_relations(&mut context, &DominanceOptions::default())
//!     .expect("the model is feasible");
//!
//! // `y` is cheaper and satisfies the clause whenever `x` does, so `x -> y` is added.
//! assert_eq!(
//!     context.constraint(ConstraintId::create_from_index(1)),
//!     &Constraint::implication(x.positive(), y.positive())
//! );
//! ```
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod context;
pub(crate) mod math;
pub(crate) mod pumpkin_asserts;

pub mod dominance;
pub mod model;
pub mod statistics;

pub use convert_case;

pub use crate::basic_types::Domain;
pub use crate::basic_types::PresolveError;
pub use crate::context::AffineRelation;
pub use crate::context::PresolveContext;
pub use crate::context::Relation;
pub use crate::context::SolutionCrush;
