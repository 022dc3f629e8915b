//! The constraint model on which the presolve operates.
mod constraint;
mod linear;
#[allow(clippy::module_inception, reason = "the model module holds the model")]
mod model;
mod objective;
mod variable;

pub use constraint::*;
pub use linear::*;
pub use model::Model;
pub use objective::Objective;
pub use variable::*;
