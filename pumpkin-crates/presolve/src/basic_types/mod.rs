mod domain;
mod presolve_error;

pub use domain::Domain;
pub use presolve_error::PresolveError;
