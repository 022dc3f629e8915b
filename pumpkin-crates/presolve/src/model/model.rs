use super::Constraint;
use super::ConstraintId;
use super::Objective;
use super::VariableId;
use crate::basic_types::Domain;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// A declarative constraint model: variables with their domains, constraints, an optional
/// objective and an optional solution hint.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub(crate) domains: KeyedVec<VariableId, Domain>,
    pub(crate) constraints: KeyedVec<ConstraintId, Constraint>,
    pub(crate) objective: Option<Objective>,
    pub(crate) solution_hint: Option<Vec<i64>>,
}

impl Model {
    pub fn new_variable(&mut self, domain: Domain) -> VariableId {
        self.domains.push(domain)
    }

    pub fn new_boolean(&mut self) -> VariableId {
        self.new_variable(Domain::boolean())
    }

    pub fn add_constraint(&mut self, constraint: Constraint) -> ConstraintId {
        self.constraints.push(constraint)
    }

    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = Some(objective);
    }

    /// Sets a (complete) assignment which presolve keeps feasible when it is feasible.
    pub fn set_solution_hint(&mut self, values: Vec<i64>) {
        self.solution_hint = Some(values);
    }

    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        self.domains.keys()
    }

    pub fn domain(&self, variable: VariableId) -> &Domain {
        &self.domains[variable]
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &Constraint {
        &self.constraints[constraint]
    }

    /// All constraints which were not removed.
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintId, &Constraint)> {
        self.constraints
            .keys()
            .zip(self.constraints.iter())
            .filter(|(_, constraint)| !constraint.is_empty())
    }

    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    pub fn solution_hint(&self) -> Option<&[i64]> {
        self.solution_hint.as_deref()
    }

    /// Whether `values` assigns every variable a value of its domain and satisfies every
    /// constraint and the objective domain.
    pub fn is_feasible(&self, values: &[i64]) -> bool {
        values.len() == self.num_variables()
            && self
                .variables()
                .all(|variable| self.domains[variable].contains(values[variable.index()]))
            && self
                .constraints()
                .all(|(_, constraint)| constraint.is_satisfied(values))
            && self
                .objective
                .as_ref()
                .is_none_or(|objective| objective.is_satisfied(values))
    }
}
