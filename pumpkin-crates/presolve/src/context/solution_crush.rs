//! Keeps the solution hint feasible while presolve rewrites the model.
//!
//! Every reduction performed by the presolve is justified by a transformation which maps any
//! feasible solution onto one that satisfies the reduction. The methods of [`SolutionCrush`]
//! apply exactly those transformations to the hint; they are called before the model is changed.

use crate::basic_types::Domain;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::model::VarRef;
use crate::model::VariableId;

#[derive(Clone, Debug, Default)]
pub struct SolutionCrush {
    hint: Option<Vec<i64>>,
}

impl SolutionCrush {
    pub fn new(hint: Option<Vec<i64>>) -> Self {
        SolutionCrush { hint }
    }

    pub fn is_enabled(&self) -> bool {
        self.hint.is_some()
    }

    pub fn hint(&self) -> Option<&[i64]> {
        self.hint.as_deref()
    }

    pub fn value_of(&self, reference: VarRef) -> Option<i64> {
        self.hint
            .as_ref()
            .map(|hint| reference.evaluate(hint))
    }

    pub fn literal_value(&self, literal: VarRef) -> Option<bool> {
        self.hint
            .as_ref()
            .map(|hint| literal.is_true_in(hint))
    }

    /// Gives a newly created variable its hinted value.
    pub(crate) fn new_variable(&mut self, value: i64) {
        if let Some(hint) = &mut self.hint {
            hint.push(value);
        }
    }

    pub(crate) fn set_var_value(&mut self, variable: VariableId, value: i64) {
        if let Some(hint) = &mut self.hint {
            hint[variable.index()] = value;
        }
    }

    pub(crate) fn set_ref_value(&mut self, reference: VarRef, value: i64) {
        let value = if reference.is_negated() { -value } else { value };
        self.set_var_value(reference.variable(), value);
    }

    pub(crate) fn set_literal_value(&mut self, literal: VarRef, value: bool) {
        let variable_value = (value != literal.is_negated()) as i64;
        self.set_var_value(literal.variable(), variable_value);
    }

    /// Moves the hinted value of `variable` to the closest value of `domain`.
    pub(crate) fn set_var_to_closest_value(&mut self, variable: VariableId, domain: &Domain) {
        let Some(hint) = &mut self.hint else {
            return;
        };
        let current = hint[variable.index()];
        if domain.contains(current) {
            return;
        }
        if let Some(closest) = domain.closest_value(current) {
            hint[variable.index()] = closest;
        }
    }

    /// Makes the hint satisfy `reference <= upper_bound` by swapping value from `reference` to
    /// the dominating references, each of which may take any value up to its upper bound.
    ///
    /// What cannot be moved to a dominator is removed from `reference` directly.
    pub(crate) fn update_refs_with_dominance(
        &mut self,
        reference: VarRef,
        upper_bound: i64,
        dominators: &[VarRef],
        domains: &KeyedVec<VariableId, Domain>,
    ) {
        let Some(hint) = &self.hint else {
            return;
        };

        let mut value = reference.evaluate(hint) as i128;
        let upper_bound = upper_bound as i128;
        if value <= upper_bound {
            return;
        }

        for &dominator in dominators {
            let Some(hint) = &self.hint else {
                return;
            };
            let domain = &domains[dominator.variable()];
            let dominator_ub = if dominator.is_negated() {
                -(domain.min() as i128)
            } else {
                domain.max() as i128
            };
            let dominator_value = dominator.evaluate(hint) as i128;
            if dominator_value >= dominator_ub {
                continue;
            }

            let delta = (value - upper_bound).min(dominator_ub - dominator_value);
            self.set_ref_value(dominator, (dominator_value + delta) as i64);
            value -= delta;
            if value <= upper_bound {
                break;
            }
        }

        self.set_ref_value(reference, value.min(upper_bound) as i64);
    }

    /// Gives `literal` the hinted value of `reference`.
    pub(crate) fn make_literal_equal_to(&mut self, literal: VarRef, reference: VarRef) {
        if let Some(value) = self.literal_value(reference) {
            self.set_literal_value(literal, value);
        }
    }

    /// Makes the hint satisfy `antecedent -> consequent` by moving a true `antecedent` with a false
    /// `consequent` to a false `antecedent` and a true `consequent`.
    pub(crate) fn update_literals_with_implication(
        &mut self,
        antecedent: VarRef,
        consequent: VarRef,
    ) {
        if self.literal_value(antecedent) == Some(true)
            && self.literal_value(consequent) == Some(false)
        {
            self.set_literal_value(antecedent, false);
            self.set_literal_value(consequent, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(domains: Vec<Domain>) -> KeyedVec<VariableId, Domain> {
        KeyedVec::from(domains)
    }

    #[test]
    fn dominance_moves_value_to_dominators_first() {
        let x = VariableId::new(0);
        let y = VariableId::new(1);
        let z = VariableId::new(2);
        let domains = domains(vec![Domain::new(0, 10); 3]);
        let mut crush = SolutionCrush::new(Some(vec![8, 7, 9]));

        crush.update_refs_with_dominance(x.positive(), 2, &[y.positive(), z.positive()], &domains);

        // y takes 3 units, z only 1, the remaining 2 are dropped.
        assert_eq!(crush.hint(), Some(&[2, 10, 10][..]));
    }

    #[test]
    fn dominance_on_negated_references() {
        let x = VariableId::new(0);
        let y = VariableId::new(1);
        let domains = domains(vec![Domain::new(0, 10); 2]);
        let mut crush = SolutionCrush::new(Some(vec![1, 6]));

        // -x <= -4 means x >= 4, compensated by decreasing y.
        crush.update_refs_with_dominance(x.negative(), -4, &[y.negative()], &domains);

        assert_eq!(crush.hint(), Some(&[4, 3][..]));
    }

    #[test]
    fn implication_swaps_values() {
        let a = VariableId::new(0);
        let b = VariableId::new(1);
        let mut crush = SolutionCrush::new(Some(vec![1, 0]));

        crush.update_literals_with_implication(a.positive(), b.positive());
        assert_eq!(crush.hint(), Some(&[0, 1][..]));

        crush.make_literal_equal_to(a.negative(), b.positive());
        assert_eq!(crush.hint(), Some(&[0, 1][..]));
    }

    #[test]
    fn closest_value_is_used_outside_the_domain() {
        let x = VariableId::new(0);
        let mut crush = SolutionCrush::new(Some(vec![5]));

        crush.set_var_to_closest_value(x, &Domain::from_values([1, 8]));
        assert_eq!(crush.value_of(x.positive()), Some(8));
    }
}
