use itertools::Itertools;

use super::VarRef;
use super::VariableId;
use crate::basic_types::Domain;

/// A weighted sum `Σ coefficient * variable` in canonical form: one term per variable, sorted by
/// variable and without zero coefficients.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LinearExpression {
    terms: Vec<(VariableId, i64)>,
}

impl LinearExpression {
    /// Creates the canonical form of `Σ coefficient * reference`; a negated reference contributes
    /// its variable with the negated coefficient.
    pub fn new(terms: impl IntoIterator<Item = (VarRef, i64)>) -> LinearExpression {
        let terms = terms
            .into_iter()
            .map(|(reference, coefficient)| {
                if reference.is_negated() {
                    (reference.variable(), -coefficient)
                } else {
                    (reference.variable(), coefficient)
                }
            })
            .sorted_by_key(|&(variable, _)| variable)
            .coalesce(|(v1, c1), (v2, c2)| {
                if v1 == v2 {
                    Ok((v1, c1.saturating_add(c2)))
                } else {
                    Err(((v1, c1), (v2, c2)))
                }
            })
            .filter(|&(_, coefficient)| coefficient != 0)
            .collect();

        LinearExpression { terms }
    }

    pub fn terms(&self) -> &[(VariableId, i64)] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.terms.iter().map(|&(variable, _)| variable)
    }

    pub fn coefficient_of(&self, variable: VariableId) -> i64 {
        self.terms
            .binary_search_by_key(&variable, |&(v, _)| v)
            .map(|index| self.terms[index].1)
            .unwrap_or(0)
    }

    /// Evaluates the sum in `i128` so that no assignment of `i64` values can overflow it.
    pub fn evaluate(&self, values: &[i64]) -> i128 {
        self.terms
            .iter()
            .map(|&(variable, coefficient)| {
                coefficient as i128 * values[variable.id as usize] as i128
            })
            .sum()
    }
}

/// The constraint `Σ coefficient * variable ∈ rhs`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LinearConstraint {
    pub expression: LinearExpression,
    pub rhs: Domain,
}

impl LinearConstraint {
    pub fn new(terms: impl IntoIterator<Item = (VarRef, i64)>, rhs: Domain) -> LinearConstraint {
        LinearConstraint {
            expression: LinearExpression::new(terms),
            rhs,
        }
    }

    /// `Σ terms <= upper_bound`.
    pub fn less_than_or_equals(
        terms: impl IntoIterator<Item = (VarRef, i64)>,
        upper_bound: i64,
    ) -> LinearConstraint {
        LinearConstraint::new(terms, Domain::new(i64::MIN, upper_bound))
    }

    /// `Σ terms >= lower_bound`.
    pub fn greater_than_or_equals(
        terms: impl IntoIterator<Item = (VarRef, i64)>,
        lower_bound: i64,
    ) -> LinearConstraint {
        LinearConstraint::new(terms, Domain::new(lower_bound, i64::MAX))
    }

    /// `Σ terms == value`.
    pub fn equals(terms: impl IntoIterator<Item = (VarRef, i64)>, value: i64) -> LinearConstraint {
        LinearConstraint::new(terms, Domain::singleton(value))
    }

    pub fn is_satisfied(&self, values: &[i64]) -> bool {
        let activity = self.expression.evaluate(values);
        i64::try_from(activity).is_ok_and(|activity| self.rhs.contains(activity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_merges_and_drops_terms() {
        let x = VariableId::new(0);
        let y = VariableId::new(1);

        let expression = LinearExpression::new([
            (y.positive(), 2),
            (x.positive(), 3),
            (x.negative(), 1),
            (y.positive(), -2),
        ]);

        assert_eq!(expression.terms(), &[(x, 2)]);
        assert_eq!(expression.coefficient_of(y), 0);
    }

    #[test]
    fn satisfaction_is_checked_without_overflow() {
        let x = VariableId::new(0);
        let constraint = LinearConstraint::less_than_or_equals([(x.positive(), i64::MAX)], 10);

        assert!(constraint.is_satisfied(&[0]));
        assert!(!constraint.is_satisfied(&[2]));
    }
}
