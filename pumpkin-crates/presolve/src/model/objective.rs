use super::LinearExpression;
use super::VarRef;
use crate::basic_types::Domain;

/// Minimise `Σ coefficient * variable + offset`.
///
/// The optional domain restricts the value of the weighted sum (without the offset), e.g. after
/// an upper bound on the objective value was learned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Objective {
    pub expression: LinearExpression,
    pub offset: i64,
    pub domain: Option<Domain>,
}

impl Objective {
    pub fn minimise(terms: impl IntoIterator<Item = (VarRef, i64)>) -> Objective {
        Objective {
            expression: LinearExpression::new(terms),
            offset: 0,
            domain: None,
        }
    }

    pub fn with_offset(mut self, offset: i64) -> Objective {
        self.offset = offset;
        self
    }

    pub fn with_domain(mut self, domain: Domain) -> Objective {
        self.domain = Some(domain);
        self
    }

    /// The domain of the weighted sum; unrestricted when no domain is set.
    pub fn domain_or_all(&self) -> Domain {
        self.domain.clone().unwrap_or_else(Domain::all)
    }

    pub fn evaluate(&self, values: &[i64]) -> i128 {
        self.expression.evaluate(values) + self.offset as i128
    }

    /// Whether the weighted sum lies in the objective domain.
    pub fn is_satisfied(&self, values: &[i64]) -> bool {
        match &self.domain {
            None => true,
            Some(domain) => i64::try_from(self.expression.evaluate(values))
                .is_ok_and(|value| domain.contains(value)),
        }
    }
}
