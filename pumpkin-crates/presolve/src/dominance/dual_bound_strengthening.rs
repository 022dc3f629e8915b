//! Dual bound strengthening: restricting variables based on the locks of the constraints.
//!
//! A constraint locks a signed variable when decreasing it can violate the constraint. A signed
//! variable which is never locked below some value can always be decreased down to that value,
//! which is used to fix variables or to tighten their domains. When a signed variable is locked by
//! a single constraint, a number of local rewrites of that constraint become possible.

use std::hash::Hash;
use std::hash::Hasher;

use fnv::FnvHasher;
use log::debug;
use log::trace;

use crate::basic_types::Domain;
use crate::basic_types::PresolveError;
use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::context::PresolveContext;
use crate::create_statistics_struct;
use crate::math::num_ext::at_min_or_max;
use crate::math::num_ext::cap_add;
use crate::math::num_ext::cap_prod;
use crate::math::num_ext::cap_sub;
use crate::math::num_ext::NumExt;
use crate::model::Constraint;
use crate::model::ConstraintId;
use crate::model::ConstraintKind;
use crate::model::LinearConstraint;
use crate::model::LinearExpression;
use crate::model::VarRef;
use crate::model::VariableId;
use crate::pumpkin_assert_simple;

create_statistics_struct!(
    /// Statistics of a single round of dual bound strengthening.
    DualBoundStrengtheningStatistics {
    num_fixed_variables: usize,
    num_tightened_domains: usize,
    num_deleted_constraints: usize,
    num_enforced_affine_relations: usize,
    num_encodings_merged: usize,
    num_encodings_added: usize,
    num_equivalent_literals: usize,
    num_duplicate_constraints: usize,
});

/// The variable which stands in for the literal that is compared when looking for near-duplicate
/// constraints; it is never part of a model.
const SENTINEL_VARIABLE: u32 = u32::MAX / 2;

#[derive(Clone, Debug, Default)]
pub struct DualBoundStrengthening {
    /// A signed variable can be decreased down to this value without violating any constraint;
    /// [`i64::MAX`] means that it can never be decreased.
    can_freely_decrease_until: KeyedVec<VarRef, i64>,
    num_locks: KeyedVec<VarRef, usize>,
    /// The first constraint which locked the signed variable; [`None`] for the objective.
    locking_constraint: KeyedVec<VarRef, Option<ConstraintId>>,
    statistics: DualBoundStrengtheningStatistics,
}

impl DualBoundStrengthening {
    pub fn new(num_variables: usize) -> DualBoundStrengthening {
        let mut dual_bound_strengthening = DualBoundStrengthening::default();
        dual_bound_strengthening.reset(num_variables);
        dual_bound_strengthening
    }

    /// Forgets all locks.
    pub fn reset(&mut self, num_variables: usize) {
        let num_refs = 2 * num_variables;
        self.can_freely_decrease_until.assign(num_refs, i64::MIN);
        self.num_locks.assign(num_refs, 0);
        self.locking_constraint.assign(num_refs, None);
        self.statistics = DualBoundStrengtheningStatistics::default();
    }

    pub fn num_variables(&self) -> usize {
        self.num_locks.len() / 2
    }

    pub fn can_freely_decrease_until(&self, reference: VarRef) -> i64 {
        self.can_freely_decrease_until[reference]
    }

    pub fn num_locks(&self, reference: VarRef) -> usize {
        self.num_locks[reference]
    }

    pub fn locking_constraint(&self, reference: VarRef) -> Option<ConstraintId> {
        self.locking_constraint[reference]
    }

    pub fn statistics(&self) -> DualBoundStrengtheningStatistics {
        self.statistics
    }

    fn add_lock(&mut self, reference: VarRef, constraint: Option<ConstraintId>) {
        self.num_locks[reference] += 1;
        if self.num_locks[reference] == 1 {
            self.locking_constraint[reference] = constraint;
        }
    }

    fn raise_decrease_limit(&mut self, reference: VarRef, value: i64) {
        let limit = &mut self.can_freely_decrease_until[reference];
        *limit = (*limit).max(value);
    }

    /// None of `refs` can ever be decreased because of `constraint`.
    pub fn cannot_decrease(&mut self, refs: &[VarRef], constraint: Option<ConstraintId>) {
        for &reference in refs {
            self.add_lock(reference, constraint);
            self.can_freely_decrease_until[reference] = i64::MAX;
        }
    }

    /// None of `refs` can ever be increased because of `constraint`.
    pub fn cannot_increase(&mut self, refs: &[VarRef], constraint: Option<ConstraintId>) {
        for &reference in refs {
            self.add_lock(!reference, constraint);
            self.can_freely_decrease_until[!reference] = i64::MAX;
        }
    }

    pub fn cannot_move(&mut self, refs: &[VarRef], constraint: Option<ConstraintId>) {
        self.cannot_decrease(refs, constraint);
        self.cannot_increase(refs, constraint);
    }

    /// Locks the terms of `expression ∈ rhs`, given the current activity bounds of
    /// `expression`.
    ///
    /// The objective is passed with `is_objective`, in which case no term may increase and `rhs`
    /// is the objective domain.
    #[allow(clippy::too_many_arguments, reason = "mirrors the quantities of the constraint")]
    pub fn process_linear_constraint(
        &mut self,
        is_objective: bool,
        context: &PresolveContext,
        expression: &LinearExpression,
        rhs: &Domain,
        min_activity: i64,
        max_activity: i64,
        constraint: Option<ConstraintId>,
    ) {
        pumpkin_assert_simple!(!rhs.is_empty());
        let lb_limit = rhs.last_interval_start();
        let ub_limit = rhs.first_interval_end();

        for &(variable, coeff) in expression.terms() {
            if coeff == i64::MIN {
                self.cannot_move(&[variable.positive()], constraint);
                continue;
            }
            let (reference, coeff) = if coeff > 0 {
                (variable.positive(), coeff)
            } else {
                (variable.negative(), -coeff)
            };

            let min_term = cap_prod(coeff, context.min_of(reference));
            let max_term = cap_prod(coeff, context.max_of(reference));
            let term_diff = cap_sub(max_term, min_term);
            let unbounded = at_min_or_max(term_diff);

            if min_activity < lb_limit {
                self.add_lock(reference, constraint);
                let slack = cap_sub(lb_limit, min_activity);
                let limit = if unbounded
                    || at_min_or_max(slack)
                    || cap_add(min_activity, term_diff) < lb_limit
                {
                    i64::MAX
                } else {
                    cap_add(
                        context.min_of(reference),
                        <i64 as NumExt>::div_ceil(slack, coeff),
                    )
                };
                self.raise_decrease_limit(reference, limit);
            }

            if is_objective {
                self.add_lock(!reference, constraint);
                self.can_freely_decrease_until[!reference] = i64::MAX;
                continue;
            }

            if max_activity > ub_limit {
                self.add_lock(!reference, constraint);
                let slack = cap_sub(max_activity, ub_limit);
                let limit = if unbounded
                    || at_min_or_max(slack)
                    || cap_sub(max_activity, term_diff) > ub_limit
                {
                    i64::MAX
                } else {
                    cap_add(
                        context.min_of(!reference),
                        <i64 as NumExt>::div_ceil(slack, coeff),
                    )
                };
                self.raise_decrease_limit(!reference, limit);
            }
        }
    }

    /// Fixes and tightens the variables based on the recorded locks, and applies the rewrites
    /// which are possible for signed variables with a single lock.
    pub fn strengthen(&mut self, context: &mut PresolveContext) -> Result<(), PresolveError> {
        let num_variables = self.num_variables();
        for index in 0..num_variables {
            let variable = VariableId::create_from_index(index);
            if Self::should_skip(context, variable) {
                continue;
            }
            let _ = self.tighten_domain(context, variable)?;
        }

        // The variables of constraints which were rewritten; their locks are outdated, and a
        // later rewrite may not move them again. Every rewrite only moves the variable of the
        // signed variable whose lock it uses.
        let mut processed: KeyedVec<VariableId, bool> = KeyedVec::default();
        processed.assign(num_variables, false);

        for index in 0..num_variables {
            let variable = VariableId::create_from_index(index);
            if processed[variable] || Self::should_skip(context, variable) {
                continue;
            }

            for reference in [variable.positive(), variable.negative()] {
                if self.num_locks[reference] != 1 {
                    continue;
                }
                let Some(constraint) = self.locking_constraint[reference] else {
                    continue;
                };
                if context.constraint(constraint).is_empty() {
                    continue;
                }
                let involved = context.constraint_to_variables(constraint).to_vec();
                if self.apply_single_lock_rewrite(context, reference, constraint)? {
                    for other in involved {
                        processed.accomodate(other, false);
                        processed[other] = true;
                    }
                    break;
                }
            }
        }

        self.merge_near_duplicate_literals(context, &mut processed)?;

        debug!("Dual bound strengthening: {:?}", self.statistics);
        Ok(())
    }

    fn should_skip(context: &PresolveContext, variable: VariableId) -> bool {
        context.is_fixed(variable.positive())
            || context.variable_was_removed(variable)
            || context.variable_is_not_used_anymore(variable)
    }

    /// Moves the bounds of `variable` to the values it can freely move to. Returns whether the
    /// domain changed.
    fn tighten_domain(
        &mut self,
        context: &mut PresolveContext,
        variable: VariableId,
    ) -> Result<bool, PresolveError> {
        let domain = context.var_domain(variable).clone();
        let (lb, ub) = (domain.min(), domain.max());
        let positive = variable.positive();

        // Above `ub_limit` the variable can always be decreased, below `lb_limit` it can always
        // be increased.
        let ub_limit = lb.max(self.can_freely_decrease_until[positive]);
        let lb_limit = ub.min(self.can_freely_decrease_until[!positive].saturating_neg());

        let fixed_value = if ub_limit == lb {
            Some(lb)
        } else if lb_limit == ub {
            Some(ub)
        } else if lb_limit > ub_limit {
            domain
                .intersection(&Domain::new(ub_limit, lb_limit))
                .smallest_magnitude_value()
        } else {
            None
        };

        if let Some(value) = fixed_value {
            trace!("Dual bound strengthening fixes {variable} to {value}");
            self.statistics.num_fixed_variables += 1;
            context.update_rule_stats("dual: fix variable");
            return context.intersect_domain_with(positive, &Domain::singleton(value));
        }

        let new_lb = if lb_limit <= lb {
            lb
        } else {
            domain.value_at_or_below(lb_limit).unwrap_or(lb)
        };
        let new_ub = if ub_limit >= ub {
            ub
        } else {
            domain.value_at_or_above(ub_limit).unwrap_or(ub)
        };
        if new_lb == lb && new_ub == ub {
            return Ok(false);
        }

        trace!("Dual bound strengthening restricts {variable} to [{new_lb}, {new_ub}]");
        self.statistics.num_tightened_domains += 1;
        context.update_rule_stats("dual: tighten domain");
        context.intersect_domain_with(positive, &Domain::new(new_lb, new_ub))
    }

    /// Tries the rewrites which are valid because `constraint` is the only constraint locking
    /// `reference`. Returns whether the model was changed.
    fn apply_single_lock_rewrite(
        &mut self,
        context: &mut PresolveContext,
        reference: VarRef,
        constraint: ConstraintId,
    ) -> Result<bool, PresolveError> {
        let locking = context.constraint(constraint).clone();
        if locking.has_duplicate_variables() {
            return Ok(false);
        }

        if let Some((enforcement, variable, implied)) = enforced_single_variable_linear(&locking) {
            if !context.can_be_used_as_literal(enforcement) {
                return Ok(false);
            }

            if reference == !enforcement {
                return self.rewrite_enforced_value(context, constraint, enforcement, variable, &implied);
            }
            if reference.variable() == variable {
                return self.rewrite_enforced_bound(context, constraint, reference, enforcement, &implied);
            }
            return Ok(false);
        }

        if let Some((antecedent, consequent)) = single_literal_implication(&locking) {
            if antecedent.variable() == consequent.variable()
                || !context.can_be_used_as_literal(antecedent)
                || !context.can_be_used_as_literal(consequent)
            {
                return Ok(false);
            }

            // Either the antecedent can be set to true whenever the consequent is, or the
            // consequent can be set to false whenever the antecedent is.
            if reference == !antecedent {
                context
                    .solution_crush_mut()
                    .make_literal_equal_to(antecedent, consequent);
            } else if reference == consequent {
                context
                    .solution_crush_mut()
                    .make_literal_equal_to(consequent, antecedent);
            } else {
                return Ok(false);
            }

            debug!("{antecedent} -> {consequent} is the only lock of {reference}, making them equal");
            self.statistics.num_equivalent_literals += 1;
            context.update_rule_stats("dual: equivalent implication");
            context.store_boolean_equality_relation(antecedent, consequent)?;
            self.delete_constraint(context, constraint);
            return Ok(true);
        }

        Ok(false)
    }

    /// `enforcement -> variable ∈ implied`, where `!enforcement` is only locked by this
    /// constraint: the enforcement can be set to true whenever the body holds.
    fn rewrite_enforced_value(
        &mut self,
        context: &mut PresolveContext,
        constraint: ConstraintId,
        enforcement: VarRef,
        variable: VariableId,
        implied: &Domain,
    ) -> Result<bool, PresolveError> {
        let domain = context.var_domain(variable).clone();
        if domain.is_included_in(implied) {
            trace!("The body of {constraint} always holds");
            context.update_rule_stats("dual: enforced constraint always true");
            self.delete_constraint(context, constraint);
            return Ok(true);
        }

        let reachable = domain.intersection(implied);
        if reachable.is_empty() {
            trace!("The body of {constraint} never holds");
            context.update_rule_stats("dual: enforced constraint always false");
            let _ = context.set_literal_to_false(enforcement)?;
            self.delete_constraint(context, constraint);
            return Ok(true);
        }

        let Some(value) = reachable.fixed_value() else {
            return Ok(false);
        };

        if let Some(existing) = context.get_var_value_encoding(variable, value) {
            if existing == enforcement || existing == !enforcement {
                return Ok(false);
            }

            debug!("{enforcement} and {existing} both encode {variable} == {value}");
            self.statistics.num_encodings_merged += 1;
            context.update_rule_stats("dual: merge value encoding");
            context
                .solution_crush_mut()
                .make_literal_equal_to(enforcement, existing);
            context.store_boolean_equality_relation(enforcement, existing)?;
            self.delete_constraint(context, constraint);
            return Ok(true);
        }

        debug!("{enforcement} encodes {variable} == {value}");
        self.statistics.num_encodings_added += 1;
        context.update_rule_stats("dual: add value encoding");
        if let Some(hinted) = context.solution_crush().value_of(variable.positive()) {
            context
                .solution_crush_mut()
                .set_literal_value(enforcement, hinted == value);
        }
        context.insert_var_value_encoding(enforcement, variable, value);
        let _ = context.add_constraint(Constraint::enforced_by(
            [!enforcement],
            ConstraintKind::Linear(LinearConstraint::new(
                [(variable.positive(), 1)],
                Domain::singleton(value).complement(),
            )),
        ));
        Ok(true)
    }

    /// `enforcement -> variable ∈ implied`, where `reference` (a signed version of `variable`) is
    /// only locked by this constraint: it takes the smallest allowed value when enforced and its
    /// lower bound otherwise.
    fn rewrite_enforced_bound(
        &mut self,
        context: &mut PresolveContext,
        constraint: ConstraintId,
        reference: VarRef,
        enforcement: VarRef,
        implied: &Domain,
    ) -> Result<bool, PresolveError> {
        let variable = reference.variable();
        let implied = if reference.is_negated() {
            implied.negation()
        } else {
            implied.clone()
        }
        .intersection(&context.domain_of(reference));
        let lower_bound = context.min_of(reference);

        if implied.is_empty() {
            trace!("{constraint} forces {enforcement} to false");
            context.update_rule_stats("dual: enforced constraint always false");
            let _ = context.set_literal_to_false(enforcement)?;
            let _ = context.intersect_domain_with(reference, &Domain::singleton(lower_bound))?;
            self.statistics.num_fixed_variables += 1;
            self.delete_constraint(context, constraint);
            return Ok(true);
        }

        let enforced_value = implied.min();
        if enforced_value == lower_bound {
            trace!("{constraint} allows {reference} to be fixed to {lower_bound}");
            context.update_rule_stats("dual: fix singly locked variable");
            let _ = context.intersect_domain_with(reference, &Domain::singleton(lower_bound))?;
            self.statistics.num_fixed_variables += 1;
            self.delete_constraint(context, constraint);
            return Ok(true);
        }

        // reference = step * [enforcement] + lower_bound
        let Some(step) = enforced_value.checked_sub(lower_bound) else {
            return Ok(false);
        };
        let (coeff, offset) = if enforcement.is_negated() {
            (-step, enforced_value)
        } else {
            (step, lower_bound)
        };
        let (coeff, offset) = if reference.is_negated() {
            (-coeff, -offset)
        } else {
            (coeff, offset)
        };

        if let Some(enforced) = context.solution_crush().literal_value(enforcement) {
            let value = if enforced {
                enforced_value
            } else {
                lower_bound
            };
            context.solution_crush_mut().set_ref_value(reference, value);
        }

        debug!(
            "{variable} = {coeff} * {} + {offset} replaces {constraint}",
            enforcement.variable()
        );
        self.statistics.num_enforced_affine_relations += 1;
        context.update_rule_stats("dual: enforced affine relation");
        context.store_affine_relation(variable, enforcement.variable(), coeff, offset)?;
        self.delete_constraint(context, constraint);
        Ok(true)
    }

    /// Finds pairs of literals `a` and `b` which are each locked by a single constraint, where
    /// the constraints are the same once `a` and `b` are replaced by the same literal. Any
    /// solution can then be changed into one where `a == b` by decreasing the true one.
    fn merge_near_duplicate_literals(
        &mut self,
        context: &mut PresolveContext,
        processed: &mut KeyedVec<VariableId, bool>,
    ) -> Result<(), PresolveError> {
        let mut entries: Vec<(VarRef, ConstraintId, Constraint)> = vec![];
        let mut buckets: HashMap<u64, Vec<usize>> = HashMap::default();

        for index in 0..self.num_variables() {
            let variable = VariableId::create_from_index(index);
            if is_processed(processed, variable)
                || Self::should_skip(context, variable)
                || !context.can_be_used_as_literal(variable.positive())
            {
                continue;
            }

            for literal in [variable.positive(), variable.negative()] {
                if self.num_locks[literal] != 1 {
                    continue;
                }
                let Some(constraint) = self.locking_constraint[literal] else {
                    continue;
                };
                let locking = context.constraint(constraint);
                if locking.is_empty() || locking.has_duplicate_variables() {
                    continue;
                }
                let Some(canonical) = with_sentinel_literal(locking, literal) else {
                    continue;
                };

                let mut hasher = FnvHasher::default();
                canonical.hash(&mut hasher);
                let bucket = buckets.entry(hasher.finish()).or_default();

                let partner = bucket.iter().copied().find(|&other| {
                    let (other_literal, other_constraint, other_canonical) = &entries[other];
                    *other_constraint != constraint
                        && other_literal.variable() != variable
                        && *other_canonical == canonical
                });

                match partner {
                    Some(other) => {
                        let (other_literal, other_constraint, _) = entries[other].clone();
                        if self.merge_literals(
                            context,
                            processed,
                            (other_literal, other_constraint),
                            (literal, constraint),
                        )? {
                            break;
                        }
                    }
                    None => {
                        bucket.push(entries.len());
                        entries.push((literal, constraint, canonical));
                    }
                }
            }
        }

        Ok(())
    }

    /// Makes `a` equal to `b` and deletes the constraint of `b`, if nothing changed since both
    /// were recorded.
    fn merge_literals(
        &mut self,
        context: &mut PresolveContext,
        processed: &mut KeyedVec<VariableId, bool>,
        (a, constraint_a): (VarRef, ConstraintId),
        (b, constraint_b): (VarRef, ConstraintId),
    ) -> Result<bool, PresolveError> {
        if context.constraint(constraint_a).is_empty() || context.constraint(constraint_b).is_empty()
        {
            return Ok(false);
        }

        if is_processed(processed, a.variable()) || is_processed(processed, b.variable()) {
            return Ok(false);
        }
        let variables_a = context.constraint_to_variables(constraint_a).to_vec();
        let variables_b = context.constraint_to_variables(constraint_b).to_vec();
        if variables_b.contains(&a.variable()) || variables_a.contains(&b.variable()) {
            return Ok(false);
        }

        match (
            context.solution_crush().literal_value(a),
            context.solution_crush().literal_value(b),
        ) {
            (Some(true), Some(false)) => context.solution_crush_mut().set_literal_value(a, false),
            (Some(false), Some(true)) => context.solution_crush_mut().set_literal_value(b, false),
            _ => {}
        }

        debug!("{a} and {b} are only locked by {constraint_a} and {constraint_b}, which are equal up to them");
        self.statistics.num_duplicate_constraints += 1;
        context.update_rule_stats("dual: near-duplicate constraints");
        context.store_boolean_equality_relation(a, b)?;
        self.delete_constraint(context, constraint_b);

        for variable in variables_a.into_iter().chain(variables_b) {
            processed.accomodate(variable, false);
            processed[variable] = true;
        }
        Ok(true)
    }

    fn delete_constraint(&mut self, context: &mut PresolveContext, constraint: ConstraintId) {
        self.statistics.num_deleted_constraints += 1;
        context.remove_constraint(constraint);
    }
}

fn is_processed(processed: &KeyedVec<VariableId, bool>, variable: VariableId) -> bool {
    // Variables created during this round were never scanned.
    processed.get(variable).copied().unwrap_or(true)
}

/// Matches `enforcement -> coeff * variable ∈ rhs`, returning the enforcement, the variable and
/// the values of the variable for which the body holds.
fn enforced_single_variable_linear(constraint: &Constraint) -> Option<(VarRef, VariableId, Domain)> {
    let &[enforcement] = constraint.enforcement.as_slice() else {
        return None;
    };
    let ConstraintKind::Linear(linear) = &constraint.kind else {
        return None;
    };
    let &[(variable, coeff)] = linear.expression.terms() else {
        return None;
    };
    if variable == enforcement.variable() {
        return None;
    }

    Some((
        enforcement,
        variable,
        linear.rhs.inverse_multiplication_by(coeff),
    ))
}

/// Matches `antecedent -> consequent` written as a single literal conjunction or clause.
fn single_literal_implication(constraint: &Constraint) -> Option<(VarRef, VarRef)> {
    let &[antecedent] = constraint.enforcement.as_slice() else {
        return None;
    };
    match &constraint.kind {
        ConstraintKind::BoolAnd(literals) | ConstraintKind::BoolOr(literals) => {
            let &[consequent] = literals.as_slice() else {
                return None;
            };
            Some((antecedent, consequent))
        }
        _ => None,
    }
}

/// The constraint in which `literal` is replaced by a literal that does not occur in any model,
/// in a canonical form such that two constraints which only differ in that literal compare equal.
fn with_sentinel_literal(constraint: &Constraint, literal: VarRef) -> Option<Constraint> {
    let sentinel = VariableId::new(SENTINEL_VARIABLE).positive();
    let substitute = |other: VarRef| {
        if other == literal {
            sentinel
        } else if other == !literal {
            !sentinel
        } else {
            other
        }
    };
    let substitute_all = |literals: &[VarRef]| {
        let mut literals = literals.iter().copied().map(substitute).collect::<Vec<_>>();
        literals.sort_unstable();
        literals
    };

    let kind = match &constraint.kind {
        ConstraintKind::BoolOr(literals) => ConstraintKind::BoolOr(substitute_all(literals)),
        ConstraintKind::BoolAnd(literals) => ConstraintKind::BoolAnd(substitute_all(literals)),
        ConstraintKind::AtMostOne(literals) => ConstraintKind::AtMostOne(substitute_all(literals)),
        ConstraintKind::ExactlyOne(literals) => {
            ConstraintKind::ExactlyOne(substitute_all(literals))
        }
        ConstraintKind::Linear(linear) => {
            // With `literal == !x`, the term `c * x` equals `c - c * sentinel`.
            let mut shift = 0;
            let mut terms = vec![];
            for &(variable, coeff) in linear.expression.terms() {
                if variable != literal.variable() {
                    terms.push((variable.positive(), coeff));
                } else if literal.is_positive() {
                    terms.push((sentinel, coeff));
                } else {
                    shift = coeff;
                    terms.push((sentinel, coeff.checked_neg()?));
                }
            }
            if at_min_or_max(shift) {
                return None;
            }
            ConstraintKind::Linear(LinearConstraint::new(
                terms,
                linear.rhs.addition_of(-shift),
            ))
        }
        ConstraintKind::AllDifferent(_)
        | ConstraintKind::Table { .. }
        | ConstraintKind::IntProduct { .. }
        | ConstraintKind::Empty => return None,
    };

    Some(Constraint::enforced_by(
        substitute_all(&constraint.enforcement),
        kind,
    ))
}
