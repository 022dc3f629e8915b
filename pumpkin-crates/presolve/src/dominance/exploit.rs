//! Reduces the model with the relations found by [`VarDomination`].
//!
//! A relation `y ∈ Dom(x)` shows that any solution can be changed by decreasing `x` and
//! increasing `y` without becoming infeasible or worse. Every reduction below restricts some
//! signed variable to what such changes can reach. Once the upper bound of a signed variable is
//! lowered, a later reduction may no longer rely on increasing it; this is tracked in
//! `increase_is_forbidden`, and a relation `y ∈ Dom(x)` is only used when neither `y` nor `!x`
//! may no longer increase.

use log::debug;
use log::trace;
use num::Integer;

use super::scan_model_for_dual_bound_strengthening;
use super::DominanceOptions;
use super::DominancePhase;
use super::DualBoundStrengthening;
use super::VarDomination;
use crate::basic_types::Domain;
use crate::basic_types::PresolveError;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::context::PresolveContext;
use crate::create_statistics_struct;
use crate::model::Constraint;
use crate::model::ConstraintId;
use crate::model::ConstraintKind;
use crate::model::LinearExpression;
use crate::model::VarRef;
use crate::model::VariableId;
use crate::pumpkin_assert_simple;

create_statistics_struct!(
    /// Statistics of a single round of reductions based on dominance relations.
    DominanceStatistics {
    num_relations: usize,
    num_fixed_in_constraints: usize,
    num_tightened_in_linear: usize,
    num_added_implications: usize,
    num_shrunk_by_locks: usize,
});

/// Applies the final relations of `var_domination` to the model.
pub fn exploit_dominance_relations(
    context: &mut PresolveContext,
    var_domination: &VarDomination,
    options: &DominanceOptions,
) -> Result<DominanceStatistics, PresolveError> {
    pumpkin_assert_simple!(
        var_domination.phase() == DominancePhase::Finalised,
        "relations can only be exploited once they are final, not in the {} phase",
        var_domination.phase()
    );
    pumpkin_assert_simple!(var_domination.num_refs() == 2 * context.num_variables());

    let mut exploiter = DominanceExploiter::new(var_domination);
    if var_domination.num_dominance_relations() == 0 {
        return Ok(exploiter.statistics);
    }

    exploiter.fix_within_constraints(context, options)?;
    exploiter.tighten_linear_constraints(context)?;
    if options.add_implications {
        exploiter.add_implications(context)?;
    }
    exploiter.shrink_explained_locks(context)?;

    debug!("Dominance: {:?}", exploiter.statistics);
    Ok(exploiter.statistics)
}

struct DominanceExploiter<'a> {
    var_domination: &'a VarDomination,
    increase_is_forbidden: KeyedVec<VarRef, bool>,
    statistics: DominanceStatistics,
}

impl<'a> DominanceExploiter<'a> {
    fn new(var_domination: &'a VarDomination) -> Self {
        let mut increase_is_forbidden = KeyedVec::default();
        increase_is_forbidden.assign(var_domination.num_refs(), false);
        DominanceExploiter {
            var_domination,
            increase_is_forbidden,
            statistics: DominanceStatistics {
                num_relations: var_domination.num_dominance_relations(),
                ..Default::default()
            },
        }
    }

    fn is_usable(&self, dominated: VarRef, dominator: VarRef) -> bool {
        !self.increase_is_forbidden[dominator] && !self.increase_is_forbidden[!dominated]
    }

    fn dominates(&self, dominator: VarRef, dominated: VarRef) -> bool {
        self.var_domination
            .dominating_variables(dominated)
            .binary_search(&dominator)
            .is_ok()
            && self.is_usable(dominated, dominator)
    }

    fn usable_dominators(&self, dominated: VarRef) -> Vec<VarRef> {
        self.var_domination
            .dominating_variables(dominated)
            .iter()
            .copied()
            .filter(|&dominator| self.is_usable(dominated, dominator))
            .collect()
    }

    /// Restricts `reference` to at most `upper_bound`, moving the hinted excess to `dominators`.
    fn restrict_upper_bound(
        &mut self,
        context: &mut PresolveContext,
        reference: VarRef,
        upper_bound: i64,
        dominators: &[VarRef],
    ) -> Result<bool, PresolveError> {
        context.crush_dominated_ref(reference, upper_bound, dominators);
        let changed =
            context.intersect_domain_with(reference, &Domain::new(i64::MIN, upper_bound))?;
        if changed {
            trace!("{reference} <= {upper_bound} because of its dominators {dominators:?}");
            self.increase_is_forbidden[reference] = true;
        }
        Ok(changed)
    }

    fn fix_literal_to_false(
        &mut self,
        context: &mut PresolveContext,
        literal: VarRef,
        dominator: VarRef,
    ) -> Result<(), PresolveError> {
        let false_value = if literal.is_negated() { -1 } else { 0 };
        if self.restrict_upper_bound(context, literal, false_value, &[dominator])? {
            self.statistics.num_fixed_in_constraints += 1;
            context.update_rule_stats("dominance: fix literal in constraint");
        }
        Ok(())
    }

    /// Fixes literals using relations between literals of the same implication or at-most-one.
    fn fix_within_constraints(
        &mut self,
        context: &mut PresolveContext,
        options: &DominanceOptions,
    ) -> Result<(), PresolveError> {
        for index in 0..context.num_constraints() {
            let constraint = context
                .constraint(ConstraintId::create_from_index(index))
                .clone();
            if constraint.is_empty() || constraint.has_duplicate_variables() {
                continue;
            }

            match (constraint.enforcement.as_slice(), &constraint.kind) {
                (&[antecedent], ConstraintKind::BoolAnd(literals)) => {
                    for &consequent in literals {
                        self.fix_in_implication(context, antecedent, consequent)?;
                    }
                }
                (&[antecedent], ConstraintKind::BoolOr(literals)) if literals.len() == 1 => {
                    self.fix_in_implication(context, antecedent, literals[0])?;
                }
                (
                    [],
                    ConstraintKind::AtMostOne(literals) | ConstraintKind::ExactlyOne(literals),
                ) if literals.len() <= options.max_literals_for_in_constraint_fixing => {
                    self.fix_in_at_most_one(context, literals)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// `antecedent -> consequent`: when both can be decreased together the antecedent can be
    /// false, and when both can be increased together the consequent can be true.
    fn fix_in_implication(
        &mut self,
        context: &mut PresolveContext,
        antecedent: VarRef,
        consequent: VarRef,
    ) -> Result<(), PresolveError> {
        if !is_unfixed_literal(context, antecedent) || !is_unfixed_literal(context, consequent) {
            return Ok(());
        }

        if self.dominates(!consequent, antecedent) {
            return self.fix_literal_to_false(context, antecedent, !consequent);
        }
        if self.dominates(antecedent, !consequent) {
            return self.fix_literal_to_false(context, !consequent, antecedent);
        }
        Ok(())
    }

    /// At most one literal is true, so a true literal can always be swapped with any of its
    /// dominators which is not false.
    fn fix_in_at_most_one(
        &mut self,
        context: &mut PresolveContext,
        literals: &[VarRef],
    ) -> Result<(), PresolveError> {
        for &literal in literals {
            if !is_unfixed_literal(context, literal) {
                continue;
            }
            let dominator = self
                .var_domination
                .dominating_variables(literal)
                .iter()
                .copied()
                .find(|&dominator| {
                    literals.contains(&dominator)
                        && !context.literal_is_false(dominator)
                        && self.is_usable(literal, dominator)
                });
            if let Some(dominator) = dominator {
                self.fix_literal_to_false(context, literal, dominator)?;
            }
        }
        Ok(())
    }

    fn tighten_linear_constraints(
        &mut self,
        context: &mut PresolveContext,
    ) -> Result<(), PresolveError> {
        for index in 0..context.num_constraints() {
            let constraint_id = ConstraintId::create_from_index(index);
            let constraint = context.constraint(constraint_id);
            if !constraint.enforcement.is_empty() || constraint.has_duplicate_variables() {
                continue;
            }
            let ConstraintKind::Linear(linear) = &constraint.kind else {
                continue;
            };
            let &[(lower, upper)] = linear.rhs.intervals() else {
                continue;
            };

            let entities = weighted_entities(&linear.expression);
            self.tighten_linear_constraint(context, constraint_id, &entities, lower, upper)?;
        }
        Ok(())
    }

    fn tighten_linear_constraint(
        &mut self,
        context: &mut PresolveContext,
        constraint: ConstraintId,
        entities: &[(VarRef, i128)],
        lower: i64,
        upper: i64,
    ) -> Result<(), PresolveError> {
        let Some((min_activity, max_activity)) = activity_bounds(context, entities) else {
            return Ok(());
        };
        if min_activity > upper as i128 || max_activity < lower as i128 {
            return Err(context.notify_infeasible(PresolveError::InfeasibleConstraint { constraint }));
        }

        let mut max_activity = max_activity;
        if upper != i64::MAX {
            let reduction = self.tighten_side(context, entities, upper as i128, min_activity)?;
            max_activity -= reduction;
        }

        if lower != i64::MIN {
            let negated = entities
                .iter()
                .map(|&(entity, weight)| (!entity, weight))
                .collect::<Vec<_>>();
            let _ = self.tighten_side(context, &negated, -(lower as i128), -max_activity)?;
        }
        Ok(())
    }

    /// `Σ weight * entity <= bound`: when all dominators of an entity within the constraint are
    /// at their upper bound, the entity has to respect the remaining slack; otherwise the entity
    /// can be moved to its dominators. Returns by how much the maximum activity decreased.
    fn tighten_side(
        &mut self,
        context: &mut PresolveContext,
        entities: &[(VarRef, i128)],
        bound: i128,
        min_activity: i128,
    ) -> Result<i128, PresolveError> {
        let weights = entities.iter().copied().collect::<HashMap<_, _>>();
        let mut reduction = 0_i128;

        for &(entity, weight) in entities {
            if context.is_fixed(entity) {
                continue;
            }
            let dominators = self
                .usable_dominators(entity)
                .into_iter()
                .filter(|dominator| weights.contains_key(dominator))
                .collect::<Vec<_>>();
            if dominators.is_empty() {
                continue;
            }

            let Some(activity) = dominators.iter().try_fold(min_activity, |activity, dominator| {
                let range = context.max_of(*dominator) as i128 - context.min_of(*dominator) as i128;
                activity.checked_add(weights[dominator].checked_mul(range)?)
            }) else {
                continue;
            };

            let lower_bound = context.min_of(entity) as i128;
            let upper_bound = context.max_of(entity);
            let limit = if bound < activity {
                lower_bound
            } else {
                lower_bound + (bound - activity) / weight
            };
            if limit >= upper_bound as i128 {
                continue;
            }

            // lower_bound <= limit < upper_bound
            let Some(new_upper_bound) = context.domain_of(entity).value_at_or_below(limit as i64)
            else {
                continue;
            };
            if self.restrict_upper_bound(context, entity, new_upper_bound, &dominators)? {
                self.statistics.num_tightened_in_linear += 1;
                context.update_rule_stats("dominance: tighten in linear");
                reduction = reduction.saturating_add(
                    weight.saturating_mul(upper_bound as i128 - new_upper_bound as i128),
                );
            }
        }

        Ok(reduction)
    }

    /// Adds `a -> b` for every relation `b ∈ Dom(a)` between unfixed literals.
    fn add_implications(&mut self, context: &mut PresolveContext) -> Result<(), PresolveError> {
        let mut implications: HashSet<(VarRef, VarRef)> = HashSet::default();
        for index in 0..context.num_constraints() {
            let constraint = context.constraint(ConstraintId::create_from_index(index));
            for (antecedent, consequent) in implications_of(constraint) {
                let _ = implications.insert((antecedent, consequent));
                let _ = implications.insert((!consequent, !antecedent));
            }
        }

        for index in 0..context.num_variables() {
            let variable = VariableId::create_from_index(index);
            if !is_unfixed_literal(context, variable.positive()) {
                continue;
            }

            for antecedent in [variable.positive(), variable.negative()] {
                let var_domination = self.var_domination;
                for &consequent in var_domination.dominating_variables(antecedent) {
                    if consequent.variable() == variable
                        || !is_unfixed_literal(context, consequent)
                        || !self.is_usable(antecedent, consequent)
                        || !implications.insert((antecedent, consequent))
                    {
                        continue;
                    }
                    let _ = implications.insert((!consequent, !antecedent));

                    trace!("{consequent} dominates {antecedent}, adding {antecedent} -> {consequent}");
                    context
                        .solution_crush_mut()
                        .update_literals_with_implication(antecedent, consequent);
                    let _ = context.add_implication(antecedent, consequent);
                    self.increase_is_forbidden[antecedent] = true;
                    self.increase_is_forbidden[!consequent] = true;
                    self.statistics.num_added_implications += 1;
                    context.update_rule_stats("dominance: add implication");
                }
            }
        }
        Ok(())
    }

    /// Decreases signed variables whose every lock is a linear constraint which stays satisfied
    /// once the dominators are at their upper bound.
    fn shrink_explained_locks(&mut self, context: &mut PresolveContext) -> Result<(), PresolveError> {
        let mut locks = DualBoundStrengthening::new(context.num_variables());
        scan_model_for_dual_bound_strengthening(context, &mut locks);

        for index in 0..self.var_domination.num_refs() {
            let entity = VarRef::create_from_index(index);
            if context.is_fixed(entity) || context.variable_was_removed(entity.variable()) {
                continue;
            }
            let num_locks = locks.num_locks(entity);
            if num_locks == 0 {
                continue;
            }
            let dominators = self.usable_dominators(entity);
            if dominators.is_empty() {
                continue;
            }

            let Some(limit) = explained_decrease_limit(context, entity, &dominators, num_locks)
            else {
                continue;
            };
            let upper_bound = context.max_of(entity);
            let target = limit.max(context.min_of(entity) as i128);
            if target >= upper_bound as i128 {
                continue;
            }
            let Some(new_upper_bound) = context.domain_of(entity).value_at_or_above(target as i64)
            else {
                continue;
            };
            if new_upper_bound >= upper_bound {
                continue;
            }

            if self.restrict_upper_bound(context, entity, new_upper_bound, &dominators)? {
                self.statistics.num_shrunk_by_locks += 1;
                context.update_rule_stats("dominance: shrink explained locks");
            }
        }
        Ok(())
    }
}

fn is_unfixed_literal(context: &PresolveContext, literal: VarRef) -> bool {
    context.can_be_used_as_literal(literal) && !context.is_fixed(literal)
}

/// The terms of `expression` as signed variables with a positive weight.
fn weighted_entities(expression: &LinearExpression) -> Vec<(VarRef, i128)> {
    expression
        .terms()
        .iter()
        .map(|&(variable, coeff)| {
            if coeff > 0 {
                (variable.positive(), coeff as i128)
            } else {
                (variable.negative(), -(coeff as i128))
            }
        })
        .collect()
}

fn activity_bounds(context: &PresolveContext, entities: &[(VarRef, i128)]) -> Option<(i128, i128)> {
    entities
        .iter()
        .try_fold((0_i128, 0_i128), |(min_activity, max_activity), &(entity, weight)| {
            let low = weight.checked_mul(context.min_of(entity) as i128)?;
            let high = weight.checked_mul(context.max_of(entity) as i128)?;
            Some((min_activity.checked_add(low)?, max_activity.checked_add(high)?))
        })
}

/// The implications `a -> b` stated directly by `constraint`.
fn implications_of(constraint: &Constraint) -> Vec<(VarRef, VarRef)> {
    match (constraint.enforcement.as_slice(), &constraint.kind) {
        (&[antecedent], ConstraintKind::BoolAnd(literals)) => literals
            .iter()
            .map(|&consequent| (antecedent, consequent))
            .collect(),
        (&[antecedent], ConstraintKind::BoolOr(literals)) if literals.len() == 1 => {
            vec![(antecedent, literals[0])]
        }
        _ => vec![],
    }
}

/// The value down to which `entity` can be decreased once all of its `dominators` are at their
/// upper bound, or [`None`] when one of its `num_locks` locks is not a linear constraint.
fn explained_decrease_limit(
    context: &PresolveContext,
    entity: VarRef,
    dominators: &[VarRef],
    num_locks: usize,
) -> Option<i128> {
    let variable = entity.variable();
    let mut num_explained = 0;
    let mut limit = i128::MIN;

    for constraint_id in context.var_to_constraints(variable) {
        let constraint = context.constraint(constraint_id);
        if !constraint.enforcement.is_empty() || constraint.has_duplicate_variables() {
            continue;
        }
        let ConstraintKind::Linear(linear) = &constraint.kind else {
            continue;
        };
        if linear.rhs.is_empty() {
            continue;
        }

        let weight_of = |reference: VarRef| {
            let coeff = linear.expression.coefficient_of(reference.variable()) as i128;
            if reference.is_negated() {
                -coeff
            } else {
                coeff
            }
        };
        let entities = weighted_entities(&linear.expression);
        let (min_activity, max_activity) = activity_bounds(context, &entities)?;

        // The lower side is read as is, the upper side as `-activity >= -end`.
        let sides = [
            (1, linear.rhs.last_interval_start() as i128, min_activity),
            (-1, -(linear.rhs.first_interval_end() as i128), -max_activity),
        ];
        for (sign, lower, min_activity) in sides {
            let weight = sign * weight_of(entity);
            if weight <= 0 || min_activity >= lower {
                continue;
            }
            num_explained += 1;

            let activity = dominators.iter().try_fold(min_activity, |activity, &dominator| {
                let dominator_weight = sign * weight_of(dominator);
                if dominator_weight <= 0 {
                    return Some(activity);
                }
                let range = context.max_of(dominator) as i128 - context.min_of(dominator) as i128;
                activity.checked_add(dominator_weight.checked_mul(range)?)
            })?;
            let needed = Integer::div_ceil(&(lower - activity), &weight);
            limit = limit.max(context.min_of(entity) as i128 + needed);
        }
    }

    (num_explained == num_locks).then_some(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dominance::scan_model_for_dominance_detection;
    use crate::model::LinearConstraint;
    use crate::model::Model;
    use crate::model::Objective;

    fn exploit(model: Model, options: DominanceOptions) -> (PresolveContext, DominanceStatistics) {
        let mut context = PresolveContext::new(model);
        let mut var_domination = VarDomination::new(context.num_variables(), options);
        scan_model_for_dominance_detection(&context, &mut var_domination);
        let statistics = exploit_dominance_relations(&mut context, &var_domination, &options)
            .expect("the model is feasible");
        (context, statistics)
    }

    #[test]
    fn dominated_literal_of_exactly_one_is_fixed_to_false() {
        let mut model = Model::default();
        let a = model.new_boolean();
        let b = model.new_boolean();
        let _ = model.add_constraint(Constraint::new(ConstraintKind::ExactlyOne(vec![
            a.positive(),
            b.positive(),
        ])));
        model.set_solution_hint(vec![1, 0]);

        let (context, statistics) = exploit(model, DominanceOptions::default());

        // Both dominate each other, only one of them may be fixed.
        assert_eq!(context.var_domain(a), &Domain::singleton(0));
        assert!(!context.is_fixed(b.positive()));
        assert_eq!(statistics.num_fixed_in_constraints, 1);
        assert_eq!(context.solution_crush().hint(), Some(&[0, 1][..]));
    }

    #[test]
    fn antecedent_of_implication_is_fixed_to_false() {
        let mut model = Model::default();
        let a = model.new_boolean();
        let b = model.new_boolean();
        // a -> b and b -> a; lowering both together is always fine.
        let _ = model.add_constraint(Constraint::implication(a.positive(), b.positive()));
        let _ = model.add_constraint(Constraint::new(ConstraintKind::BoolOr(vec![
            a.positive(),
            b.negative(),
        ])));
        model.set_solution_hint(vec![1, 1]);

        let (context, statistics) = exploit(model, DominanceOptions::default());

        assert_eq!(context.var_domain(a), &Domain::singleton(0));
        assert!(!context.is_fixed(b.positive()));
        assert_eq!(statistics.num_fixed_in_constraints, 1);
        assert_eq!(context.solution_crush().hint(), Some(&[0, 0][..]));
    }

    #[test]
    fn linear_bounds_are_tightened_with_dominators_at_their_bound() {
        let mut model = Model::default();
        let x = model.new_variable(Domain::new(0, 10));
        let y = model.new_variable(Domain::new(0, 4));
        // 2 <= x + y <= 10, minimise 2x + y
        let _ = model.add_constraint(Constraint::new(ConstraintKind::Linear(
            LinearConstraint::new([(x.positive(), 1), (y.positive(), 1)], Domain::new(2, 10)),
        )));
        model.set_objective(Objective::minimise([(x.positive(), 2), (y.positive(), 1)]));
        model.set_solution_hint(vec![8, 1]);

        let (context, statistics) = exploit(model, DominanceOptions::default());

        // Either x is 0 or y is 4, so x <= 6 and y >= 2.
        assert_eq!(context.var_domain(x), &Domain::new(0, 6));
        assert_eq!(context.var_domain(y), &Domain::new(2, 4));
        assert_eq!(statistics.num_tightened_in_linear, 2);
        assert_eq!(context.solution_crush().hint(), Some(&[6, 3][..]));
    }

    #[test]
    fn implication_is_added_between_dominated_literals() {
        let mut model = Model::default();
        let x = model.new_boolean();
        let y = model.new_boolean();
        // x or y, minimise 2x + y
        let _ = model.add_constraint(Constraint::new(ConstraintKind::BoolOr(vec![
            x.positive(),
            y.positive(),
        ])));
        model.set_objective(Objective::minimise([(x.positive(), 2), (y.positive(), 1)]));
        model.set_solution_hint(vec![1, 0]);

        let (context, statistics) = exploit(model.clone(), DominanceOptions::default());

        assert_eq!(statistics.num_added_implications, 1);
        assert_eq!(context.num_constraints(), 2);
        assert_eq!(
            context.constraint(ConstraintId::create_from_index(1)),
            &Constraint::implication(x.positive(), y.positive())
        );
        assert_eq!(context.solution_crush().hint(), Some(&[0, 1][..]));

        let options = DominanceOptions {
            add_implications: false,
            ..Default::default()
        };
        let (context, statistics) = exploit(model, options);
        assert_eq!(statistics.num_added_implications, 0);
        assert_eq!(context.num_constraints(), 1);
    }

    #[test]
    fn explained_lock_lets_variable_decrease() {
        let mut model = Model::default();
        let x = model.new_variable(Domain::new(0, 10));
        let y = model.new_variable(Domain::new(0, 3));
        // x + y >= 5, minimise 2x + y
        let _ = model.add_constraint(Constraint::new(ConstraintKind::Linear(
            LinearConstraint::greater_than_or_equals([(x.positive(), 1), (y.positive(), 1)], 5),
        )));
        model.set_objective(Objective::minimise([(x.positive(), 2), (y.positive(), 1)]));
        model.set_solution_hint(vec![10, 0]);

        let (context, statistics) = exploit(model, DominanceOptions::default());

        // y can take the value of x, and with y at 3 the constraint only needs x >= 2.
        assert_eq!(context.var_domain(y), &Domain::singleton(3));
        assert_eq!(context.var_domain(x), &Domain::new(0, 2));
        assert_eq!(statistics.num_tightened_in_linear, 1);
        assert_eq!(statistics.num_shrunk_by_locks, 1);
        assert_eq!(context.solution_crush().hint(), Some(&[2, 3][..]));
    }

    #[test]
    fn mirrored_explained_lock_lets_variable_increase() {
        let mut model = Model::default();
        let x = model.new_variable(Domain::new(-10, 0));
        let y = model.new_variable(Domain::new(-3, 0));
        // x + y <= -5, minimise -2x - y
        let _ = model.add_constraint(Constraint::new(ConstraintKind::Linear(
            LinearConstraint::less_than_or_equals([(x.positive(), 1), (y.positive(), 1)], -5),
        )));
        model.set_objective(Objective::minimise([(x.positive(), -2), (y.positive(), -1)]));
        model.set_solution_hint(vec![-10, 0]);

        let (context, statistics) = exploit(model, DominanceOptions::default());

        assert_eq!(context.var_domain(y), &Domain::singleton(-3));
        assert_eq!(context.var_domain(x), &Domain::new(-2, 0));
        assert_eq!(statistics.num_tightened_in_linear, 1);
        assert_eq!(statistics.num_shrunk_by_locks, 1);
        assert_eq!(context.solution_crush().hint(), Some(&[-2, -3][..]));
    }

    #[test]
    fn nothing_happens_without_relations() {
        let mut model = Model::default();
        let x = model.new_variable(Domain::new(0, 10));
        let y = model.new_variable(Domain::new(0, 10));
        let _ = model.add_constraint(Constraint::new(ConstraintKind::Table {
            variables: vec![x, y],
            tuples: vec![vec![1, 2], vec![3, 4]],
        }));

        let (context, statistics) = exploit(model, DominanceOptions::default());

        assert_eq!(statistics, DominanceStatistics::default());
        assert_eq!(context.var_domain(x), &Domain::new(0, 10));
    }
}
