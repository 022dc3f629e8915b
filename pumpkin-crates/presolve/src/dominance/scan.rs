//! Describes the constraints of a model to [`VarDomination`] and [`DualBoundStrengthening`].
//!
//! Every scan walks the same objects in the same order: the variables which have to be isolated,
//! the constraints, the affine relations and finally the objective. The candidate filtering of
//! [`VarDomination`] relies on the constraints being described identically in each of its
//! phases, which is why all passes go through [`scan`].

use itertools::Itertools;
use log::debug;

use super::DualBoundStrengthening;
use super::VarDomination;
use crate::basic_types::Domain;
use crate::containers::StorageKey;
use crate::context::PresolveContext;
use crate::model::Constraint;
use crate::model::ConstraintId;
use crate::model::ConstraintKind;
use crate::model::LinearConstraint;
use crate::model::Objective;
use crate::model::VarRef;
use crate::model::VariableId;
use crate::pumpkin_assert_simple;

/// What a scan over the model records.
#[derive(Debug)]
enum ScanPass<'a> {
    /// Refines the partition of the signed variables.
    Partition(&'a mut VarDomination),
    /// Records, filters or re-checks the candidates, depending on the phase.
    Candidates(&'a mut VarDomination),
    /// Counts the locks of the signed variables.
    Locks(&'a mut DualBoundStrengthening),
}

/// Runs the three phases of dominance detection over the model; afterwards the relations of
/// `var_domination` are final.
pub fn scan_model_for_dominance_detection(
    context: &PresolveContext,
    var_domination: &mut VarDomination,
) {
    pumpkin_assert_simple!(var_domination.num_refs() == 2 * context.num_variables());

    scan(context, ScanPass::Partition(var_domination));
    scan(context, ScanPass::Candidates(var_domination));
    if !var_domination.end_first_phase() {
        return;
    }

    scan(context, ScanPass::Candidates(var_domination));
    var_domination.end_second_phase();

    #[cfg(any(test, feature = "debug-checks"))]
    scan(context, ScanPass::Candidates(var_domination));

    debug!(
        "Dominance scan found {} relations",
        var_domination.num_dominance_relations()
    );
}

/// Records the locks of every signed variable of the model.
pub fn scan_model_for_dual_bound_strengthening(
    context: &PresolveContext,
    dual_bound_strengthening: &mut DualBoundStrengthening,
) {
    pumpkin_assert_simple!(dual_bound_strengthening.num_variables() == context.num_variables());
    scan(context, ScanPass::Locks(dual_bound_strengthening));
}

fn scan(context: &PresolveContext, mut pass: ScanPass<'_>) {
    if let ScanPass::Partition(var_domination) = &mut pass {
        isolate_variables(context, var_domination);
    }

    for index in 0..context.num_constraints() {
        let constraint_id = ConstraintId::create_from_index(index);
        scan_constraint(
            context,
            constraint_id,
            context.constraint(constraint_id),
            &mut pass,
        );
    }

    scan_affine_relations(context, &mut pass);

    if let Some(objective) = context.objective() {
        scan_objective(context, objective, &mut pass);
    }
}

/// Fixed and unused variables cannot take part in a relation, and neither can variables with
/// holes in their domain since moving them by one may not give a value of the domain.
fn isolate_variables(context: &PresolveContext, var_domination: &mut VarDomination) {
    for index in 0..context.num_variables() {
        let variable = VariableId::create_from_index(index);
        if context.is_fixed(variable.positive())
            || context.variable_was_removed(variable)
            || context.variable_is_not_used_anymore(variable)
            || context.var_domain(variable).has_holes()
        {
            var_domination.can_only_dominate_each_other(&[variable.positive()]);
        }
    }
}

fn scan_constraint(
    context: &PresolveContext,
    constraint_id: ConstraintId,
    constraint: &Constraint,
    pass: &mut ScanPass<'_>,
) {
    if constraint.has_duplicate_variables() {
        scan_opaque_constraint(constraint_id, constraint, pass);
        return;
    }

    let enforcement = constraint.enforcement.as_slice();
    match &constraint.kind {
        ConstraintKind::BoolOr(literals) => match pass {
            ScanPass::Partition(_) => {}
            ScanPass::Candidates(var_domination) => {
                var_domination.activity_should_not_decrease(enforcement, literals, &[]);
            }
            ScanPass::Locks(dual_bound_strengthening) => {
                dual_bound_strengthening.cannot_decrease(literals, Some(constraint_id));
                dual_bound_strengthening.cannot_increase(enforcement, Some(constraint_id));
            }
        },
        ConstraintKind::BoolAnd(literals) => match pass {
            ScanPass::Partition(_) => {}
            ScanPass::Candidates(var_domination) => {
                for &literal in literals {
                    var_domination.activity_should_not_decrease(enforcement, &[literal], &[]);
                }
            }
            ScanPass::Locks(dual_bound_strengthening) => {
                dual_bound_strengthening.cannot_decrease(literals, Some(constraint_id));
                dual_bound_strengthening.cannot_increase(enforcement, Some(constraint_id));
            }
        },
        ConstraintKind::AtMostOne(literals) => match pass {
            ScanPass::Partition(_) => {}
            ScanPass::Candidates(var_domination) => {
                var_domination.activity_should_not_increase(enforcement, literals, &[]);
            }
            ScanPass::Locks(dual_bound_strengthening) => {
                dual_bound_strengthening.cannot_increase(literals, Some(constraint_id));
                dual_bound_strengthening.cannot_increase(enforcement, Some(constraint_id));
            }
        },
        ConstraintKind::ExactlyOne(literals) => match pass {
            ScanPass::Partition(var_domination) => {
                var_domination.activity_should_not_change(literals, &[]);
            }
            ScanPass::Candidates(var_domination) => {
                var_domination.activity_should_not_decrease(enforcement, literals, &[]);
                var_domination.activity_should_not_increase(enforcement, literals, &[]);
            }
            ScanPass::Locks(dual_bound_strengthening) => {
                dual_bound_strengthening.cannot_move(literals, Some(constraint_id));
                dual_bound_strengthening.cannot_increase(enforcement, Some(constraint_id));
            }
        },
        ConstraintKind::Linear(linear) => {
            scan_linear_constraint(context, constraint_id, enforcement, linear, pass)
        }
        ConstraintKind::AllDifferent(_)
        | ConstraintKind::Table { .. }
        | ConstraintKind::IntProduct { .. } => {
            scan_opaque_constraint(constraint_id, constraint, pass)
        }
        ConstraintKind::Empty => {}
    }
}

/// Whether the activity of a linear constraint can freely increase and freely decrease, given its
/// activity bounds.
fn activity_freedom(rhs: &Domain, min_activity: i64, max_activity: i64) -> (bool, bool) {
    let reachable = rhs.intersection(&Domain::new(min_activity, max_activity));
    match reachable.intervals() {
        &[(lower, upper)] => (upper >= max_activity, lower <= min_activity),
        _ => (false, false),
    }
}

fn scan_linear_constraint(
    context: &PresolveContext,
    constraint_id: ConstraintId,
    enforcement: &[VarRef],
    linear: &LinearConstraint,
    pass: &mut ScanPass<'_>,
) {
    let (min_activity, max_activity) = context.compute_min_max_activity(&linear.expression);
    let (refs, coeffs): (Vec<VarRef>, Vec<i64>) = linear
        .expression
        .terms()
        .iter()
        .map(|&(variable, coeff)| (variable.positive(), coeff))
        .unzip();

    match pass {
        ScanPass::Locks(dual_bound_strengthening) => {
            if linear.rhs.is_empty() {
                dual_bound_strengthening.cannot_move(&refs, Some(constraint_id));
            } else {
                dual_bound_strengthening.process_linear_constraint(
                    false,
                    context,
                    &linear.expression,
                    &linear.rhs,
                    min_activity,
                    max_activity,
                    Some(constraint_id),
                );
            }
            dual_bound_strengthening.cannot_increase(enforcement, Some(constraint_id));
        }
        ScanPass::Partition(var_domination) => {
            if activity_freedom(&linear.rhs, min_activity, max_activity) == (false, false) {
                var_domination.activity_should_not_change(&refs, &coeffs);
            }
        }
        ScanPass::Candidates(var_domination) => {
            match activity_freedom(&linear.rhs, min_activity, max_activity) {
                (true, true) => {}
                (true, false) => {
                    var_domination.activity_should_not_decrease(enforcement, &refs, &coeffs)
                }
                (false, true) => {
                    var_domination.activity_should_not_increase(enforcement, &refs, &coeffs)
                }
                // The body is handled by the partition; only enabling the constraint can hurt.
                (false, false) => {
                    if !enforcement.is_empty() {
                        var_domination.activity_should_not_increase(&[], enforcement, &[]);
                    }
                }
            }
        }
    }
}

/// Constraints the scans do not understand: their variables are isolated and locked in both
/// directions.
fn scan_opaque_constraint(
    constraint_id: ConstraintId,
    constraint: &Constraint,
    pass: &mut ScanPass<'_>,
) {
    let refs = constraint
        .variables()
        .into_iter()
        .unique()
        .map(VariableId::positive)
        .collect::<Vec<_>>();

    match pass {
        ScanPass::Partition(var_domination) => {
            for &reference in &refs {
                var_domination.can_only_dominate_each_other(&[reference]);
            }
        }
        ScanPass::Candidates(var_domination) => {
            var_domination.activity_should_not_decrease(&[], &refs, &[]);
            var_domination.activity_should_not_increase(&[], &refs, &[]);
        }
        ScanPass::Locks(dual_bound_strengthening) => {
            dual_bound_strengthening.cannot_move(&refs, Some(constraint_id));
        }
    }
}

/// Every stored relation `x = coeff * representative + offset` is the linear equality
/// `x - coeff * representative == offset`.
fn scan_affine_relations(context: &PresolveContext, pass: &mut ScanPass<'_>) {
    for index in 0..context.num_variables() {
        let variable = VariableId::create_from_index(index);
        let relation = context.affine_relation(variable);
        let representative = relation.representative;
        if representative == variable
            || context.variable_was_removed(variable)
            || context.variable_was_removed(representative)
        {
            continue;
        }

        match pass {
            ScanPass::Partition(var_domination) => var_domination.activity_should_not_change(
                &[variable.positive(), representative.negative()],
                &[1, relation.coeff],
            ),
            ScanPass::Candidates(_) => {}
            ScanPass::Locks(dual_bound_strengthening) => dual_bound_strengthening
                .cannot_move(&[variable.positive(), representative.positive()], None),
        }
    }
}

fn scan_objective(context: &PresolveContext, objective: &Objective, pass: &mut ScanPass<'_>) {
    let (min_activity, max_activity) = context.compute_min_max_activity(&objective.expression);
    let (refs, coeffs): (Vec<VarRef>, Vec<i64>) = objective
        .expression
        .terms()
        .iter()
        .map(|&(variable, coeff)| (variable.positive(), coeff))
        .unzip();

    // Decreasing the objective is always fine unless its domain has a lower bound which can be
    // reached.
    let can_freely_decrease = match &objective.domain {
        None => true,
        Some(domain) => match domain.intervals() {
            &[(lower, _)] => lower <= min_activity,
            _ => false,
        },
    };

    match pass {
        ScanPass::Partition(var_domination) => {
            if !can_freely_decrease {
                var_domination.activity_should_not_change(&refs, &coeffs);
            }
        }
        ScanPass::Candidates(var_domination) => {
            if can_freely_decrease {
                var_domination.activity_should_not_increase(&[], &refs, &coeffs);
            }
        }
        ScanPass::Locks(dual_bound_strengthening) => {
            let domain = objective.domain_or_all();
            if domain.is_empty() {
                dual_bound_strengthening.cannot_move(&refs, None);
            } else {
                dual_bound_strengthening.process_linear_constraint(
                    true,
                    context,
                    &objective.expression,
                    &domain,
                    min_activity,
                    max_activity,
                    None,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dominance::DominanceOptions;
    use crate::dominance::DominancePhase;
    use crate::model::Model;

    fn detect(model: Model) -> (PresolveContext, VarDomination) {
        let context = PresolveContext::new(model);
        let mut var_domination =
            VarDomination::new(context.num_variables(), DominanceOptions::default());
        scan_model_for_dominance_detection(&context, &mut var_domination);
        (context, var_domination)
    }

    fn locks(model: Model) -> DualBoundStrengthening {
        let context = PresolveContext::new(model);
        let mut dual_bound_strengthening = DualBoundStrengthening::new(context.num_variables());
        scan_model_for_dual_bound_strengthening(&context, &mut dual_bound_strengthening);
        dual_bound_strengthening
    }

    #[test]
    fn exactly_one_literals_dominate_each_other() {
        let mut model = Model::default();
        let a = model.new_boolean();
        let b = model.new_boolean();
        let _ = model.add_constraint(Constraint::new(ConstraintKind::ExactlyOne(vec![
            a.positive(),
            b.positive(),
        ])));

        let (_, var_domination) = detect(model);

        assert_eq!(var_domination.phase(), DominancePhase::Finalised);
        assert_eq!(var_domination.dominating_variables(a.positive()), &[b.positive()]);
        assert_eq!(var_domination.dominating_variables(b.positive()), &[a.positive()]);
        assert_eq!(var_domination.dominating_variables(a.negative()), &[b.negative()]);
        assert_eq!(var_domination.dominating_variables(b.negative()), &[a.negative()]);
        assert_eq!(var_domination.num_dominance_relations(), 4);
    }

    #[test]
    fn cheaper_literal_of_a_clause_dominates() {
        let mut model = Model::default();
        let x = model.new_boolean();
        let y = model.new_boolean();
        let _ = model.add_constraint(Constraint::new(ConstraintKind::BoolOr(vec![
            x.positive(),
            y.positive(),
        ])));
        model.set_objective(Objective::minimise([(x.positive(), 2), (y.positive(), 1)]));

        let (_, var_domination) = detect(model);

        assert_eq!(var_domination.dominating_variables(x.positive()), &[y.positive()]);
        assert!(var_domination.dominating_variables(y.positive()).is_empty());
        assert_eq!(var_domination.dominating_variables(y.negative()), &[x.negative()]);
    }

    #[test]
    fn equality_relates_equal_coefficients_only() {
        let mut model = Model::default();
        let x = model.new_variable(Domain::new(0, 5));
        let y = model.new_variable(Domain::new(0, 5));
        let z = model.new_variable(Domain::new(0, 3));
        // x + y + 2z == 6
        let _ = model.add_constraint(Constraint::new(ConstraintKind::Linear(
            LinearConstraint::equals([(x.positive(), 1), (y.positive(), 1), (z.positive(), 2)], 6),
        )));

        let (_, var_domination) = detect(model);

        assert_eq!(var_domination.dominating_variables(x.positive()), &[y.positive()]);
        assert_eq!(var_domination.dominating_variables(y.negative()), &[x.negative()]);
        assert!(var_domination.dominating_variables(z.positive()).is_empty());
        assert!(var_domination.dominating_variables(z.negative()).is_empty());
    }

    #[test]
    fn slack_linear_constraint_blocks_nothing() {
        let mut model = Model::default();
        let x = model.new_variable(Domain::new(0, 10));
        let y = model.new_variable(Domain::new(0, 10));
        // x + y <= 100 always holds.
        let _ = model.add_constraint(Constraint::new(ConstraintKind::Linear(
            LinearConstraint::less_than_or_equals([(x.positive(), 1), (y.positive(), 1)], 100),
        )));

        let (_, var_domination) = detect(model);

        assert!(var_domination.can_freely_decrease(x.positive()));
        assert!(var_domination.can_freely_decrease(y.negative()));
        assert_eq!(var_domination.num_dominance_relations(), 0);
    }

    #[test]
    fn unknown_constraints_isolate_their_variables() {
        let mut model = Model::default();
        let x = model.new_boolean();
        let y = model.new_boolean();
        let _ = model.add_constraint(Constraint::new(ConstraintKind::BoolOr(vec![
            x.positive(),
            y.positive(),
        ])));
        let _ = model.add_constraint(Constraint::new(ConstraintKind::AllDifferent(vec![x, y])));

        let (_, var_domination) = detect(model);

        assert_eq!(var_domination.num_dominance_relations(), 0);
        assert!(!var_domination.can_freely_decrease(x.positive()));
        assert!(!var_domination.can_freely_decrease(x.negative()));
    }

    #[test]
    fn variables_with_holes_are_not_related() {
        let mut model = Model::default();
        let x = model.new_variable(Domain::from_values([0, 2]));
        let y = model.new_variable(Domain::new(0, 2));
        // x + y >= 1
        let _ = model.add_constraint(Constraint::new(ConstraintKind::Linear(
            LinearConstraint::greater_than_or_equals([(x.positive(), 1), (y.positive(), 1)], 1),
        )));

        let (_, var_domination) = detect(model);

        assert!(var_domination.dominating_variables(x.positive()).is_empty());
        assert!(var_domination.dominating_variables(y.positive()).is_empty());
    }

    #[test]
    fn clause_locks_its_literals_and_enforcement() {
        let mut model = Model::default();
        let e = model.new_boolean();
        let a = model.new_boolean();
        let b = model.new_boolean();
        let clause = model.add_constraint(Constraint::enforced_by(
            [e.positive()],
            ConstraintKind::BoolOr(vec![a.positive(), b.negative()]),
        ));

        let dual_bound_strengthening = locks(model);

        assert_eq!(dual_bound_strengthening.num_locks(a.positive()), 1);
        assert_eq!(dual_bound_strengthening.num_locks(b.negative()), 1);
        assert_eq!(dual_bound_strengthening.num_locks(e.negative()), 1);
        assert_eq!(dual_bound_strengthening.num_locks(e.positive()), 0);
        assert_eq!(
            dual_bound_strengthening.locking_constraint(a.positive()),
            Some(clause)
        );
        assert_eq!(
            dual_bound_strengthening.can_freely_decrease_until(b.positive()),
            i64::MIN
        );
    }

    #[test]
    fn at_most_one_locks_increases() {
        let mut model = Model::default();
        let a = model.new_boolean();
        let b = model.new_boolean();
        let _ = model.add_constraint(Constraint::new(ConstraintKind::AtMostOne(vec![
            a.positive(),
            b.positive(),
        ])));

        let dual_bound_strengthening = locks(model);

        assert_eq!(dual_bound_strengthening.num_locks(a.negative()), 1);
        assert_eq!(dual_bound_strengthening.num_locks(a.positive()), 0);
        assert_eq!(
            dual_bound_strengthening.can_freely_decrease_until(a.negative()),
            i64::MAX
        );
    }

    #[test]
    fn affine_relations_lock_both_variables() {
        let mut model = Model::default();
        let x = model.new_variable(Domain::new(0, 10));
        let y = model.new_variable(Domain::new(0, 5));
        let mut context = PresolveContext::new(model);
        context
            .store_affine_relation(x, y, 2, 0)
            .expect("the relation is feasible");

        let mut dual_bound_strengthening = DualBoundStrengthening::new(context.num_variables());
        scan_model_for_dual_bound_strengthening(&context, &mut dual_bound_strengthening);

        for reference in [x.positive(), x.negative(), y.positive(), y.negative()] {
            assert_eq!(dual_bound_strengthening.num_locks(reference), 1);
            assert_eq!(dual_bound_strengthening.locking_constraint(reference), None);
        }
    }

    #[test]
    fn bounded_objective_locks_decreases() {
        let mut model = Model::default();
        let x = model.new_variable(Domain::new(0, 10));
        model.set_objective(
            Objective::minimise([(x.positive(), 1)]).with_domain(Domain::new(3, 10)),
        );

        let dual_bound_strengthening = locks(model);

        assert_eq!(
            dual_bound_strengthening.can_freely_decrease_until(x.positive()),
            3
        );
        assert_eq!(
            dual_bound_strengthening.can_freely_decrease_until(x.negative()),
            i64::MAX
        );
    }
}
