use std::fmt::Write;

use log::debug;
use log::info;
use log::trace;
use num::Integer;

use super::AffineRelation;
use super::Relation;
use super::SolutionCrush;
use crate::basic_types::Domain;
use crate::basic_types::PresolveError;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::math::num_ext::cap_add;
use crate::math::num_ext::cap_prod;
use crate::math::num_ext::narrow;
use crate::math::num_ext::NumExt;
use crate::model::Constraint;
use crate::model::ConstraintId;
use crate::model::ConstraintKind;
use crate::model::LinearConstraint;
use crate::model::LinearExpression;
use crate::model::Model;
use crate::model::Objective;
use crate::model::VarRef;
use crate::model::VariableId;
use crate::pumpkin_assert_simple;
use crate::statistics::log_statistic;
use crate::statistics::should_log_statistics;

/// The presolve context owns the [`Model`] while it is being simplified.
///
/// It answers the queries the presolve rules make (domains, activities, usage) and offers the
/// mutations they perform. Every mutation keeps the solution hint feasible, keeps the
/// variable-constraint graph up to date and reports infeasibility as a [`PresolveError`]; once
/// infeasibility was reported the context stays unsatisfiable.
#[derive(Debug)]
pub struct PresolveContext {
    model: Model,
    affine_relations: AffineRelation,
    var_to_constraints: KeyedVec<VariableId, HashSet<ConstraintId>>,
    constraint_to_vars: KeyedVec<ConstraintId, Vec<VariableId>>,
    in_objective: KeyedVec<VariableId, bool>,
    removed: KeyedVec<VariableId, bool>,
    encodings: HashMap<(VariableId, i64), VarRef>,
    solution_crush: SolutionCrush,
    rule_stats: HashMap<String, usize>,
    is_unsat: bool,
}

impl PresolveContext {
    pub fn new(mut model: Model) -> PresolveContext {
        let num_variables = model.num_variables();
        let hint = model
            .solution_hint
            .take()
            .filter(|hint| hint.len() == num_variables);

        let mut context = PresolveContext {
            model,
            affine_relations: AffineRelation::default(),
            var_to_constraints: KeyedVec::default(),
            constraint_to_vars: KeyedVec::default(),
            in_objective: KeyedVec::default(),
            removed: KeyedVec::default(),
            encodings: HashMap::default(),
            solution_crush: SolutionCrush::new(hint),
            rule_stats: HashMap::default(),
            is_unsat: false,
        };

        context.var_to_constraints.resize(num_variables, HashSet::default());
        context.in_objective.resize(num_variables, false);
        context.removed.resize(num_variables, false);

        let constraints = context.model.constraints.keys().collect::<Vec<_>>();
        for constraint in constraints {
            context.update_constraint_variable_usage(constraint);
        }
        context.update_objective_usage();

        context
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Returns the presolved model, with the solution hint as it was maintained.
    pub fn into_model(mut self) -> Model {
        self.model.solution_hint = self.solution_crush.hint().map(<[i64]>::to_vec);
        self.model
    }

    pub fn num_variables(&self) -> usize {
        self.model.num_variables()
    }

    pub fn is_unsat(&self) -> bool {
        self.is_unsat
    }

    pub fn solution_crush(&self) -> &SolutionCrush {
        &self.solution_crush
    }

    pub(crate) fn solution_crush_mut(&mut self) -> &mut SolutionCrush {
        &mut self.solution_crush
    }

    /// Repairs the hint before `reference` is restricted to at most `upper_bound`, moving the
    /// excess value to the `dominators` of `reference`.
    pub(crate) fn crush_dominated_ref(
        &mut self,
        reference: VarRef,
        upper_bound: i64,
        dominators: &[VarRef],
    ) {
        self.solution_crush.update_refs_with_dominance(
            reference,
            upper_bound,
            dominators,
            &self.model.domains,
        );
    }

    /// Flags the model as unsatisfiable and returns the error describing why.
    pub(crate) fn notify_infeasible(&mut self, error: PresolveError) -> PresolveError {
        if !self.is_unsat {
            info!("Presolve proved the model infeasible: {error}");
        }
        self.is_unsat = true;
        error
    }

    // Domain queries.

    pub fn var_domain(&self, variable: VariableId) -> &Domain {
        &self.model.domains[variable]
    }

    pub fn domain_of(&self, reference: VarRef) -> Domain {
        let domain = &self.model.domains[reference.variable()];
        if reference.is_negated() {
            domain.negation()
        } else {
            domain.clone()
        }
    }

    pub fn min_of(&self, reference: VarRef) -> i64 {
        let domain = &self.model.domains[reference.variable()];
        if reference.is_negated() {
            domain.max().saturating_neg()
        } else {
            domain.min()
        }
    }

    pub fn max_of(&self, reference: VarRef) -> i64 {
        let domain = &self.model.domains[reference.variable()];
        if reference.is_negated() {
            domain.min().saturating_neg()
        } else {
            domain.max()
        }
    }

    pub fn is_fixed(&self, reference: VarRef) -> bool {
        self.model.domains[reference.variable()].is_fixed()
    }

    pub fn can_be_used_as_literal(&self, reference: VarRef) -> bool {
        self.model.domains[reference.variable()].is_included_in(&Domain::boolean())
    }

    pub fn literal_is_true(&self, literal: VarRef) -> bool {
        let true_value = if literal.is_negated() { 0 } else { 1 };
        self.can_be_used_as_literal(literal)
            && self.var_domain(literal.variable()).fixed_value() == Some(true_value)
    }

    pub fn literal_is_false(&self, literal: VarRef) -> bool {
        self.literal_is_true(!literal)
    }

    // Usage queries.

    /// Whether the variable was eliminated by presolve; its value is defined by its affine
    /// relation.
    pub fn variable_was_removed(&self, variable: VariableId) -> bool {
        self.removed[variable]
    }

    /// Whether the variable does not occur in any constraint, the objective or an affine relation.
    pub fn variable_is_not_used_anymore(&self, variable: VariableId) -> bool {
        self.var_to_constraints[variable].is_empty()
            && !self.in_objective[variable]
            && self.affine_relations.class_size(variable) == 1
    }

    /// Marks `variable` as no longer part of the model, e.g. after it was substituted away.
    pub fn mark_variable_as_removed(&mut self, variable: VariableId) {
        trace!("Removed variable {variable}");
        self.removed[variable] = true;
    }

    pub fn var_to_constraints(&self, variable: VariableId) -> impl Iterator<Item = ConstraintId> + '_ {
        self.var_to_constraints[variable].iter().copied()
    }

    pub fn num_constraints_of(&self, variable: VariableId) -> usize {
        self.var_to_constraints[variable].len()
    }

    /// The variables of `constraint`, including its enforcement, possibly with duplicates.
    pub fn constraint_to_variables(&self, constraint: ConstraintId) -> &[VariableId] {
        &self.constraint_to_vars[constraint]
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &Constraint {
        &self.model.constraints[constraint]
    }

    pub fn num_constraints(&self) -> usize {
        self.model.constraints.len()
    }

    pub fn objective(&self) -> Option<&Objective> {
        self.model.objective.as_ref()
    }

    /// The minimum and maximum value of `expression` over the current domains, saturating at
    /// [`i64::MIN`] and [`i64::MAX`].
    pub fn compute_min_max_activity(&self, expression: &LinearExpression) -> (i64, i64) {
        let mut min_activity = 0_i64;
        let mut max_activity = 0_i64;
        for &(variable, coeff) in expression.terms() {
            let domain = &self.model.domains[variable];
            let low = cap_prod(coeff, domain.min());
            let high = cap_prod(coeff, domain.max());
            let (low, high) = if coeff > 0 { (low, high) } else { (high, low) };
            min_activity = cap_add(min_activity, low);
            max_activity = cap_add(max_activity, high);
        }

        (min_activity, max_activity)
    }

    // Affine relations.

    pub fn affine_relations(&self) -> &AffineRelation {
        &self.affine_relations
    }

    pub fn affine_relation(&self, variable: VariableId) -> Relation {
        self.affine_relations.get(variable)
    }

    // Mutations.

    /// Restricts the domain of `reference` to `domain`. Returns whether the domain changed.
    ///
    /// The hinted value is moved to the closest remaining value.
    pub fn intersect_domain_with(
        &mut self,
        reference: VarRef,
        domain: &Domain,
    ) -> Result<bool, PresolveError> {
        let variable = reference.variable();
        let domain = if reference.is_negated() {
            domain.negation()
        } else {
            domain.clone()
        };

        let current = &self.model.domains[variable];
        if current.is_included_in(&domain) {
            return Ok(false);
        }

        let new_domain = current.intersection(&domain);
        if new_domain.is_empty() {
            return Err(self.notify_infeasible(PresolveError::EmptyDomain { variable }));
        }

        trace!("Domain of {variable}: {current} -> {new_domain}");
        self.solution_crush
            .set_var_to_closest_value(variable, &new_domain);
        self.model.domains[variable] = new_domain;
        Ok(true)
    }

    pub fn set_literal_to_false(&mut self, literal: VarRef) -> Result<bool, PresolveError> {
        pumpkin_assert_simple!(self.can_be_used_as_literal(literal));
        let false_value = if literal.is_negated() { -1 } else { 0 };
        self.intersect_domain_with(literal, &Domain::singleton(false_value))
    }

    pub fn set_literal_to_true(&mut self, literal: VarRef) -> Result<bool, PresolveError> {
        self.set_literal_to_false(!literal)
    }

    pub fn new_variable(&mut self, domain: Domain, hinted_value: i64) -> VariableId {
        let variable = self.model.new_variable(domain);
        let _ = self.var_to_constraints.push(HashSet::default());
        let _ = self.in_objective.push(false);
        let _ = self.removed.push(false);
        self.solution_crush.new_variable(hinted_value);
        variable
    }

    pub fn add_constraint(&mut self, constraint: Constraint) -> ConstraintId {
        let constraint_id = self.model.add_constraint(constraint);
        self.update_constraint_variable_usage(constraint_id);
        constraint_id
    }

    /// Adds `antecedent -> consequent`.
    pub fn add_implication(&mut self, antecedent: VarRef, consequent: VarRef) -> ConstraintId {
        self.add_constraint(Constraint::implication(antecedent, consequent))
    }

    pub fn remove_constraint(&mut self, constraint: ConstraintId) {
        trace!("Removed constraint {constraint}");
        self.model.constraints[constraint] = Constraint::new(ConstraintKind::Empty);
        self.update_constraint_variable_usage(constraint);
    }

    /// Recomputes which variables `constraint` uses.
    pub fn update_constraint_variable_usage(&mut self, constraint: ConstraintId) {
        self.constraint_to_vars.accomodate(constraint, vec![]);
        for &variable in &self.constraint_to_vars[constraint] {
            let _ = self.var_to_constraints[variable].remove(&constraint);
        }

        let variables = self.model.constraints[constraint].variables();
        for &variable in &variables {
            let _ = self.var_to_constraints[variable].insert(constraint);
        }
        self.constraint_to_vars[constraint] = variables;
    }

    fn update_objective_usage(&mut self) {
        self.in_objective.assign(self.model.num_variables(), false);
        if let Some(objective) = &self.model.objective {
            for variable in objective.expression.variables() {
                self.in_objective[variable] = true;
            }
        }
    }

    /// Registers `literal <=> variable == value`.
    pub fn insert_var_value_encoding(&mut self, literal: VarRef, variable: VariableId, value: i64) {
        trace!("{literal} encodes {variable} == {value}");
        let _ = self.encodings.insert((variable, value), literal);
    }

    pub fn get_var_value_encoding(&self, variable: VariableId, value: i64) -> Option<VarRef> {
        self.encodings.get(&(variable, value)).copied()
    }

    /// Records that the literals `a` and `b` are equal.
    pub fn store_boolean_equality_relation(
        &mut self,
        a: VarRef,
        b: VarRef,
    ) -> Result<(), PresolveError> {
        pumpkin_assert_simple!(self.can_be_used_as_literal(a) && self.can_be_used_as_literal(b));
        if a == b {
            return Ok(());
        }
        if a == !b {
            return Err(self.notify_infeasible(PresolveError::InfeasibleAffineRelation {
                x: a.variable(),
                y: b.variable(),
            }));
        }

        // a.var = b.var when both have the same sign, and a.var = 1 - b.var otherwise.
        if a.is_negated() == b.is_negated() {
            self.store_affine_relation(a.variable(), b.variable(), 1, 0)
        } else {
            self.store_affine_relation(a.variable(), b.variable(), -1, 1)
        }
    }

    /// Records `x = coeff * y + offset`.
    ///
    /// When the relation cannot be stored directly because the representatives of `x` and `y`
    /// are only related by a rational factor, or because composing it would overflow, both
    /// representatives are expressed in terms of a new variable whose domain holds exactly the
    /// values that can be reached. When even that is impossible, the relation is added as a linear
    /// constraint.
    pub fn store_affine_relation(
        &mut self,
        x: VariableId,
        y: VariableId,
        coeff: i64,
        offset: i64,
    ) -> Result<(), PresolveError> {
        pumpkin_assert_simple!(coeff != 0, "an affine relation needs a non-zero coefficient");
        pumpkin_assert_simple!(x != y, "an affine relation needs two distinct variables");

        let relation_x = self.affine_relations.get(x);
        let relation_y = self.affine_relations.get(y);

        if relation_x.representative == relation_y.representative {
            return self.fix_representative_from_cycle(x, y, coeff, offset, relation_x, relation_y);
        }

        if self.affine_relations.try_add(x, y, coeff, offset) {
            debug!("Stored affine relation {x} = {coeff} * {y} + {offset}");
            self.update_rule_stats("affine: new relation");
            return self.propagate_affine_relation(x, y, coeff, offset);
        }

        self.store_with_synthetic_variable(x, y, coeff, offset, relation_x, relation_y)
    }

    /// Handles `x = coeff * y + offset` when `x` and `y` already share their representative `r`,
    /// which gives `(coeff_x - coeff * coeff_y) * r = coeff * offset_y + offset - offset_x`.
    fn fix_representative_from_cycle(
        &mut self,
        x: VariableId,
        y: VariableId,
        coeff: i64,
        offset: i64,
        relation_x: Relation,
        relation_y: Relation,
    ) -> Result<(), PresolveError> {
        let factor = relation_x.coeff as i128 - coeff as i128 * relation_y.coeff as i128;
        let rhs = coeff as i128 * relation_y.offset as i128 + offset as i128
            - relation_x.offset as i128;

        let infeasible = PresolveError::InfeasibleAffineRelation { x, y };
        if factor == 0 {
            return if rhs == 0 {
                Ok(())
            } else {
                Err(self.notify_infeasible(infeasible))
            };
        }
        if rhs % factor != 0 {
            return Err(self.notify_infeasible(infeasible));
        }

        let Some(value) = narrow(rhs / factor) else {
            return Err(self.notify_infeasible(infeasible));
        };

        self.update_rule_stats("affine: fixed by cycle");
        let representative = relation_x.representative;
        self.fix_variable_and_class(representative, value)
    }

    /// Fixes `representative` to `value` together with every member of its class.
    fn fix_variable_and_class(
        &mut self,
        representative: VariableId,
        value: i64,
    ) -> Result<(), PresolveError> {
        let mut members = self.affine_relations.class_of(representative).to_vec();
        if members.is_empty() {
            members.push(representative);
        }
        for member in members {
            let relation = self.affine_relations.get(member);
            let Some(member_value) = narrow(relation.apply(value)) else {
                return Err(self.notify_infeasible(PresolveError::EmptyDomain { variable: member }));
            };
            let _ = self.intersect_domain_with(member.positive(), &Domain::singleton(member_value))?;
        }
        Ok(())
    }

    fn store_with_synthetic_variable(
        &mut self,
        x: VariableId,
        y: VariableId,
        coeff: i64,
        offset: i64,
        relation_x: Relation,
        relation_y: Relation,
    ) -> Result<(), PresolveError> {
        let rep_x = relation_x.representative;
        let rep_y = relation_y.representative;

        // a * rep_x - b * rep_y = c
        let a = relation_x.coeff as i128;
        let b = coeff as i128 * relation_y.coeff as i128;
        let c = coeff as i128 * relation_y.offset as i128 + offset as i128
            - relation_x.offset as i128;

        let gcd = a.gcd(&b);
        if c % gcd != 0 {
            return Err(self.notify_infeasible(PresolveError::InfeasibleAffineRelation { x, y }));
        }
        let (mut a, mut b, c) = (a / gcd, b / gcd, c / gcd);

        // a * u + b * v = 1, so rep_x = u * c + b * z and rep_y = -v * c + a * z.
        let extended = a.extended_gcd(&b);
        pumpkin_assert_simple!(extended.gcd == 1);
        let mut offset_x = extended.x * c;
        let mut offset_y = -extended.y * c;
        if b < 0 {
            a = -a;
            b = -b;
        }
        let shift = offset_x.div_euclid(b);
        offset_x -= shift * b;
        offset_y -= shift * a;

        let parameters = (narrow(b), narrow(offset_x), narrow(a), narrow(offset_y));
        let (Some(coeff_x), Some(offset_x), Some(coeff_y), Some(offset_y)) = parameters else {
            return self.store_as_linear_constraint(x, y, coeff, offset);
        };

        let domain = self
            .var_domain(rep_x)
            .addition_of(offset_x.saturating_neg())
            .inverse_multiplication_by(coeff_x)
            .intersection(
                &self
                    .var_domain(rep_y)
                    .addition_of(offset_y.saturating_neg())
                    .inverse_multiplication_by(coeff_y),
            );

        if domain.is_empty() {
            return Err(self.notify_infeasible(PresolveError::InfeasibleAffineRelation { x, y }));
        }

        if let Some(value) = domain.fixed_value() {
            debug!("Affine relation {x} = {coeff} * {y} + {offset} has a single solution");
            self.update_rule_stats("affine: fixed by relation");
            let value_x = coeff_x as i128 * value as i128 + offset_x as i128;
            let value_y = coeff_y as i128 * value as i128 + offset_y as i128;
            let (Some(value_x), Some(value_y)) = (narrow(value_x), narrow(value_y)) else {
                return Err(self.notify_infeasible(PresolveError::InfeasibleAffineRelation { x, y }));
            };
            self.fix_variable_and_class(rep_x, value_x)?;
            return self.fix_variable_and_class(rep_y, value_y);
        }

        let hinted_value = self
            .solution_crush
            .value_of(rep_x.positive())
            .map(|value| {
                <i128 as NumExt>::div_floor(value as i128 - offset_x as i128, coeff_x as i128)
            })
            .and_then(narrow)
            .and_then(|value| domain.closest_value(value))
            .unwrap_or_else(|| domain.min());

        let synthetic = self.new_variable(domain.clone(), hinted_value);
        debug!(
            "Introduced {synthetic} in {domain}: {rep_x} = {coeff_x} * {synthetic} + {offset_x}, \
             {rep_y} = {coeff_y} * {synthetic} + {offset_y}"
        );
        self.update_rule_stats("affine: synthetic representative");

        // The synthetic variable forms a singleton class, so the representative of each side is
        // attached below it whenever the composition fits.
        if !self
            .affine_relations
            .try_add(rep_x, synthetic, coeff_x, offset_x)
        {
            return self.store_as_linear_constraint(x, y, coeff, offset);
        }
        self.propagate_affine_relation(rep_x, synthetic, coeff_x, offset_x)?;

        if !self
            .affine_relations
            .try_add(rep_y, synthetic, coeff_y, offset_y)
        {
            return self.store_as_linear_constraint(x, y, coeff, offset);
        }
        self.propagate_affine_relation(rep_y, synthetic, coeff_y, offset_y)
    }

    fn store_as_linear_constraint(
        &mut self,
        x: VariableId,
        y: VariableId,
        coeff: i64,
        offset: i64,
    ) -> Result<(), PresolveError> {
        debug!("Affine relation {x} = {coeff} * {y} + {offset} kept as a linear constraint");
        self.update_rule_stats("affine: relation kept as constraint");
        let _ = self.add_constraint(Constraint::new(ConstraintKind::Linear(
            LinearConstraint::equals([(x.positive(), 1), (y.positive(), -coeff)], offset),
        )));
        Ok(())
    }

    /// Restricts the domains of `x` and `y` to the values consistent with
    /// `x = coeff * y + offset`.
    fn propagate_affine_relation(
        &mut self,
        x: VariableId,
        y: VariableId,
        coeff: i64,
        offset: i64,
    ) -> Result<(), PresolveError> {
        let implied_y = self
            .var_domain(x)
            .addition_of(offset.saturating_neg())
            .inverse_multiplication_by(coeff);
        let _ = self.intersect_domain_with(y.positive(), &implied_y)?;

        let domain_y = self.var_domain(y);
        let image = |value: i64| {
            let image = coeff as i128 * value as i128 + offset as i128;
            image.clamp(i64::MIN as i128, i64::MAX as i128) as i64
        };
        let (low, high) = (image(domain_y.min()), image(domain_y.max()));
        let implied_x = if coeff == 1 {
            domain_y.addition_of(offset)
        } else if coeff == -1 {
            domain_y.negation().addition_of(offset)
        } else {
            Domain::new(low.min(high), low.max(high))
        };
        let _ = self.intersect_domain_with(x.positive(), &implied_x)?;
        Ok(())
    }

    // Statistics.

    /// Counts one application of the presolve rule `name`.
    pub fn update_rule_stats(&mut self, name: &str) {
        *self.rule_stats.entry(name.to_owned()).or_insert(0) += 1;
    }

    pub fn rule_stats(&self) -> &HashMap<String, usize> {
        &self.rule_stats
    }

    /// Logs how often every presolve rule was applied, ordered by name.
    pub fn log_rule_statistics(&self) {
        let mut rules = self.rule_stats.iter().collect::<Vec<_>>();
        rules.sort_unstable();

        if should_log_statistics() {
            for (name, count) in &rules {
                log_statistic(format_args!("rule {name}"), count);
            }
        }

        let mut summary = String::new();
        for (name, count) in rules {
            let _ = write!(summary, " [{name}: {count}]");
        }
        debug!("Applied presolve rules:{summary}");
    }
}
