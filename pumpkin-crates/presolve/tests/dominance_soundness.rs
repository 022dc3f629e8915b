#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

//! Presolving random small models must keep their optimum: the presolved model, together with
//! the affine relations found, is solved by brute force and compared with the original model.
//! The optimal solution of the original model is given as hint and must remain feasible.

use itertools::Itertools;
use pumpkin_presolve::containers::StorageKey;
use pumpkin_presolve::dominance::detect_dominance_relations;
use pumpkin_presolve::dominance::DominanceOptions;
use pumpkin_presolve::model::Constraint;
use pumpkin_presolve::model::ConstraintKind;
use pumpkin_presolve::model::LinearConstraint;
use pumpkin_presolve::model::Model;
use pumpkin_presolve::model::Objective;
use pumpkin_presolve::model::VarRef;
use pumpkin_presolve::model::VariableId;
use pumpkin_presolve::Domain;
use pumpkin_presolve::PresolveContext;
use pumpkin_presolve::Relation;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

const NUM_MODELS: u64 = 300;

#[test]
fn dominance_and_dual_bound_strengthening_keep_an_optimum() {
    check_random_models(DominanceOptions::default());
}

#[test]
fn dominance_alone_keeps_an_optimum() {
    check_random_models(DominanceOptions {
        dual_bound_strengthening: false,
        ..Default::default()
    });
}

#[test]
fn dual_bound_strengthening_alone_keeps_an_optimum() {
    check_random_models(DominanceOptions {
        exploit_dominance: false,
        ..Default::default()
    });
}

fn check_random_models(options: DominanceOptions) {
    let _ = env_logger::builder().is_test(true).try_init();

    for seed in 0..NUM_MODELS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut model = random_model(&mut rng);

        let Some((optimum, optimal_solution)) = best_solution(&model, &[]) else {
            continue;
        };
        model.set_solution_hint(optimal_solution);

        let mut context = PresolveContext::new(model.clone());
        let result = detect_dominance_relations(&mut context, &options);
        assert!(
            result.is_ok(),
            "seed {seed}: feasible model reported infeasible: {result:?}\n{model:?}"
        );

        let relations = (0..context.num_variables())
            .map(VariableId::create_from_index)
            .map(|variable| (variable, context.affine_relation(variable)))
            .filter(|(variable, relation)| relation.representative != *variable)
            .collect::<Vec<_>>();
        let presolved = context.into_model();

        let hint = presolved
            .solution_hint()
            .expect("the hint is kept")
            .to_vec();
        assert!(
            presolved.is_feasible(&hint) && satisfies_relations(&hint, &relations),
            "seed {seed}: the feasible hint became infeasible\n{model:?}\n{presolved:?}\n{hint:?}"
        );

        let presolved_optimum = best_solution(&presolved, &relations).map(|(value, _)| value);
        assert_eq!(
            presolved_optimum,
            Some(optimum),
            "seed {seed}: presolve changed the optimum\n{model:?}\n{presolved:?}\n{relations:?}"
        );
    }
}

/// A model over three Boolean and two small integer variables.
fn random_model(rng: &mut SmallRng) -> Model {
    let mut model = Model::default();
    let booleans = (0..3).map(|_| model.new_boolean()).collect::<Vec<_>>();
    let integers = (0..2)
        .map(|_| model.new_variable(Domain::new(0, rng.gen_range(1..=3))))
        .collect::<Vec<_>>();
    let variables = booleans.iter().chain(&integers).copied().collect::<Vec<_>>();

    for _ in 0..rng.gen_range(1..=4) {
        let constraint = match rng.gen_range(0..5) {
            0 => ConstraintKind::BoolOr(random_literals(rng, &booleans)),
            1 => ConstraintKind::AtMostOne(random_literals(rng, &booleans)),
            2 => ConstraintKind::ExactlyOne(random_literals(rng, &booleans)),
            _ => {
                let terms = random_terms(rng, &variables);
                let bound = rng.gen_range(-2..=6);
                ConstraintKind::Linear(if rng.gen_bool(0.5) {
                    LinearConstraint::less_than_or_equals(terms, bound)
                } else {
                    LinearConstraint::greater_than_or_equals(terms, bound)
                })
            }
        };

        let constraint = if rng.gen_bool(0.2) {
            let enforcement = random_literals(rng, &booleans)[0];
            Constraint::enforced_by([enforcement], constraint)
        } else {
            Constraint::new(constraint)
        };
        let _ = model.add_constraint(constraint);
    }

    model.set_objective(Objective::minimise(random_terms(rng, &variables)));
    model
}

fn random_literals(rng: &mut SmallRng, booleans: &[VariableId]) -> Vec<VarRef> {
    let mut literals = vec![];
    for variable in booleans {
        if rng.gen_bool(0.7) {
            if rng.gen_bool(0.5) {
                literals.push(variable.positive());
            } else {
                literals.push(variable.negative());
            }
        }
    }
    if literals.is_empty() {
        literals.push(booleans[0].positive());
    }
    literals
}

fn random_terms(rng: &mut SmallRng, variables: &[VariableId]) -> Vec<(VarRef, i64)> {
    let mut terms = vec![];
    for variable in variables {
        if rng.gen_bool(0.6) {
            let coeff = rng.gen_range(-3..=3);
            terms.push((variable.positive(), coeff));
        }
    }
    terms
}

fn satisfies_relations(values: &[i64], relations: &[(VariableId, Relation)]) -> bool {
    relations.iter().all(|(variable, relation)| {
        values[variable.index()] as i128 == relation.apply(values[relation.representative.index()])
    })
}

/// The best objective value of the solutions of `model` which satisfy `relations`, together with
/// a solution attaining it.
fn best_solution(model: &Model, relations: &[(VariableId, Relation)]) -> Option<(i128, Vec<i64>)> {
    let objective = model.objective()?;
    model
        .variables()
        .map(|variable| model.domain(variable).iter_values().collect::<Vec<_>>())
        .multi_cartesian_product()
        .filter(|values| model.is_feasible(values) && satisfies_relations(values, relations))
        .map(|values| (objective.evaluate(&values), values))
        .min_by_key(|(value, _)| *value)
}
