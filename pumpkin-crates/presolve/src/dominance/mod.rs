//! Presolve reductions which follow from the model being indifferent to some changes of a
//! solution.
//!
//! Two techniques are offered:
//! - [`DualBoundStrengthening`] counts, for every signed variable, the constraints which block it
//!   from decreasing. A signed variable which no constraint blocks can be fixed to its lower bound,
//!   and a variable which a single constraint blocks can often be tightened or rewritten.
//! - [`VarDomination`] finds pairs of signed variables `(x, y)` such that decreasing `x` while
//!   increasing `y` by the same amount keeps any solution feasible and no worse. These relations
//!   are then used by [`exploit_dominance_relations`] to fix, tighten and link variables.
//!
//! [`detect_dominance_relations`] runs both on a [`PresolveContext`].
mod dual_bound_strengthening;
mod exploit;
mod options;
mod partition;
mod scan;
mod var_domination;

pub use dual_bound_strengthening::DualBoundStrengthening;
pub use dual_bound_strengthening::DualBoundStrengtheningStatistics;
pub use exploit::exploit_dominance_relations;
pub use exploit::DominanceStatistics;
pub use options::DominanceOptions;
pub use scan::scan_model_for_dominance_detection;
pub use scan::scan_model_for_dual_bound_strengthening;
pub use var_domination::DominancePhase;
pub use var_domination::VarDomination;

use log::debug;

use crate::basic_types::PresolveError;
use crate::context::PresolveContext;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// Runs dual bound strengthening followed by the detection and exploitation of dominance
/// relations, as configured by `options`.
pub fn detect_dominance_relations(
    context: &mut PresolveContext,
    options: &DominanceOptions,
) -> Result<(), PresolveError> {
    if options.dual_bound_strengthening {
        let mut dual_bound_strengthening = DualBoundStrengthening::new(context.num_variables());
        scan_model_for_dual_bound_strengthening(context, &mut dual_bound_strengthening);
        dual_bound_strengthening.strengthen(context)?;

        if should_log_statistics() {
            dual_bound_strengthening
                .statistics()
                .log(StatisticLogger::new("dual_bound_strengthening"));
        }
    }

    if !options.exploit_dominance || context.is_unsat() {
        return Ok(());
    }

    let mut var_domination = VarDomination::new(context.num_variables(), *options);
    scan_model_for_dominance_detection(context, &mut var_domination);
    let statistics = exploit_dominance_relations(context, &var_domination, options)?;
    debug!("Exploited {} dominance relations", statistics.num_relations);

    if should_log_statistics() {
        statistics.log(StatisticLogger::new("dominance"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Domain;
    use crate::model::Model;
    use crate::model::Objective;

    #[test]
    fn disabled_options_leave_the_model_untouched() {
        let mut model = Model::default();
        let x = model.new_variable(Domain::new(0, 10));
        model.set_objective(Objective::minimise([(x.positive(), 1)]));
        let mut context = PresolveContext::new(model);

        let options = DominanceOptions {
            dual_bound_strengthening: false,
            exploit_dominance: false,
            ..Default::default()
        };
        detect_dominance_relations(&mut context, &options).expect("feasible model");

        assert_eq!(context.var_domain(x), &Domain::new(0, 10));
    }

    #[test]
    fn unconstrained_variable_is_fixed_to_its_best_value() {
        let mut model = Model::default();
        let x = model.new_variable(Domain::new(-3, 10));
        model.set_objective(Objective::minimise([(x.positive(), 1)]));
        model.set_solution_hint(vec![4]);
        let mut context = PresolveContext::new(model);

        detect_dominance_relations(&mut context, &DominanceOptions::default())
            .expect("feasible model");

        assert_eq!(context.var_domain(x), &Domain::singleton(-3));
        assert_eq!(context.solution_crush().hint(), Some(&[-3][..]));
    }
}
