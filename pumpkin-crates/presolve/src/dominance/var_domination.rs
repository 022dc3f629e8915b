//! Detection of dominance relations between signed variables.
//!
//! A signed variable `y` dominates a signed variable `x` when, in every feasible solution in
//! which `x` can be decreased by one and `y` can be increased by one, doing both keeps the
//! solution feasible without making the objective worse. Writing `Dom(x)` for the dominators of
//! `x`, the relation `y ∈ Dom(x)` is the same as `!x ∈ Dom(!y)`.
//!
//! The detection makes three passes over the constraints of the model, each time describing every
//! constraint through the same calls:
//! 1. [`DominancePhase::Partitioning`]: constraints which fix their activity refine a
//!    [`SignedPartition`], and every other constraint records a short list of initial candidates
//!    for the signed variables it blocks from decreasing.
//! 2. [`DominancePhase::Filtering`]: the candidate lists built by
//!    [`VarDomination::end_first_phase`] are filtered, only keeping candidates which compensate
//!    the decrease of the dominated variable in every constraint.
//! 3. [`VarDomination::end_second_phase`] keeps `y` in the list of `x` only when `!x` survived in
//!    the list of `!y`, which turns the candidates into proven relations.

use std::fmt::Display;
use std::fmt::Formatter;

use log::debug;

use super::partition::SignedPartition;
use super::DominanceOptions;
use crate::containers::KeyedVec;
use crate::containers::Span;
use crate::containers::SpanArena;
use crate::containers::StorageKey;
use crate::model::VarRef;
use crate::pumpkin_assert_moderate;
use crate::pumpkin_assert_simple;

/// The phase of a [`VarDomination`]; phases are only ever traversed in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum DominancePhase {
    /// The partition is refined and the initial candidates are recorded.
    #[default]
    Partitioning,
    /// The candidate lists are filtered.
    Filtering,
    /// The dominance relations are final; describing constraints only re-checks them.
    Finalised,
}

impl Display for DominancePhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DominancePhase::Partitioning => write!(f, "partitioning"),
            DominancePhase::Filtering => write!(f, "filtering"),
            DominancePhase::Finalised => write!(f, "finalised"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct VarDomination {
    options: DominanceOptions,
    phase: DominancePhase,
    num_refs: usize,

    partition: SignedPartition,
    can_freely_decrease: KeyedVec<VarRef, bool>,
    /// Bit `i % 64` is set when the `i`-th constraint described with a direction blocks the
    /// signed variable from decreasing.
    block_down_signature: KeyedVec<VarRef, u64>,
    num_directed_constraints: usize,

    /// The groups of signed variables stored while partitioning; the initial candidates are
    /// suffixes of these groups.
    shared_buffer: SpanArena<VarRef>,
    initial_candidates: KeyedVec<VarRef, Option<Span>>,

    /// The candidate lists, which become the dominance lists once finalised.
    buffer: SpanArena<VarRef>,
    candidates: KeyedVec<VarRef, Span>,
    num_relations: usize,

    /// The signed variables of the constraint which is being described, with their rank.
    tmp_ranks: Vec<(VarRef, usize)>,
    tmp_rank_of: KeyedVec<VarRef, Option<usize>>,
}

impl VarDomination {
    pub fn new(num_variables: usize, options: DominanceOptions) -> VarDomination {
        let mut var_domination = VarDomination::default();
        var_domination.reset(num_variables, options);
        var_domination
    }

    /// Forgets everything and starts partitioning the signed variables of `num_variables`
    /// variables.
    pub fn reset(&mut self, num_variables: usize, options: DominanceOptions) {
        let num_refs = 2 * num_variables;

        self.options = options;
        self.phase = DominancePhase::Partitioning;
        self.num_refs = num_refs;
        self.partition = SignedPartition::new(num_refs);
        self.can_freely_decrease.assign(num_refs, true);
        self.block_down_signature.assign(num_refs, 0);
        self.num_directed_constraints = 0;
        self.shared_buffer.clear();
        self.initial_candidates.assign(num_refs, None);
        self.buffer.clear();
        self.candidates.assign(num_refs, Span::default());
        self.num_relations = 0;
        self.tmp_ranks.clear();
        self.tmp_rank_of.assign(num_refs, None);
    }

    pub fn phase(&self) -> DominancePhase {
        self.phase
    }

    /// The number of signed variables, twice the number of variables.
    pub fn num_refs(&self) -> usize {
        self.num_refs
    }

    /// Whether no constraint described so far blocks `reference` from decreasing.
    pub fn can_freely_decrease(&self, reference: VarRef) -> bool {
        self.can_freely_decrease[reference]
    }

    /// The signed variables which were proven to dominate `reference`, sorted.
    ///
    /// Empty before the relations are finalised.
    pub fn dominating_variables(&self, reference: VarRef) -> &[VarRef] {
        if self.phase != DominancePhase::Finalised {
            return &[];
        }
        self.buffer.get(self.candidates[reference])
    }

    /// The total number of proven relations `y ∈ Dom(x)`.
    pub fn num_dominance_relations(&self) -> usize {
        self.num_relations
    }

    /// Declares that the signed variables of `refs`, and their negations, can only dominate each
    /// other.
    pub fn can_only_dominate_each_other(&mut self, refs: &[VarRef]) {
        pumpkin_assert_simple!(
            self.phase == DominancePhase::Partitioning,
            "the partition cannot be refined in the {} phase",
            self.phase
        );

        let mut set = Vec::with_capacity(2 * refs.len());
        for &reference in refs {
            set.push(reference);
            set.push(!reference);
        }
        self.partition.refine(&set);
    }

    /// Declares that `Σ coeffs[i] * refs[i]` has to stay constant; empty `coeffs` stand for unit
    /// coefficients.
    pub fn activity_should_not_change(&mut self, refs: &[VarRef], coeffs: &[i64]) {
        pumpkin_assert_simple!(
            self.phase == DominancePhase::Partitioning,
            "the partition cannot be refined in the {} phase",
            self.phase
        );
        pumpkin_assert_simple!(coeffs.is_empty() || coeffs.len() == refs.len());

        let mut weighted = refs
            .iter()
            .enumerate()
            .filter_map(|(index, &reference)| {
                let coeff = coeffs.get(index).copied().unwrap_or(1);
                match coeff {
                    0 => None,
                    coeff if coeff > 0 => Some((coeff.unsigned_abs(), reference)),
                    coeff => Some((coeff.unsigned_abs(), !reference)),
                }
            })
            .collect::<Vec<_>>();
        weighted.sort_unstable();

        for &(_, entity) in &weighted {
            self.can_freely_decrease[entity] = false;
            self.can_freely_decrease[!entity] = false;
        }

        let mut group = vec![];
        for chunk in weighted.chunk_by(|a, b| a.0 == b.0) {
            group.clear();
            group.extend(chunk.iter().map(|&(_, entity)| entity));
            self.partition.refine(&group);

            for entity in group.iter_mut() {
                *entity = !*entity;
            }
            self.partition.refine(&group);
        }
    }

    /// Declares that `Σ coeffs[i] * refs[i]` may not decrease while all `enforcements` are true;
    /// empty `coeffs` stand for unit coefficients.
    pub fn activity_should_not_decrease(
        &mut self,
        enforcements: &[VarRef],
        refs: &[VarRef],
        coeffs: &[i64],
    ) {
        self.fill_temp_ranks(false, enforcements, refs, coeffs);
        self.process_temp_ranks();
    }

    /// Declares that `Σ coeffs[i] * refs[i]` may not increase while all `enforcements` are true;
    /// empty `coeffs` stand for unit coefficients.
    pub fn activity_should_not_increase(
        &mut self,
        enforcements: &[VarRef],
        refs: &[VarRef],
        coeffs: &[i64],
    ) {
        self.fill_temp_ranks(true, enforcements, refs, coeffs);
        self.process_temp_ranks();
    }

    /// Ranks the signed variables whose decrease decreases the activity (or increases it when
    /// `reverse`) by their weight: a candidate can only compensate the decrease of a signed
    /// variable when its rank is at least as large.
    ///
    /// The negated enforcement literals get the highest rank, setting any of them to false
    /// compensates everything.
    fn fill_temp_ranks(
        &mut self,
        reverse: bool,
        enforcements: &[VarRef],
        refs: &[VarRef],
        coeffs: &[i64],
    ) {
        pumpkin_assert_simple!(coeffs.is_empty() || coeffs.len() == refs.len());
        self.tmp_ranks.clear();

        if coeffs.is_empty() {
            self.tmp_ranks.extend(
                refs.iter()
                    .map(|&reference| (if reverse { !reference } else { reference }, 0)),
            );
        } else {
            let mut weighted = refs
                .iter()
                .zip(coeffs)
                .filter(|(_, &coeff)| coeff != 0)
                .map(|(&reference, &coeff)| {
                    let entity = if (coeff > 0) != reverse {
                        reference
                    } else {
                        !reference
                    };
                    (coeff.unsigned_abs(), entity)
                })
                .collect::<Vec<_>>();
            weighted.sort_unstable();

            let mut rank = 0;
            for (index, &(weight, entity)) in weighted.iter().enumerate() {
                if index > 0 && weighted[index - 1].0 != weight {
                    rank = index;
                }
                self.tmp_ranks.push((entity, rank));
            }
        }

        let top = self.tmp_ranks.len();
        self.tmp_ranks
            .extend(enforcements.iter().map(|&literal| (!literal, top)));
    }

    fn process_temp_ranks(&mut self) {
        match self.phase {
            DominancePhase::Partitioning => self.record_initial_candidates(),
            DominancePhase::Filtering => self.filter_candidates(),
            DominancePhase::Finalised => self.check_using_temp_ranks(),
        }
    }

    fn record_initial_candidates(&mut self) {
        let bit = 1_u64 << (self.num_directed_constraints % 64);
        self.num_directed_constraints += 1;
        for &(entity, _) in &self.tmp_ranks {
            self.can_freely_decrease[entity] = false;
            self.block_down_signature[entity] |= bit;
        }

        let mut ranks = std::mem::take(&mut self.tmp_ranks);
        ranks.sort_unstable_by_key(|&(entity, rank)| (self.partition.part_of(entity), rank, entity));

        for group in ranks.chunk_by(|a, b| self.partition.part_of(a.0) == self.partition.part_of(b.0))
        {
            if group.len() > self.options.max_stored_group {
                continue;
            }

            let start = self.shared_buffer.len();
            for &(entity, _) in group {
                self.shared_buffer.push(entity);
            }

            let mut rank_start = 0;
            for (index, &(entity, rank)) in group.iter().enumerate() {
                if index > 0 && group[index - 1].1 != rank {
                    rank_start = index;
                }

                let span = self
                    .shared_buffer
                    .span_at(start + rank_start, group.len() - rank_start);
                let current = &mut self.initial_candidates[entity];
                if current.is_none_or(|current| span.len() < current.len()) {
                    *current = Some(span);
                }
            }
        }

        self.tmp_ranks = ranks;
    }

    fn filter_candidates(&mut self) {
        for &(entity, rank) in &self.tmp_ranks {
            self.tmp_rank_of[entity] = Some(rank);
        }

        for &(entity, rank) in &self.tmp_ranks {
            let span = self.candidates[entity];
            let candidates = self.buffer.get_mut(span);

            let mut new_len = 0;
            for index in 0..candidates.len() {
                let candidate = candidates[index];
                if self.tmp_rank_of[candidate].is_some_and(|other| other >= rank) {
                    candidates[new_len] = candidate;
                    new_len += 1;
                }
            }
            self.candidates[entity] = span.truncated(new_len);
        }

        for &(entity, _) in &self.tmp_ranks {
            self.tmp_rank_of[entity] = None;
        }
    }

    /// Re-validates the final relations against the described constraint.
    fn check_using_temp_ranks(&mut self) {
        for &(entity, rank) in &self.tmp_ranks {
            self.tmp_rank_of[entity] = Some(rank);
        }

        for &(entity, rank) in &self.tmp_ranks {
            for &dominator in self.buffer.get(self.candidates[entity]) {
                pumpkin_assert_simple!(
                    self.tmp_rank_of[dominator].is_some_and(|other| other >= rank),
                    "{dominator} was found to dominate {entity} but cannot compensate it"
                );
            }
        }

        for &(entity, _) in &self.tmp_ranks {
            self.tmp_rank_of[entity] = None;
        }
    }

    /// Builds the candidate lists and starts filtering them.
    ///
    /// Returns `false` when no signed variable has a candidate, in which case the relations are
    /// final (and empty) right away.
    pub fn end_first_phase(&mut self) -> bool {
        pumpkin_assert_simple!(
            self.phase == DominancePhase::Partitioning,
            "the first phase cannot end in the {} phase",
            self.phase
        );
        self.phase = DominancePhase::Filtering;

        let mut cropped: KeyedVec<VarRef, bool> = KeyedVec::default();
        cropped.assign(self.num_refs, false);
        self.buffer.clear();
        self.candidates.assign(self.num_refs, Span::default());

        for index in 0..self.num_refs {
            let entity = VarRef::create_from_index(index);
            if self.can_freely_decrease[entity] {
                continue;
            }

            let part = self.partition.part_of(entity);
            let source = match self.initial_candidates[entity] {
                Some(span) => self.shared_buffer.get(span),
                None => {
                    let elements = self.partition.elements_of(part);
                    if elements.len() > self.options.max_part_scan {
                        cropped[entity] = true;
                        &elements[..self.options.max_part_scan]
                    } else {
                        elements
                    }
                }
            };

            let start = self.buffer.len();
            for &candidate in source {
                if candidate == entity || candidate == !entity {
                    continue;
                }
                if self.partition.part_of(candidate) != part {
                    continue;
                }
                if self.block_down_signature[entity] & !self.block_down_signature[candidate] != 0
                {
                    continue;
                }
                if self.block_down_signature[!candidate] & !self.block_down_signature[!entity]
                    != 0
                {
                    continue;
                }

                if self.buffer.len() - start == self.options.max_initial_candidates {
                    cropped[entity] = true;
                    break;
                }
                self.buffer.push(candidate);
            }
            self.candidates[entity] = self.buffer.span_from(start);
        }

        // The relation `y ∈ Dom(x)` only survives when `!x` is also a candidate of `!y`, which
        // may have been lost by cropping the list of `!y`.
        let mut injected = vec![];
        for index in 0..self.num_refs {
            let entity = VarRef::create_from_index(index);
            for &candidate in self.buffer.get(self.candidates[entity]) {
                if cropped[!candidate] {
                    injected.push((!candidate, !entity));
                }
            }
        }
        injected.sort_unstable();
        injected.dedup();

        let mut merged = vec![];
        for group in injected.chunk_by(|a, b| a.0 == b.0) {
            let entity = group[0].0;
            merged.clear();
            merged.extend_from_slice(self.buffer.get(self.candidates[entity]));
            merged.extend(group.iter().map(|&(_, candidate)| candidate));
            merged.sort_unstable();
            merged.dedup();

            let start = self.buffer.len();
            for &candidate in &merged {
                self.buffer.push(candidate);
            }
            self.candidates[entity] = self.buffer.span_from(start);
        }

        let mut num_candidates = 0;
        let mut num_with_candidates = 0;
        for index in 0..self.num_refs {
            let entity = VarRef::create_from_index(index);
            let span = self.candidates[entity];
            self.buffer.get_mut(span).sort_unstable();
            num_candidates += span.len();
            num_with_candidates += usize::from(!span.is_empty());
        }

        self.shared_buffer.clear();
        self.initial_candidates.assign(self.num_refs, None);

        debug!(
            "Dominance: {} parts, {num_with_candidates} signed variables with {num_candidates} \
             candidates ({} injected)",
            self.partition.num_parts(),
            injected.len()
        );

        if num_with_candidates == 0 {
            self.phase = DominancePhase::Finalised;
            self.buffer.clear();
            self.candidates.assign(self.num_refs, Span::default());
            self.num_relations = 0;
            debug!("Dominance: no candidates, skipping the filtering phase");
            return false;
        }

        true
    }

    /// Makes the relations final by only keeping `y` in the list of `x` when `!x` is in the list
    /// of `!y`.
    pub fn end_second_phase(&mut self) {
        pumpkin_assert_simple!(
            self.phase == DominancePhase::Filtering,
            "the second phase cannot end in the {} phase",
            self.phase
        );
        self.phase = DominancePhase::Finalised;

        // Transpose: `!x` is put in the list of `!y` for every candidate `y` of `x`.
        let mut starts: KeyedVec<VarRef, usize> = KeyedVec::default();
        starts.assign(self.num_refs + 1, 0);
        for index in 0..self.num_refs {
            let entity = VarRef::create_from_index(index);
            for &candidate in self.buffer.get(self.candidates[entity]) {
                starts[!candidate] += 1;
            }
        }
        let mut total = 0;
        for index in 0..self.num_refs {
            let entity = VarRef::create_from_index(index);
            let count = starts[entity];
            starts[entity] = total;
            total += count;
        }
        starts[VarRef::create_from_index(self.num_refs)] = total;

        self.shared_buffer.clear();
        let base = self
            .shared_buffer
            .reserve_block(total, VarRef::create_from_index(0));
        let mut cursor = starts.clone();
        for index in 0..self.num_refs {
            let entity = VarRef::create_from_index(index);
            for &candidate in self.buffer.get(self.candidates[entity]) {
                let position = &mut cursor[!candidate];
                self.shared_buffer.set(base + *position, !entity);
                *position += 1;
            }
        }

        let mut marked: KeyedVec<VarRef, bool> = KeyedVec::default();
        marked.assign(self.num_refs, false);
        self.num_relations = 0;
        for index in 0..self.num_refs {
            let entity = VarRef::create_from_index(index);
            let start = starts[entity];
            let end = starts[VarRef::create_from_index(index + 1)];
            let transposed = self.shared_buffer.span_at(base + start, end - start);

            for &candidate in self.shared_buffer.get(transposed) {
                marked[candidate] = true;
            }

            let span = self.candidates[entity];
            let candidates = self.buffer.get_mut(span);
            let mut new_len = 0;
            for position in 0..candidates.len() {
                let candidate = candidates[position];
                if marked[candidate] {
                    candidates[new_len] = candidate;
                    new_len += 1;
                }
            }
            self.candidates[entity] = span.truncated(new_len);
            self.num_relations += new_len;

            for &candidate in self.shared_buffer.get(transposed) {
                marked[candidate] = false;
            }
        }
        self.shared_buffer.clear();

        pumpkin_assert_moderate!(self.relations_are_symmetric());
        debug!("Dominance: {} relations", self.num_relations);
    }

    fn relations_are_symmetric(&self) -> bool {
        (0..self.num_refs).all(|index| {
            let entity = VarRef::create_from_index(index);
            self.dominating_variables(entity)
                .iter()
                .all(|&dominator| self.dominating_variables(!dominator).contains(&!entity))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VariableId;

    fn var(id: u32) -> VariableId {
        VariableId::new(id)
    }

    fn pos(id: u32) -> VarRef {
        var(id).positive()
    }

    fn neg(id: u32) -> VarRef {
        var(id).negative()
    }

    /// Describes the constraints of a small model; `describe` is called once per phase.
    fn run_detection(
        num_variables: usize,
        mut describe: impl FnMut(&mut VarDomination, bool),
    ) -> VarDomination {
        let mut var_domination = VarDomination::new(num_variables, DominanceOptions::default());
        describe(&mut var_domination, true);
        describe(&mut var_domination, false);
        if var_domination.end_first_phase() {
            describe(&mut var_domination, false);
            var_domination.end_second_phase();
            describe(&mut var_domination, false);
        }
        var_domination
    }

    fn exactly_one(var_domination: &mut VarDomination, partitioning: bool, literals: &[VarRef]) {
        if partitioning {
            var_domination.activity_should_not_change(literals, &[]);
        } else {
            var_domination.activity_should_not_decrease(&[], literals, &[]);
            var_domination.activity_should_not_increase(&[], literals, &[]);
        }
    }

    #[test]
    fn exactly_one_literals_dominate_each_other() {
        let var_domination = run_detection(2, |var_domination, partitioning| {
            exactly_one(var_domination, partitioning, &[pos(0), pos(1)])
        });

        assert_eq!(var_domination.phase(), DominancePhase::Finalised);
        assert_eq!(var_domination.dominating_variables(pos(0)), &[pos(1)]);
        assert_eq!(var_domination.dominating_variables(pos(1)), &[pos(0)]);
        assert_eq!(var_domination.dominating_variables(neg(0)), &[neg(1)]);
        assert_eq!(var_domination.dominating_variables(neg(1)), &[neg(0)]);
        assert_eq!(var_domination.num_dominance_relations(), 4);
    }

    #[test]
    fn clause_with_objective_gives_one_directional_relation() {
        // x0 + x1 >= 1, minimise 2 * x0 + x1: decreasing x0 and increasing x1 is always fine.
        let var_domination = run_detection(2, |var_domination, partitioning| {
            if partitioning {
                return;
            }
            var_domination.activity_should_not_decrease(&[], &[pos(0), pos(1)], &[]);
            var_domination.activity_should_not_increase(&[], &[pos(0), pos(1)], &[2, 1]);
        });

        assert_eq!(var_domination.dominating_variables(pos(0)), &[pos(1)]);
        assert!(var_domination.dominating_variables(pos(1)).is_empty());
        assert_eq!(var_domination.dominating_variables(neg(1)), &[neg(0)]);
        assert!(!var_domination.can_freely_decrease(neg(0)));
    }

    #[test]
    fn larger_coefficient_compensates_smaller_one() {
        // 3 * x0 + 2 * x1 + x2 >= 4
        let var_domination = run_detection(3, |var_domination, partitioning| {
            if partitioning {
                return;
            }
            var_domination.activity_should_not_decrease(
                &[],
                &[pos(0), pos(1), pos(2)],
                &[3, 2, 1],
            );
        });

        // Nothing blocks the negations from decreasing, so no relation can be confirmed from
        // their side.
        assert!(var_domination.dominating_variables(pos(2)).is_empty());
        assert!(var_domination.can_freely_decrease(neg(2)));
        assert!(!var_domination.can_freely_decrease(pos(2)));
    }

    #[test]
    fn ranks_are_filtered_in_both_directions() {
        // 3 * x0 + 2 * x1 + x2 == 4 through two inequalities, which keeps the relations that
        // respect the ranks in both directions.
        let var_domination = run_detection(3, |var_domination, partitioning| {
            if partitioning {
                return;
            }
            let refs = [pos(0), pos(1), pos(2)];
            var_domination.activity_should_not_decrease(&[], &refs, &[3, 2, 1]);
            var_domination.activity_should_not_increase(&[], &refs, &[3, 2, 1]);
        });

        for index in 0..var_domination.num_refs() {
            assert!(var_domination
                .dominating_variables(VarRef::create_from_index(index))
                .is_empty());
        }
    }

    #[test]
    fn enforcement_literal_dominates_body() {
        // e -> x0 + x1 >= 1
        let var_domination = run_detection(3, |var_domination, partitioning| {
            if partitioning {
                return;
            }
            var_domination.activity_should_not_decrease(&[pos(2)], &[pos(0), pos(1)], &[]);
            var_domination.activity_should_not_increase(&[], &[pos(0), pos(1), neg(2)], &[]);
        });

        let dominators = var_domination.dominating_variables(pos(0));
        assert!(dominators.contains(&pos(1)));
        assert!(var_domination.phase() == DominancePhase::Finalised);
    }

    #[test]
    fn isolated_variables_are_not_related() {
        let var_domination = run_detection(2, |var_domination, partitioning| {
            if partitioning {
                var_domination.can_only_dominate_each_other(&[pos(1)]);
                return;
            }
            var_domination.activity_should_not_decrease(&[], &[pos(0), pos(1)], &[]);
            var_domination.activity_should_not_increase(&[], &[pos(0), pos(1)], &[]);
        });

        assert!(var_domination.dominating_variables(pos(0)).is_empty());
        assert!(var_domination.dominating_variables(pos(1)).is_empty());
    }

    #[test]
    fn no_candidates_aborts_after_first_phase() {
        let mut var_domination = VarDomination::new(2, DominanceOptions::default());
        var_domination.activity_should_not_decrease(&[], &[pos(0)], &[]);

        assert!(!var_domination.end_first_phase());
        assert_eq!(var_domination.phase(), DominancePhase::Finalised);
        assert!(var_domination.dominating_variables(pos(0)).is_empty());
        assert_eq!(var_domination.num_dominance_relations(), 0);
    }

    #[test]
    fn detection_is_deterministic_after_reset() {
        let describe = |var_domination: &mut VarDomination, partitioning: bool| {
            exactly_one(var_domination, partitioning, &[pos(0), pos(1), pos(2)]);
            if !partitioning {
                var_domination.activity_should_not_decrease(&[], &[pos(0), pos(3)], &[]);
                var_domination.activity_should_not_increase(&[], &[pos(1), pos(3)], &[1, 2]);
            }
        };

        let first = run_detection(4, describe);
        let second = run_detection(4, describe);
        for index in 0..first.num_refs() {
            let entity = VarRef::create_from_index(index);
            assert_eq!(
                first.dominating_variables(entity),
                second.dominating_variables(entity)
            );
        }
    }

    #[test]
    fn cropped_lists_keep_relations_through_injection() {
        let options = DominanceOptions {
            max_initial_candidates: 1,
            max_part_scan: 2,
            ..Default::default()
        };
        let literals = (0..6).map(pos).collect::<Vec<_>>();
        let mut var_domination = VarDomination::new(6, options);
        var_domination.activity_should_not_change(&literals, &[]);
        var_domination.activity_should_not_decrease(&[], &literals, &[]);
        var_domination.activity_should_not_increase(&[], &literals, &[]);

        assert!(var_domination.end_first_phase());
        var_domination.activity_should_not_decrease(&[], &literals, &[]);
        var_domination.activity_should_not_increase(&[], &literals, &[]);
        var_domination.end_second_phase();

        assert!(var_domination.num_dominance_relations() > 0);
    }

    #[test]
    #[should_panic]
    fn refining_after_partitioning_is_a_bug() {
        let mut var_domination = VarDomination::new(2, DominanceOptions::default());
        var_domination.activity_should_not_decrease(&[], &[pos(0), pos(1)], &[]);
        let _ = var_domination.end_first_phase();
        var_domination.can_only_dominate_each_other(&[pos(0)]);
    }
}
