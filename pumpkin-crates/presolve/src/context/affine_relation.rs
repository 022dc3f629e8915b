//! Union-find over affine equalities `x = coeff * representative + offset`.

use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::math::num_ext::narrow;
use crate::model::VariableId;
use crate::pumpkin_assert_moderate;
use crate::pumpkin_assert_simple;

/// The relation `variable = coeff * representative + offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Relation {
    pub representative: VariableId,
    pub coeff: i64,
    pub offset: i64,
}

impl Relation {
    /// The value of the related variable given the value of the representative, computed without
    /// overflow.
    pub fn apply(&self, representative_value: i64) -> i128 {
        self.coeff as i128 * representative_value as i128 + self.offset as i128
    }
}

/// Stores the affine relations found during presolve.
///
/// Every class keeps the list of its members and every member is linked directly to the
/// representative of its class; merging two classes rewrites the links of the smaller class.
/// Paths therefore never grow beyond one link and [`AffineRelation::get`] does not need mutable
/// access. A merge is only performed when every composed coefficient and offset is integral and
/// fits in an `i64`.
#[derive(Clone, Debug, Default)]
pub struct AffineRelation {
    representative: KeyedVec<VariableId, VariableId>,
    coeff: KeyedVec<VariableId, i64>,
    offset: KeyedVec<VariableId, i64>,
    /// The members of every class, only valid for representatives.
    members: KeyedVec<VariableId, Vec<VariableId>>,
    num_relations: usize,
}

impl AffineRelation {
    fn grow_to(&mut self, variable: VariableId) {
        while self.representative.len() <= variable.index() {
            let new_variable = VariableId::create_from_index(self.representative.len());
            let _ = self.representative.push(new_variable);
            let _ = self.coeff.push(1);
            let _ = self.offset.push(0);
            let _ = self.members.push(vec![new_variable]);
        }
    }

    /// Returns the relation between `variable` and the representative of its class.
    pub fn get(&self, variable: VariableId) -> Relation {
        if variable.index() >= self.representative.len() {
            return Relation {
                representative: variable,
                coeff: 1,
                offset: 0,
            };
        }

        Relation {
            representative: self.representative[variable],
            coeff: self.coeff[variable],
            offset: self.offset[variable],
        }
    }

    /// The number of variables in the class of `variable`.
    pub fn class_size(&self, variable: VariableId) -> usize {
        if variable.index() >= self.representative.len() {
            return 1;
        }
        self.members[self.representative[variable]].len()
    }

    /// The members of the class of which `representative` is the representative.
    pub fn class_of(&self, representative: VariableId) -> &[VariableId] {
        if representative.index() >= self.members.len() {
            return &[];
        }
        &self.members[representative]
    }

    /// The number of successful merges.
    pub fn num_relations(&self) -> usize {
        self.num_relations
    }

    /// Records `x = coeff * y + offset`.
    ///
    /// Returns false, without changing anything, when `x` and `y` are already in the same class,
    /// when the relation between the two representatives is not integral in either direction, or
    /// when a composed coefficient or offset would not fit in an `i64`.
    pub fn try_add(&mut self, x: VariableId, y: VariableId, coeff: i64, offset: i64) -> bool {
        pumpkin_assert_simple!(coeff != 0, "an affine relation needs a non-zero coefficient");
        pumpkin_assert_simple!(x != y, "an affine relation needs two distinct variables");

        self.grow_to(x.max(y));

        let relation_x = self.get(x);
        let relation_y = self.get(y);
        if relation_x.representative == relation_y.representative {
            return false;
        }

        // coeff_x * rep_x + offset_x = coeff * (coeff_y * rep_y + offset_y) + offset
        let a = relation_x.coeff as i128;
        let b = coeff as i128 * relation_y.coeff as i128;
        let c = coeff as i128 * relation_y.offset as i128 + offset as i128
            - relation_x.offset as i128;

        // rep_x = (b / a) * rep_y + c / a
        let x_under_y = (b % a == 0 && c % a == 0).then(|| (b / a, c / a));
        // rep_y = (a / b) * rep_x - c / b
        let y_under_x = (a % b == 0 && c % b == 0).then(|| (a / b, -c / b));

        let rep_x = relation_x.representative;
        let rep_y = relation_y.representative;
        let mut attempts = [(rep_x, rep_y, x_under_y), (rep_y, rep_x, y_under_x)];
        if self.members[rep_x].len() > self.members[rep_y].len() {
            attempts.swap(0, 1);
        }

        for (child, parent, relation) in attempts {
            let Some((coeff, offset)) = relation else {
                continue;
            };
            if self.attach(child, parent, coeff, offset) {
                self.num_relations += 1;
                return true;
            }
        }

        false
    }

    /// Links every member of the class of `child` to `parent` given
    /// `child = coeff * parent + offset`, unless a composed value does not fit in an `i64`.
    fn attach(&mut self, child: VariableId, parent: VariableId, coeff: i128, offset: i128) -> bool {
        pumpkin_assert_moderate!(self.representative[child] == child);
        pumpkin_assert_moderate!(self.representative[parent] == parent);

        let composed = self.members[child]
            .iter()
            .map(|&member| {
                // member = c_m * child + o_m = c_m * coeff * parent + c_m * offset + o_m
                let c_m = self.coeff[member] as i128;
                let o_m = self.offset[member] as i128;
                let new_coeff = c_m.checked_mul(coeff).and_then(narrow)?;
                let new_offset = c_m
                    .checked_mul(offset)
                    .and_then(|value| value.checked_add(o_m))
                    .and_then(narrow)?;
                Some((member, new_coeff, new_offset))
            })
            .collect::<Option<Vec<_>>>();

        let Some(composed) = composed else {
            return false;
        };

        for (member, new_coeff, new_offset) in composed {
            self.representative[member] = parent;
            self.coeff[member] = new_coeff;
            self.offset[member] = new_offset;
        }

        let moved = std::mem::take(&mut self.members[child]);
        self.members[parent].extend(moved);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(id: u32) -> VariableId {
        VariableId::new(id)
    }

    #[test]
    fn composing_through_a_representative() {
        let mut relations = AffineRelation::default();

        assert!(relations.try_add(var(0), var(1), 2, 1));
        assert!(relations.try_add(var(1), var(2), 3, -1));

        // x0 = 2 * (3 * x2 - 1) + 1 = 6 * x2 - 1
        let relation = relations.get(var(0));
        assert_eq!(relation.representative, var(2));
        assert_eq!((relation.coeff, relation.offset), (6, -1));
        assert_eq!(relations.class_size(var(0)), 3);
        assert_eq!(relations.num_relations(), 2);
    }

    #[test]
    fn smaller_class_is_attached_when_possible() {
        let mut relations = AffineRelation::default();
        assert!(relations.try_add(var(0), var(1), 1, 0));
        assert!(relations.try_add(var(2), var(1), 1, 5));

        // Both directions are integral, so the singleton class of x3 is attached.
        assert!(relations.try_add(var(3), var(0), -1, 0));
        assert_eq!(relations.get(var(3)).representative, var(1));
        assert_eq!(relations.get(var(3)).coeff, -1);
    }

    #[test]
    fn non_integral_relation_is_rejected() {
        let mut relations = AffineRelation::default();
        assert!(relations.try_add(var(0), var(1), 3, 0));
        assert!(relations.try_add(var(2), var(3), 5, 0));

        // 3 * x1 = 10 * x3 has no integral form in either direction.
        assert!(!relations.try_add(var(0), var(2), 2, 0));
        assert_eq!(relations.get(var(0)).representative, var(1));
        assert_eq!(relations.get(var(2)).representative, var(3));
    }

    #[test]
    fn overflowing_composition_is_rejected_without_changes() {
        let mut relations = AffineRelation::default();
        let huge = 1_i64 << 40;
        assert!(relations.try_add(var(0), var(1), huge, 0));
        assert!(relations.try_add(var(2), var(1), 1, 0));

        // x1 = huge * x3 would give x0 = huge^2 * x3, and x3 = x1 / huge is not integral.
        assert!(!relations.try_add(var(1), var(3), huge, 0));

        let relation = relations.get(var(0));
        assert_eq!(relation.representative, var(1));
        assert_eq!(relation.coeff, huge);
        assert_eq!(relations.class_size(var(3)), 1);
    }

    #[test]
    fn same_class_is_not_merged_again() {
        let mut relations = AffineRelation::default();
        assert!(relations.try_add(var(0), var(1), 1, 0));
        assert!(!relations.try_add(var(1), var(0), 1, 0));
    }

    #[test]
    fn relations_hold_for_consistent_assignments() {
        let mut relations = AffineRelation::default();
        assert!(relations.try_add(var(0), var(1), -2, 3));
        assert!(relations.try_add(var(2), var(0), 3, 1));
        assert!(relations.try_add(var(3), var(2), 1, -4));

        for representative_value in -5..5 {
            let value_of = |v: VariableId| relations.get(v).apply(representative_value);
            let x0 = value_of(var(0));
            let x1 = value_of(var(1));
            let x2 = value_of(var(2));
            let x3 = value_of(var(3));

            assert_eq!(x0, -2 * x1 + 3);
            assert_eq!(x2, 3 * x0 + 1);
            assert_eq!(x3, x2 - 4);
        }
    }
}
