//! Partition refinement over the signed variables.

use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::model::VarRef;
use crate::pumpkin_assert_moderate;

/// A partition of the signed variables `0..num_refs` which can only be refined.
///
/// The elements are stored grouped by part; a part is a contiguous range of `elements`.
/// Refining by a set moves the members of the set to the front of their part and splits them
/// off into a new part, so two elements which were separated are never merged again.
#[derive(Clone, Debug, Default)]
pub(crate) struct SignedPartition {
    elements: Vec<VarRef>,
    position: KeyedVec<VarRef, usize>,
    part_of: KeyedVec<VarRef, usize>,
    /// The `[start, end)` range of every part.
    parts: Vec<(usize, usize)>,
    /// The number of elements of every part which were moved to its front by the current
    /// refinement.
    num_touched: Vec<usize>,
}

impl SignedPartition {
    /// Creates the partition with a single part containing every signed variable.
    pub(crate) fn new(num_refs: usize) -> Self {
        let elements = (0..num_refs).map(VarRef::create_from_index).collect();
        let mut partition = SignedPartition {
            elements,
            position: KeyedVec::from((0..num_refs).collect::<Vec<_>>()),
            part_of: KeyedVec::from(vec![0; num_refs]),
            parts: vec![],
            num_touched: vec![],
        };

        if num_refs > 0 {
            partition.parts.push((0, num_refs));
            partition.num_touched.push(0);
        }
        partition
    }

    pub(crate) fn num_parts(&self) -> usize {
        self.parts.len()
    }

    pub(crate) fn part_of(&self, reference: VarRef) -> usize {
        self.part_of[reference]
    }

    pub(crate) fn elements_of(&self, part: usize) -> &[VarRef] {
        let (start, end) = self.parts[part];
        &self.elements[start..end]
    }

    /// Splits every part into the elements which are in `refs` and those which are not.
    ///
    /// Duplicates in `refs` are allowed.
    pub(crate) fn refine(&mut self, refs: &[VarRef]) {
        let mut touched_parts = vec![];

        for &reference in refs {
            let part = self.part_of[reference];
            let (start, _) = self.parts[part];
            let front = start + self.num_touched[part];
            let position = self.position[reference];
            if position < front {
                // Already moved by this refinement.
                continue;
            }

            if self.num_touched[part] == 0 {
                touched_parts.push(part);
            }

            let displaced = self.elements[front];
            self.elements.swap(front, position);
            self.position[displaced] = position;
            self.position[reference] = front;
            self.num_touched[part] += 1;
        }

        for part in touched_parts {
            let (start, end) = self.parts[part];
            let num_touched = self.num_touched[part];
            self.num_touched[part] = 0;

            if num_touched == end - start {
                continue;
            }

            let new_part = self.parts.len();
            self.parts.push((start, start + num_touched));
            self.num_touched.push(0);
            self.parts[part] = (start + num_touched, end);
            for index in start..start + num_touched {
                self.part_of[self.elements[index]] = new_part;
            }
        }

        pumpkin_assert_moderate!(self.num_touched.iter().all(|&num_touched| num_touched == 0));
    }
}
