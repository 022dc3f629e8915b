use std::fmt::Display;
use std::fmt::Formatter;

use crate::math::num_ext::NumExt;
use crate::pumpkin_assert_simple;

/// A set of integers, represented as a sorted list of disjoint and non-adjacent closed intervals.
///
/// The extremes [`i64::MIN`] and [`i64::MAX`] are only used by [`Domain::all`] and behave as
/// infinities under [`Domain::negation`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Domain {
    intervals: Vec<(i64, i64)>,
}

impl Domain {
    /// Creates the domain `[lower_bound, upper_bound]`, which is empty if the bounds cross.
    pub fn new(lower_bound: i64, upper_bound: i64) -> Domain {
        if lower_bound > upper_bound {
            return Domain::empty();
        }

        Domain {
            intervals: vec![(lower_bound, upper_bound)],
        }
    }

    pub fn singleton(value: i64) -> Domain {
        Domain::new(value, value)
    }

    pub fn empty() -> Domain {
        Domain { intervals: vec![] }
    }

    pub fn all() -> Domain {
        Domain::new(i64::MIN, i64::MAX)
    }

    pub fn boolean() -> Domain {
        Domain::new(0, 1)
    }

    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Domain {
        Domain::from_intervals(values.into_iter().map(|value| (value, value)))
    }

    /// Creates a domain from arbitrary (possibly overlapping or unsorted) intervals; empty
    /// intervals are ignored.
    pub fn from_intervals(intervals: impl IntoIterator<Item = (i64, i64)>) -> Domain {
        let mut intervals = intervals
            .into_iter()
            .filter(|(lower_bound, upper_bound)| lower_bound <= upper_bound)
            .collect::<Vec<_>>();
        intervals.sort_unstable();

        let mut merged: Vec<(i64, i64)> = Vec::with_capacity(intervals.len());
        for (lower_bound, upper_bound) in intervals {
            match merged.last_mut() {
                Some(last) if last.1.saturating_add(1) >= lower_bound => {
                    last.1 = last.1.max(upper_bound);
                }
                _ => merged.push((lower_bound, upper_bound)),
            }
        }

        Domain { intervals: merged }
    }

    pub fn intervals(&self) -> &[(i64, i64)] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn has_holes(&self) -> bool {
        self.intervals.len() > 1
    }

    pub fn min(&self) -> i64 {
        pumpkin_assert_simple!(!self.is_empty(), "the minimum of an empty domain is undefined");
        self.intervals[0].0
    }

    pub fn max(&self) -> i64 {
        pumpkin_assert_simple!(!self.is_empty(), "the maximum of an empty domain is undefined");
        self.intervals[self.intervals.len() - 1].1
    }

    /// The upper bound of the first interval.
    pub fn first_interval_end(&self) -> i64 {
        pumpkin_assert_simple!(!self.is_empty());
        self.intervals[0].1
    }

    /// The lower bound of the last interval.
    pub fn last_interval_start(&self) -> i64 {
        pumpkin_assert_simple!(!self.is_empty());
        self.intervals[self.intervals.len() - 1].0
    }

    /// The number of values in the domain, saturating at [`u64::MAX`].
    pub fn size(&self) -> u64 {
        self.intervals
            .iter()
            .map(|&(lower_bound, upper_bound)| {
                (upper_bound as i128 - lower_bound as i128 + 1).min(u64::MAX as i128) as u64
            })
            .fold(0_u64, |total, size| total.saturating_add(size))
    }

    pub fn is_fixed(&self) -> bool {
        self.intervals.len() == 1 && self.intervals[0].0 == self.intervals[0].1
    }

    pub fn fixed_value(&self) -> Option<i64> {
        self.is_fixed().then(|| self.intervals[0].0)
    }

    pub fn contains(&self, value: i64) -> bool {
        let index = self
            .intervals
            .partition_point(|&(_, upper_bound)| upper_bound < value);
        index < self.intervals.len() && self.intervals[index].0 <= value
    }

    pub fn is_included_in(&self, other: &Domain) -> bool {
        self.intersection(other) == *self
    }

    pub fn intersection(&self, other: &Domain) -> Domain {
        let mut intervals = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.intervals.len() && j < other.intervals.len() {
            let (a_lb, a_ub) = self.intervals[i];
            let (b_lb, b_ub) = other.intervals[j];

            let lower_bound = a_lb.max(b_lb);
            let upper_bound = a_ub.min(b_ub);
            if lower_bound <= upper_bound {
                intervals.push((lower_bound, upper_bound));
            }

            if a_ub < b_ub {
                i += 1;
            } else {
                j += 1;
            }
        }

        Domain { intervals }
    }

    pub fn union(&self, other: &Domain) -> Domain {
        Domain::from_intervals(
            self.intervals
                .iter()
                .chain(other.intervals.iter())
                .copied(),
        )
    }

    /// The domain `{-v | v in self}`, where the extremes are mapped onto each other.
    pub fn negation(&self) -> Domain {
        let negate = |value: i64| {
            if value == i64::MIN {
                i64::MAX
            } else {
                -value
            }
        };

        Domain {
            intervals: self
                .intervals
                .iter()
                .rev()
                .map(|&(lower_bound, upper_bound)| (negate(upper_bound), negate(lower_bound)))
                .collect(),
        }
    }

    /// All values of `[i64::MIN, i64::MAX]` that are not in this domain.
    pub fn complement(&self) -> Domain {
        let mut intervals = Vec::with_capacity(self.intervals.len() + 1);
        let mut next_start = Some(i64::MIN);
        for &(lower_bound, upper_bound) in &self.intervals {
            if let Some(start) = next_start {
                if start < lower_bound {
                    intervals.push((start, lower_bound - 1));
                }
            }
            next_start = upper_bound.checked_add(1);
        }
        if let Some(start) = next_start {
            intervals.push((start, i64::MAX));
        }

        Domain { intervals }
    }

    /// The set `{v | coefficient * v in self}`.
    pub fn inverse_multiplication_by(&self, coefficient: i64) -> Domain {
        pumpkin_assert_simple!(coefficient != 0);
        let domain = if coefficient < 0 {
            self.negation()
        } else {
            self.clone()
        };
        let coefficient = coefficient.saturating_abs();

        Domain::from_intervals(domain.intervals.iter().map(|&(lower_bound, upper_bound)| {
            (
                <i64 as NumExt>::div_ceil(lower_bound, coefficient),
                <i64 as NumExt>::div_floor(upper_bound, coefficient),
            )
        }))
    }

    /// The domain shifted by `offset`, saturating at the extremes.
    pub fn addition_of(&self, offset: i64) -> Domain {
        Domain::from_intervals(self.intervals.iter().map(|&(lower_bound, upper_bound)| {
            (
                lower_bound.saturating_add(offset),
                upper_bound.saturating_add(offset),
            )
        }))
    }

    /// The smallest value in the domain which is at least `value`.
    pub fn value_at_or_above(&self, value: i64) -> Option<i64> {
        let index = self
            .intervals
            .partition_point(|&(_, upper_bound)| upper_bound < value);
        self.intervals
            .get(index)
            .map(|&(lower_bound, _)| lower_bound.max(value))
    }

    /// The largest value in the domain which is at most `value`.
    pub fn value_at_or_below(&self, value: i64) -> Option<i64> {
        let index = self
            .intervals
            .partition_point(|&(lower_bound, _)| lower_bound <= value);
        if index == 0 {
            return None;
        }
        let (_, upper_bound) = self.intervals[index - 1];
        Some(upper_bound.min(value))
    }

    /// The value of the domain closest to `value`; ties are broken towards the larger value.
    pub fn closest_value(&self, value: i64) -> Option<i64> {
        match (self.value_at_or_below(value), self.value_at_or_above(value)) {
            (Some(below), Some(above)) => {
                if (value as i128 - below as i128) < (above as i128 - value as i128) {
                    Some(below)
                } else {
                    Some(above)
                }
            }
            (below, above) => below.or(above),
        }
    }

    /// Zero if it is in the domain, and otherwise the value of smallest magnitude, where the
    /// positive value is preferred on ties.
    pub fn smallest_magnitude_value(&self) -> Option<i64> {
        self.closest_value(0)
    }

    /// Iterates over all values of the domain in increasing order.
    ///
    /// This is only sensible for domains which are known to be small.
    pub fn iter_values(&self) -> impl Iterator<Item = i64> + '_ {
        self.intervals
            .iter()
            .flat_map(|&(lower_bound, upper_bound)| lower_bound..=upper_bound)
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "{{}}");
        }

        for &(lower_bound, upper_bound) in &self.intervals {
            if lower_bound == upper_bound {
                write!(f, "[{lower_bound}]")?;
            } else {
                write!(f, "[{lower_bound},{upper_bound}]")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals_are_normalised() {
        let domain = Domain::from_intervals([(5, 7), (0, 2), (3, 3), (10, 9)]);
        assert_eq!(domain.intervals(), &[(0, 3), (5, 7)]);
        assert_eq!(domain.size(), 7);
        assert!(domain.has_holes());
    }

    #[test]
    fn intersection_keeps_common_values() {
        let a = Domain::from_intervals([(0, 4), (8, 12)]);
        let b = Domain::from_intervals([(3, 9), (11, 20)]);

        assert_eq!(
            a.intersection(&b).intervals(),
            &[(3, 4), (8, 9), (11, 12)]
        );
        assert!(Domain::new(0, 1).intersection(&Domain::new(2, 3)).is_empty());
    }

    #[test]
    fn negation_and_complement() {
        let domain = Domain::from_intervals([(-2, 0), (4, 5)]);
        assert_eq!(domain.negation().intervals(), &[(-5, -4), (0, 2)]);

        let complement = domain.complement();
        assert!(!complement.contains(-1));
        assert!(complement.contains(1));
        assert!(complement.contains(i64::MIN));
        assert!(complement.contains(i64::MAX));
        assert_eq!(Domain::all().complement(), Domain::empty());
        assert_eq!(Domain::all().negation(), Domain::all());
    }

    #[test]
    fn snapping_respects_holes() {
        let domain = Domain::from_intervals([(0, 2), (6, 8)]);

        assert_eq!(domain.value_at_or_above(3), Some(6));
        assert_eq!(domain.value_at_or_below(5), Some(2));
        assert_eq!(domain.value_at_or_above(9), None);
        assert_eq!(domain.value_at_or_below(-1), None);
        assert_eq!(domain.value_at_or_above(7), Some(7));
    }

    #[test]
    fn smallest_magnitude_prefers_zero_then_positive() {
        assert_eq!(Domain::new(-3, 5).smallest_magnitude_value(), Some(0));
        assert_eq!(
            Domain::from_values([-2, 2, 7]).smallest_magnitude_value(),
            Some(2)
        );
        assert_eq!(
            Domain::from_values([-1, 3]).smallest_magnitude_value(),
            Some(-1)
        );
        assert_eq!(Domain::empty().smallest_magnitude_value(), None);
    }

    #[test]
    fn inverse_multiplication_is_exact() {
        let domain = Domain::new(3, 10);
        assert_eq!(domain.inverse_multiplication_by(3).intervals(), &[(1, 3)]);
        assert_eq!(domain.inverse_multiplication_by(-2).intervals(), &[(-5, -2)]);
        assert!(Domain::singleton(5).inverse_multiplication_by(2).is_empty());
    }

    #[test]
    fn display_uses_interval_notation() {
        assert_eq!(Domain::from_values([1, 3, 4]).to_string(), "[1][3,4]");
        assert_eq!(Domain::empty().to_string(), "{}");
    }
}
