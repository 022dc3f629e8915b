//! Extensions for numbers that are not present in the stable standard library, and the capped
//! arithmetic used wherever activities or bounds of very large domains are combined.

pub(crate) trait NumExt {
    /// Division with rounding up.
    fn div_ceil(self, other: Self) -> Self;

    /// Division with rounding down.
    ///
    /// Note this is different from truncating, which is rounding toward zero.
    fn div_floor(self, other: Self) -> Self;
}

impl NumExt for i64 {
    fn div_ceil(self, other: Self) -> Self {
        // TODO: Replace with the standard library versions once `int_roundings` is stabilized.
        // Tracking issue: https://github.com/rust-lang/rust/issues/88581
        let d = self / other;
        let r = self % other;
        if (r > 0 && other > 0) || (r < 0 && other < 0) {
            d + 1
        } else {
            d
        }
    }

    fn div_floor(self, other: Self) -> Self {
        let d = self / other;
        let r = self % other;
        if (r > 0 && other < 0) || (r < 0 && other > 0) {
            d - 1
        } else {
            d
        }
    }
}

impl NumExt for i128 {
    fn div_ceil(self, other: Self) -> Self {
        let d = self / other;
        let r = self % other;
        if (r > 0 && other > 0) || (r < 0 && other < 0) {
            d + 1
        } else {
            d
        }
    }

    fn div_floor(self, other: Self) -> Self {
        let d = self / other;
        let r = self % other;
        if (r > 0 && other < 0) || (r < 0 && other > 0) {
            d - 1
        } else {
            d
        }
    }
}

/// Addition which saturates at [`i64::MIN`] and [`i64::MAX`].
///
/// Once a value reached one of the extremes it is treated as infinite and stays there.
pub(crate) fn cap_add(a: i64, b: i64) -> i64 {
    if at_min_or_max(a) {
        return a;
    }
    if at_min_or_max(b) {
        return b;
    }
    a.saturating_add(b)
}

pub(crate) fn cap_sub(a: i64, b: i64) -> i64 {
    if at_min_or_max(a) {
        return a;
    }
    if at_min_or_max(b) {
        return if b == i64::MIN { i64::MAX } else { i64::MIN };
    }
    a.saturating_sub(b)
}

pub(crate) fn cap_prod(a: i64, b: i64) -> i64 {
    a.saturating_mul(b)
}

pub(crate) fn at_min_or_max(value: i64) -> bool {
    value == i64::MIN || value == i64::MAX
}

/// Converts an `i128` back to an `i64` if it fits.
pub(crate) fn narrow(value: i128) -> Option<i64> {
    i64::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_division_follows_sign() {
        assert_eq!(<i64 as NumExt>::div_ceil(7, 2), 4);
        assert_eq!(<i64 as NumExt>::div_ceil(-7, 2), -3);
        assert_eq!(<i64 as NumExt>::div_floor(-7, 2), -4);
        assert_eq!(<i64 as NumExt>::div_floor(7, -2), -4);
        assert_eq!(<i64 as NumExt>::div_ceil(6, 3), 2);
    }

    #[test]
    fn capped_arithmetic_never_wraps() {
        assert_eq!(cap_add(i64::MAX - 1, 5), i64::MAX);
        assert_eq!(cap_sub(i64::MIN + 1, 5), i64::MIN);
        assert_eq!(cap_prod(i64::MAX / 2, 3), i64::MAX);
        assert_eq!(cap_prod(i64::MAX / 2, -3), i64::MIN);
        assert_eq!(cap_add(i64::MAX, i64::MIN), i64::MAX);
        assert_eq!(cap_sub(3, i64::MIN), i64::MAX);
    }
}
