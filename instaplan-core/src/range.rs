//! Two-handle integer range model.
//!
//! A `RangeValue` is an inclusive sub-range `[lo, hi]` inside fixed
//! `RangeBounds`, with `lo < hi` always — the handles can neither meet nor
//! cross. All operations clamp instead of rejecting, so a value built through
//! this module is valid by construction.

use serde::{Deserialize, Serialize};

/// Inclusive integer bounds a range value lives in. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBounds {
    min: u16,
    max: u16,
}

impl RangeBounds {
    /// Audience age band used by this application.
    pub const AGE: RangeBounds = RangeBounds { min: 13, max: 65 };

    /// Build bounds. Panics if `min >= max` — bounds are compile-time
    /// constants in practice, not user input.
    pub fn new(min: u16, max: u16) -> Self {
        assert!(min < max, "range bounds require min < max");
        Self { min, max }
    }

    pub fn min(&self) -> u16 {
        self.min
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    /// Width of the bounds in whole units.
    pub fn span(&self) -> u16 {
        self.max - self.min
    }

    /// Forward mapping: value → fraction of the track in `[0, 1]`.
    pub fn fraction_of(&self, value: u16) -> f64 {
        let v = value.clamp(self.min, self.max);
        f64::from(v - self.min) / f64::from(self.span())
    }

    /// Inverse mapping: track fraction → nearest whole unit.
    ///
    /// Out-of-track fractions clamp to the ends rather than erroring.
    pub fn value_at(&self, fraction: f64) -> u16 {
        let f = fraction.clamp(0.0, 1.0);
        self.min + (f * f64::from(self.span())).round() as u16
    }
}

/// An inclusive sub-range `[lo, hi]` with `min <= lo < hi <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeValue {
    pub lo: u16,
    pub hi: u16,
}

impl RangeValue {
    /// Normalize an arbitrary pair into a valid value for `bounds`.
    ///
    /// Clamps both ends into the bounds, orders them, and pushes the pair
    /// apart to one unit of separation if they collapsed.
    pub fn clamped(lo: u16, hi: u16, bounds: RangeBounds) -> Self {
        let (a, b) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let lo = a.clamp(bounds.min, bounds.max - 1);
        let hi = b.clamp(lo + 1, bounds.max);
        Self { lo, hi }
    }

    /// Move the low handle toward `raw`, holding the high handle fixed.
    ///
    /// The result never reaches `hi`: the moving handle is pulled back to
    /// `hi - 1` instead of the update being rejected.
    pub fn with_lo(self, raw: u16, bounds: RangeBounds) -> Self {
        let raw = raw.clamp(bounds.min, bounds.max);
        Self {
            lo: raw.min(self.hi - 1),
            hi: self.hi,
        }
    }

    /// Move the high handle toward `raw`, holding the low handle fixed.
    pub fn with_hi(self, raw: u16, bounds: RangeBounds) -> Self {
        let raw = raw.clamp(bounds.min, bounds.max);
        Self {
            lo: self.lo,
            hi: raw.max(self.lo + 1),
        }
    }

    /// Shift the low handle by whole units (keyboard adjustment).
    pub fn nudge_lo(self, delta: i32, bounds: RangeBounds) -> Self {
        let target = (i32::from(self.lo) + delta).clamp(0, i32::from(u16::MAX)) as u16;
        self.with_lo(target, bounds)
    }

    /// Shift the high handle by whole units (keyboard adjustment).
    pub fn nudge_hi(self, delta: i32, bounds: RangeBounds) -> Self {
        let target = (i32::from(self.hi) + delta).clamp(0, i32::from(u16::MAX)) as u16;
        self.with_hi(target, bounds)
    }

    /// True when `self` is a valid value inside `bounds`.
    pub fn is_valid_in(&self, bounds: RangeBounds) -> bool {
        bounds.min <= self.lo && self.lo < self.hi && self.hi <= bounds.max
    }
}

impl Default for RangeValue {
    /// Initial audience age band shown by the wizard.
    fn default() -> Self {
        Self { lo: 18, hi: 45 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const AGE: RangeBounds = RangeBounds::AGE;

    #[test]
    fn forward_mapping_hits_ends() {
        assert_eq!(AGE.fraction_of(13), 0.0);
        assert_eq!(AGE.fraction_of(65), 1.0);
        assert_eq!(AGE.fraction_of(5), 0.0); // below min clamps
    }

    #[test]
    fn inverse_mapping_rounds_to_nearest_unit() {
        assert_eq!(AGE.value_at(0.0), 13);
        assert_eq!(AGE.value_at(1.0), 65);
        assert_eq!(AGE.value_at(-0.5), 13);
        assert_eq!(AGE.value_at(1.7), 65);
        // 0.5 * 52 = 26.0 exactly
        assert_eq!(AGE.value_at(0.5), 39);
    }

    #[test]
    fn low_handle_clamps_below_high() {
        // Dragging lo to raw 50 against hi=45 pulls back to 44.
        let v = RangeValue { lo: 18, hi: 45 };
        assert_eq!(v.with_lo(50, AGE), RangeValue { lo: 44, hi: 45 });
    }

    #[test]
    fn high_handle_clamps_above_low() {
        // Dragging hi to raw 10 against lo=18 pulls back to 19.
        let v = RangeValue { lo: 18, hi: 45 };
        assert_eq!(v.with_hi(10, AGE), RangeValue { lo: 18, hi: 19 });
    }

    #[test]
    fn full_range_is_stable() {
        let v = RangeValue { lo: 13, hi: 65 };
        assert_eq!(v.with_lo(13, AGE), v);
        assert_eq!(v.with_hi(65, AGE), v);
    }

    #[test]
    fn raw_outside_bounds_clamps_to_min() {
        let v = RangeValue { lo: 18, hi: 45 };
        assert_eq!(v.with_lo(0, AGE).lo, 13);
        assert_eq!(v.with_hi(200, AGE).hi, 65);
    }

    #[test]
    fn nudges_respect_separation() {
        let v = RangeValue { lo: 18, hi: 19 };
        assert_eq!(v.nudge_lo(5, AGE).lo, 18);
        assert_eq!(v.nudge_lo(-1, AGE).lo, 17);
        assert_eq!(v.nudge_hi(-5, AGE).hi, 19);
    }

    #[test]
    fn clamped_repairs_inverted_and_collapsed_pairs() {
        assert_eq!(RangeValue::clamped(45, 18, AGE), RangeValue { lo: 18, hi: 45 });
        assert_eq!(RangeValue::clamped(30, 30, AGE), RangeValue { lo: 30, hi: 31 });
        assert_eq!(RangeValue::clamped(0, 200, AGE), RangeValue { lo: 13, hi: 65 });
    }

    proptest! {
        #[test]
        fn moves_preserve_invariant(lo in 13u16..65, hi in 14u16..=65, raw in 0u16..200) {
            prop_assume!(lo < hi);
            let v = RangeValue { lo, hi };
            let after_lo = v.with_lo(raw, AGE);
            let after_hi = v.with_hi(raw, AGE);
            prop_assert!(after_lo.is_valid_in(AGE));
            prop_assert!(after_hi.is_valid_in(AGE));
            // The stationary handle never moves.
            prop_assert_eq!(after_lo.hi, hi);
            prop_assert_eq!(after_hi.lo, lo);
        }

        #[test]
        fn inverse_mapping_is_always_in_bounds(fraction in -2.0f64..3.0) {
            let v = AGE.value_at(fraction);
            prop_assert!((13..=65).contains(&v));
        }

        #[test]
        fn mapping_roundtrips_on_unit_values(v in 13u16..=65) {
            prop_assert_eq!(AGE.value_at(AGE.fraction_of(v)), v);
        }

        #[test]
        fn clamped_always_valid(lo in 0u16..200, hi in 0u16..200) {
            prop_assert!(RangeValue::clamped(lo, hi, AGE).is_valid_in(AGE));
        }
    }
}
