//! Half-open collective-variable ranges.

use std::fmt::Display;

use crate::cv::CollectiveVariable;

/// Region `lower <= cv(x) < upper` of configuration space.
///
/// Either bound may be infinite, which is how one-sided interfaces are
/// usually expressed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CvRange {
    cv: CollectiveVariable,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_float"))]
    lower: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_float"))]
    upper: f64,
}

impl CvRange {
    pub fn new(cv: CollectiveVariable, lower: f64, upper: f64) -> Self {
        Self { cv, lower, upper }
    }

    pub fn cv(&self) -> &CollectiveVariable {
        &self.cv
    }

    pub const fn lower(&self) -> f64 {
        self.lower
    }

    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns true if `value` ∈ `[lower, upper)`.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value < self.upper
    }
}

impl Display for CvRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{:.3} <= {} < {:.3}}}",
            self.lower, self.cv, self.upper
        )
    }
}

/// Periodic counterpart of [`CvRange`], e.g. for dihedral angles.
///
/// With a period `[period_min, period_max)` the value and both bounds are
/// wrapped into the periodic domain before comparing. A wrapped `lower`
/// greater than the wrapped `upper` describes a range crossing the domain
/// boundary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodicCvRange {
    range: CvRange,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_float::option_pair"))]
    period: Option<(f64, f64)>,
}

impl PeriodicCvRange {
    /// Creates a periodic range. Without both period bounds the range
    /// behaves like a plain [`CvRange`].
    pub fn new(
        cv: CollectiveVariable,
        lower: f64,
        upper: f64,
        period_min: Option<f64>,
        period_max: Option<f64>,
    ) -> Self {
        let period = period_min.zip(period_max);
        Self {
            range: CvRange::new(cv, lower, upper),
            period,
        }
    }

    pub fn cv(&self) -> &CollectiveVariable {
        self.range.cv()
    }

    pub const fn lower(&self) -> f64 {
        self.range.lower()
    }

    pub const fn upper(&self) -> f64 {
        self.range.upper()
    }

    pub fn period_min(&self) -> Option<f64> {
        self.period.map(|(min, _)| min)
    }

    pub fn period_max(&self) -> Option<f64> {
        self.period.map(|(_, max)| max)
    }

    /// Period bounds with a positive length. A degenerate period
    /// (`period_max <= period_min`) is treated as no period at all.
    fn proper_period(&self) -> Option<(f64, f64)> {
        self.period.filter(|(min, max)| max > min)
    }

    pub fn contains(&self, value: f64) -> bool {
        let Some((min, max)) = self.proper_period() else {
            return self.range.contains(value);
        };
        let length = max - min;
        // a range at least one period wide covers the whole domain
        if self.range.upper() - self.range.lower() >= length {
            return true;
        }
        let wrap = |v: f64| (v - min).rem_euclid(length) + min;
        let value = wrap(value);
        let lower = wrap(self.range.lower());
        let upper = wrap(self.range.upper());
        if lower > upper {
            value >= lower || value < upper
        } else {
            lower <= value && value < upper
        }
    }
}

impl Display for PeriodicCvRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.period {
            Some((min, max)) => write!(f, "{} (period [{:.3}, {:.3}))", self.range, min, max),
            None => write!(f, "{}", self.range),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phi() -> CollectiveVariable {
        CollectiveVariable::with_id("phi", "phi-id")
    }

    #[test]
    fn range_is_half_open() {
        let r = CvRange::new(phi(), 0.0, 1.0);
        assert!(r.contains(0.0));
        assert!(r.contains(0.5));
        assert!(!r.contains(1.0));
        assert!(!r.contains(-0.1));
    }

    #[test]
    fn range_with_infinite_lower_bound() {
        let r = CvRange::new(phi(), f64::NEG_INFINITY, 2.0);
        assert!(r.contains(-1.0e12));
        assert!(!r.contains(2.0));
    }

    #[test]
    fn range_display() {
        let r = CvRange::new(phi(), 0.0, 1.5);
        assert_eq!(r.to_string(), "{0.000 <= phi < 1.500}");
    }

    #[test]
    fn periodic_without_period_matches_plain_range() {
        let p = PeriodicCvRange::new(phi(), 0.0, 1.0, None, None);
        assert!(p.contains(0.5));
        assert!(!p.contains(1.5));
        assert_eq!(p.period_min(), None);
    }

    #[test]
    fn periodic_range_wraps_values() {
        let p = PeriodicCvRange::new(phi(), -30.0, 30.0, Some(-180.0), Some(180.0));
        assert!(p.contains(0.0));
        assert!(p.contains(360.0));
        assert!(!p.contains(90.0));
    }

    #[test]
    fn periodic_range_crossing_boundary() {
        // [150, -150) in a [-180, 180) domain covers the region around ±180
        let p = PeriodicCvRange::new(phi(), 150.0, 210.0, Some(-180.0), Some(180.0));
        assert!(p.contains(170.0));
        assert!(p.contains(-170.0));
        assert!(!p.contains(0.0));
        assert!(!p.contains(-150.0));
    }

    #[test]
    fn full_period_range_contains_everything() {
        let p = PeriodicCvRange::new(phi(), -180.0, 180.0, Some(-180.0), Some(180.0));
        assert!(p.contains(90.0));
        assert!(p.contains(-180.0));
        assert!(p.contains(180.0));
        assert!(p.contains(-725.0));
    }

    #[test]
    fn empty_periodic_range_contains_nothing() {
        let p = PeriodicCvRange::new(phi(), 10.0, 10.0, Some(-180.0), Some(180.0));
        assert!(!p.contains(10.0));
        assert!(!p.contains(-170.0));
    }

    #[test]
    fn degenerate_period_acts_as_plain_range() {
        let p = PeriodicCvRange::new(phi(), 0.0, 1.0, Some(5.0), Some(5.0));
        assert!(p.contains(0.5));
        assert!(!p.contains(1.5));
        assert!(!p.contains(f64::NAN));
        assert_eq!(p.period_min(), Some(5.0));
    }
}
