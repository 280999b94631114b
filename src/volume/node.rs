//! Composable volumes with intersection/union/complement.
use std::fmt::Display;
use std::ops::{BitAnd, BitOr, Not};

use super::range::{CvRange, PeriodicCvRange};
use crate::cv::CollectiveVariable;

/// Volume tree node: leaf (concrete range) or combinator.
///
/// - **Full** / **Empty**: the whole configuration space / nothing
/// - **Range** / **Periodic**: bounds on a single collective variable
/// - **Intersection**: AND logic, all children must contain the point
/// - **Union**: OR logic, at least one child must contain the point
/// - **Not**: complement of the child
///
/// The operators `&`, `|` and `!` build trees and fold away the trivial
/// cases, so `Volume::Full & v` is just `v`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Volume {
    #[default]
    Full,
    Empty,
    Range(CvRange),
    Periodic(PeriodicCvRange),
    Intersection(Vec<Volume>),
    Union(Vec<Volume>),
    Not(Box<Volume>),
}

impl Volume {
    pub fn range(cv: CollectiveVariable, lower: f64, upper: f64) -> Self {
        Volume::Range(CvRange::new(cv, lower, upper))
    }

    pub fn periodic(
        cv: CollectiveVariable,
        lower: f64,
        upper: f64,
        period_min: Option<f64>,
        period_max: Option<f64>,
    ) -> Self {
        Volume::Periodic(PeriodicCvRange::new(
            cv, lower, upper, period_min, period_max,
        ))
    }

    /// Creates intersection node (AND logic).
    pub fn intersection(children: Vec<Volume>) -> Self {
        children.into_iter().fold(Volume::Full, |acc, v| acc & v)
    }

    /// Creates union node (OR logic).
    pub fn union(children: Vec<Volume>) -> Self {
        children.into_iter().fold(Volume::Empty, |acc, v| acc | v)
    }

    /// Evaluates membership of a configuration.
    ///
    /// `values` maps each collective variable to its value for the
    /// configuration being tested.
    pub fn is_inside(&self, values: &dyn Fn(&CollectiveVariable) -> f64) -> bool {
        match self {
            Volume::Full => true,
            Volume::Empty => false,
            Volume::Range(range) => range.contains(values(range.cv())),
            Volume::Periodic(range) => range.contains(values(range.cv())),
            Volume::Intersection(children) => children.iter().all(|c| c.is_inside(values)),
            Volume::Union(children) => children.iter().any(|c| c.is_inside(values)),
            Volume::Not(child) => !child.is_inside(values),
        }
    }

    pub fn stringify(&self) -> String {
        match self {
            Volume::Full => "all".to_string(),
            Volume::Empty => "empty".to_string(),
            Volume::Range(range) => range.to_string(),
            Volume::Periodic(range) => range.to_string(),
            Volume::Intersection(children) => format!(
                "({})",
                children
                    .iter()
                    .map(|c| c.stringify())
                    .collect::<Vec<_>>()
                    .join(" ∩ ")
            ),
            Volume::Union(children) => format!(
                "({})",
                children
                    .iter()
                    .map(|c| c.stringify())
                    .collect::<Vec<_>>()
                    .join(" ∪ ")
            ),
            Volume::Not(child) => format!("not {}", child.stringify()),
        }
    }
}

impl Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stringify())
    }
}

impl BitAnd for Volume {
    type Output = Volume;

    fn bitand(self, rhs: Volume) -> Volume {
        match (self, rhs) {
            (Volume::Full, v) | (v, Volume::Full) => v,
            (Volume::Empty, _) | (_, Volume::Empty) => Volume::Empty,
            (Volume::Intersection(mut a), Volume::Intersection(b)) => {
                a.extend(b);
                Volume::Intersection(a)
            }
            (Volume::Intersection(mut a), v) => {
                a.push(v);
                Volume::Intersection(a)
            }
            (v, Volume::Intersection(mut b)) => {
                b.insert(0, v);
                Volume::Intersection(b)
            }
            (a, b) => Volume::Intersection(vec![a, b]),
        }
    }
}

impl BitAnd<&Volume> for &Volume {
    type Output = Volume;

    fn bitand(self, rhs: &Volume) -> Volume {
        self.clone() & rhs.clone()
    }
}

impl BitOr for Volume {
    type Output = Volume;

    fn bitor(self, rhs: Volume) -> Volume {
        match (self, rhs) {
            (Volume::Empty, v) | (v, Volume::Empty) => v,
            (Volume::Full, _) | (_, Volume::Full) => Volume::Full,
            (Volume::Union(mut a), Volume::Union(b)) => {
                a.extend(b);
                Volume::Union(a)
            }
            (Volume::Union(mut a), v) => {
                a.push(v);
                Volume::Union(a)
            }
            (v, Volume::Union(mut b)) => {
                b.insert(0, v);
                Volume::Union(b)
            }
            (a, b) => Volume::Union(vec![a, b]),
        }
    }
}

impl Not for Volume {
    type Output = Volume;

    fn not(self) -> Volume {
        match self {
            Volume::Full => Volume::Empty,
            Volume::Empty => Volume::Full,
            Volume::Not(child) => *child,
            v => Volume::Not(Box::new(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phi() -> CollectiveVariable {
        CollectiveVariable::with_id("phi", "phi-id")
    }

    fn psi() -> CollectiveVariable {
        CollectiveVariable::with_id("psi", "psi-id")
    }

    fn values(phi: f64, psi: f64) -> impl Fn(&CollectiveVariable) -> f64 {
        move |cv| if cv.name() == "phi" { phi } else { psi }
    }

    #[test]
    fn full_is_identity_for_intersection() {
        let v = Volume::range(phi(), 0.0, 1.0);
        assert_eq!(Volume::Full & v.clone(), v);
        assert_eq!(v.clone() & Volume::Full, v);
    }

    #[test]
    fn empty_absorbs_intersection() {
        let v = Volume::range(phi(), 0.0, 1.0);
        assert_eq!(v & Volume::Empty, Volume::Empty);
    }

    #[test]
    fn intersection_flattens() {
        let a = Volume::range(phi(), 0.0, 1.0);
        let b = Volume::range(psi(), 0.0, 1.0);
        let c = Volume::range(phi(), 0.5, 2.0);
        let v = (a.clone() & b.clone()) & c.clone();
        assert_eq!(v, Volume::Intersection(vec![a, b, c]));
    }

    #[test]
    fn intersection_membership() {
        let v = Volume::range(phi(), 0.0, 1.0) & Volume::range(psi(), -1.0, 0.0);
        assert!(v.is_inside(&values(0.5, -0.5)));
        assert!(!v.is_inside(&values(0.5, 0.5)));
        assert!(!v.is_inside(&values(1.5, -0.5)));
    }

    #[test]
    fn union_membership() {
        let v = Volume::union(vec![
            Volume::range(phi(), 0.0, 1.0),
            Volume::range(phi(), 2.0, 3.0),
        ]);
        assert!(v.is_inside(&values(0.5, 0.0)));
        assert!(v.is_inside(&values(2.5, 0.0)));
        assert!(!v.is_inside(&values(1.5, 0.0)));
    }

    #[test]
    fn complement_membership_and_double_negation() {
        let v = Volume::range(phi(), 0.0, 1.0);
        let not_v = !v.clone();
        assert!(!not_v.is_inside(&values(0.5, 0.0)));
        assert!(not_v.is_inside(&values(1.5, 0.0)));
        assert_eq!(!not_v, v);
        assert_eq!(!Volume::Full, Volume::Empty);
    }

    #[test]
    fn intersection_of_nothing_is_full() {
        assert_eq!(Volume::intersection(vec![]), Volume::Full);
        assert_eq!(Volume::union(vec![]), Volume::Empty);
    }

    #[test]
    fn stringify_intersection() {
        let v = Volume::range(phi(), 0.0, 1.0) & Volume::range(psi(), 0.0, 2.0);
        assert_eq!(
            v.to_string(),
            "({0.000 <= phi < 1.000} ∩ {0.000 <= psi < 2.000})"
        );
    }
}
