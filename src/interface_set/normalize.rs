//! Endpoint reconciliation and direction inference.

use log::debug;

use super::error::{InterfaceSetError, Result};

/// Whether the lambdas of successive interfaces increase, decrease, or
/// cannot be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Increasing,
    Decreasing,
    #[default]
    Unknown,
}

impl Direction {
    /// Sign convention used when the direction is stored as a number.
    pub const fn as_sign(self) -> i8 {
        match self {
            Direction::Increasing => 1,
            Direction::Decreasing => -1,
            Direction::Unknown => 0,
        }
    }

    pub const fn from_sign(sign: i8) -> Self {
        match sign {
            s if s > 0 => Direction::Increasing,
            s if s < 0 => Direction::Decreasing,
            _ => Direction::Unknown,
        }
    }

    /// Guesses the direction from (non-strict) monotonicity of `lambdas`.
    ///
    /// Increasing wins when both checks pass, so constant or single-valued
    /// lambdas count as increasing.
    pub fn from_lambdas(lambdas: &[f64]) -> Self {
        let increasing = lambdas.windows(2).all(|w| w[1] >= w[0]);
        let decreasing = lambdas.windows(2).all(|w| w[1] <= w[0]);
        if increasing {
            Direction::Increasing
        } else if decreasing {
            Direction::Decreasing
        } else {
            Direction::Unknown
        }
    }
}

/// A minimum or maximum specification: one value for every interface, or
/// one value per interface.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Endpoints {
    Scalar(#[cfg_attr(feature = "serde", serde(with = "crate::serde_float"))] f64),
    Sequence(#[cfg_attr(feature = "serde", serde(with = "crate::serde_float::vec"))] Vec<f64>),
}

impl Endpoints {
    /// Number of values; a scalar counts as one.
    pub fn len(&self) -> usize {
        match self {
            Endpoints::Scalar(_) => 1,
            Endpoints::Sequence(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> Option<f64> {
        match self {
            Endpoints::Scalar(value) => Some(*value),
            Endpoints::Sequence(values) => values.first().copied(),
        }
    }

    /// True when every value equals the first one.
    pub fn is_constant(&self) -> bool {
        match self {
            Endpoints::Scalar(_) => true,
            Endpoints::Sequence(values) => {
                values.iter().all(|v| Some(*v) == values.first().copied())
            }
        }
    }

    /// Slices a sequence. Scalars and single-element sequences were
    /// broadcast to every interface and are kept as they are.
    pub fn slice(&self, range: std::ops::Range<usize>) -> Self {
        match self {
            Endpoints::Sequence(values) if values.len() > 1 => Endpoints::Sequence(
                values.get(range).map(<[f64]>::to_vec).unwrap_or_default(),
            ),
            other => other.clone(),
        }
    }

    fn to_vec(&self) -> Vec<f64> {
        match self {
            Endpoints::Scalar(value) => vec![*value],
            Endpoints::Sequence(values) => values.clone(),
        }
    }
}

impl From<f64> for Endpoints {
    fn from(value: f64) -> Self {
        Endpoints::Scalar(value)
    }
}

impl From<Vec<f64>> for Endpoints {
    fn from(values: Vec<f64>) -> Self {
        Endpoints::Sequence(values)
    }
}

impl From<&[f64]> for Endpoints {
    fn from(values: &[f64]) -> Self {
        Endpoints::Sequence(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Endpoints {
    fn from(values: [f64; N]) -> Self {
        Endpoints::Sequence(values.to_vec())
    }
}

/// Reconciles `minvals` and `maxvals` into two sequences of equal length.
///
/// - Equal lengths: a constant `minvals` votes for `Increasing`, a constant
///   `maxvals` for `Decreasing`; both or neither gives `Unknown`.
/// - One side of length one: it is broadcast, and the direction follows the
///   side that varies.
/// - Anything else fails with [`InterfaceSetError::Reconciliation`].
pub fn normalize(
    minvals: &Endpoints,
    maxvals: &Endpoints,
) -> Result<(Vec<f64>, Vec<f64>, Direction)> {
    if minvals.is_empty() || maxvals.is_empty() {
        return Err(InterfaceSetError::EmptyEndpoints);
    }
    let len_min = minvals.len();
    let len_max = maxvals.len();

    let direction = if len_min == len_max {
        let mut sign = 0i8;
        if minvals.is_constant() {
            sign += 1;
        }
        if maxvals.is_constant() {
            sign -= 1;
        }
        Direction::from_sign(sign)
    } else if len_min == 1 {
        Direction::Increasing
    } else if len_max == 1 {
        Direction::Decreasing
    } else {
        return Err(InterfaceSetError::Reconciliation {
            min_len: len_min,
            max_len: len_max,
        });
    };

    let mut minvs = minvals.to_vec();
    let mut maxvs = maxvals.to_vec();
    if len_min == 1 {
        minvs = vec![minvs[0]; maxvs.len()];
    }
    if len_max == 1 {
        maxvs = vec![maxvs[0]; minvs.len()];
    }
    debug!(
        "normalized {} interface endpoints, direction {:?}",
        minvs.len(),
        direction
    );
    Ok((minvs, maxvs, direction))
}
