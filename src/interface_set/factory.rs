//! Volume factories for interface sets.

use std::fmt::Debug;
use std::sync::Arc;

use log::trace;

use super::error::{InterfaceSetError, Result};
use super::normalize::Direction;
use crate::cv::CollectiveVariable;
use crate::volume::Volume;

/// Caller-supplied `(min, max) -> Volume` function.
///
/// Compared by pointer: two handles are equal only if they share the same
/// function.
#[derive(Clone)]
pub struct CustomVolumeFn(Arc<dyn Fn(f64, f64) -> Volume + Send + Sync>);

impl CustomVolumeFn {
    pub fn new(func: impl Fn(f64, f64) -> Volume + Send + Sync + 'static) -> Self {
        Self(Arc::new(func))
    }

    pub fn call(&self, min: f64, max: f64) -> Volume {
        (self.0)(min, max)
    }
}

impl Debug for CustomVolumeFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CustomVolumeFn({:p})", Arc::as_ptr(&self.0) as *const ())
    }
}

impl PartialEq for CustomVolumeFn {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

/// The `(min, max) -> Volume` function an interface set generates its
/// volumes with.
///
/// The collective variable is captured here, as a closure over it would.
/// `Custom` functions live only in memory: records holding one can be
/// cloned and restored, but not serialized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VolumeFunc {
    CvRange(CollectiveVariable),
    PeriodicCvRange {
        cv: CollectiveVariable,
        #[cfg_attr(feature = "serde", serde(with = "crate::serde_float::option"))]
        period_min: Option<f64>,
        #[cfg_attr(feature = "serde", serde(with = "crate::serde_float::option"))]
        period_max: Option<f64>,
    },
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom {
        cv: CollectiveVariable,
        func: CustomVolumeFn,
    },
}

impl VolumeFunc {
    /// Wraps a caller-supplied volume function.
    pub fn custom(
        cv: CollectiveVariable,
        func: impl Fn(f64, f64) -> Volume + Send + Sync + 'static,
    ) -> Self {
        VolumeFunc::Custom {
            cv,
            func: CustomVolumeFn::new(func),
        }
    }

    pub fn cv(&self) -> &CollectiveVariable {
        match self {
            VolumeFunc::CvRange(cv)
            | VolumeFunc::PeriodicCvRange { cv, .. }
            | VolumeFunc::Custom { cv, .. } => cv,
        }
    }

    pub fn build(&self, min: f64, max: f64) -> Volume {
        let volume = match self {
            VolumeFunc::CvRange(cv) => Volume::range(cv.clone(), min, max),
            VolumeFunc::PeriodicCvRange {
                cv,
                period_min,
                period_max,
            } => Volume::periodic(cv.clone(), min, max, *period_min, *period_max),
            VolumeFunc::Custom { func, .. } => func.call(min, max),
        };
        trace!("built interface volume {}", volume);
        volume
    }
}

/// A [`VolumeFunc`] with one endpoint fixed by the direction of the set.
///
/// `TwoArg` is left over when the direction is unknown; it cannot make a
/// volume from a single lambda.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Factory {
    TwoArg(VolumeFunc),
    FixedMin(
        #[cfg_attr(feature = "serde", serde(with = "crate::serde_float"))] f64,
        VolumeFunc,
    ),
    FixedMax(
        #[cfg_attr(feature = "serde", serde(with = "crate::serde_float"))] f64,
        VolumeFunc,
    ),
}

impl Factory {
    /// Specializes `func` for `direction`. `min`/`max` are the constant
    /// endpoints of the set, if it has any.
    pub fn specialize(
        func: VolumeFunc,
        direction: Direction,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        match (direction, min, max) {
            (Direction::Increasing, Some(min), _) => Factory::FixedMin(min, func),
            (Direction::Decreasing, _, Some(max)) => Factory::FixedMax(max, func),
            _ => Factory::TwoArg(func),
        }
    }

    pub fn volume_func(&self) -> &VolumeFunc {
        match self {
            Factory::TwoArg(func) | Factory::FixedMin(_, func) | Factory::FixedMax(_, func) => {
                func
            }
        }
    }

    /// Builds the volume for the free endpoint `lambda`.
    pub fn call(&self, lambda: f64) -> Result<Volume> {
        match self {
            Factory::TwoArg(_) => Err(InterfaceSetError::Arity),
            Factory::FixedMin(min, func) => Ok(func.build(*min, lambda)),
            Factory::FixedMax(max, func) => Ok(func.build(lambda, *max)),
        }
    }
}
