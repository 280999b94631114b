//! Interface sets generated from collective-variable ranges.

use std::ops::{Deref, Range};

use log::{debug, warn};

use super::error::Result;
use super::factory::{Factory, VolumeFunc};
use super::normalize::{normalize, Direction, Endpoints};
use super::record::VolumeInterfaceSetRecord;
use super::set::{check_range, InterfaceSet};
use crate::cv::CollectiveVariable;
use crate::volume::Volume;

/// Interface set that also acts as a factory for new interface volumes.
///
/// Volume `i` is `intersect_with & volume_func(minvals[i], maxvals[i])`
/// after the endpoints have been normalized. The lambdas are the maxvals
/// for an increasing set, the minvals for a decreasing one, and absent
/// otherwise.
///
/// Dereferences to [`InterfaceSet`] for lambda lookup and read access.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericVolumeInterfaceSet {
    base: InterfaceSet,
    minvals: Endpoints,
    maxvals: Endpoints,
    intersect_with: Volume,
    factory: Factory,
}

impl GenericVolumeInterfaceSet {
    /// Builds the set. `intersect_with = None` means the full volume.
    pub fn new(
        volume_func: VolumeFunc,
        minvals: impl Into<Endpoints>,
        maxvals: impl Into<Endpoints>,
        intersect_with: Option<Volume>,
    ) -> Result<Self> {
        let minvals = minvals.into();
        let maxvals = maxvals.into();
        let intersect_with = intersect_with.unwrap_or_default();

        let (minvs, maxvs, direction) = normalize(&minvals, &maxvals)?;
        let lambdas = match direction {
            Direction::Increasing => Some(maxvs.clone()),
            Direction::Decreasing => Some(minvs.clone()),
            Direction::Unknown => None,
        };
        let volumes: Vec<Volume> = minvs
            .iter()
            .zip(&maxvs)
            .map(|(min, max)| intersect_with.clone() & volume_func.build(*min, *max))
            .collect();
        debug!(
            "built {} interfaces on {} ({:?})",
            volumes.len(),
            volume_func.cv(),
            direction
        );
        if direction == Direction::Unknown {
            warn!(
                "direction of interfaces on {} is unknown; new_interface is unavailable",
                volume_func.cv()
            );
        }

        let cv = volume_func.cv().clone();
        let factory = Factory::specialize(
            volume_func,
            direction,
            minvs.first().copied(),
            maxvs.first().copied(),
        );
        Ok(Self {
            base: InterfaceSet::new(volumes, Some(cv), lambdas, Some(direction))?,
            minvals,
            maxvals,
            intersect_with,
            factory,
        })
    }

    /// Interfaces `minvals <= cv < maxvals`.
    pub fn volume(
        cv: CollectiveVariable,
        minvals: impl Into<Endpoints>,
        maxvals: impl Into<Endpoints>,
        intersect_with: Option<Volume>,
    ) -> Result<Self> {
        Self::new(VolumeFunc::CvRange(cv), minvals, maxvals, intersect_with)
    }

    /// Interfaces on a periodic collective variable.
    pub fn periodic(
        cv: CollectiveVariable,
        minvals: impl Into<Endpoints>,
        maxvals: impl Into<Endpoints>,
        period_min: Option<f64>,
        period_max: Option<f64>,
        intersect_with: Option<Volume>,
    ) -> Result<Self> {
        let volume_func = VolumeFunc::PeriodicCvRange {
            cv,
            period_min,
            period_max,
        };
        Self::new(volume_func, minvals, maxvals, intersect_with)
    }

    /// Interfaces from a caller-supplied `(min, max) -> Volume` function.
    pub fn custom(
        cv: CollectiveVariable,
        minvals: impl Into<Endpoints>,
        maxvals: impl Into<Endpoints>,
        intersect_with: Option<Volume>,
        func: impl Fn(f64, f64) -> Volume + Send + Sync + 'static,
    ) -> Result<Self> {
        Self::new(VolumeFunc::custom(cv, func), minvals, maxvals, intersect_with)
    }

    pub fn interface_set(&self) -> &InterfaceSet {
        &self.base
    }

    pub fn minvals(&self) -> &Endpoints {
        &self.minvals
    }

    pub fn maxvals(&self) -> &Endpoints {
        &self.maxvals
    }

    pub fn intersect_with(&self) -> &Volume {
        &self.intersect_with
    }

    pub fn factory(&self) -> &Factory {
        &self.factory
    }

    pub fn volume_func(&self) -> &VolumeFunc {
        self.factory.volume_func()
    }

    /// Creates the interface volume at `lambda`.
    ///
    /// The volume is *not* added to this set. Fails with
    /// [`Arity`](super::InterfaceSetError::Arity) if the direction is
    /// unknown, since both endpoints would be needed.
    pub fn new_interface(&self, lambda: f64) -> Result<Volume> {
        Ok(self.intersect_with.clone() & self.factory.call(lambda)?)
    }

    /// Returns a new set over `range`. Sequence endpoints are sliced with
    /// the volumes and lambdas; scalar endpoints are kept.
    pub fn slice(&self, range: Range<usize>) -> Result<Self> {
        check_range(&range, self.len())?;
        let base = InterfaceSet::from_dict(self.base.slice_dict(range.clone()))?;
        Ok(Self {
            base,
            minvals: self.minvals.slice(range.clone()),
            maxvals: self.maxvals.slice(range),
            intersect_with: self.intersect_with.clone(),
            factory: self.factory.clone(),
        })
    }

    pub fn to_dict(&self) -> VolumeInterfaceSetRecord {
        VolumeInterfaceSetRecord {
            factory: self.factory.clone(),
            minvals: self.minvals.clone(),
            maxvals: self.maxvals.clone(),
            intersect_with: self.intersect_with.clone(),
            lambdas: self.base.lambdas().map(<[f64]>::to_vec),
            direction: self.base.direction(),
            volumes: self.base.volumes().to_vec(),
        }
    }

    /// Restores a set from its record without regenerating the volumes.
    ///
    /// The stored factory is used as is, so a restored empty slice keeps
    /// its fixed endpoint.
    pub fn from_dict(record: VolumeInterfaceSetRecord) -> Result<Self> {
        let cv = record.factory.volume_func().cv().clone();
        let base = InterfaceSet::new(
            record.volumes,
            Some(cv),
            record.lambdas,
            Some(record.direction),
        )?;
        Ok(Self {
            base,
            minvals: record.minvals,
            maxvals: record.maxvals,
            intersect_with: record.intersect_with,
            factory: record.factory,
        })
    }
}

impl Deref for GenericVolumeInterfaceSet {
    type Target = InterfaceSet;

    fn deref(&self) -> &InterfaceSet {
        &self.base
    }
}

impl<'a> IntoIterator for &'a GenericVolumeInterfaceSet {
    type Item = &'a Volume;
    type IntoIter = std::slice::Iter<'a, Volume>;

    fn into_iter(self) -> Self::IntoIter {
        self.base.volumes().iter()
    }
}
