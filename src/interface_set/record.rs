//! Flat records exchanged with an external object store.
//!
//! `from_dict(to_dict(x))` restores an interface set equal to `x`.

use super::factory::Factory;
use super::normalize::{Direction, Endpoints};
use crate::cv::CollectiveVariable;
use crate::volume::Volume;

/// Stored form of an [`InterfaceSet`](super::InterfaceSet).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterfaceSetRecord {
    pub volumes: Vec<Volume>,
    pub cv: Option<CollectiveVariable>,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_float::option_vec"))]
    pub lambdas: Option<Vec<f64>>,
    pub direction: Direction,
}

/// Stored form of a [`GenericVolumeInterfaceSet`](super::GenericVolumeInterfaceSet).
///
/// `minvals`/`maxvals` are kept as given, scalars included. The factory
/// carries the volume function, the collective variable and the fixed
/// endpoint, so a restored set creates the same new interfaces.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeInterfaceSetRecord {
    pub factory: Factory,
    pub minvals: Endpoints,
    pub maxvals: Endpoints,
    pub intersect_with: Volume,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_float::option_vec"))]
    pub lambdas: Option<Vec<f64>>,
    pub direction: Direction,
    pub volumes: Vec<Volume>,
}
