//! interface_sets - ordered interface volumes along a reaction coordinate
//!
//! Builds and queries the sets of boundary volumes used by multi-interface
//! path sampling schemes: endpoint normalization, direction inference,
//! lambda lookup and factories for new interfaces.

pub mod config;
pub mod cv;
pub mod interface_set;
#[cfg(feature = "serde")]
mod serde_float;
pub mod volume;

pub use config::{InterfaceSetConfig, VolumeKind};
pub use cv::CollectiveVariable;
pub use interface_set::{
    normalize, Direction, Endpoints, Factory, GenericVolumeInterfaceSet, InterfaceSet,
    InterfaceSetError, InterfaceSetRecord, VolumeFunc, VolumeInterfaceSetRecord,
};
pub use volume::{CvRange, PeriodicCvRange, Volume};

/// Identifier type used for collective variables and other storable objects.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
