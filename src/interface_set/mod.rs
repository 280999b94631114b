//! Interface sets: ordered boundary volumes along an order parameter.
//!
//! [`InterfaceSet`] holds a list of volumes together with the collective
//! variable and the lambda of each interface. [`GenericVolumeInterfaceSet`]
//! builds such a list from minimum/maximum endpoints and can produce new
//! interfaces at arbitrary lambdas.

mod error;
mod factory;
mod generic;
mod normalize;
mod record;
mod set;


pub use error::{InterfaceSetError, Result};
pub use factory::{Factory, VolumeFunc};
pub use generic::GenericVolumeInterfaceSet;
pub use normalize::{normalize, Direction, Endpoints};
pub use record::{InterfaceSetRecord, VolumeInterfaceSetRecord};
pub use set::InterfaceSet;
