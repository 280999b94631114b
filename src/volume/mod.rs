//! Boundary volumes in collective-variable space.
//!
//! Only the parts of a volume algebra that interface sets rely on are
//! provided: ranges on a collective variable, boolean combinators,
//! structural equality and point membership.

mod node;
mod range;

pub use node::Volume;
pub use range::{CvRange, PeriodicCvRange};
