//! Ordered interface volumes with their lambdas.
//!
//! [`InterfaceSet`] is immutable once built. Read access to the volumes is
//! transparent via `Deref<Target = [Volume]>`, so `len()`, `iter()`,
//! `iter().rev()`, `get()`, `contains()` and indexing all come from the
//! slice. Subsets are made with [`InterfaceSet::slice`], which goes through
//! the same checks as the constructor.

use std::ops::{Deref, Index, Range};

use log::debug;

use super::error::{InterfaceSetError, Result};
use super::normalize::Direction;
use super::record::InterfaceSetRecord;
use crate::cv::CollectiveVariable;
use crate::volume::Volume;

/// List of interface volumes plus the order parameter and lambdas they
/// were built from.
///
/// # Invariants
///
/// - `lambdas`, when present, has one value per volume
/// - `direction` is fixed at construction
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceSet {
    volumes: Vec<Volume>,
    cv: Option<CollectiveVariable>,
    lambdas: Option<Vec<f64>>,
    direction: Direction,
}

impl InterfaceSet {
    /// Creates an interface set.
    ///
    /// When `direction` is `None` it is guessed from the monotonicity of
    /// `lambdas`; without lambdas it is [`Direction::Unknown`].
    pub fn new(
        volumes: Vec<Volume>,
        cv: Option<CollectiveVariable>,
        lambdas: Option<Vec<f64>>,
        direction: Option<Direction>,
    ) -> Result<Self> {
        if let Some(lambdas) = &lambdas {
            if lambdas.len() != volumes.len() {
                return Err(InterfaceSetError::LengthMismatch {
                    volumes: volumes.len(),
                    lambdas: lambdas.len(),
                });
            }
        }
        let direction = match (direction, &lambdas) {
            (Some(direction), _) => direction,
            (None, Some(lambdas)) => {
                let guessed = Direction::from_lambdas(lambdas);
                debug!("guessed direction {:?} from {} lambdas", guessed, lambdas.len());
                guessed
            }
            (None, None) => Direction::Unknown,
        };
        Ok(Self {
            volumes,
            cv,
            lambdas,
            direction,
        })
    }

    pub fn volumes(&self) -> &[Volume] {
        &self.volumes
    }

    pub fn cv(&self) -> Option<&CollectiveVariable> {
        self.cv.as_ref()
    }

    pub fn lambdas(&self) -> Option<&[f64]> {
        self.lambdas.as_deref()
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Lambda (value of the CV) associated with an interface volume.
    ///
    /// Returns `Ok(None)` for any member of a set built without lambdas and
    /// [`InterfaceSetError::KeyNotFound`] for a volume that is not a member.
    pub fn get_lambda(&self, volume: &Volume) -> Result<Option<f64>> {
        let index = self
            .volumes
            .iter()
            .position(|v| v == volume)
            .ok_or_else(|| InterfaceSetError::KeyNotFound(volume.stringify()))?;
        Ok(self.lambdas.as_ref().map(|lambdas| lambdas[index]))
    }

    /// Returns a new set over `range`, with lambdas sliced in lockstep.
    pub fn slice(&self, range: Range<usize>) -> Result<Self> {
        check_range(&range, self.len())?;
        Self::from_dict(self.slice_dict(range))
    }

    pub(super) fn slice_dict(&self, range: Range<usize>) -> InterfaceSetRecord {
        InterfaceSetRecord {
            volumes: self.volumes[range.clone()].to_vec(),
            cv: self.cv.clone(),
            lambdas: self.lambdas.as_ref().map(|l| l[range].to_vec()),
            direction: self.direction,
        }
    }

    pub fn to_dict(&self) -> InterfaceSetRecord {
        InterfaceSetRecord {
            volumes: self.volumes.clone(),
            cv: self.cv.clone(),
            lambdas: self.lambdas.clone(),
            direction: self.direction,
        }
    }

    pub fn from_dict(record: InterfaceSetRecord) -> Result<Self> {
        Self::new(
            record.volumes,
            record.cv,
            record.lambdas,
            Some(record.direction),
        )
    }
}

pub(super) fn check_range(range: &Range<usize>, len: usize) -> Result<()> {
    if range.start > range.end || range.end > len {
        return Err(InterfaceSetError::IndexOutOfRange {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl Deref for InterfaceSet {
    type Target = [Volume];

    fn deref(&self) -> &[Volume] {
        &self.volumes
    }
}

impl AsRef<[Volume]> for InterfaceSet {
    fn as_ref(&self) -> &[Volume] {
        &self.volumes
    }
}

impl Index<usize> for InterfaceSet {
    type Output = Volume;

    fn index(&self, index: usize) -> &Volume {
        &self.volumes[index]
    }
}

impl<'a> IntoIterator for &'a InterfaceSet {
    type Item = &'a Volume;
    type IntoIter = std::slice::Iter<'a, Volume>;

    fn into_iter(self) -> Self::IntoIter {
        self.volumes.iter()
    }
}
