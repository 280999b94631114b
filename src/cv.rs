//! Opaque collective-variable handle.

use std::fmt::Display;

use crate::Id;

/// Order parameter associated with an interface set.
///
/// Interface sets and volumes carry this handle around but never evaluate
/// it; the values are supplied by the caller when testing membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectiveVariable {
    name: String,
    id: Id,
}

impl CollectiveVariable {
    /// Creates a handle with a freshly generated identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(name, crate::generate_id())
    }

    /// Recreates a handle with a known identifier, e.g. when reloading.
    pub fn with_id(name: impl Into<String>, id: impl Into<Id>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for CollectiveVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separately_created_handles_differ() {
        let a = CollectiveVariable::new("phi");
        let b = CollectiveVariable::new("phi");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn with_id_restores_identity() {
        let a = CollectiveVariable::new("psi");
        let b = CollectiveVariable::with_id("psi", a.id());
        assert_eq!(a, b);
        assert_eq!(b.to_string(), "psi");
    }
}
