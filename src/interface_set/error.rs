use thiserror::Error;

/// Errors that can occur while building or querying interface sets.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterfaceSetError {
    #[error("Can't reconcile endpoint lengths: {min_len} minvals, {max_len} maxvals")]
    Reconciliation { min_len: usize, max_len: usize },

    #[error("Interface factory needs both a minimum and a maximum: direction is unknown")]
    Arity,

    #[error("Volume not in interface set: {0}")]
    KeyNotFound(String),

    #[error("Got {lambdas} lambdas for {volumes} volumes")]
    LengthMismatch { volumes: usize, lambdas: usize },

    #[error("Slice {start}..{end} out of range for {len} interfaces")]
    IndexOutOfRange { start: usize, end: usize, len: usize },

    #[error("Endpoint sequences must not be empty")]
    EmptyEndpoints,

    #[error("Invalid interface set configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, InterfaceSetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconciliation_display() {
        let e = InterfaceSetError::Reconciliation {
            min_len: 3,
            max_len: 2,
        };
        assert_eq!(
            e.to_string(),
            "Can't reconcile endpoint lengths: 3 minvals, 2 maxvals"
        );
    }

    #[test]
    fn key_not_found_display() {
        let e = InterfaceSetError::KeyNotFound("{0.000 <= x < 1.000}".to_string());
        assert!(e.to_string().contains("Volume not in interface set"));
    }

    #[test]
    fn error_equality() {
        assert_eq!(InterfaceSetError::Arity, InterfaceSetError::Arity);
        assert_ne!(InterfaceSetError::Arity, InterfaceSetError::EmptyEndpoints);
    }
}
