//! Error types for bayesnet core

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type alias using the network container's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Network container error types
///
/// "Not found" outcomes are not errors: removals report them as `false` and
/// lookups as `None`. Everything here is either a caller error or a resource
/// failure that was raised before the container was touched.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Node not registered: {0}")]
    NodeNotRegistered(String),

    #[error("Node already registered: {0}")]
    NodeExists(String),

    #[error("Arc already registered: {0}")]
    ArcExists(String),

    #[error("Capacity exceeded: at most {max} {kind}")]
    CapacityExceeded { kind: &'static str, max: usize },

    #[error("Allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Inconsistent network state: {0}")]
    Inconsistent(String),
}

impl Error {
    /// Whether this error signals resource exhaustion rather than misuse.
    pub fn is_resource_failure(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. } | Self::Allocation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::NodeNotRegistered("A".into());
        assert_eq!(err.to_string(), "Node not registered: A");

        let err = Error::CapacityExceeded { kind: "arcs", max: 4 };
        assert_eq!(err.to_string(), "Capacity exceeded: at most 4 arcs");
    }

    #[test]
    fn test_resource_failure_classification() {
        assert!(Error::CapacityExceeded { kind: "nodes", max: 1 }.is_resource_failure());

        let reserve = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        assert!(Error::from(reserve).is_resource_failure());

        assert!(!Error::ArcExists("e1".into()).is_resource_failure());
        assert!(!Error::Inconsistent("dangling".into()).is_resource_failure());
    }
}
