//! Capacity limits and endpoint policy for a network container

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default node capacity (unbounded)
pub const DEFAULT_MAX_NODES: Option<usize> = None;

/// Default arc capacity (unbounded)
pub const DEFAULT_MAX_ARCS: Option<usize> = None;

/// Limits applied by a container on every registration.
///
/// A full container rejects new components with [`Error::CapacityExceeded`]
/// before any of its structures are touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLimits {
    /// Maximum number of registered nodes
    #[serde(default = "default_max_nodes")]
    pub max_nodes: Option<usize>,

    /// Maximum number of registered arcs
    #[serde(default = "default_max_arcs")]
    pub max_arcs: Option<usize>,

    /// Require arc targets to be registered nodes, not only arc sources
    #[serde(default)]
    pub strict_endpoints: bool,
}

fn default_max_nodes() -> Option<usize> {
    DEFAULT_MAX_NODES
}

fn default_max_arcs() -> Option<usize> {
    DEFAULT_MAX_ARCS
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self {
            max_nodes: default_max_nodes(),
            max_arcs: default_max_arcs(),
            strict_endpoints: false,
        }
    }
}

impl GraphLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = Some(max);
        self
    }

    pub fn with_max_arcs(mut self, max: usize) -> Self {
        self.max_arcs = Some(max);
        self
    }

    /// Require both endpoints of every arc to be registered
    pub fn strict(mut self) -> Self {
        self.strict_endpoints = true;
        self
    }
}

/// Validate that one more node fits next to `count` registered ones
pub fn validate_node_capacity(count: usize, limits: &GraphLimits) -> Result<()> {
    match limits.max_nodes {
        Some(max) if count >= max => Err(Error::CapacityExceeded { kind: "nodes", max }),
        _ => Ok(()),
    }
}

/// Validate that one more arc fits next to `count` registered ones
pub fn validate_arc_capacity(count: usize, limits: &GraphLimits) -> Result<()> {
    match limits.max_arcs {
        Some(max) if count >= max => Err(Error::CapacityExceeded { kind: "arcs", max }),
        _ => Ok(()),
    }
}
