//! Node/arc connection classification and container statistics

use serde::{Deserialize, Serialize};

/// How a node relates to an arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connection {
    /// The node is the arc's source (parent side)
    Source,
    /// The node is the arc's target (child side)
    Target,
    /// The node is not an endpoint, or the arc is not registered
    Unrelated,
}

impl Connection {
    pub fn is_connected(self) -> bool {
        !matches!(self, Self::Unrelated)
    }

    /// Signed form: `1` for source, `-1` for target, `0` otherwise
    pub fn signum(self) -> i32 {
        match self {
            Self::Source => 1,
            Self::Target => -1,
            Self::Unrelated => 0,
        }
    }
}

/// Size summary of a container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub arcs: usize,
}
