//! Network trait definition

use crate::connection::Connection;
use crate::error::Result;
use crate::handle::Component;

/// Read-only view of a directed network
///
/// Inference and structure-learning layers query the structure through this
/// trait, so they never depend on how a container stores its indices.
pub trait Network {
    type Node: Component;
    type Arc: Component;

    // ─────────────────────────────────────────────────────────────────────────
    // Arc Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Arc leading from `from` to `to`, if any
    fn is_adjacent(&self, from: &Self::Node, to: &Self::Node) -> Option<Self::Arc>;

    /// Classify `node` as source, target or neither of `arc`
    fn is_connect(&self, node: &Self::Node, arc: &Self::Arc) -> Connection;

    /// Source (parent) node of an arc
    fn source(&self, arc: &Self::Arc) -> Option<Self::Node>;

    /// Target (child) node of an arc
    fn target(&self, arc: &Self::Arc) -> Option<Self::Node>;

    // ─────────────────────────────────────────────────────────────────────────
    // Node Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Nodes with an arc into `child`
    fn parent_nodes(&self, child: &Self::Node) -> Vec<Self::Node>;

    /// Nodes `parent` has an arc into, in arc insertion order
    fn child_nodes(&self, parent: &Self::Node) -> Result<Vec<Self::Node>>;

    // ─────────────────────────────────────────────────────────────────────────
    // Whole-network Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Every registered node in insertion order
    fn all_node(&self) -> Vec<Self::Node>;

    /// Every registered arc in insertion order
    fn all_arc(&self) -> Vec<Self::Arc>;
}
