//! Adjacency-list container for directed networks
//!
//! [`AdjacencyList`] keeps four structures in step:
//!
//! - the registered nodes, in insertion order
//! - the registered arcs, in insertion order
//! - the endpoint index, arc -> (source, target)
//! - the adjacency index, node -> outgoing (target, arc) pairs
//!
//! Every mutation either completes or leaves all four untouched. Registration
//! and arc removal get there by checking every precondition and reserving
//! every allocation before the first write. Node removal cascades over many
//! arcs and snapshots the arc-side structures first, restoring them if the
//! cascade finds the indices out of step.

use std::collections::HashMap;

use crate::connection::{Connection, GraphStats};
use crate::error::{Error, Result};
use crate::graph::Network;
use crate::handle::Component;
use crate::limits::{validate_arc_capacity, validate_node_capacity, GraphLimits};

type Bucket<N, A> = Vec<(N, A)>;

/// Copy of the arc-side structures taken before a cascading removal
struct Snapshot<N, A> {
    arcs: Vec<A>,
    endpoints: HashMap<A, (N, N)>,
    adjacency: HashMap<N, Bucket<N, A>>,
}

/// Directed network storing nodes, arcs and their incidence.
///
/// Nodes and arcs are opaque identities: the container clones, compares and
/// hashes them but never inspects a payload. Use [`crate::Handle`] to get
/// identity semantics over shared payloads.
///
/// Mutating calls take `&mut self`; concurrent use needs external locking.
#[derive(Debug, Clone)]
pub struct AdjacencyList<N, A> {
    nodes: Vec<N>,
    arcs: Vec<A>,
    endpoints: HashMap<A, (N, N)>,
    adjacency: HashMap<N, Bucket<N, A>>,
    limits: GraphLimits,
}

impl<N: Component, A: Component> Default for AdjacencyList<N, A> {
    fn default() -> Self {
        Self::with_limits(GraphLimits::default())
    }
}

impl<N: Component, A: Component> AdjacencyList<N, A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: GraphLimits) -> Self {
        Self {
            nodes: Vec::new(),
            arcs: Vec::new(),
            endpoints: HashMap::new(),
            adjacency: HashMap::new(),
            limits,
        }
    }

    pub fn limits(&self) -> &GraphLimits {
        &self.limits
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a node and give it an empty adjacency bucket.
    ///
    /// Fails without touching the container if the node is already
    /// registered, the node limit is reached or memory cannot be reserved.
    pub fn add_node(&mut self, node: N) -> Result<N> {
        if self.adjacency.contains_key(&node) {
            return Err(Error::NodeExists(format!("{:?}", node)));
        }
        validate_node_capacity(self.nodes.len(), &self.limits)?;

        self.nodes.try_reserve(1)?;
        self.adjacency.try_reserve(1)?;

        self.nodes.push(node.clone());
        self.adjacency.insert(node.clone(), Vec::new());

        tracing::debug!("Registered node {:?} ({} nodes)", node, self.nodes.len());
        Ok(node)
    }

    /// Remove a node together with every arc it is an endpoint of.
    ///
    /// Returns `false` if the node is not registered. Also returns `false`,
    /// after restoring the pre-call state, if the cascade finds an arc that
    /// the indices disagree about.
    pub fn remove_node(&mut self, node: &N) -> bool {
        let Some(position) = self.nodes.iter().rposition(|n| n == node) else {
            return false;
        };

        let snapshot = self.snapshot();
        let mut cascaded = 0usize;
        let mut consistent = true;

        for arc in &snapshot.arcs {
            let Some((from, to)) = self.endpoints.get(arc) else {
                tracing::error!("Arc {:?} is registered without endpoints", arc);
                consistent = false;
                break;
            };
            if from != node && to != node {
                continue;
            }

            let (from, to) = (from.clone(), to.clone());
            if !self.remove_arc_with(arc, &from, &to) {
                tracing::error!(
                    "Arc {:?} ({:?} -> {:?}) is missing from the adjacency index",
                    arc,
                    from,
                    to
                );
                consistent = false;
                break;
            }
            cascaded += 1;
        }

        if !consistent {
            tracing::warn!("Rolling back removal of node {:?}", node);
            self.restore(snapshot);
            return false;
        }

        self.adjacency.remove(node);
        self.nodes.remove(position);

        tracing::debug!("Removed node {:?} and {} incident arcs", node, cascaded);
        true
    }

    /// Register `arc` as a directed edge from `from` to `to`.
    ///
    /// `from` must be a registered node; under strict limits `to` must be too.
    /// Fails without touching the container on a duplicate arc, an
    /// unregistered endpoint, a full container or a failed reservation.
    pub fn add_arc(&mut self, arc: A, from: &N, to: &N) -> Result<A> {
        if self.endpoints.contains_key(&arc) {
            return Err(Error::ArcExists(format!("{:?}", arc)));
        }
        if self.limits.strict_endpoints && !self.adjacency.contains_key(to) {
            return Err(Error::NodeNotRegistered(format!("{:?}", to)));
        }
        validate_arc_capacity(self.arcs.len(), &self.limits)?;

        let bucket = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| Error::NodeNotRegistered(format!("{:?}", from)))?;

        bucket.try_reserve(1)?;
        self.endpoints.try_reserve(1)?;
        self.arcs.try_reserve(1)?;

        bucket.push((to.clone(), arc.clone()));
        self.endpoints.insert(arc.clone(), (from.clone(), to.clone()));
        self.arcs.push(arc.clone());

        tracing::debug!("Registered arc {:?}: {:?} -> {:?}", arc, from, to);
        Ok(arc)
    }

    /// Remove a registered arc. Returns `false` if it is not registered.
    pub fn remove_arc(&mut self, arc: &A) -> bool {
        let Some((from, to)) = self.endpoints.get(arc).cloned() else {
            return false;
        };
        self.remove_arc_with(arc, &from, &to)
    }

    /// Remove an arc leading from `from` to `to`.
    ///
    /// With parallel arcs the earliest-added one goes. Returns `false` if the
    /// nodes are not adjacent.
    pub fn remove_arc_between(&mut self, from: &N, to: &N) -> bool {
        let Some(arc) = self.is_adjacent(from, to) else {
            return false;
        };
        self.remove_arc_with(&arc, from, to)
    }

    /// Removal primitive shared by every arc-removing path.
    ///
    /// All three positions are located before anything is erased, so a failed
    /// lookup leaves the container as it was.
    fn remove_arc_with(&mut self, arc: &A, from: &N, to: &N) -> bool {
        let Some(arc_position) = self.arcs.iter().rposition(|a| a == arc) else {
            return false;
        };
        let Some(bucket) = self.adjacency.get_mut(from) else {
            return false;
        };
        let Some(entry_position) = bucket.iter().position(|(t, a)| t == to && a == arc) else {
            return false;
        };

        bucket.remove(entry_position);
        self.endpoints.remove(arc);
        self.arcs.remove(arc_position);

        tracing::debug!("Removed arc {:?}: {:?} -> {:?}", arc, from, to);
        true
    }

    /// Drop every node and arc
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.arcs.clear();
        self.endpoints.clear();
        self.adjacency.clear();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Arc leading from `from` to `to`, the earliest-added one if parallel
    pub fn is_adjacent(&self, from: &N, to: &N) -> Option<A> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, arc)| arc.clone())
    }

    /// Classify `node` against `arc`. A self-loop reports its node as source.
    pub fn is_connect(&self, node: &N, arc: &A) -> Connection {
        match self.endpoints.get(arc) {
            Some((from, _)) if from == node => Connection::Source,
            Some((_, to)) if to == node => Connection::Target,
            _ => Connection::Unrelated,
        }
    }

    pub fn source(&self, arc: &A) -> Option<N> {
        self.endpoints.get(arc).map(|(from, _)| from.clone())
    }

    pub fn target(&self, arc: &A) -> Option<N> {
        self.endpoints.get(arc).map(|(_, to)| to.clone())
    }

    /// Sources of all arcs into `child`, in arc insertion order.
    ///
    /// There is no reverse index: this walks every registered arc, so it
    /// costs O(arcs) per call.
    pub fn parent_nodes(&self, child: &N) -> Vec<N> {
        self.arcs
            .iter()
            .filter_map(|arc| self.endpoints.get(arc))
            .filter(|(_, to)| to == child)
            .map(|(from, _)| from.clone())
            .collect()
    }

    /// Targets of all arcs out of `parent`, in arc insertion order
    pub fn child_nodes(&self, parent: &N) -> Result<Vec<N>> {
        let bucket = self
            .adjacency
            .get(parent)
            .ok_or_else(|| Error::NodeNotRegistered(format!("{:?}", parent)))?;
        Ok(bucket.iter().map(|(to, _)| to.clone()).collect())
    }

    pub fn all_node(&self) -> Vec<N> {
        self.nodes.clone()
    }

    pub fn all_arc(&self) -> Vec<A> {
        self.arcs.clone()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn contains_arc(&self, arc: &A) -> bool {
        self.endpoints.contains_key(arc)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.arcs.is_empty()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.nodes.len(),
            arcs: self.arcs.len(),
        }
    }

    /// Verify that the node set, arc set and both indices agree.
    pub fn check_consistency(&self) -> Result<()> {
        if self.nodes.len() != self.adjacency.len() {
            return Err(Error::Inconsistent(format!(
                "{} nodes but {} adjacency buckets",
                self.nodes.len(),
                self.adjacency.len()
            )));
        }
        if let Some(node) = self.nodes.iter().find(|n| !self.adjacency.contains_key(*n)) {
            return Err(Error::Inconsistent(format!("node {:?} has no bucket", node)));
        }

        if self.arcs.len() != self.endpoints.len() {
            return Err(Error::Inconsistent(format!(
                "{} arcs but {} endpoint entries",
                self.arcs.len(),
                self.endpoints.len()
            )));
        }
        let bucketed: usize = self.adjacency.values().map(Vec::len).sum();
        if bucketed != self.arcs.len() {
            return Err(Error::Inconsistent(format!(
                "{} arcs but {} adjacency entries",
                self.arcs.len(),
                bucketed
            )));
        }

        for arc in &self.arcs {
            let (from, to) = self
                .endpoints
                .get(arc)
                .ok_or_else(|| Error::Inconsistent(format!("arc {:?} has no endpoints", arc)))?;
            let listed = self
                .adjacency
                .get(from)
                .map(|bucket| bucket.iter().filter(|(t, a)| t == to && a == arc).count())
                .unwrap_or(0);
            if listed != 1 {
                return Err(Error::Inconsistent(format!(
                    "arc {:?} listed {} times under its source {:?}",
                    arc, listed, from
                )));
            }
            if self.limits.strict_endpoints && !self.adjacency.contains_key(to) {
                return Err(Error::Inconsistent(format!(
                    "arc {:?} targets unregistered node {:?}",
                    arc, to
                )));
            }
        }

        Ok(())
    }

    fn snapshot(&self) -> Snapshot<N, A> {
        Snapshot {
            arcs: self.arcs.clone(),
            endpoints: self.endpoints.clone(),
            adjacency: self.adjacency.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot<N, A>) {
        self.arcs = snapshot.arcs;
        self.endpoints = snapshot.endpoints;
        self.adjacency = snapshot.adjacency;
    }
}

impl<N: Component, A: Component> Network for AdjacencyList<N, A> {
    type Node = N;
    type Arc = A;

    fn is_adjacent(&self, from: &N, to: &N) -> Option<A> {
        AdjacencyList::is_adjacent(self, from, to)
    }

    fn is_connect(&self, node: &N, arc: &A) -> Connection {
        AdjacencyList::is_connect(self, node, arc)
    }

    fn source(&self, arc: &A) -> Option<N> {
        AdjacencyList::source(self, arc)
    }

    fn target(&self, arc: &A) -> Option<N> {
        AdjacencyList::target(self, arc)
    }

    fn parent_nodes(&self, child: &N) -> Vec<N> {
        AdjacencyList::parent_nodes(self, child)
    }

    fn child_nodes(&self, parent: &N) -> Result<Vec<N>> {
        AdjacencyList::child_nodes(self, parent)
    }

    fn all_node(&self) -> Vec<N> {
        AdjacencyList::all_node(self)
    }

    fn all_arc(&self) -> Vec<A> {
        AdjacencyList::all_arc(self)
    }
}
