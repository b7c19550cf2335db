//! bayesnet core - directed network container
//!
//! This crate provides the adjacency-list container that stores the nodes and
//! arcs of a Bayesian network, together with the identity handles, limits and
//! error types around it. Probability tables and inference live elsewhere;
//! here nodes and arcs are opaque identities.

pub mod adjacency;
pub mod connection;
pub mod error;
pub mod graph;
pub mod handle;
pub mod limits;

pub use adjacency::AdjacencyList;
pub use connection::{Connection, GraphStats};
pub use error::{Error, Result};
pub use graph::Network;
pub use handle::{Component, Handle, WeakHandle};
pub use limits::GraphLimits;
