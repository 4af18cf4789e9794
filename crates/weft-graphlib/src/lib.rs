#![forbid(unsafe_code)]

//! Network snapshots and the graph algorithms `weft` builds its layouts on.
//!
//! The crate covers the adjacency index, three-colour cycle detection, topological leveling
//! with contraction, and breadth/depth searches with pluggable sibling orders.

pub mod alg;
pub mod error;
pub mod monitor;
pub mod network;

pub use error::{Error, Result};
pub use monitor::{CancelFlag, Monitor, Progress, Unmonitored};
pub use network::{AdjacencyIndex, Link, LinkId, Network, Node, NodeId};
