//! Graph algorithms over a [`Network`](crate::Network) snapshot.
//!
//! Every algorithm takes the snapshot, its [`AdjacencyIndex`](crate::AdjacencyIndex) and a
//! [`Progress`](crate::monitor::Progress) handle, and reports node indexes rather than ids.

pub mod cycle;
pub mod level;
pub mod search;

pub use cycle::{find_cycle, has_cycle};
pub use level::{Leveling, Levels, contract, level};
pub use search::{BreadthOptions, Follow, Search, Seeds, Visit};
