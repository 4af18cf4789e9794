//! Node orders: pluggable total orders over a network's nodes.
//!
//! A node order decides row assignment. Orders return node indexes; every order must return
//! each node of the network exactly once.

mod degree;
mod passthrough;
pub mod ranking;
mod sourced;
mod traversal;

pub use degree::DegreeOrder;
pub use passthrough::PassthroughOrder;
pub use ranking::Ranking;
pub use sourced::{SourcedGrayOrder, SourcedOrder, gray_bits, gray_value};
pub use traversal::{BreadthOrder, DepthOrder, LevelOrder};

use crate::error::Result;
use weft_graphlib::{AdjacencyIndex, Network, Progress};

pub struct OrderContext<'a, 'm> {
    pub adj: &'a AdjacencyIndex,
    pub progress: &'a mut Progress<'m>,
}

pub trait NodeOrder {
    fn name(&self) -> &'static str;

    fn order(&self, net: &Network, cx: &mut OrderContext<'_, '_>) -> Result<Vec<usize>>;
}

/// Returns the first problem with `order` as a permutation of the network's node indexes.
pub fn permutation_problem(node_count: usize, order: &[usize]) -> Option<String> {
    if order.len() != node_count {
        return Some(format!(
            "expected {node_count} nodes, got {}",
            order.len()
        ));
    }
    let mut seen = vec![false; node_count];
    for &ix in order {
        match seen.get_mut(ix) {
            None => return Some(format!("node index {ix} is out of range")),
            Some(true) => return Some(format!("node index {ix} appears twice")),
            Some(slot) => *slot = true,
        }
    }
    None
}
