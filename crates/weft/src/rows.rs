//! Row assignment: the bijection between node indexes and grid rows.

use crate::order::permutation_problem;
use serde::Serialize;
use weft_graphlib::{LinkId, Network};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rows {
    node_at: Vec<usize>,
    #[serde(skip)]
    row_of: Vec<usize>,
}

impl Rows {
    /// Builds the row assignment from a node order: the node at position `i` gets row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `order` is not a permutation of `0..node_count`.
    pub fn from_order(node_count: usize, order: Vec<usize>) -> Self {
        if let Some(problem) = permutation_problem(node_count, &order) {
            panic!("node order is not a bijection onto the node set: {problem}");
        }
        let mut row_of = vec![0usize; node_count];
        for (row, &ix) in order.iter().enumerate() {
            row_of[ix] = row;
        }
        Self {
            node_at: order,
            row_of,
        }
    }

    pub fn len(&self) -> usize {
        self.node_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_at.is_empty()
    }

    pub fn row(&self, ix: usize) -> usize {
        self.row_of[ix]
    }

    pub fn node_at(&self, row: usize) -> Option<usize> {
        self.node_at.get(row).copied()
    }

    /// Node indexes in row order.
    pub fn order(&self) -> &[usize] {
        &self.node_at
    }

    /// The endpoints of a link as `(top, bottom)` node indexes.
    pub fn top_bottom(&self, net: &Network, id: LinkId) -> (usize, usize) {
        let (v, w) = net.ends(id);
        if self.row_of[v] <= self.row_of[w] {
            (v, w)
        } else {
            (w, v)
        }
    }
}
