//! Orders driven by membership in an externally supplied, ordered list of source nodes.
//!
//! Every node, sources included, is ranked by which sources point at it: a source points at a
//! node through a directed link it sources or any undirected link between the two.

use super::{NodeOrder, OrderContext, Ranking};
use crate::error::Result;
use indexmap::IndexSet;
use std::cmp::Ordering;
use weft_graphlib::{AdjacencyIndex, Error as GraphError, Network, NodeId, Progress};

struct Membership {
    width: usize,
    // Sorted, deduplicated source positions per node index.
    positions: Vec<Vec<usize>>,
}

impl Membership {
    fn build(
        net: &Network,
        adj: &AdjacencyIndex,
        sources: &[NodeId],
        progress: &mut Progress<'_>,
    ) -> Result<Self> {
        let mut unique: IndexSet<usize> = IndexSet::with_capacity(sources.len());
        for &id in sources {
            let ix = net.node_ix(id).ok_or(GraphError::UnknownNode(id))?;
            if !unique.insert(ix) {
                return Err(GraphError::DuplicateNode(id).into());
            }
        }

        let mut reporter = progress.reporter("source_membership", net.node_count());
        let mut positions: Vec<Vec<usize>> = vec![Vec::new(); net.node_count()];
        for (ix, slot) in positions.iter_mut().enumerate() {
            reporter.tick()?;
            for &id in adj.incoming(ix) {
                let other = net.opposite(id, ix);
                if other == ix {
                    continue;
                }
                if let Some(pos) = unique.get_index_of(&other) {
                    slot.push(pos);
                }
            }
            slot.sort_unstable();
            slot.dedup();
        }

        Ok(Self {
            width: unique.len(),
            positions,
        })
    }
}

/// Compares two sorted source-position lists: the first differing position decides (smaller
/// sorts first); when one list is a prefix of the other, the longer list sorts first.
fn compare_positions(a: &[usize], b: &[usize]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        if x != y {
            return x.cmp(y);
        }
    }
    b.len().cmp(&a.len())
}

/// Source-set lexicographic order. Ties fall back to incoming degree (higher first), then to
/// node natural order.
#[derive(Debug, Clone, Default)]
pub struct SourcedOrder {
    pub sources: Vec<NodeId>,
}

impl SourcedOrder {
    pub fn new(sources: Vec<NodeId>) -> Self {
        Self { sources }
    }
}

impl NodeOrder for SourcedOrder {
    fn name(&self) -> &'static str {
        "sourced"
    }

    fn order(&self, net: &Network, cx: &mut OrderContext<'_, '_>) -> Result<Vec<usize>> {
        let adj = cx.adj;
        let membership = Membership::build(net, adj, &self.sources, cx.progress)?;
        let positions = &membership.positions;
        let ranking = Ranking::new()
            .by_cmp(move |a, b| compare_positions(&positions[a], &positions[b]))
            .by_desc(move |ix| adj.in_degree(ix))
            .then_natural(net);
        Ok(ranking.sorted((0..net.node_count()).collect()))
    }
}

/// Reference conversion on a machine word: XOR-accumulates successive right shifts of `bits`
/// until the shifted value reaches zero.
pub fn gray_value(bits: u64) -> u64 {
    let mut value = bits;
    let mut shifted = bits >> 1;
    while shifted != 0 {
        value ^= shifted;
        shifted >>= 1;
    }
    value
}

/// [`gray_value`] over a bitstring of any length, most significant bit first.
///
/// Accumulating every right shift leaves each output bit equal to the parity of all input bits
/// at or above it, so the conversion is a running XOR from the most significant end.
pub fn gray_bits(bits: &[bool]) -> Vec<bool> {
    let mut parity = false;
    bits.iter()
        .map(|&bit| {
            parity ^= bit;
            parity
        })
        .collect()
}

/// Source-membership Gray-code order: higher converted value first, then name, then id.
///
/// Each node's membership is a bitstring over the source list (first source is the most
/// significant bit); nodes whose patterns differ in a single bit end up close together.
#[derive(Debug, Clone, Default)]
pub struct SourcedGrayOrder {
    pub sources: Vec<NodeId>,
}

impl SourcedGrayOrder {
    pub fn new(sources: Vec<NodeId>) -> Self {
        Self { sources }
    }
}

impl NodeOrder for SourcedGrayOrder {
    fn name(&self) -> &'static str {
        "sourced-gray"
    }

    fn order(&self, net: &Network, cx: &mut OrderContext<'_, '_>) -> Result<Vec<usize>> {
        let membership = Membership::build(net, cx.adj, &self.sources, cx.progress)?;
        let width = membership.width;
        let mut reporter = cx.progress.reporter("gray_keys", net.node_count());

        let mut keys: Vec<Vec<bool>> = Vec::with_capacity(net.node_count());
        for positions in &membership.positions {
            reporter.tick()?;
            let mut bits = vec![false; width];
            for &pos in positions {
                bits[pos] = true;
            }
            keys.push(gray_bits(&bits));
        }

        let keys = &keys;
        let ranking = Ranking::new()
            .by_desc(move |ix| &keys[ix])
            .by(move |ix| net.node_at(ix).name.as_str())
            .then_natural(net);
        Ok(ranking.sorted((0..net.node_count()).collect()))
    }
}
