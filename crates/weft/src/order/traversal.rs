//! Node orders built on the shared graph algorithms.

use super::{NodeOrder, OrderContext, Ranking};
use crate::error::{Error, Result};
use weft_graphlib::alg::{self, BreadthOptions, Follow, Leveling, Search, Seeds};
use weft_graphlib::{LinkId, Network};

/// The default row order: a breadth-first sweep that starts at the highest-degree node and
/// expands neighbours (in either link direction) by descending degree. Every node that the
/// sweep has not reached yet starts a new tree, in the same degree order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthOrder;

impl NodeOrder for BreadthOrder {
    fn name(&self) -> &'static str {
        "default"
    }

    fn order(&self, net: &Network, cx: &mut OrderContext<'_, '_>) -> Result<Vec<usize>> {
        let options = BreadthOptions {
            seeds: Seeds::ByDegree,
            follow: Follow::Either,
            degree_ordered: true,
            stop: None,
        };
        let visits = Search::new(net, cx.adj).breadth_search(&options, cx.progress)?;
        Ok(visits.into_iter().map(|v| v.node).collect())
    }
}

/// Depth-first order from the roots in natural order, optionally following an explicit
/// sibling (link) order.
#[derive(Debug, Clone, Default)]
pub struct DepthOrder {
    pub siblings: Option<Vec<LinkId>>,
}

impl NodeOrder for DepthOrder {
    fn name(&self) -> &'static str {
        "depth"
    }

    fn order(&self, net: &Network, cx: &mut OrderContext<'_, '_>) -> Result<Vec<usize>> {
        let search = match &self.siblings {
            Some(siblings) => Search::with_sibling_order(net, cx.adj, siblings),
            None => Search::new(net, cx.adj),
        };
        let visits = search.depth_search(None, cx.progress)?;
        Ok(visits.into_iter().map(|v| v.node).collect())
    }
}

/// Hierarchical order for directed acyclic networks: by topological level, then by descending
/// combined degree, then natural order.
#[derive(Debug, Clone, Copy)]
pub struct LevelOrder {
    pub contract: bool,
}

impl Default for LevelOrder {
    fn default() -> Self {
        Self { contract: true }
    }
}

impl NodeOrder for LevelOrder {
    fn name(&self) -> &'static str {
        "level"
    }

    fn order(&self, net: &Network, cx: &mut OrderContext<'_, '_>) -> Result<Vec<usize>> {
        if let Some(cycle) = alg::find_cycle(net, cx.adj, cx.progress)? {
            return Err(Error::CyclicNetwork(net.ids_of(&cycle)));
        }

        let levels = match alg::level(net, cx.adj, cx.progress)? {
            Leveling::Complete(levels) => levels,
            Leveling::Partial { remainder, .. } => {
                return Err(Error::UnresolvedCycle(net.ids_of(&remainder)));
            }
        };
        let levels = if self.contract {
            alg::contract(net, cx.adj, &levels, cx.progress)?
        } else {
            levels
        };

        let adj = cx.adj;
        let levels = &levels;
        let ranking = Ranking::new()
            .by(move |ix| levels.get(ix))
            .by_desc(move |ix| adj.degree(ix))
            .then_natural(net);
        Ok(ranking.sorted((0..net.node_count()).collect()))
    }
}
