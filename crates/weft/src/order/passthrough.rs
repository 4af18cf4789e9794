use super::{NodeOrder, OrderContext, permutation_problem};
use crate::error::{Error, Result};
use weft_graphlib::{Network, NodeId};

/// Keeps a caller-supplied order, used when re-laying out an existing or user-edited layout.
#[derive(Debug, Clone, Default)]
pub struct PassthroughOrder {
    pub nodes: Vec<NodeId>,
}

impl PassthroughOrder {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }
}

impl NodeOrder for PassthroughOrder {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn order(&self, net: &Network, cx: &mut OrderContext<'_, '_>) -> Result<Vec<usize>> {
        let mut reporter = cx.progress.reporter("passthrough", self.nodes.len());
        let mut ixs: Vec<usize> = Vec::with_capacity(self.nodes.len());
        for &id in &self.nodes {
            reporter.tick()?;
            let Some(ix) = net.node_ix(id) else {
                return Err(Error::InvalidNodeOrder(format!("unknown node {id}")));
            };
            ixs.push(ix);
        }
        if let Some(problem) = permutation_problem(net.node_count(), &ixs) {
            return Err(Error::InvalidNodeOrder(problem));
        }
        Ok(ixs)
    }
}
