use super::{NodeOrder, OrderContext, Ranking};
use crate::error::Result;
use weft_graphlib::Network;

/// Ascending combined degree, ties in node natural order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeOrder;

impl NodeOrder for DegreeOrder {
    fn name(&self) -> &'static str {
        "degree"
    }

    fn order(&self, net: &Network, cx: &mut OrderContext<'_, '_>) -> Result<Vec<usize>> {
        let adj = cx.adj;
        let ranking = Ranking::new()
            .by(move |ix| adj.degree(ix))
            .then_natural(net);
        Ok(ranking.sorted((0..net.node_count()).collect()))
    }
}
