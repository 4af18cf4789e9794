//! Sub-model extraction: the layout of a selected part of a network.
//!
//! The sub-network keeps the relative row order and relative column order of the full layout,
//! so a selection looks the same on its own as it did in place.

use crate::columns::Space;
use crate::error::Result;
use crate::model::LayoutModel;
use crate::options::LayoutOptions;
use crate::order::PassthroughOrder;
use crate::pipeline::layout_with;
use weft_graphlib::{
    Error as GraphError, Link, LinkId, Monitor, Network, Node, NodeId, Progress,
};

#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub nodes: Vec<NodeId>,
    /// Selected links. When `None`, every link between selected nodes is kept. Endpoints of
    /// selected links join the node selection.
    pub links: Option<Vec<LinkId>>,
}

#[derive(Debug, Clone)]
pub struct SubModel {
    pub network: Network,
    pub layout: LayoutModel,
}

pub fn extract_submodel(
    net: &Network,
    layout: &LayoutModel,
    selection: &Selection,
    options: &LayoutOptions,
    monitor: &mut dyn Monitor,
) -> Result<SubModel> {
    options.validate()?;
    let mut progress = Progress::new(monitor).with_interval(options.progress_interval);

    let mut keep_node = vec![false; net.node_count()];
    let mut keep_link = vec![false; net.link_count()];
    {
        let mut reporter = progress.reporter(
            "submodel_selection",
            selection.nodes.len() + net.link_count() * 2,
        );
        for ix in net.resolve_nodes(&selection.nodes)? {
            reporter.tick()?;
            keep_node[ix] = true;
        }

        match &selection.links {
            Some(links) => {
                for &id in links {
                    reporter.tick()?;
                    if net.link(id).is_none() {
                        return Err(GraphError::UnknownLink(id).into());
                    }
                    keep_link[id.0] = true;
                    let (v, w) = net.ends(id);
                    keep_node[v] = true;
                    keep_node[w] = true;
                }
            }
            None => {
                for id in net.link_ids() {
                    reporter.tick()?;
                    let (v, w) = net.ends(id);
                    keep_link[id.0] = keep_node[v] && keep_node[w];
                }
            }
        }
    }

    // Pull in the shadow (or real) partner of every kept link. This compares every kept link
    // with every candidate link and is quadratic in the number of links between selected
    // nodes; large selections pay for it.
    let mut candidates: Vec<LinkId> = Vec::new();
    let mut kept: Vec<LinkId> = Vec::new();
    {
        let mut reporter = progress.reporter("submodel_candidates", net.link_count());
        for id in net.link_ids() {
            reporter.tick()?;
            let (v, w) = net.ends(id);
            if !(keep_node[v] && keep_node[w]) {
                continue;
            }
            candidates.push(id);
            if keep_link[id.0] {
                kept.push(id);
            }
        }
    }
    {
        let mut reporter = progress.reporter("shadow_pairs", kept.len() * candidates.len());
        for &a in &kept {
            let link_a = &net.links()[a.0];
            for &b in &candidates {
                reporter.tick()?;
                if link_a.is_shadow_pair(&net.links()[b.0]) {
                    keep_link[b.0] = true;
                    break;
                }
            }
        }
    }

    let mut nodes: Vec<Node> = Vec::new();
    let mut links: Vec<Link> = Vec::new();
    {
        let shadow_order = layout.link_order(Space::Shadow);
        let mut reporter =
            progress.reporter("submodel_rebuild", layout.rows().len() + shadow_order.len());
        for &ix in layout.rows().order() {
            reporter.tick()?;
            if keep_node[ix] {
                nodes.push(net.node_at(ix).clone());
            }
        }
        for &id in shadow_order {
            reporter.tick()?;
            if keep_link[id.0] {
                links.push(net.links()[id.0].clone());
            }
        }
    }
    tracing::debug!(
        nodes = nodes.len(),
        links = links.len(),
        "extracting sub-model"
    );

    let order = PassthroughOrder::new(nodes.iter().map(|n| n.id).collect());
    let network = Network::new(nodes, links.clone())?;
    let layout = layout_with(
        &network,
        &order,
        Some(links.as_slice()),
        options.palette_size,
        &mut progress,
    )?;
    Ok(SubModel { network, layout })
}
