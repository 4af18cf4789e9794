//! Immutable network snapshots.
//!
//! A [`Network`] owns the nodes and links a layout request operates on. Nodes are addressed
//! either by their opaque [`NodeId`] or by their insertion index (`ix`), which is what the
//! algorithms in [`crate::alg`] use internally. Links are addressed by [`LinkId`], their
//! position in the snapshot's link list.

use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

mod adjacency;
mod link;

pub use adjacency::AdjacencyIndex;
pub use link::{Link, LinkId};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A network node. Ids are unique, names may repeat.
///
/// The natural order of nodes is by name, then by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
}

impl Node {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: NodeId(id),
            name: name.into(),
        }
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone)]
pub struct Network {
    nodes: Vec<Node>,
    node_index: HashMap<NodeId, usize>,
    links: Vec<Link>,
    // (source ix, target ix), parallel to `links`.
    ends: Vec<(usize, usize)>,
}

impl Network {
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Result<Self> {
        let mut node_index: HashMap<NodeId, usize> = HashMap::default();
        for (ix, node) in nodes.iter().enumerate() {
            if node_index.insert(node.id, ix).is_some() {
                return Err(Error::DuplicateNode(node.id));
            }
        }

        let mut ends: Vec<(usize, usize)> = Vec::with_capacity(links.len());
        for (i, link) in links.iter().enumerate() {
            let resolve = |id: NodeId| {
                node_index
                    .get(&id)
                    .copied()
                    .ok_or(Error::MissingEndpoint { link: i, node: id })
            };
            ends.push((resolve(link.source)?, resolve(link.target)?));
        }

        Ok(Self {
            nodes,
            node_index,
            links,
            ends,
        })
    }

    /// Builds a network and materializes a shadow duplicate for every undirected link that is
    /// not a feedback link. Links already flagged as shadows are kept as given.
    pub fn with_shadows(nodes: Vec<Node>, links: Vec<Link>) -> Result<Self> {
        let mut all: Vec<Link> = Vec::with_capacity(links.len() * 2);
        for link in links {
            let shadow = (!link.shadow && !link.directed && !link.is_feedback())
                .then(|| link.shadow_of());
            all.push(link);
            all.extend(shadow);
        }
        Self::new(nodes, all)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn shadow_link_count(&self) -> usize {
        self.links.len()
    }

    pub fn non_shadow_link_count(&self) -> usize {
        self.links.iter().filter(|l| !l.shadow).count()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Link ids in insertion order.
    pub fn link_ids(&self) -> impl DoubleEndedIterator<Item = LinkId> + ExactSizeIterator + '_ {
        (0..self.links.len()).map(LinkId)
    }

    pub fn node_ix(&self, id: NodeId) -> Option<usize> {
        self.node_index.get(&id).copied()
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.node_ix(id).map(|ix| &self.nodes[ix])
    }

    /// # Panics
    ///
    /// Panics if `ix` is out of range.
    pub fn node_at(&self, ix: usize) -> &Node {
        &self.nodes[ix]
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.0)
    }

    /// Source and target node indexes of a link.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this network.
    pub fn ends(&self, id: LinkId) -> (usize, usize) {
        self.ends[id.0]
    }

    /// The endpoint of `id` opposite to `ix`. Feedback links return `ix` itself.
    pub fn opposite(&self, id: LinkId, ix: usize) -> usize {
        let (v, w) = self.ends[id.0];
        if v == ix { w } else { v }
    }

    /// Node indexes sorted by the nodes' natural order.
    pub fn natural_order(&self) -> Vec<usize> {
        let mut ixs: Vec<usize> = (0..self.nodes.len()).collect();
        ixs.sort_by(|&a, &b| self.nodes[a].cmp(&self.nodes[b]));
        ixs
    }

    /// Position of every node index within [`Network::natural_order`].
    pub fn natural_rank(&self) -> Vec<usize> {
        let mut rank = vec![0; self.nodes.len()];
        for (pos, ix) in self.natural_order().into_iter().enumerate() {
            rank[ix] = pos;
        }
        rank
    }

    pub fn resolve_nodes(&self, ids: &[NodeId]) -> Result<Vec<usize>> {
        ids.iter()
            .map(|&id| self.node_ix(id).ok_or(Error::UnknownNode(id)))
            .collect()
    }

    pub fn ids_of(&self, ixs: &[usize]) -> Vec<NodeId> {
        ixs.iter().map(|&ix| self.nodes[ix].id).collect()
    }
}
