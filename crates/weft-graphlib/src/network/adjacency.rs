//! Forward/backward link indexes.
//!
//! The index is built once per snapshot in O(E) and stored in CSR form (offsets + a flat link
//! list per direction). Shadow links are left out: they duplicate a real link and would only
//! make every traversal visit the same neighbour twice.

use super::{LinkId, Network};
use crate::error::Result;
use crate::monitor::Progress;
use std::convert::Infallible;

#[derive(Debug, Clone, Default)]
struct Csr {
    offsets: Vec<usize>,
    links: Vec<LinkId>,
}

impl Csr {
    fn build(node_count: usize, entries: &[(usize, LinkId)]) -> Self {
        let mut offsets = vec![0usize; node_count + 1];
        for &(ix, _) in entries {
            offsets[ix + 1] += 1;
        }
        for i in 0..node_count {
            offsets[i + 1] += offsets[i];
        }
        let mut fill = offsets.clone();
        let mut links = vec![LinkId(0); entries.len()];
        // `entries` is in link order, so every row keeps insertion order.
        for &(ix, id) in entries {
            links[fill[ix]] = id;
            fill[ix] += 1;
        }
        Self { offsets, links }
    }

    fn row(&self, ix: usize) -> &[LinkId] {
        let start = self.offsets[ix];
        let end = self.offsets[ix + 1];
        &self.links[start..end]
    }
}

#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    outgoing: Csr,
    incoming: Csr,
    directed_out: Csr,
    in_degree: Vec<usize>,
    out_degree: Vec<usize>,
    targeted: Vec<usize>,
}

impl AdjacencyIndex {
    pub fn build(net: &Network) -> Self {
        let Ok(index) = Self::index(net, || Ok::<(), Infallible>(()));
        index
    }

    /// [`AdjacencyIndex::build`], consulting the monitor while links are indexed.
    pub fn build_monitored(net: &Network, progress: &mut Progress<'_>) -> Result<Self> {
        let mut reporter = progress.reporter("adjacency", net.link_count());
        Self::index(net, || reporter.tick())
    }

    fn index<E>(
        net: &Network,
        mut tick: impl FnMut() -> std::result::Result<(), E>,
    ) -> std::result::Result<Self, E> {
        let n = net.node_count();
        let mut outgoing: Vec<(usize, LinkId)> = Vec::new();
        let mut incoming: Vec<(usize, LinkId)> = Vec::new();
        let mut directed_out: Vec<(usize, LinkId)> = Vec::new();
        let mut in_degree = vec![0usize; n];
        let mut out_degree = vec![0usize; n];
        let mut targeted = vec![0usize; n];

        for (i, link) in net.links().iter().enumerate() {
            tick()?;
            if link.shadow {
                continue;
            }
            let id = LinkId(i);
            let (v, w) = net.ends(id);
            out_degree[v] += 1;
            in_degree[w] += 1;
            outgoing.push((v, id));
            incoming.push((w, id));
            if v == w {
                continue;
            }
            targeted[w] += 1;
            if link.directed {
                directed_out.push((v, id));
            } else {
                // An undirected link is traversable from either endpoint.
                outgoing.push((w, id));
                incoming.push((v, id));
            }
        }

        outgoing.sort_by_key(|&(ix, id)| (ix, id));
        incoming.sort_by_key(|&(ix, id)| (ix, id));

        Ok(Self {
            outgoing: Csr::build(n, &outgoing),
            incoming: Csr::build(n, &incoming),
            directed_out: Csr::build(n, &directed_out),
            in_degree,
            out_degree,
            targeted,
        })
    }

    pub fn node_count(&self) -> usize {
        self.in_degree.len()
    }

    /// Links traversable away from `ix`: directed links it sources plus every undirected link
    /// it touches.
    pub fn outgoing(&self, ix: usize) -> &[LinkId] {
        self.outgoing.row(ix)
    }

    /// Links traversable into `ix`: directed links it targets plus every undirected link it
    /// touches.
    pub fn incoming(&self, ix: usize) -> &[LinkId] {
        self.incoming.row(ix)
    }

    /// Directed, non-feedback links leaving `ix`.
    pub fn directed_out(&self, ix: usize) -> &[LinkId] {
        self.directed_out.row(ix)
    }

    pub fn successors<'a>(&'a self, net: &'a Network, ix: usize) -> impl Iterator<Item = usize> + 'a {
        self.outgoing(ix).iter().map(move |&id| net.opposite(id, ix))
    }

    pub fn predecessors<'a>(
        &'a self,
        net: &'a Network,
        ix: usize,
    ) -> impl Iterator<Item = usize> + 'a {
        self.incoming(ix).iter().map(move |&id| net.opposite(id, ix))
    }

    /// Successors and predecessors, in that order. May repeat nodes.
    pub fn neighbors<'a>(&'a self, net: &'a Network, ix: usize) -> impl Iterator<Item = usize> + 'a {
        self.successors(net, ix).chain(self.predecessors(net, ix))
    }

    pub fn in_degree(&self, ix: usize) -> usize {
        self.in_degree[ix]
    }

    pub fn out_degree(&self, ix: usize) -> usize {
        self.out_degree[ix]
    }

    /// Incoming plus outgoing non-shadow links, by recorded link direction.
    pub fn degree(&self, ix: usize) -> usize {
        self.in_degree[ix] + self.out_degree[ix]
    }

    /// A root is a node no non-feedback link names as its target.
    pub fn is_root(&self, ix: usize) -> bool {
        self.targeted[ix] == 0
    }

    pub fn roots(&self) -> Vec<usize> {
        (0..self.node_count()).filter(|&ix| self.is_root(ix)).collect()
    }
}
