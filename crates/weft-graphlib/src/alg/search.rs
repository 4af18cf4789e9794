//! Breadth- and depth-first searches producing `(depth, node)` visit sequences.
//!
//! A [`Search`] is configured with a sibling order: either the adjacency index's native link
//! order, or an explicit link list whose positions decide the order successors are visited
//! in. The explicit mode cannot be combined with the degree-ordered breadth variants.

use crate::error::Result;
use crate::monitor::Progress;
use crate::network::{AdjacencyIndex, LinkId, Network};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Visit {
    pub depth: usize,
    pub node: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Follow {
    /// Traverse links away from a node only (undirected links go both ways).
    #[default]
    Forward,
    /// Traverse links regardless of direction.
    Either,
}

#[derive(Debug, Clone, Copy)]
pub enum Seeds<'a> {
    Nodes(&'a [usize]),
    Roots,
    ByDegree,
}

pub struct BreadthOptions<'a> {
    pub seeds: Seeds<'a>,
    pub follow: Follow,
    /// Expand neighbours by descending combined degree instead of link order.
    pub degree_ordered: bool,
    /// Visited nodes for which this returns `true` are recorded but not expanded.
    pub stop: Option<&'a dyn Fn(usize, usize) -> bool>,
}

impl Default for BreadthOptions<'_> {
    fn default() -> Self {
        Self {
            seeds: Seeds::Roots,
            follow: Follow::Forward,
            degree_ordered: false,
            stop: None,
        }
    }
}

pub struct Search<'a> {
    net: &'a Network,
    adj: &'a AdjacencyIndex,
    // Position of each link in the explicit sibling order, `usize::MAX` when absent.
    link_rank: Option<Vec<usize>>,
    natural_rank: Vec<usize>,
}

impl<'a> Search<'a> {
    pub fn new(net: &'a Network, adj: &'a AdjacencyIndex) -> Self {
        Self {
            net,
            adj,
            link_rank: None,
            natural_rank: net.natural_rank(),
        }
    }

    /// Visits successors in the order their links appear in `siblings`. Links missing from
    /// the list follow in native order.
    pub fn with_sibling_order(
        net: &'a Network,
        adj: &'a AdjacencyIndex,
        siblings: &[LinkId],
    ) -> Self {
        let mut rank = vec![usize::MAX; net.link_count()];
        for (pos, id) in siblings.iter().enumerate() {
            if let Some(slot) = rank.get_mut(id.0) {
                if *slot == usize::MAX {
                    *slot = pos;
                }
            }
        }
        Self {
            link_rank: Some(rank),
            ..Self::new(net, adj)
        }
    }

    pub fn has_sibling_order(&self) -> bool {
        self.link_rank.is_some()
    }

    /// Combined degree descending, natural order ascending.
    pub fn by_degree(&self) -> Vec<usize> {
        let mut ixs: Vec<usize> = (0..self.net.node_count()).collect();
        self.sort_by_degree(&mut ixs);
        ixs
    }

    fn sort_by_degree(&self, ixs: &mut [usize]) {
        ixs.sort_by(|&a, &b| {
            self.adj
                .degree(b)
                .cmp(&self.adj.degree(a))
                .then(self.natural_rank[a].cmp(&self.natural_rank[b]))
        });
    }

    fn expansion(&self, v: usize, follow: Follow, degree_ordered: bool) -> Vec<usize> {
        let mut links: Vec<LinkId> = match follow {
            Follow::Forward => self.adj.outgoing(v).to_vec(),
            Follow::Either => {
                let mut both = self.adj.outgoing(v).to_vec();
                both.extend_from_slice(self.adj.incoming(v));
                both
            }
        };
        if let Some(rank) = &self.link_rank {
            links.sort_by_key(|id| rank[id.0]);
        }

        let mut seen: FxHashSet<usize> = FxHashSet::default();
        let mut next: Vec<usize> = Vec::with_capacity(links.len());
        for id in links {
            let w = self.net.opposite(id, v);
            if seen.insert(w) {
                next.push(w);
            }
        }
        if degree_ordered {
            self.sort_by_degree(&mut next);
        }
        next
    }

    /// Depth-first search from every root, in `roots` order when given, otherwise in natural
    /// order. Nodes no root reaches are searched afterwards in natural order, so every node is
    /// visited exactly once.
    ///
    /// # Panics
    ///
    /// Panics if `roots` holds a node index outside the network.
    pub fn depth_search(
        &self,
        roots: Option<&[usize]>,
        progress: &mut Progress<'_>,
    ) -> Result<Vec<Visit>> {
        let n = self.net.node_count();
        let mut reporter = progress.reporter("depth_search", n);
        let mut visited = vec![false; n];
        let mut out: Vec<Visit> = Vec::with_capacity(n);

        let mut starts: Vec<usize> = match roots {
            Some(roots) => {
                assert_in_range(roots, n);
                roots.to_vec()
            }
            None => self
                .net
                .natural_order()
                .into_iter()
                .filter(|&ix| self.adj.is_root(ix))
                .collect(),
        };
        starts.extend(self.net.natural_order());

        // (depth, successors, next position)
        let mut stack: Vec<(usize, Vec<usize>, usize)> = Vec::new();
        for start in starts {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            out.push(Visit {
                depth: 0,
                node: start,
            });
            reporter.tick()?;
            stack.push((0, self.expansion(start, Follow::Forward, false), 0));

            while let Some((depth, succ, pos)) = stack.last_mut() {
                let Some(&w) = succ.get(*pos) else {
                    stack.pop();
                    continue;
                };
                *pos += 1;
                if visited[w] {
                    continue;
                }
                let depth = *depth + 1;
                visited[w] = true;
                out.push(Visit { depth, node: w });
                reporter.tick()?;
                stack.push((depth, self.expansion(w, Follow::Forward, false), 0));
            }
        }

        Ok(out)
    }

    /// Breadth-first search. Each seed not reached by an earlier seed starts a new tree at
    /// depth zero; nodes appear once, at their first-visit depth.
    ///
    /// # Panics
    ///
    /// Panics when this search has an explicit sibling order and `options` asks for
    /// degree-based seeding or expansion, or when [`Seeds::Nodes`] holds a node index outside
    /// the network.
    pub fn breadth_search(
        &self,
        options: &BreadthOptions<'_>,
        progress: &mut Progress<'_>,
    ) -> Result<Vec<Visit>> {
        let degree_based = options.degree_ordered || matches!(options.seeds, Seeds::ByDegree);
        assert!(
            !(degree_based && self.has_sibling_order()),
            "degree-ordered breadth search cannot run on a search with an explicit sibling order"
        );

        let n = self.net.node_count();
        let seeds: Vec<usize> = match options.seeds {
            Seeds::Nodes(nodes) => {
                assert_in_range(nodes, n);
                nodes.to_vec()
            }
            Seeds::Roots => self
                .net
                .natural_order()
                .into_iter()
                .filter(|&ix| self.adj.is_root(ix))
                .collect(),
            Seeds::ByDegree => self.by_degree(),
        };

        let mut reporter = progress.reporter("breadth_search", n);
        let mut visited = vec![false; n];
        let mut out: Vec<Visit> = Vec::new();
        let mut queue: VecDeque<Visit> = VecDeque::new();

        for seed in seeds {
            if visited[seed] {
                continue;
            }
            visited[seed] = true;
            queue.push_back(Visit {
                depth: 0,
                node: seed,
            });

            while let Some(visit) = queue.pop_front() {
                reporter.tick()?;
                out.push(visit);
                if options.stop.is_some_and(|stop| stop(visit.node, visit.depth)) {
                    continue;
                }
                for w in self.expansion(visit.node, options.follow, options.degree_ordered) {
                    if visited[w] {
                        continue;
                    }
                    visited[w] = true;
                    queue.push_back(Visit {
                        depth: visit.depth + 1,
                        node: w,
                    });
                }
            }
        }

        Ok(out)
    }
}

fn assert_in_range(ixs: &[usize], node_count: usize) {
    if let Some(&ix) = ixs.iter().find(|&&ix| ix >= node_count) {
        panic!("start node index {ix} is outside a network of {node_count} nodes");
    }
}
