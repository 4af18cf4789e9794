//! Topological leveling by iterative root stripping, plus downstream contraction.
//!
//! Only directed, non-feedback, non-shadow links take part. When the working graph still has
//! nodes but no roots, the leftover nodes sit on (or behind) a cycle; they are reported as a
//! remainder instead of being dropped.

use crate::error::Result;
use crate::monitor::Progress;
use crate::network::{AdjacencyIndex, Network};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Levels {
    by_ix: Vec<Option<usize>>,
}

impl Levels {
    pub fn get(&self, ix: usize) -> Option<usize> {
        self.by_ix.get(ix).copied().flatten()
    }

    pub fn max_level(&self) -> Option<usize> {
        self.by_ix.iter().flatten().copied().max()
    }

    pub fn leveled_count(&self) -> usize {
        self.by_ix.iter().flatten().count()
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.by_ix
    }

    /// Leveled node indexes grouped per level, each group in index order.
    pub fn layers(&self) -> Vec<Vec<usize>> {
        let mut layers: Vec<Vec<usize>> = vec![Vec::new(); self.max_level().map_or(0, |m| m + 1)];
        for (ix, level) in self.by_ix.iter().enumerate() {
            if let Some(level) = level {
                layers[*level].push(ix);
            }
        }
        layers
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leveling {
    Complete(Levels),
    /// Root stripping stalled; `remainder` lists the unleveled node indexes.
    Partial { levels: Levels, remainder: Vec<usize> },
}

impl Leveling {
    pub fn levels(&self) -> &Levels {
        match self {
            Leveling::Complete(levels) => levels,
            Leveling::Partial { levels, .. } => levels,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Leveling::Complete(_))
    }

    pub fn remainder(&self) -> &[usize] {
        match self {
            Leveling::Complete(_) => &[],
            Leveling::Partial { remainder, .. } => remainder,
        }
    }

    pub fn into_levels(self) -> Levels {
        match self {
            Leveling::Complete(levels) => levels,
            Leveling::Partial { levels, .. } => levels,
        }
    }
}

pub fn level(net: &Network, adj: &AdjacencyIndex, progress: &mut Progress<'_>) -> Result<Leveling> {
    let n = net.node_count();
    let mut reporter = progress.reporter("level", n + net.link_count());

    let mut pending_in = vec![0usize; n];
    for v in 0..n {
        for &id in adj.directed_out(v) {
            pending_in[net.opposite(id, v)] += 1;
        }
    }

    let mut by_ix: Vec<Option<usize>> = vec![None; n];
    let mut roots: Vec<usize> = (0..n).filter(|&ix| pending_in[ix] == 0).collect();
    let mut assigned = 0usize;
    let mut current = 0usize;

    while !roots.is_empty() {
        let mut next: Vec<usize> = Vec::new();
        for &v in &roots {
            reporter.tick()?;
            by_ix[v] = Some(current);
            assigned += 1;
            for &id in adj.directed_out(v) {
                reporter.tick()?;
                let w = net.opposite(id, v);
                pending_in[w] -= 1;
                if pending_in[w] == 0 {
                    next.push(w);
                }
            }
        }
        next.sort_unstable();
        roots = next;
        current += 1;
    }

    let levels = Levels { by_ix };
    if assigned == n {
        tracing::debug!(nodes = n, levels = current, "leveling complete");
        return Ok(Leveling::Complete(levels));
    }

    let remainder: Vec<usize> = (0..n).filter(|&ix| levels.get(ix).is_none()).collect();
    tracing::debug!(
        nodes = n,
        unresolved = remainder.len(),
        "leveling stalled on a cycle"
    );
    Ok(Leveling::Partial { levels, remainder })
}

/// Pushes nodes as far downstream as their successors allow, until nothing moves.
///
/// Levels are processed from highest to lowest on every pass. A node whose lowest successor
/// level is more than one above its own moves to one below that successor. Unleveled nodes are
/// ignored, and the maximum level never grows.
pub fn contract(
    net: &Network,
    adj: &AdjacencyIndex,
    levels: &Levels,
    progress: &mut Progress<'_>,
) -> Result<Levels> {
    let mut by_ix = levels.by_ix.clone();
    let mut order: Vec<usize> = (0..by_ix.len()).filter(|&ix| by_ix[ix].is_some()).collect();
    let mut reporter = progress.reporter("contract", order.len());
    let mut passes = 0usize;

    loop {
        passes += 1;
        order.sort_by(|&a, &b| by_ix[b].cmp(&by_ix[a]).then(a.cmp(&b)));

        let mut moved = false;
        for &v in &order {
            reporter.tick()?;
            let Some(current) = by_ix[v] else {
                continue;
            };
            let lowest = adj
                .directed_out(v)
                .iter()
                .filter_map(|&id| by_ix[net.opposite(id, v)])
                .min();
            if let Some(lowest) = lowest {
                if lowest > current + 1 {
                    by_ix[v] = Some(lowest - 1);
                    moved = true;
                }
            }
        }

        if !moved {
            break;
        }
    }

    tracing::trace!(passes, "contraction reached its fixpoint");
    Ok(Levels { by_ix })
}
