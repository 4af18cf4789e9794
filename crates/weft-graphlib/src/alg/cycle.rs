//! Three-colour cycle detection over directed links.
//!
//! Undirected links, shadow links and feedback (self) links are ignored: only directed links
//! between distinct nodes constrain a leveling.

use crate::error::Result;
use crate::monitor::Progress;
use crate::network::{AdjacencyIndex, Network};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Grey,
    Black,
}

pub fn has_cycle(net: &Network, adj: &AdjacencyIndex, progress: &mut Progress<'_>) -> Result<bool> {
    Ok(find_cycle(net, adj, progress)?.is_some())
}

/// Returns the node indexes along the first cycle found, in link direction.
///
/// Roots of the search are taken in node insertion order. Every node is coloured black at most
/// once and never re-entered afterwards.
pub fn find_cycle(
    net: &Network,
    adj: &AdjacencyIndex,
    progress: &mut Progress<'_>,
) -> Result<Option<Vec<usize>>> {
    let n = net.node_count();
    let mut color = vec![Color::White; n];
    let mut reporter = progress.reporter("cycle", n + net.link_count());

    // (node, position of the next link to follow)
    let mut stack: Vec<(usize, usize)> = Vec::new();
    for start in 0..n {
        if color[start] != Color::White {
            continue;
        }
        color[start] = Color::Grey;
        stack.push((start, 0));

        while let Some(top) = stack.last_mut() {
            reporter.tick()?;
            let (v, next) = *top;
            let out = adj.directed_out(v);
            if next == out.len() {
                color[v] = Color::Black;
                stack.pop();
                continue;
            }
            top.1 += 1;

            let w = net.opposite(out[next], v);
            match color[w] {
                Color::Grey => {
                    let from = stack.iter().position(|&(u, _)| u == w).unwrap_or(0);
                    let cycle: Vec<usize> = stack[from..].iter().map(|&(u, _)| u).collect();
                    tracing::trace!(len = cycle.len(), "cycle found");
                    return Ok(Some(cycle));
                }
                Color::White => {
                    color[w] = Color::Grey;
                    stack.push((w, 0));
                }
                Color::Black => {}
            }
        }
    }

    debug_assert!(color.iter().all(|&c| c == Color::Black));
    Ok(None)
}
