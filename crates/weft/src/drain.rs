//! Drain zones: the column runs in which a node terminates its links.
//!
//! In the non-shadow space a link drains into its top endpoint. In the shadow space real links
//! still drain into their top endpoint while shadow duplicates drain into their bottom one,
//! since duplicates are drawn on the opposite side.

use crate::columns::{ColumnAssignment, ColumnRange, Space};
use crate::rows::Rows;
use serde::Serialize;
use weft_graphlib::{LinkId, Network, Progress, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrainZone {
    pub node: usize,
    pub columns: ColumnRange,
    pub space: Space,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrainZones {
    space: Space,
    by_node: Vec<Vec<ColumnRange>>,
}

impl DrainZones {
    pub fn space(&self) -> Space {
        self.space
    }

    /// Zones of node `ix`, left to right.
    pub fn zones(&self, ix: usize) -> &[ColumnRange] {
        self.by_node.get(ix).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = DrainZone> + '_ {
        self.by_node.iter().enumerate().flat_map(move |(node, zones)| {
            zones.iter().map(move |&columns| DrainZone {
                node,
                columns,
                space: self.space,
            })
        })
    }

    pub fn zone_count(&self) -> usize {
        self.by_node.iter().map(Vec::len).sum()
    }
}

/// The node a link drains into for `space`.
pub fn defining_node(net: &Network, rows: &Rows, id: LinkId, space: Space) -> usize {
    let (top, bottom) = rows.top_bottom(net, id);
    match space {
        Space::Shadow if net.links()[id.0].shadow => bottom,
        _ => top,
    }
}

/// Single left-to-right scan: consecutive columns with the same defining node form one zone.
///
/// Meant for link orders produced by this crate, which keep each node's links contiguous.
pub fn scan_drain_zones(
    net: &Network,
    rows: &Rows,
    columns: &ColumnAssignment,
    space: Space,
    progress: &mut Progress<'_>,
) -> Result<DrainZones> {
    let links = columns.space(space).links();
    let mut reporter = progress.reporter("drain_zones", links.len());
    let mut by_node: Vec<Vec<ColumnRange>> = vec![Vec::new(); net.node_count()];

    // (defining node, first column of the open run)
    let mut run: Option<(usize, usize)> = None;
    for (col, &id) in links.iter().enumerate() {
        reporter.tick()?;
        let node = defining_node(net, rows, id, space);
        match run {
            Some((current, _)) if current == node => {}
            Some((current, start)) => {
                by_node[current].push(ColumnRange {
                    min: start,
                    max: col - 1,
                });
                run = Some((node, col));
            }
            None => run = Some((node, col)),
        }
    }
    if let Some((current, start)) = run {
        by_node[current].push(ColumnRange {
            min: start,
            max: links.len() - 1,
        });
    }

    Ok(DrainZones { space, by_node })
}

/// Fallback for arbitrary (manual) column orders: of all contiguous runs a node defines, only
/// the longest is kept, the leftmost one on ties. Shorter runs get no zone.
pub fn largest_run_drain_zones(
    net: &Network,
    rows: &Rows,
    columns: &ColumnAssignment,
    space: Space,
    progress: &mut Progress<'_>,
) -> Result<DrainZones> {
    let links = columns.space(space).links();
    let mut reporter = progress.reporter("drain_zones", links.len() + net.node_count());

    let mut cols_by_node: Vec<Vec<usize>> = vec![Vec::new(); net.node_count()];
    for (col, &id) in links.iter().enumerate() {
        reporter.tick()?;
        cols_by_node[defining_node(net, rows, id, space)].push(col);
    }

    let mut by_node: Vec<Vec<ColumnRange>> = vec![Vec::new(); net.node_count()];
    for (node, cols) in cols_by_node.iter().enumerate() {
        reporter.tick()?;
        let Some(&first) = cols.first() else {
            continue;
        };
        let mut best = ColumnRange::single(first);
        let mut current = best;
        for &col in &cols[1..] {
            if col == current.max + 1 {
                current.max = col;
            } else {
                current = ColumnRange::single(col);
            }
            if current.width() > best.width() {
                best = current;
            }
        }
        by_node[node].push(best);
    }

    Ok(DrainZones { space, by_node })
}
