//! Link sequencing: the order links are handed to column assignment.

use crate::error::{Error, Result};
use crate::rows::Rows;
use hashbrown::HashMap;
use rustc_hash::FxBuildHasher;
use std::cmp::{Ordering, Reverse};
use std::collections::VecDeque;
use weft_graphlib::{Link, LinkId, Network, Progress};

/// Orders links so every node's links form one contiguous block per column space.
///
/// Links are grouped by zone row: the top row for a real link, the bottom row for a shadow
/// link. Inside a zone, shadow links come first (nearest top node first), then real links by
/// ascending bottom row. Remaining ties go directed before undirected, then by relation, then
/// by link index.
pub fn default_link_order(
    net: &Network,
    rows: &Rows,
    progress: &mut Progress<'_>,
) -> Result<Vec<LinkId>> {
    let mut reporter = progress.reporter("link_order", net.link_count());
    let mut keyed: Vec<(usize, bool, usize, usize, LinkId)> = Vec::with_capacity(net.link_count());
    for id in net.link_ids() {
        reporter.tick()?;
        let (top, bottom) = rows.top_bottom(net, id);
        let (top, bottom) = (rows.row(top), rows.row(bottom));
        let shadow = net.links()[id.0].shadow;
        let (zone, other) = if shadow {
            (bottom, top)
        } else {
            (top, bottom)
        };
        keyed.push((zone, shadow, other, id.0, id));
    }

    keyed.sort_by(|a, b| {
        a.0.cmp(&b.0)
            // shadow links first
            .then_with(|| b.1.cmp(&a.1))
            .then_with(|| {
                if a.1 {
                    Reverse(a.2).cmp(&Reverse(b.2))
                } else {
                    a.2.cmp(&b.2)
                }
            })
            .then_with(|| compare_kind(&net.links()[a.3], &net.links()[b.3]))
            .then_with(|| a.3.cmp(&b.3))
    });

    Ok(keyed.into_iter().map(|k| k.4).collect())
}

fn compare_kind(a: &Link, b: &Link) -> Ordering {
    b.directed
        .cmp(&a.directed)
        .then_with(|| a.relation.cmp(&b.relation))
}

/// Resolves a caller-supplied column order (links listed by column) against the network.
///
/// Equal link records (parallel links) are matched to link ids in insertion order. Every link
/// of the network must appear exactly once.
pub fn manual_link_order(
    net: &Network,
    columns: &[Link],
    progress: &mut Progress<'_>,
) -> Result<Vec<LinkId>> {
    let mut reporter = progress.reporter("manual_link_order", net.link_count() + columns.len());
    let mut pending: HashMap<&Link, VecDeque<LinkId>, FxBuildHasher> = HashMap::default();
    for id in net.link_ids() {
        reporter.tick()?;
        pending.entry(&net.links()[id.0]).or_default().push_back(id);
    }

    let mut out: Vec<LinkId> = Vec::with_capacity(columns.len());
    for (col, link) in columns.iter().enumerate() {
        reporter.tick()?;
        let Some(ids) = pending.get_mut(link) else {
            return Err(Error::InvalidColumnOrder(format!(
                "column {col} references a link that is not in the network: {} -> {} ({})",
                link.source, link.target, link.relation
            )));
        };
        let Some(id) = ids.pop_front() else {
            return Err(Error::InvalidColumnOrder(format!(
                "column {col} repeats link {} -> {} ({})",
                link.source, link.target, link.relation
            )));
        };
        out.push(id);
    }

    if out.len() != net.link_count() {
        return Err(Error::InvalidColumnOrder(format!(
            "expected {} links, got {}",
            net.link_count(),
            out.len()
        )));
    }
    Ok(out)
}
