//! End-to-end layout: node order, rows, link order, columns, drain zones.

use crate::columns::{ColumnAssignment, Space};
use crate::drain::{largest_run_drain_zones, scan_drain_zones};
use crate::error::Result;
use crate::links::{default_link_order, manual_link_order};
use crate::model::LayoutModel;
use crate::options::LayoutOptions;
use crate::order::{NodeOrder, OrderContext};
use crate::rows::Rows;
use weft_graphlib::{AdjacencyIndex, Link, Monitor, Network, Progress};

pub fn layout(
    net: &Network,
    options: &LayoutOptions,
    monitor: &mut dyn Monitor,
) -> Result<LayoutModel> {
    options.validate()?;
    let strategy = options.strategy();
    let mut progress = Progress::new(monitor).with_interval(options.progress_interval);
    layout_with(net, strategy.as_ref(), None, options.palette_size, &mut progress)
}

/// Like [`layout`], but with columns taken from a caller-supplied link sequence. Drain zones
/// then use the largest-run fallback.
pub fn layout_with_column_order(
    net: &Network,
    options: &LayoutOptions,
    columns: &[Link],
    monitor: &mut dyn Monitor,
) -> Result<LayoutModel> {
    options.validate()?;
    let strategy = options.strategy();
    let mut progress = Progress::new(monitor).with_interval(options.progress_interval);
    layout_with(
        net,
        strategy.as_ref(),
        Some(columns),
        options.palette_size,
        &mut progress,
    )
}

/// # Panics
///
/// Panics if `strategy` returns something other than a permutation of the network's nodes,
/// or if `palette_size` is zero.
pub fn layout_with(
    net: &Network,
    strategy: &dyn NodeOrder,
    columns: Option<&[Link]>,
    palette_size: usize,
    progress: &mut Progress<'_>,
) -> Result<LayoutModel> {
    progress.check("layout")?;
    let adj = AdjacencyIndex::build_monitored(net, progress)?;

    let order = strategy.order(
        net,
        &mut OrderContext {
            adj: &adj,
            progress: &mut *progress,
        },
    )?;
    let rows = Rows::from_order(net.node_count(), order);
    tracing::debug!(
        strategy = strategy.name(),
        nodes = rows.len(),
        "rows assigned"
    );

    let (link_order, manual) = match columns {
        Some(columns) => (manual_link_order(net, columns, progress)?, true),
        None => (default_link_order(net, &rows, progress)?, false),
    };

    let assignment = ColumnAssignment::assign(net, &rows, &link_order, palette_size, progress)?;

    let (non_shadow_zones, shadow_zones) = if manual {
        (
            largest_run_drain_zones(net, &rows, &assignment, Space::NonShadow, progress)?,
            largest_run_drain_zones(net, &rows, &assignment, Space::Shadow, progress)?,
        )
    } else {
        (
            scan_drain_zones(net, &rows, &assignment, Space::NonShadow, progress)?,
            scan_drain_zones(net, &rows, &assignment, Space::Shadow, progress)?,
        )
    };
    tracing::debug!(
        manual,
        non_shadow = non_shadow_zones.zone_count(),
        shadow = shadow_zones.zone_count(),
        "drain zones computed"
    );

    Ok(LayoutModel::new(
        net.nodes().iter().map(|node| node.id).collect(),
        rows,
        assignment,
        non_shadow_zones,
        shadow_zones,
    ))
}
