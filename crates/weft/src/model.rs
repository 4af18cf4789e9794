//! The layout result handed to rendering and export.
//!
//! A [`LayoutModel`] is plain, read-only data: row and column bijections, per-node column
//! ranges, and drain zones for both column spaces. Index-based accessors mirror the algorithms;
//! the id-based ones are what downstream consumers usually want.

use crate::columns::{ColumnAssignment, ColumnRange, Space};
use crate::drain::DrainZones;
use crate::rows::Rows;
use serde::Serialize;
use weft_graphlib::{LinkId, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutModel {
    node_ids: Vec<NodeId>,
    rows: Rows,
    columns: ColumnAssignment,
    non_shadow_zones: DrainZones,
    shadow_zones: DrainZones,
    #[serde(skip)]
    ix_of: rustc_hash::FxHashMap<NodeId, usize>,
}

impl LayoutModel {
    pub(crate) fn new(
        node_ids: Vec<NodeId>,
        rows: Rows,
        columns: ColumnAssignment,
        non_shadow_zones: DrainZones,
        shadow_zones: DrainZones,
    ) -> Self {
        let ix_of = node_ids
            .iter()
            .enumerate()
            .map(|(ix, &id)| (id, ix))
            .collect();
        Self {
            node_ids,
            rows,
            columns,
            non_shadow_zones,
            shadow_zones,
            ix_of,
        }
    }

    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &Rows {
        &self.rows
    }

    pub fn columns(&self) -> &ColumnAssignment {
        &self.columns
    }

    pub fn drain_zones(&self, space: Space) -> &DrainZones {
        match space {
            Space::NonShadow => &self.non_shadow_zones,
            Space::Shadow => &self.shadow_zones,
        }
    }

    pub fn row(&self, id: NodeId) -> Option<usize> {
        self.ix_of.get(&id).map(|&ix| self.rows.row(ix))
    }

    pub fn node_at_row(&self, row: usize) -> Option<NodeId> {
        self.rows.node_at(row).map(|ix| self.node_ids[ix])
    }

    /// Node ids in row order.
    pub fn node_order(&self) -> Vec<NodeId> {
        self.rows
            .order()
            .iter()
            .map(|&ix| self.node_ids[ix])
            .collect()
    }

    /// Link ids in column order for `space`.
    pub fn link_order(&self, space: Space) -> &[LinkId] {
        self.columns.space(space).links()
    }

    pub fn column(&self, space: Space, link: LinkId) -> Option<usize> {
        self.columns.column(space, link)
    }

    pub fn column_range(&self, id: NodeId, space: Space) -> Option<ColumnRange> {
        let ix = *self.ix_of.get(&id)?;
        self.columns.range(space, ix)
    }

    pub fn node_zones(&self, id: NodeId, space: Space) -> &[ColumnRange] {
        match self.ix_of.get(&id) {
            Some(&ix) => self.drain_zones(space).zones(ix),
            None => &[],
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
