//! Column assignment in the two coordinate spaces.
//!
//! Every link owns one column in the shadow space, which covers shadow duplicates too. Real
//! (non-shadow) links additionally own a column in the non-shadow space. The only bridge
//! between the two spaces is [`ColumnAssignment::to_shadow`].

use crate::rows::Rows;
use serde::Serialize;
use weft_graphlib::{LinkId, Network, Progress, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Space {
    NonShadow,
    Shadow,
}

impl Space {
    pub const BOTH: [Space; 2] = [Space::NonShadow, Space::Shadow];
}

/// Inclusive column interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnRange {
    pub min: usize,
    pub max: usize,
}

impl ColumnRange {
    pub fn single(col: usize) -> Self {
        Self { min: col, max: col }
    }

    pub fn width(&self) -> usize {
        self.max - self.min + 1
    }

    pub fn contains(&self, col: usize) -> bool {
        self.min <= col && col <= self.max
    }

    fn include(&mut self, col: usize) {
        self.min = self.min.min(col);
        self.max = self.max.max(col);
    }
}

/// One coordinate space: the links in column order plus each node's column extent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpace {
    links: Vec<LinkId>,
    ranges: Vec<Option<ColumnRange>>,
}

impl ColumnSpace {
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn link_at(&self, col: usize) -> Option<LinkId> {
        self.links.get(col).copied()
    }

    pub fn links(&self) -> &[LinkId] {
        &self.links
    }

    /// The span of columns touching node `ix`, or `None` when no link in this space does.
    pub fn range(&self, ix: usize) -> Option<ColumnRange> {
        self.ranges.get(ix).copied().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnAssignment {
    shadow: ColumnSpace,
    non_shadow: ColumnSpace,
    #[serde(skip)]
    shadow_col: Vec<usize>,
    #[serde(skip)]
    non_shadow_col: Vec<Option<usize>>,
    // non-shadow column -> shadow column
    non_shadow_to_shadow: Vec<usize>,
    color_keys: Vec<usize>,
}

impl ColumnAssignment {
    /// Assigns columns in `ordered` order and computes every node's column ranges.
    ///
    /// `palette_size` only drives [`ColumnAssignment::color_key`].
    ///
    /// # Panics
    ///
    /// Panics if `ordered` is not a permutation of the network's links, if `rows` does not
    /// cover the network's nodes, or if `palette_size` is zero.
    pub fn assign(
        net: &Network,
        rows: &Rows,
        ordered: &[LinkId],
        palette_size: usize,
        progress: &mut Progress<'_>,
    ) -> Result<Self> {
        assert_eq!(
            rows.len(),
            net.node_count(),
            "rows must be assigned before columns"
        );
        assert!(palette_size > 0, "palette size must be positive");
        assert_eq!(
            ordered.len(),
            net.link_count(),
            "link order must cover every link"
        );

        let mut reporter = progress.reporter("columns", ordered.len() * 2);
        let mut shadow_col: Vec<Option<usize>> = vec![None; net.link_count()];
        let mut non_shadow_col: Vec<Option<usize>> = vec![None; net.link_count()];
        let mut non_shadow_links: Vec<LinkId> = Vec::new();
        let mut non_shadow_to_shadow: Vec<usize> = Vec::new();
        let mut color_keys: Vec<usize> = Vec::with_capacity(ordered.len());

        for (col, &id) in ordered.iter().enumerate() {
            reporter.tick()?;
            let slot = &mut shadow_col[id.0];
            assert!(slot.is_none(), "link {id} appears twice in the link order");
            *slot = Some(col);
            color_keys.push(col % palette_size);

            if !net.links()[id.0].shadow {
                non_shadow_col[id.0] = Some(non_shadow_links.len());
                non_shadow_links.push(id);
                non_shadow_to_shadow.push(col);
            }
        }
        // Every slot is filled: `ordered` has one entry per link and none repeats.
        let shadow_col: Vec<usize> = shadow_col.into_iter().flatten().collect();

        let mut shadow_ranges: Vec<Option<ColumnRange>> = vec![None; net.node_count()];
        let mut non_shadow_ranges: Vec<Option<ColumnRange>> = vec![None; net.node_count()];
        for id in net.link_ids() {
            reporter.tick()?;
            let (v, w) = net.ends(id);
            for ix in [v, w] {
                widen(&mut shadow_ranges[ix], shadow_col[id.0]);
                if let Some(col) = non_shadow_col[id.0] {
                    widen(&mut non_shadow_ranges[ix], col);
                }
            }
        }

        tracing::debug!(
            shadow = ordered.len(),
            non_shadow = non_shadow_links.len(),
            "columns assigned"
        );

        Ok(Self {
            shadow: ColumnSpace {
                links: ordered.to_vec(),
                ranges: shadow_ranges,
            },
            non_shadow: ColumnSpace {
                links: non_shadow_links,
                ranges: non_shadow_ranges,
            },
            shadow_col,
            non_shadow_col,
            non_shadow_to_shadow,
            color_keys,
        })
    }

    pub fn space(&self, space: Space) -> &ColumnSpace {
        match space {
            Space::NonShadow => &self.non_shadow,
            Space::Shadow => &self.shadow,
        }
    }

    pub fn shadow_column(&self, id: LinkId) -> usize {
        self.shadow_col[id.0]
    }

    /// # Panics
    ///
    /// Panics if `id` is a shadow link: shadow links have no non-shadow column.
    pub fn non_shadow_column(&self, id: LinkId) -> usize {
        match self.non_shadow_col[id.0] {
            Some(col) => col,
            None => panic!("link {id} is a shadow link and has no non-shadow column"),
        }
    }

    /// Column of `id` in `space`, or `None` for a shadow link in the non-shadow space.
    pub fn column(&self, space: Space, id: LinkId) -> Option<usize> {
        match space {
            Space::NonShadow => self.non_shadow_col.get(id.0).copied().flatten(),
            Space::Shadow => self.shadow_col.get(id.0).copied(),
        }
    }

    /// Maps a non-shadow column to the shadow column owned by the same link.
    pub fn to_shadow(&self, non_shadow_col: usize) -> Option<usize> {
        self.non_shadow_to_shadow.get(non_shadow_col).copied()
    }

    pub fn range(&self, space: Space, ix: usize) -> Option<ColumnRange> {
        self.space(space).range(ix)
    }

    /// Palette index for a shadow column.
    pub fn color_key(&self, shadow_col: usize) -> Option<usize> {
        self.color_keys.get(shadow_col).copied()
    }
}

fn widen(range: &mut Option<ColumnRange>, col: usize) {
    match range {
        Some(range) => range.include(col),
        None => *range = Some(ColumnRange::single(col)),
    }
}
