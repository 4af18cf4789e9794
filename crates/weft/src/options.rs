//! Layout configuration.

use crate::error::{Error, Result};
use crate::order::{
    BreadthOrder, DegreeOrder, DepthOrder, LevelOrder, NodeOrder, PassthroughOrder,
    SourcedGrayOrder, SourcedOrder,
};
use serde::{Deserialize, Serialize};
use weft_graphlib::NodeId;
use weft_graphlib::monitor::DEFAULT_INTERVAL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeOrderKind {
    #[default]
    Default,
    Degree,
    Sourced,
    SourcedGray,
    Level,
    Depth,
    Passthrough,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutOptions {
    pub node_order: NodeOrderKind,
    /// Ordered source nodes for the sourced orders.
    pub sources: Vec<NodeId>,
    /// Explicit node order for `passthrough`.
    pub nodes: Vec<NodeId>,
    pub contract_levels: bool,
    pub palette_size: usize,
    pub progress_interval: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            node_order: NodeOrderKind::Default,
            sources: Vec::new(),
            nodes: Vec::new(),
            contract_levels: true,
            palette_size: 32,
            progress_interval: DEFAULT_INTERVAL,
        }
    }
}

impl LayoutOptions {
    pub fn from_json(text: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(text).map_err(|e| Error::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette_size == 0 {
            return Err(Error::InvalidOptions(
                "paletteSize must be positive".to_string(),
            ));
        }
        if self.progress_interval == 0 {
            return Err(Error::InvalidOptions(
                "progressInterval must be positive".to_string(),
            ));
        }
        let needs_sources = matches!(
            self.node_order,
            NodeOrderKind::Sourced | NodeOrderKind::SourcedGray
        );
        if needs_sources && self.sources.is_empty() {
            return Err(Error::InvalidOptions(
                "sourced node orders need at least one source".to_string(),
            ));
        }
        Ok(())
    }

    pub fn strategy(&self) -> Box<dyn NodeOrder> {
        match self.node_order {
            NodeOrderKind::Default => Box::new(BreadthOrder),
            NodeOrderKind::Degree => Box::new(DegreeOrder),
            NodeOrderKind::Sourced => Box::new(SourcedOrder::new(self.sources.clone())),
            NodeOrderKind::SourcedGray => Box::new(SourcedGrayOrder::new(self.sources.clone())),
            NodeOrderKind::Level => Box::new(LevelOrder {
                contract: self.contract_levels,
            }),
            NodeOrderKind::Depth => Box::new(DepthOrder::default()),
            NodeOrderKind::Passthrough => Box::new(PassthroughOrder::new(self.nodes.clone())),
        }
    }
}
