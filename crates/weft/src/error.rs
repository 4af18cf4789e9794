use weft_graphlib::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] weft_graphlib::Error),
    #[error("invalid node order: {0}")]
    InvalidNodeOrder(String),
    #[error("invalid column order: {0}")]
    InvalidColumnOrder(String),
    #[error("network has a directed cycle through {0:?}")]
    CyclicNetwork(Vec<NodeId>),
    #[error("leveling left {} nodes in an unresolved cycle", .0.len())]
    UnresolvedCycle(Vec<NodeId>),
    #[error("invalid layout options: {0}")]
    InvalidOptions(String),
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Graph(e) if e.is_cancelled())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
