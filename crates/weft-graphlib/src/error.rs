use crate::network::{LinkId, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The caller's monitor asked the computation to stop. Not a failure.
    #[error("computation cancelled by the caller")]
    Cancelled,
    #[error("link {link} references unknown node {node}")]
    MissingEndpoint { link: usize, node: NodeId },
    #[error("duplicate node id {0}")]
    DuplicateNode(NodeId),
    #[error("unknown node id {0}")]
    UnknownNode(NodeId),
    #[error("unknown link id {0}")]
    UnknownLink(LinkId),
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
