//! Link records.
//!
//! Links carry a relation label, a directed flag and a shadow flag. A shadow link is the
//! auxiliary duplicate of an undirected link that is drawn in the drain zone of its bottom node.

use super::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(pub usize);

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub source: NodeId,
    pub target: NodeId,
    pub relation: String,
    pub directed: bool,
    #[serde(default)]
    pub shadow: bool,
}

impl Link {
    pub fn new(source: NodeId, target: NodeId, relation: impl Into<String>, directed: bool) -> Self {
        Self {
            source,
            target,
            relation: relation.into(),
            directed,
            shadow: false,
        }
    }

    pub fn directed(source: u64, target: u64, relation: impl Into<String>) -> Self {
        Self::new(NodeId(source), NodeId(target), relation, true)
    }

    pub fn undirected(source: u64, target: u64, relation: impl Into<String>) -> Self {
        Self::new(NodeId(source), NodeId(target), relation, false)
    }

    pub fn is_feedback(&self) -> bool {
        self.source == self.target
    }

    pub fn shadow_of(&self) -> Self {
        Self {
            shadow: true,
            ..self.clone()
        }
    }

    /// Whether `other` is this link's shadow duplicate, or the real link this shadow mirrors.
    pub fn is_shadow_pair(&self, other: &Link) -> bool {
        self.shadow != other.shadow
            && self.source == other.source
            && self.target == other.target
            && self.relation == other.relation
            && self.directed == other.directed
    }
}
