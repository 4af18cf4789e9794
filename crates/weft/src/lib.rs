#![forbid(unsafe_code)]

//! Grid layouts for matrix-style network views.
//!
//! Every node gets a row, every link a column, and every node one or more drain zones: the
//! column runs where it terminates its links. Columns exist in two spaces, one with and one
//! without the shadow duplicates of undirected links.
//!
//! The entry point is [`layout`]; the individual stages are public for callers that need to
//! drive them separately.

pub use weft_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod columns;
pub mod drain;
pub mod error;
pub mod links;
pub mod model;
pub mod options;
pub mod order;
pub mod pipeline;
pub mod rows;
pub mod submodel;

pub use columns::{ColumnAssignment, ColumnRange, ColumnSpace, Space};
pub use drain::{DrainZone, DrainZones};
pub use error::{Error, Result};
pub use model::LayoutModel;
pub use options::{LayoutOptions, NodeOrderKind};
pub use pipeline::{layout, layout_with, layout_with_column_order};
pub use rows::Rows;
pub use submodel::{Selection, SubModel, extract_submodel};
