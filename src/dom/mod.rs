//! DOM arena: slotmap-backed element tree with class, id and attribute queries.

pub mod node;
pub mod query;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use query::Selector;
pub use tree::Dom;
