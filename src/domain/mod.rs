//! Domain layer: the binary tree core and the variants built on it
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod completeness;
pub mod error;
pub mod navigation;
pub mod node;
pub mod printer;
pub mod queries;
pub mod search;
pub mod traversal;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use node::{NodeId, NodeRef, Side};
pub use printer::{RenderOptions, TreeInfo, TreeRender};
pub use search::SearchTree;
pub use traversal::{InorderIter, LevelOrderIter, PostorderIter, PreorderIter, TraversalOrder};
pub use tree::BinaryTree;
