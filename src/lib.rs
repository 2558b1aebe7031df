//! Traversal-oriented binary tree foundation.
//!
//! [`domain::BinaryTree`] keeps node linkage (parent/left/right) in a
//! generational arena and provides the capabilities every tree variant shares:
//! relationship queries, height, completeness, in-order navigation and the
//! four traversal orders. [`domain::SearchTree`] is a variant built on it by
//! composition. The `cli` and `config` modules back the `bintree` binary.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
