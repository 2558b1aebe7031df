//! Read-only introspection surface and the structural printer built on it.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

use crate::domain::node::NodeId;
use crate::domain::tree::BinaryTree;

/// What a structural printer needs from a binary tree, and nothing more.
pub trait TreeInfo {
    type Node: Copy;

    fn info_root(&self) -> Option<Self::Node>;
    fn info_left(&self, node: Self::Node) -> Option<Self::Node>;
    fn info_right(&self, node: Self::Node) -> Option<Self::Node>;
    fn info_label(&self, node: Self::Node) -> String;
}

impl<E: Display> TreeInfo for BinaryTree<E> {
    type Node = NodeId;

    fn info_root(&self) -> Option<NodeId> {
        self.root()
    }

    fn info_left(&self, node: NodeId) -> Option<NodeId> {
        self.left(node)
    }

    fn info_right(&self, node: NodeId) -> Option<NodeId> {
        self.right(node)
    }

    fn info_label(&self, node: NodeId) -> String {
        self.element(node).map(ToString::to_string).unwrap_or_default()
    }
}

/// Rendering knobs, also the `[render]` section of the settings file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// Shown instead of a tree when there is no root
    pub empty_label: String,
    /// Placeholder for the absent side of a node with exactly one child
    pub missing_child: String,
    /// Whether to print the placeholder at all
    pub show_missing: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            empty_label: "Empty tree".into(),
            missing_child: "·".into(),
            show_missing: true,
        }
    }
}

pub trait TreeRender {
    fn to_tree_string(&self, options: &RenderOptions) -> Tree<String>;
}

impl<T: TreeInfo> TreeRender for T {
    #[instrument(level = "debug", skip_all)]
    fn to_tree_string(&self, options: &RenderOptions) -> Tree<String> {
        match self.info_root() {
            Some(root) => build_tree(self, root, options),
            None => Tree::new(options.empty_label.clone()),
        }
    }
}

fn build_tree<T: TreeInfo + ?Sized>(
    info: &T,
    node: T::Node,
    options: &RenderOptions,
) -> Tree<String> {
    let mut tree = Tree::new(info.info_label(node));
    let children = [info.info_left(node), info.info_right(node)];
    if children.iter().all(Option::is_none) {
        return tree;
    }
    for child in children {
        match child {
            Some(child) => {
                tree.push(build_tree(info, child, options));
            }
            None if options.show_missing => {
                tree.push(Tree::new(options.missing_child.clone()));
            }
            None => {}
        }
    }
    tree
}
