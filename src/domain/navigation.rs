//! In-order adjacency by tree position only; elements are never compared.

use tracing::instrument;

use crate::domain::node::NodeId;
use crate::domain::tree::BinaryTree;

impl<E> BinaryTree<E> {
    /// The node visited immediately before `node` in an inorder traversal.
    ///
    /// Accepts `None` (and stale handles) and answers `None`, so calls chain:
    /// `tree.successor(tree.predecessor(id))`.
    #[instrument(level = "trace", skip(self, node))]
    pub fn predecessor(&self, node: impl Into<Option<NodeId>>) -> Option<NodeId> {
        let node: Option<NodeId> = node.into();
        let mut node = node.filter(|&id| self.contains_node(id))?;

        if let Some(mut p) = self.left(node) {
            while let Some(right) = self.right(p) {
                p = right;
            }
            return Some(p);
        }

        while self.is_left_child(node) {
            node = self.parent(node)?;
        }
        self.parent(node)
    }

    /// The node visited immediately after `node` in an inorder traversal.
    #[instrument(level = "trace", skip(self, node))]
    pub fn successor(&self, node: impl Into<Option<NodeId>>) -> Option<NodeId> {
        let node: Option<NodeId> = node.into();
        let mut node = node.filter(|&id| self.contains_node(id))?;

        if let Some(mut p) = self.right(node) {
            while let Some(left) = self.left(p) {
                p = left;
            }
            return Some(p);
        }

        while self.is_right_child(node) {
            node = self.parent(node)?;
        }
        self.parent(node)
    }

    /// Leftmost node of the tree, first in inorder.
    pub fn first(&self) -> Option<NodeId> {
        let mut node = self.root()?;
        while let Some(left) = self.left(node) {
            node = left;
        }
        Some(node)
    }

    /// Rightmost node of the tree, last in inorder.
    pub fn last(&self) -> Option<NodeId> {
        let mut node = self.root()?;
        while let Some(right) = self.right(node) {
            node = right;
        }
        Some(node)
    }
}
