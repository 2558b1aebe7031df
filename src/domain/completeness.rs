use std::collections::VecDeque;

use tracing::{instrument, trace};

use crate::domain::tree::BinaryTree;

impl<E> BinaryTree<E> {
    /// Whether every level is full except possibly the last, which is filled
    /// left to right. An empty tree is not complete.
    ///
    /// Breadth-first scan: after the first node missing a right child, every
    /// node that follows must be a leaf; a right child without a left sibling
    /// fails immediately.
    #[instrument(level = "debug", skip(self))]
    pub fn is_complete(&self) -> bool {
        let Some(root) = self.root() else {
            return false;
        };

        let mut queue = VecDeque::new();
        queue.push_back(root);
        let mut only_leaf = false;

        while let Some(id) = queue.pop_front() {
            let Some(node) = self.get_node(id) else {
                continue;
            };
            if only_leaf && !node.is_leaf() {
                trace!("non-leaf {} after the first gap", id);
                return false;
            }

            if let Some(left) = node.left {
                queue.push_back(left);
            } else if node.right.is_some() {
                trace!("{} has a right child but no left child", id);
                return false;
            }

            if let Some(right) = node.right {
                queue.push_back(right);
            } else {
                only_leaf = true;
            }
        }
        true
    }
}
