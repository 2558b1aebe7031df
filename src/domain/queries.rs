//! Structural queries: leaf/child-side classification, sibling/uncle
//! derivation and height.
//!
//! All queries are total. A stale or foreign handle is treated as absent.

use std::collections::VecDeque;

use tracing::instrument;

use crate::domain::node::NodeId;
use crate::domain::tree::BinaryTree;

impl<E> BinaryTree<E> {
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.get_node(id).is_some_and(|node| node.is_leaf())
    }

    pub fn is_left_child(&self, id: NodeId) -> bool {
        self.parent(id).is_some_and(|parent| self.left(parent) == Some(id))
    }

    pub fn is_right_child(&self, id: NodeId) -> bool {
        self.parent(id).is_some_and(|parent| self.right(parent) == Some(id))
    }

    /// The other child of the same parent; `None` for the root.
    pub fn sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        if self.is_left_child(id) {
            self.right(parent)
        } else if self.is_right_child(id) {
            self.left(parent)
        } else {
            None
        }
    }

    /// The sibling of the parent.
    pub fn uncle(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).and_then(|parent| self.sibling(parent))
    }

    /// Number of nodes from the root down to the deepest leaf; 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        self.root().map_or(0, |root| self.height_of(root))
    }

    /// Height of the subtree rooted at `id`, counted level by level so deep
    /// chains do not grow the call stack; 0 for a stale handle.
    pub fn height_of(&self, id: NodeId) -> usize {
        if !self.contains_node(id) {
            return 0;
        }
        let mut height = 0;
        let mut level = VecDeque::from([id]);
        while !level.is_empty() {
            height += 1;
            for _ in 0..level.len() {
                let Some(node) = level.pop_front().and_then(|id| self.get_node(id)) else {
                    continue;
                };
                level.extend(node.left);
                level.extend(node.right);
            }
        }
        height
    }

    /// Depth of a node counted in edges from the root (the root has depth 0).
    pub fn depth_of(&self, id: NodeId) -> Option<usize> {
        if !self.contains_node(id) {
            return None;
        }
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        Some(depth)
    }

    pub fn leaf_count(&self) -> usize {
        self.iter_preorder()
            .filter(|&(id, _)| self.is_leaf(id))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //        5
    //      /   \
    //     3     8
    //    /     / \
    //   1     7   9
    struct Fixture {
        tree: BinaryTree<i32>,
        n5: NodeId,
        n3: NodeId,
        n8: NodeId,
        n1: NodeId,
        n7: NodeId,
        n9: NodeId,
    }

    fn fixture() -> Fixture {
        let mut tree = BinaryTree::new();
        let n5 = tree.set_root(5).unwrap();
        let n3 = tree.attach_left(n5, 3).unwrap();
        let n8 = tree.attach_right(n5, 8).unwrap();
        let n1 = tree.attach_left(n3, 1).unwrap();
        let n7 = tree.attach_left(n8, 7).unwrap();
        let n9 = tree.attach_right(n8, 9).unwrap();
        Fixture {
            tree,
            n5,
            n3,
            n8,
            n1,
            n7,
            n9,
        }
    }

    #[test]
    fn given_nodes_when_classifying_leaves_then_only_childless_are_leaves() {
        let f = fixture();
        assert!(f.tree.is_leaf(f.n1));
        assert!(f.tree.is_leaf(f.n9));
        assert!(!f.tree.is_leaf(f.n3));
        assert!(!f.tree.is_leaf(f.n5));
    }

    #[test]
    fn given_root_then_neither_left_nor_right_child() {
        let f = fixture();
        assert!(!f.tree.is_left_child(f.n5));
        assert!(!f.tree.is_right_child(f.n5));
        assert_eq!(f.tree.sibling(f.n5), None);
        assert_eq!(f.tree.uncle(f.n5), None);
    }

    #[test]
    fn given_children_then_side_matches_parent_slot() {
        let f = fixture();
        assert!(f.tree.is_left_child(f.n3));
        assert!(f.tree.is_right_child(f.n8));
        assert!(f.tree.is_left_child(f.n7));
        assert!(!f.tree.is_left_child(f.n9));
    }

    #[test]
    fn given_children_then_siblings_are_symmetric() {
        let f = fixture();
        assert_eq!(f.tree.sibling(f.n3), Some(f.n8));
        assert_eq!(f.tree.sibling(f.n8), Some(f.n3));
        assert_eq!(f.tree.sibling(f.n1), None);
    }

    #[test]
    fn given_grandchildren_then_uncle_is_parents_sibling() {
        let f = fixture();
        assert_eq!(f.tree.uncle(f.n1), Some(f.n8));
        assert_eq!(f.tree.uncle(f.n7), Some(f.n3));
        assert_eq!(f.tree.uncle(f.n3), None);
    }

    #[test]
    fn given_tree_when_measuring_height_then_counts_levels() {
        let f = fixture();
        assert_eq!(f.tree.height(), 3);
        assert_eq!(f.tree.height_of(f.n3), 2);
        assert_eq!(f.tree.height_of(f.n1), 1);
        assert_eq!(BinaryTree::<i32>::new().height(), 0);
    }

    #[test]
    fn given_nodes_when_measuring_depth_then_counts_edges_to_root() {
        let f = fixture();
        assert_eq!(f.tree.depth_of(f.n5), Some(0));
        assert_eq!(f.tree.depth_of(f.n9), Some(2));
    }

    #[test]
    fn given_stale_handle_then_queries_are_neutral() {
        let mut f = fixture();
        f.tree.detach(f.n8).unwrap();
        assert!(!f.tree.is_leaf(f.n9));
        assert!(!f.tree.is_right_child(f.n8));
        assert_eq!(f.tree.sibling(f.n3), None);
        assert_eq!(f.tree.height_of(f.n8), 0);
        assert_eq!(f.tree.depth_of(f.n7), None);
    }

    #[test]
    fn given_tree_when_counting_leaves_then_matches_shape() {
        let f = fixture();
        assert_eq!(f.tree.leaf_count(), 3);
    }
}
