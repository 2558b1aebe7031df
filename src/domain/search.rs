//! Unbalanced binary search tree built by composition over [`BinaryTree`].

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::Deref;

use tracing::{debug, instrument};

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::node::NodeId;
use crate::domain::printer::TreeInfo;
use crate::domain::tree::BinaryTree;

/// Ordered variant: elements to the left of a node compare less, elements to
/// the right compare greater. Duplicates replace the stored element.
///
/// All read-only capabilities (traversals, height, completeness, navigation)
/// come from the inner tree through `Deref`; mutation only goes through the
/// ordered operations below.
#[derive(Debug)]
pub struct SearchTree<E> {
    tree: BinaryTree<E>,
}

impl<E> Default for SearchTree<E> {
    fn default() -> Self {
        Self {
            tree: BinaryTree::new(),
        }
    }
}

impl<E> Deref for SearchTree<E> {
    type Target = BinaryTree<E>;

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

impl<E: Ord> SearchTree<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: impl IntoIterator<Item = E>) -> TreeResult<Self> {
        let mut tree = Self::new();
        for element in elements {
            tree.insert(element)?;
        }
        Ok(tree)
    }

    pub fn into_inner(self) -> BinaryTree<E> {
        self.tree
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Inserts `element`, returning `true` if it was not present before.
    #[instrument(level = "debug", skip_all)]
    pub fn insert(&mut self, element: E) -> TreeResult<bool> {
        let Some(mut current) = self.tree.root() else {
            self.tree.set_root(element)?;
            return Ok(true);
        };

        loop {
            let stored = self.tree.element(current).ok_or(TreeError::StaleNode(current))?;
            match element.cmp(stored) {
                Ordering::Less => match self.tree.left(current) {
                    Some(left) => current = left,
                    None => {
                        self.tree.attach_left(current, element)?;
                        return Ok(true);
                    }
                },
                Ordering::Greater => match self.tree.right(current) {
                    Some(right) => current = right,
                    None => {
                        self.tree.attach_right(current, element)?;
                        return Ok(true);
                    }
                },
                Ordering::Equal => {
                    self.tree.replace_element(current, element)?;
                    debug!("replaced duplicate at {}", current);
                    return Ok(false);
                }
            }
        }
    }

    /// Inserts an element that may be absent, rejecting `None` up front.
    pub fn try_insert(&mut self, element: Option<E>) -> TreeResult<bool> {
        let element = BinaryTree::check_element(element)?;
        self.insert(element)
    }

    pub fn find(&self, element: &E) -> Option<NodeId> {
        let mut current = self.tree.root();
        while let Some(id) = current {
            current = match element.cmp(self.tree.element(id)?) {
                Ordering::Less => self.tree.left(id),
                Ordering::Greater => self.tree.right(id),
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub fn contains(&self, element: &E) -> bool {
        self.find(element).is_some()
    }

    /// Removes `element`, returning the stored value if it was present.
    ///
    /// A node with two children takes over its successor's element and the
    /// successor node, which has no left child, is spliced out instead.
    #[instrument(level = "debug", skip_all)]
    pub fn remove(&mut self, element: &E) -> TreeResult<Option<E>> {
        let Some(id) = self.find(element) else {
            return Ok(None);
        };

        let removed = if self.tree.left(id).is_some() && self.tree.right(id).is_some() {
            let successor = self.tree.successor(id).ok_or(TreeError::StaleNode(id))?;
            let moved = self.tree.splice_out(successor)?;
            self.tree.replace_element(id, moved)?
        } else {
            self.tree.splice_out(id)?
        };
        Ok(Some(removed))
    }
}

impl<E: Display> TreeInfo for SearchTree<E> {
    type Node = NodeId;

    fn info_root(&self) -> Option<NodeId> {
        self.tree.info_root()
    }

    fn info_left(&self, node: NodeId) -> Option<NodeId> {
        self.tree.info_left(node)
    }

    fn info_right(&self, node: NodeId) -> Option<NodeId> {
        self.tree.info_right(node)
    }

    fn info_label(&self, node: NodeId) -> String {
        self.tree.info_label(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traversal::TraversalOrder;

    fn inorder(tree: &SearchTree<i32>) -> Vec<i32> {
        tree.elements(TraversalOrder::Inorder).into_iter().copied().collect()
    }

    #[test]
    fn given_unordered_input_when_inserting_then_inorder_is_sorted() {
        let tree = SearchTree::from_elements([7, 4, 9, 1, 6, 8, 10]).unwrap();
        assert_eq!(inorder(&tree), vec![1, 4, 6, 7, 8, 9, 10]);
        assert_eq!(tree.size(), 7);
        assert!(tree.is_complete());
    }

    #[test]
    fn given_duplicate_when_inserting_then_size_unchanged() {
        let mut tree = SearchTree::from_elements([2, 1, 3]).unwrap();
        assert_eq!(tree.insert(2), Ok(false));
        assert_eq!(tree.size(), 3);
    }

    #[test]
    fn given_absent_element_when_try_inserting_then_rejected_without_mutation() {
        let mut tree = SearchTree::from_elements([2]).unwrap();
        assert!(matches!(tree.try_insert(None), Err(TreeError::InvalidArgument(_))));
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.try_insert(Some(3)), Ok(true));
    }

    #[test]
    fn given_leaf_when_removing_then_gone() {
        let mut tree = SearchTree::from_elements([5, 3, 8]).unwrap();
        assert_eq!(tree.remove(&3), Ok(Some(3)));
        assert!(!tree.contains(&3));
        assert_eq!(inorder(&tree), vec![5, 8]);
    }

    #[test]
    fn given_two_children_when_removing_root_then_successor_takes_place() {
        let mut tree = SearchTree::from_elements([5, 3, 8, 7, 9, 6]).unwrap();
        assert_eq!(tree.remove(&5), Ok(Some(5)));
        let root = tree.root().unwrap();
        assert_eq!(tree.element(root), Some(&6));
        assert_eq!(inorder(&tree), vec![3, 6, 7, 8, 9]);
        assert_eq!(tree.size(), 5);
    }

    #[test]
    fn given_missing_element_when_removing_then_none() {
        let mut tree = SearchTree::from_elements([1, 2]).unwrap();
        assert_eq!(tree.remove(&42), Ok(None));
        assert_eq!(tree.size(), 2);
    }
}
