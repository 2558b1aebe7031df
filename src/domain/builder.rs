//! Shape builders that fill a tree level by level, without comparing elements.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::domain::node::{NodeId, Side};
use crate::domain::tree::BinaryTree;

impl<E> BinaryTree<E> {
    /// Builds a complete tree: elements fill each level left to right.
    #[instrument(level = "debug", skip_all)]
    pub fn from_level_order(elements: impl IntoIterator<Item = E>) -> Self {
        Self::from_level_slots(elements.into_iter().map(Some))
    }

    /// Builds an arbitrary shape from level-order slots, where `None` marks a
    /// missing child. Only present nodes get slots for their children, so
    /// `[1, None, 2]` is a root with a right child only. A leading `None`
    /// yields an empty tree. Elements past the last open slot are dropped; use
    /// [`BinaryTree::from_level_slots_with_rest`] to get them back.
    pub fn from_level_slots(slots: impl IntoIterator<Item = Option<E>>) -> Self {
        Self::from_level_slots_with_rest(slots).0
    }

    /// Like [`BinaryTree::from_level_slots`], also returning the elements that
    /// found no open slot, in input order. Trailing gaps are not reported.
    #[instrument(level = "debug", skip_all)]
    pub fn from_level_slots_with_rest(
        slots: impl IntoIterator<Item = Option<E>>,
    ) -> (Self, Vec<E>) {
        let mut tree = Self::new();
        let mut slots = slots.into_iter();

        if let Some(Some(first)) = slots.next() {
            if let Ok(root) = tree.set_root(first) {
                let mut queue: VecDeque<NodeId> = VecDeque::from([root]);
                'fill: while let Some(parent) = queue.pop_front() {
                    for side in [Side::Left, Side::Right] {
                        let Some(slot) = slots.next() else {
                            break 'fill;
                        };
                        if let Some(element) = slot {
                            queue.push_back(tree.link_child(parent, side, element));
                        }
                    }
                }
            }
        }

        let rest: Vec<E> = slots.flatten().collect();
        debug!("built tree with {} node(s), {} left over", tree.size(), rest.len());
        (tree, rest)
    }
}
