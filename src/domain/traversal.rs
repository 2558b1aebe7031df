//! Traversal engine.
//!
//! Push-based traversals take a visitor `FnMut(&E) -> ControlFlow<B>`;
//! `ControlFlow::Break(b)` stops the walk at once and is handed back to the
//! caller unchanged. `try_traverse` and `for_each` cover fallible and
//! infallible visitors. Pull-based iterators yield `(NodeId, &E)` in the same
//! orders; dropping one early is the pull-side abort.

use std::collections::VecDeque;
use std::fmt;
use std::ops::ControlFlow;

use tracing::instrument;

use crate::domain::node::NodeId;
use crate::domain::tree::BinaryTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    Preorder,
    Inorder,
    Postorder,
    LevelOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::Preorder,
        TraversalOrder::Inorder,
        TraversalOrder::Postorder,
        TraversalOrder::LevelOrder,
    ];
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraversalOrder::Preorder => "preorder",
            TraversalOrder::Inorder => "inorder",
            TraversalOrder::Postorder => "postorder",
            TraversalOrder::LevelOrder => "level-order",
        };
        f.write_str(name)
    }
}

fn break_on_err<T, Err>(
    visit: impl FnMut(&T) -> Result<(), Err>,
) -> impl FnMut(&T) -> ControlFlow<Err> {
    let mut visit = visit;
    move |element: &T| match visit(element) {
        Ok(()) => ControlFlow::Continue(()),
        Err(err) => ControlFlow::Break(err),
    }
}

fn into_result<Err>(flow: ControlFlow<Err>) -> Result<(), Err> {
    match flow {
        ControlFlow::Continue(()) => Ok(()),
        ControlFlow::Break(err) => Err(err),
    }
}

impl<E> BinaryTree<E> {
    pub fn traverse<B>(
        &self,
        order: TraversalOrder,
        visit: impl FnMut(&E) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        match order {
            TraversalOrder::Preorder => self.preorder(visit),
            TraversalOrder::Inorder => self.inorder(visit),
            TraversalOrder::Postorder => self.postorder(visit),
            TraversalOrder::LevelOrder => self.level_order(visit),
        }
    }

    /// Visits a node, then its left subtree, then its right subtree.
    #[instrument(level = "trace", skip_all)]
    pub fn preorder<B>(&self, mut visit: impl FnMut(&E) -> ControlFlow<B>) -> ControlFlow<B> {
        self.preorder_from(self.root(), &mut visit)
    }

    fn preorder_from<B, F>(&self, id: Option<NodeId>, visit: &mut F) -> ControlFlow<B>
    where
        F: FnMut(&E) -> ControlFlow<B>,
    {
        let Some(node) = id.and_then(|id| self.get_node(id)) else {
            return ControlFlow::Continue(());
        };
        visit(&node.element)?;
        self.preorder_from(node.left, visit)?;
        self.preorder_from(node.right, visit)
    }

    /// Visits the left subtree, then the node, then the right subtree.
    #[instrument(level = "trace", skip_all)]
    pub fn inorder<B>(&self, mut visit: impl FnMut(&E) -> ControlFlow<B>) -> ControlFlow<B> {
        self.inorder_from(self.root(), &mut visit)
    }

    fn inorder_from<B, F>(&self, id: Option<NodeId>, visit: &mut F) -> ControlFlow<B>
    where
        F: FnMut(&E) -> ControlFlow<B>,
    {
        let Some(node) = id.and_then(|id| self.get_node(id)) else {
            return ControlFlow::Continue(());
        };
        self.inorder_from(node.left, visit)?;
        visit(&node.element)?;
        self.inorder_from(node.right, visit)
    }

    /// Visits both subtrees before the node itself.
    #[instrument(level = "trace", skip_all)]
    pub fn postorder<B>(&self, mut visit: impl FnMut(&E) -> ControlFlow<B>) -> ControlFlow<B> {
        self.postorder_from(self.root(), &mut visit)
    }

    fn postorder_from<B, F>(&self, id: Option<NodeId>, visit: &mut F) -> ControlFlow<B>
    where
        F: FnMut(&E) -> ControlFlow<B>,
    {
        let Some(node) = id.and_then(|id| self.get_node(id)) else {
            return ControlFlow::Continue(());
        };
        self.postorder_from(node.left, visit)?;
        self.postorder_from(node.right, visit)?;
        visit(&node.element)
    }

    /// Breadth-first, left to right within a level. A node's children are
    /// queued before the node itself is visited.
    #[instrument(level = "trace", skip_all)]
    pub fn level_order<B>(&self, mut visit: impl FnMut(&E) -> ControlFlow<B>) -> ControlFlow<B> {
        let Some(root) = self.root() else {
            return ControlFlow::Continue(());
        };

        let mut queue = VecDeque::new();
        queue.push_back(root);
        while let Some(id) = queue.pop_front() {
            let Some(node) = self.get_node(id) else {
                continue;
            };
            queue.extend(node.left);
            queue.extend(node.right);
            visit(&node.element)?;
        }
        ControlFlow::Continue(())
    }

    /// Runs a fallible visitor; the first error ends the traversal and is returned.
    pub fn try_traverse<Err>(
        &self,
        order: TraversalOrder,
        visit: impl FnMut(&E) -> Result<(), Err>,
    ) -> Result<(), Err> {
        into_result(self.traverse(order, break_on_err(visit)))
    }

    pub fn for_each(&self, order: TraversalOrder, mut visit: impl FnMut(&E)) {
        let flow = self.traverse(order, |element| {
            visit(element);
            ControlFlow::<()>::Continue(())
        });
        debug_assert!(flow.is_continue());
    }

    /// Elements collected in the given order.
    pub fn elements(&self, order: TraversalOrder) -> Vec<&E> {
        match order {
            TraversalOrder::Preorder => self.iter_preorder().map(|(_, e)| e).collect(),
            TraversalOrder::Inorder => self.iter_inorder().map(|(_, e)| e).collect(),
            TraversalOrder::Postorder => self.iter_postorder().map(|(_, e)| e).collect(),
            TraversalOrder::LevelOrder => self.iter_level_order().map(|(_, e)| e).collect(),
        }
    }

    pub fn iter_preorder(&self) -> PreorderIter<'_, E> {
        PreorderIter {
            tree: self,
            stack: self.root().into_iter().collect(),
        }
    }

    pub fn iter_inorder(&self) -> InorderIter<'_, E> {
        InorderIter {
            tree: self,
            stack: Vec::new(),
            current: self.root(),
        }
    }

    pub fn iter_postorder(&self) -> PostorderIter<'_, E> {
        PostorderIter {
            tree: self,
            stack: self.root().map(|root| (root, false)).into_iter().collect(),
        }
    }

    pub fn iter_level_order(&self) -> LevelOrderIter<'_, E> {
        LevelOrderIter {
            tree: self,
            queue: self.root().into_iter().collect(),
        }
    }
}

pub struct PreorderIter<'a, E> {
    tree: &'a BinaryTree<E>,
    stack: Vec<NodeId>,
}

impl<'a, E> Iterator for PreorderIter<'a, E> {
    type Item = (NodeId, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(id) {
                // right first so the left subtree is popped next
                self.stack.extend(node.right);
                self.stack.extend(node.left);
                return Some((id, &node.element));
            }
        }
        None
    }
}

pub struct InorderIter<'a, E> {
    tree: &'a BinaryTree<E>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a, E> Iterator for InorderIter<'a, E> {
    type Item = (NodeId, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.tree.left(id);
        }
        let id = self.stack.pop()?;
        let node = self.tree.get_node(id)?;
        self.current = node.right;
        Some((id, &node.element))
    }
}

pub struct PostorderIter<'a, E> {
    tree: &'a BinaryTree<E>,
    stack: Vec<(NodeId, bool)>,
}

impl<'a, E> Iterator for PostorderIter<'a, E> {
    type Item = (NodeId, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, children_done)) = self.stack.pop() {
            let Some(node) = self.tree.get_node(id) else {
                continue;
            };
            if children_done {
                return Some((id, &node.element));
            }
            self.stack.push((id, true));
            self.stack.extend(node.right.map(|r| (r, false)));
            self.stack.extend(node.left.map(|l| (l, false)));
        }
        None
    }
}

pub struct LevelOrderIter<'a, E> {
    tree: &'a BinaryTree<E>,
    queue: VecDeque<NodeId>,
}

impl<'a, E> Iterator for LevelOrderIter<'a, E> {
    type Item = (NodeId, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.queue.pop_front() {
            if let Some(node) = self.tree.get_node(id) {
                self.queue.extend(node.left);
                self.queue.extend(node.right);
                return Some((id, &node.element));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //      5
    //     / \
    //    3   8
    //   /
    //  1
    fn scenario() -> BinaryTree<i32> {
        let mut tree = BinaryTree::new();
        let root = tree.set_root(5).unwrap();
        let three = tree.attach_left(root, 3).unwrap();
        tree.attach_right(root, 8).unwrap();
        tree.attach_left(three, 1).unwrap();
        tree
    }

    fn collect(tree: &BinaryTree<i32>, order: TraversalOrder) -> Vec<i32> {
        let mut out = vec![];
        tree.for_each(order, |e| out.push(*e));
        out
    }

    #[test]
    fn given_scenario_tree_then_push_orders_match() {
        let tree = scenario();
        assert_eq!(collect(&tree, TraversalOrder::Preorder), vec![5, 3, 1, 8]);
        assert_eq!(collect(&tree, TraversalOrder::Inorder), vec![1, 3, 5, 8]);
        assert_eq!(collect(&tree, TraversalOrder::Postorder), vec![1, 3, 8, 5]);
        assert_eq!(collect(&tree, TraversalOrder::LevelOrder), vec![5, 3, 8, 1]);
    }

    #[test]
    fn given_scenario_tree_then_iterators_match_push_orders() {
        let tree = scenario();
        for order in TraversalOrder::ALL {
            let pulled: Vec<i32> = tree.elements(order).into_iter().copied().collect();
            assert_eq!(pulled, collect(&tree, order), "{order}");
        }
    }

    #[test]
    fn given_breaking_visitor_then_traversal_stops_and_returns_value() {
        let tree = scenario();
        let mut seen = vec![];
        let flow = tree.preorder(|e| {
            seen.push(*e);
            if *e == 3 {
                ControlFlow::Break("stop")
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(flow, ControlFlow::Break("stop"));
        assert_eq!(seen, vec![5, 3]);
    }

    #[test]
    fn given_failing_visitor_then_error_propagates() {
        let tree = scenario();
        let mut seen = vec![];
        let result = tree.try_traverse(TraversalOrder::LevelOrder, |e| {
            seen.push(*e);
            if *e == 8 {
                Err(format!("rejected {e}"))
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("rejected 8".to_string()));
        assert_eq!(seen, vec![5, 3, 8]);
    }

    #[test]
    fn given_empty_tree_then_nothing_is_visited() {
        let tree: BinaryTree<i32> = BinaryTree::new();
        for order in TraversalOrder::ALL {
            assert!(collect(&tree, order).is_empty());
        }
        assert_eq!(tree.iter_inorder().count(), 0);
    }

    #[test]
    fn given_orders_then_display_names() {
        assert_eq!(TraversalOrder::LevelOrder.to_string(), "level-order");
        assert_eq!(TraversalOrder::Inorder.to_string(), "inorder");
    }
}
