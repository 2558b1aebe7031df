use std::fmt;

use generational_arena::Index;

use crate::domain::tree::BinaryTree;

/// Handle to a node stored in a [`BinaryTree`] arena.
///
/// Handles are generational: once a node is removed its handle goes stale and
/// every query treats it as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) Index);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{slot}.{generation}")
    }
}

/// Which child slot of a parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Tree node in the arena.
///
/// `left` and `right` are owned by this node; `parent` is a back-reference
/// only used for upward navigation.
#[derive(Debug)]
pub(crate) struct Node<E> {
    pub(crate) element: E,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<E> Node<E> {
    pub(crate) fn new(element: E, parent: Option<NodeId>) -> Self {
        Self {
            element,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Borrowed cursor over a live node, bundling the handle with its tree so the
/// relationship queries read naturally: `tree.node(id)?.uncle()`.
pub struct NodeRef<'a, E> {
    tree: &'a BinaryTree<E>,
    id: NodeId,
    node: &'a Node<E>,
}

impl<E> Clone for NodeRef<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for NodeRef<'_, E> {}

impl<E: fmt::Debug> fmt::Debug for NodeRef<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("element", &self.node.element)
            .finish()
    }
}

impl<'a, E> NodeRef<'a, E> {
    pub(crate) fn new(tree: &'a BinaryTree<E>, id: NodeId, node: &'a Node<E>) -> Self {
        Self { tree, id, node }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn element(&self) -> &'a E {
        &self.node.element
    }

    pub fn parent(&self) -> Option<NodeRef<'a, E>> {
        self.node.parent.and_then(|id| self.tree.node(id))
    }

    pub fn left(&self) -> Option<NodeRef<'a, E>> {
        self.node.left.and_then(|id| self.tree.node(id))
    }

    pub fn right(&self) -> Option<NodeRef<'a, E>> {
        self.node.right.and_then(|id| self.tree.node(id))
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    pub fn is_left_child(&self) -> bool {
        self.tree.is_left_child(self.id)
    }

    pub fn is_right_child(&self) -> bool {
        self.tree.is_right_child(self.id)
    }

    pub fn sibling(&self) -> Option<NodeRef<'a, E>> {
        self.tree.sibling(self.id).and_then(|id| self.tree.node(id))
    }

    pub fn uncle(&self) -> Option<NodeRef<'a, E>> {
        self.tree.uncle(self.id).and_then(|id| self.tree.node(id))
    }

    /// Height of the subtree rooted here (a leaf has height 1).
    pub fn height(&self) -> usize {
        self.tree.height_of(self.id)
    }

    pub fn predecessor(&self) -> Option<NodeRef<'a, E>> {
        self.tree.predecessor(self.id).and_then(|id| self.tree.node(id))
    }

    pub fn successor(&self) -> Option<NodeRef<'a, E>> {
        self.tree.successor(self.id).and_then(|id| self.tree.node(id))
    }
}
