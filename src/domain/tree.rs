use generational_arena::Arena;
use tracing::{debug, instrument};

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::node::{Node, NodeId, NodeRef, Side};

/// Arena-based binary tree: the shared foundation of all tree variants.
///
/// Nodes live in a generational arena; `left`/`right` links own their
/// subtrees and `parent` links are plain handles, so there are no reference
/// cycles. Variants build on this type by composition and use the linkage
/// primitives below, which keep the parent/child invariant and `size` intact.
#[derive(Debug)]
pub struct BinaryTree<E> {
    arena: Arena<Node<E>>,
    root: Option<NodeId>,
    size: usize,
}

impl<E> Default for BinaryTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> BinaryTree<E> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            size: 0,
        }
    }

    /// Validation helper for variant insertion paths: rejects an absent
    /// element before any mutation happens.
    pub fn check_element(element: Option<E>) -> TreeResult<E> {
        element.ok_or_else(|| TreeError::InvalidArgument("element must not be empty".to_string()))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drops the whole node graph at once.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.size = 0;
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn root_node(&self) -> Option<NodeRef<'_, E>> {
        self.root.and_then(|id| self.node(id))
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.arena.contains(id.0)
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, E>> {
        self.arena.get(id.0).map(|node| NodeRef::new(self, id, node))
    }

    pub(crate) fn get_node(&self, id: NodeId) -> Option<&Node<E>> {
        self.arena.get(id.0)
    }

    fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node<E>> {
        self.arena.get_mut(id.0)
    }

    pub fn element(&self, id: NodeId) -> Option<&E> {
        self.get_node(id).map(|node| &node.element)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get_node(id).and_then(|node| node.parent)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.get_node(id).and_then(|node| node.left)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.get_node(id).and_then(|node| node.right)
    }

    pub fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.get_node(id).and_then(|node| node.child(side))
    }

    // ------------------------------------------------------------
    // Linkage primitives
    // ------------------------------------------------------------

    #[instrument(level = "debug", skip(self, element))]
    pub fn set_root(&mut self, element: E) -> TreeResult<NodeId> {
        if self.root.is_some() {
            return Err(TreeError::RootOccupied);
        }
        let id = NodeId(self.arena.insert(Node::new(element, None)));
        self.root = Some(id);
        self.size += 1;
        debug!("root set to {}", id);
        Ok(id)
    }

    pub fn attach_left(&mut self, parent: NodeId, element: E) -> TreeResult<NodeId> {
        self.attach(parent, Side::Left, element)
    }

    pub fn attach_right(&mut self, parent: NodeId, element: E) -> TreeResult<NodeId> {
        self.attach(parent, Side::Right, element)
    }

    #[instrument(level = "debug", skip(self, element))]
    pub fn attach(&mut self, parent: NodeId, side: Side, element: E) -> TreeResult<NodeId> {
        let slot = self
            .get_node(parent)
            .ok_or(TreeError::StaleNode(parent))?
            .child(side);
        if slot.is_some() {
            return Err(TreeError::SlotOccupied { parent, side });
        }
        let id = self.link_child(parent, side, element);
        debug!("attached {} as {} child of {}", id, side, parent);
        Ok(id)
    }

    /// Inserts a node under a parent already known to be live with a free slot.
    pub(crate) fn link_child(&mut self, parent: NodeId, side: Side, element: E) -> NodeId {
        let id = NodeId(self.arena.insert(Node::new(element, Some(parent))));
        if let Some(node) = self.get_node_mut(parent) {
            *node.child_mut(side) = Some(id);
        }
        self.size += 1;
        id
    }

    /// Swaps the payload of a node, returning the previous element.
    #[instrument(level = "trace", skip(self, element))]
    pub fn replace_element(&mut self, id: NodeId, element: E) -> TreeResult<E> {
        let node = self.get_node_mut(id).ok_or(TreeError::StaleNode(id))?;
        Ok(std::mem::replace(&mut node.element, element))
    }

    /// Removes the subtree rooted at `id`, returning the number of nodes dropped.
    #[instrument(level = "debug", skip(self))]
    pub fn detach(&mut self, id: NodeId) -> TreeResult<usize> {
        let parent = self.get_node(id).ok_or(TreeError::StaleNode(id))?.parent;
        self.unlink_from_parent(id, parent, None);

        let mut removed = 0;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(current.0) {
                stack.extend(node.left);
                stack.extend(node.right);
                removed += 1;
            }
        }
        self.size -= removed;
        debug!("detached {} node(s) rooted at {}", removed, id);
        Ok(removed)
    }

    /// Removes a node with at most one child, lifting that child into its slot.
    ///
    /// Search-tree deletion reduces to this after exchanging a two-child node
    /// with its predecessor or successor.
    #[instrument(level = "debug", skip(self))]
    pub fn splice_out(&mut self, id: NodeId) -> TreeResult<E> {
        let node = self.get_node(id).ok_or(TreeError::StaleNode(id))?;
        let child = match (node.left, node.right) {
            (Some(_), Some(_)) => return Err(TreeError::TwoChildren(id)),
            (left, right) => left.or(right),
        };
        let parent = node.parent;

        if let Some(child) = child {
            if let Some(child_node) = self.get_node_mut(child) {
                child_node.parent = parent;
            }
        }
        self.unlink_from_parent(id, parent, child);

        let removed = self.arena.remove(id.0).ok_or(TreeError::StaleNode(id))?;
        self.size -= 1;
        Ok(removed.element)
    }

    /// Points whatever referenced `id` (the parent's slot or the root) at `replacement`.
    fn unlink_from_parent(
        &mut self,
        id: NodeId,
        parent: Option<NodeId>,
        replacement: Option<NodeId>,
    ) {
        match parent.and_then(|p| self.get_node_mut(p)) {
            Some(parent) => {
                if parent.left == Some(id) {
                    parent.left = replacement;
                } else if parent.right == Some(id) {
                    parent.right = replacement;
                }
            }
            None => {
                if self.root == Some(id) {
                    self.root = replacement;
                }
            }
        }
    }
}
