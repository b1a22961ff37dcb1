use std::fmt;

use generational_arena::{Arena, Index};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Maximum number of children per node (binary variants only).
pub const MAX_CHILDREN: usize = 2;

/// Placement policy selector, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TreeVariant {
    /// Ordered insertion: left < node < right for all descendants
    Bst,
    /// Positional layout: flat index i has children at 2i+1, 2i+2
    LevelOrder,
}

impl fmt::Display for TreeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeVariant::Bst => write!(f, "bst"),
            TreeVariant::LevelOrder => write!(f, "level-order"),
        }
    }
}

/// Child slot within a node. Left is slot 0, right is slot 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Node identity, generated at creation by the arena.
///
/// The generational index makes stale ids (from deleted subtrees)
/// resolve to `None` instead of aliasing a reused slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

impl NodeId {
    /// Stable string form for external collaborators (render layer keys).
    pub fn as_key(&self) -> String {
        let (slot, generation) = self.0.into_raw_parts();
        format!("n{}-{}", slot, generation)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// Tree node: numeric value plus two positional child slots.
#[derive(Debug)]
pub struct TreeNode {
    /// Node value
    pub value: i64,
    /// Parent id, None for the root
    pub parent: Option<NodeId>,
    /// Child slots: index 0 is left, index 1 is right
    slots: [Option<NodeId>; MAX_CHILDREN],
}

impl TreeNode {
    fn new(value: i64, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            slots: [None, None],
        }
    }

    pub fn left(&self) -> Option<NodeId> {
        self.slots[0]
    }

    pub fn right(&self) -> Option<NodeId> {
        self.slots[1]
    }

    /// Occupied child slots, left to right.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn child_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }
}

/// Arena-based tree model: one owned hierarchy plus its variant tag.
///
/// Index-based ownership gives O(1) id lookups and lets mutations fail
/// before touching the tree, so no defensive deep copies are needed.
#[derive(Debug)]
pub struct TreeModel {
    arena: Arena<TreeNode>,
    root: Option<NodeId>,
    variant: TreeVariant,
}

impl TreeModel {
    pub fn new(variant: TreeVariant) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            variant,
        }
    }

    pub fn variant(&self) -> TreeVariant {
        self.variant
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn get_node(&self, id: NodeId) -> Option<&TreeNode> {
        self.arena.get(id.0)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id.0)
    }

    /// First node carrying `value` in deterministic pre-order descent.
    #[instrument(level = "trace", skip(self))]
    pub fn find_by_value(&self, value: i64) -> Option<NodeId> {
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        while let Some(id) = stack.pop() {
            if let Some(node) = self.get_node(id) {
                if node.value == value {
                    return Some(id);
                }
                // Right first so the left child is popped first
                for child in [node.right(), node.left()].into_iter().flatten() {
                    stack.push(child);
                }
            }
        }
        None
    }

    /// Places the root node. Only valid on an empty model.
    pub(crate) fn insert_root(&mut self, value: i64) -> NodeId {
        debug_assert!(self.root.is_none());
        let id = NodeId(self.arena.insert(TreeNode::new(value, None)));
        self.root = Some(id);
        id
    }

    /// Builder-facing placement into a specific slot. The builders descend
    /// to a free slot before calling, so an occupied slot or missing parent
    /// is silently left untouched.
    pub(crate) fn place_child(&mut self, parent: NodeId, side: Side, value: i64) -> NodeId {
        let id = NodeId(self.arena.insert(TreeNode::new(value, Some(parent))));
        if let Some(parent_node) = self.arena.get_mut(parent.0) {
            let slot = match side {
                Side::Left => 0,
                Side::Right => 1,
            };
            if parent_node.slots[slot].is_none() {
                parent_node.slots[slot] = Some(id);
                return id;
            }
        }
        // Unreachable via the builders; drop the orphan again
        self.arena.remove(id.0);
        id
    }

    /// Manual add-child path used by the presentation shell.
    ///
    /// The new leaf goes into the first free slot and the occupied pair is
    /// then ordered ascending by value, which yields consistent left/right
    /// placement for display. All failure checks happen before mutation.
    #[instrument(level = "debug", skip(self))]
    pub fn insert_child(&mut self, parent: NodeId, value: i64) -> TreeResult<NodeId> {
        let parent_node = self.get_node(parent).ok_or(TreeError::NotFound(parent))?;
        if parent_node.child_count() >= MAX_CHILDREN {
            return Err(TreeError::CapacityExceeded {
                parent,
                limit: MAX_CHILDREN,
            });
        }

        let id = NodeId(self.arena.insert(TreeNode::new(value, Some(parent))));
        if let Some(parent_node) = self.arena.get_mut(parent.0) {
            let slot = if parent_node.slots[0].is_none() { 0 } else { 1 };
            parent_node.slots[slot] = Some(id);
        }
        self.sort_children(parent);
        Ok(id)
    }

    /// Orders the two occupied slots of `parent` ascending by value.
    fn sort_children(&mut self, parent: NodeId) {
        let Some(node) = self.get_node(parent) else {
            return;
        };
        let (Some(left), Some(right)) = (node.left(), node.right()) else {
            return;
        };
        let left_value = self.get_node(left).map(|n| n.value);
        let right_value = self.get_node(right).map(|n| n.value);
        if left_value > right_value {
            if let Some(node) = self.arena.get_mut(parent.0) {
                node.slots.swap(0, 1);
            }
        }
    }

    /// Removes `id` and everything beneath it. Deleting the root leaves a
    /// valid empty model.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_subtree(&mut self, id: NodeId) -> TreeResult<()> {
        let parent = self
            .get_node(id)
            .map(|n| n.parent)
            .ok_or(TreeError::NotFound(id))?;

        // Detach from the parent slot (or clear the root) first
        match parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.arena.get_mut(parent_id.0) {
                    for slot in parent_node.slots.iter_mut() {
                        if *slot == Some(id) {
                            *slot = None;
                        }
                    }
                }
            }
            None => self.root = None,
        }

        // Free the subtree's arena slots
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(current.0) {
                stack.extend(node.children());
            }
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        match self.root {
            Some(root) => self.calculate_depth(root),
            None => 0,
        }
    }

    fn calculate_depth(&self, id: NodeId) -> usize {
        match self.get_node(id) {
            Some(node) => {
                1 + node
                    .children()
                    .map(|child| self.calculate_depth(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    /// Values of all leaf nodes, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_values(&self) -> Vec<i64> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    fn collect_leaves(&self, id: NodeId, leaves: &mut Vec<i64>) {
        if let Some(node) = self.get_node(id) {
            if node.is_leaf() {
                leaves.push(node.value);
            } else {
                for child in node.children() {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }
}
