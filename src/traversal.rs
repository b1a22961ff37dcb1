use std::fmt;

use tracing::instrument;

use crate::arena::{NodeId, TreeModel};

/// Node-visiting order for a traversal walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// node, left subtree, right subtree
    Pre,
    /// left subtree, node, right subtree
    In,
    /// left subtree, right subtree, node
    Post,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::Pre => write!(f, "pre-order"),
            TraversalOrder::In => write!(f, "in-order"),
            TraversalOrder::Post => write!(f, "post-order"),
        }
    }
}

/// Full visit sequence for `model` in the given order.
///
/// Stateless: every call recomputes from scratch, so an unmodified model
/// always yields the identical sequence. An empty model yields an empty
/// sequence; absent children are skipped.
#[instrument(level = "debug", skip(model))]
pub fn traverse(model: &TreeModel, order: TraversalOrder) -> Vec<NodeId> {
    match order {
        TraversalOrder::Pre => PreOrderIter::new(model).collect(),
        TraversalOrder::In => InOrderIter::new(model).collect(),
        TraversalOrder::Post => PostOrderIter::new(model).collect(),
    }
}

/// Visit sequence mapped to node values.
pub fn traverse_values(model: &TreeModel, order: TraversalOrder) -> Vec<i64> {
    traverse(model, order)
        .into_iter()
        .filter_map(|id| model.get_node(id).map(|n| n.value))
        .collect()
}

pub struct PreOrderIter<'a> {
    model: &'a TreeModel,
    stack: Vec<NodeId>,
}

impl<'a> PreOrderIter<'a> {
    fn new(model: &'a TreeModel) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = model.root() {
            stack.push(root);
        }
        Self { model, stack }
    }
}

impl Iterator for PreOrderIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        if let Some(node) = self.model.get_node(current) {
            // Push right before left so the left child is popped first
            for child in [node.right(), node.left()].into_iter().flatten() {
                self.stack.push(child);
            }
        }
        Some(current)
    }
}

pub struct InOrderIter<'a> {
    model: &'a TreeModel,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a> InOrderIter<'a> {
    fn new(model: &'a TreeModel) -> Self {
        Self {
            model,
            stack: Vec::new(),
            current: model.root(),
        }
    }
}

impl Iterator for InOrderIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        // Descend the left spine, then emit and hop to the right child
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.model.get_node(id).and_then(|n| n.left());
        }
        let visited = self.stack.pop()?;
        self.current = self.model.get_node(visited).and_then(|n| n.right());
        Some(visited)
    }
}

pub struct PostOrderIter<'a> {
    model: &'a TreeModel,
    stack: Vec<(NodeId, bool)>,
}

impl<'a> PostOrderIter<'a> {
    fn new(model: &'a TreeModel) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = model.root() {
            stack.push((root, false));
        }
        Self { model, stack }
    }
}

impl Iterator for PostOrderIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if visited {
                return Some(current);
            }
            self.stack.push((current, true));
            if let Some(node) = self.model.get_node(current) {
                for child in [node.right(), node.left()].into_iter().flatten() {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}
