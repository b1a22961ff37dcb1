//! Boundary to the render collaborators.
//!
//! The external layout algorithm consumes the parent/children structure
//! with stable ids; the core assigns only the in-order-rank/depth grid,
//! never pixel positions.

use std::collections::HashMap;

use serde::Serialize;
use termtree::Tree;
use tracing::instrument;

use crate::arena::{NodeId, TreeModel};
use crate::traversal::{traverse, TraversalOrder};

/// Serializable layout snapshot of one node and its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutNode {
    /// Stable node key for the renderer
    pub id: String,
    pub value: i64,
    /// Distance from the root (root = 0)
    pub depth: usize,
    /// Horizontal grid position: in-order rank within the tree
    pub x: usize,
    /// Ordered children, left to right
    pub children: Vec<LayoutNode>,
}

/// Projects the model into a nested layout snapshot, or `None` for an
/// empty model.
#[instrument(level = "debug", skip(model))]
pub fn project(model: &TreeModel) -> Option<LayoutNode> {
    let ranks: HashMap<NodeId, usize> = traverse(model, TraversalOrder::In)
        .into_iter()
        .enumerate()
        .map(|(rank, id)| (id, rank))
        .collect();
    model.root().map(|root| build_node(model, root, 0, &ranks))
}

fn build_node(
    model: &TreeModel,
    id: NodeId,
    depth: usize,
    ranks: &HashMap<NodeId, usize>,
) -> LayoutNode {
    let node = model.get_node(id);
    LayoutNode {
        id: id.as_key(),
        value: node.map(|n| n.value).unwrap_or_default(),
        depth,
        x: ranks.get(&id).copied().unwrap_or_default(),
        children: node
            .map(|n| {
                n.children()
                    .map(|child| build_node(model, child, depth + 1, ranks))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Terminal rendering of the tree structure.
pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeDisplay for TreeModel {
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(model: &TreeModel, id: NodeId, parent_tree: &mut Tree<String>) {
            if let Some(node) = model.get_node(id) {
                for child_id in node.children() {
                    if let Some(child) = model.get_node(child_id) {
                        let mut child_tree = Tree::new(child.value.to_string());
                        build_tree(model, child_id, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        match self.root() {
            Some(root_id) => {
                let label = self
                    .get_node(root_id)
                    .map(|n| n.value.to_string())
                    .unwrap_or_default();
                let mut tree = Tree::new(label);
                build_tree(self, root_id, &mut tree);
                tree
            }
            None => Tree::new("(empty tree)".to_string()),
        }
    }
}
