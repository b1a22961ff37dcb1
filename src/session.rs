//! Presentation shell state: selection, input parsing, add/delete flow
//! and traversal walks, all explicit and owned here. The core modules
//! below stay stateless between calls.

use std::time::Duration;

use itertools::Itertools;
use tracing::instrument;

use crate::arena::{NodeId, TreeModel, TreeVariant};
use crate::builder::TreeBuilder;
use crate::parser::parse_values;
use crate::traversal::TraversalOrder;
use crate::walker::{TraversalWalker, WalkOutcome};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// Transient user-facing notification. Core errors are translated into
/// these at this boundary and never surface as panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// One interactive editing session over a single active model.
#[derive(Debug)]
pub struct Session {
    model: Option<TreeModel>,
    variant: TreeVariant,
    selected: Option<NodeId>,
    walker: TraversalWalker,
    settle: Duration,
    last_walk: Vec<i64>,
}

impl Session {
    pub fn new(variant: TreeVariant, settle: Duration) -> Self {
        Self {
            model: None,
            variant,
            selected: None,
            walker: TraversalWalker::new(),
            settle,
            last_walk: Vec::new(),
        }
    }

    pub fn model(&self) -> Option<&TreeModel> {
        self.model.as_ref()
    }

    pub fn variant(&self) -> TreeVariant {
        self.variant
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn selected_value(&self) -> Option<i64> {
        let model = self.model.as_ref()?;
        self.selected
            .and_then(|id| model.get_node(id))
            .map(|n| n.value)
    }

    pub fn last_walk(&self) -> &[i64] {
        &self.last_walk
    }

    /// Switching the structural variant discards the current model.
    #[instrument(level = "debug", skip(self))]
    pub fn set_variant(&mut self, variant: TreeVariant) -> Toast {
        self.variant = variant;
        self.model = None;
        self.selected = None;
        self.last_walk.clear();
        Toast::info(format!("variant set to {}, tree cleared", variant))
    }

    /// Builds a fresh model from raw comma-separated input, replacing the
    /// current one wholesale.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&mut self, raw: &str) -> Toast {
        match parse_values(raw) {
            Ok(values) => {
                let model = TreeBuilder::build(self.variant, &values);
                let count = model.node_count();
                self.model = Some(model);
                self.selected = None;
                self.last_walk.clear();
                Toast::success(format!("built {} tree with {} nodes", self.variant, count))
            }
            Err(e) => Toast::error(e.to_string()),
        }
    }

    /// Selects the first node carrying `value` (pre-order). Selecting the
    /// already-selected value clears the selection, mirroring click-toggle.
    #[instrument(level = "debug", skip(self))]
    pub fn select_value(&mut self, value: i64) -> Toast {
        let Some(model) = self.model.as_ref() else {
            return Toast::error("no tree: build one first");
        };
        match model.find_by_value(value) {
            Some(id) if self.selected == Some(id) => {
                self.selected = None;
                Toast::info("selection cleared")
            }
            Some(id) => {
                self.selected = Some(id);
                Toast::info(format!("selected node {}", value))
            }
            None => Toast::error(format!("no node with value {}", value)),
        }
    }

    pub fn clear_selection(&mut self) -> Toast {
        self.selected = None;
        Toast::info("selection cleared")
    }

    /// Adds a child to the selected node.
    #[instrument(level = "debug", skip(self))]
    pub fn add_child(&mut self, value: i64) -> Toast {
        let Some(selected) = self.selected else {
            return Toast::error("select a node first");
        };
        let Some(model) = self.model.as_mut() else {
            return Toast::error("no tree: build one first");
        };
        match model.insert_child(selected, value) {
            Ok(_) => Toast::success(format!("node {} added", value)),
            Err(e) => Toast::error(e.to_string()),
        }
    }

    /// Deletes the selected node and its subtree.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_selected(&mut self) -> Toast {
        let Some(selected) = self.selected else {
            return Toast::error("select a node first");
        };
        let Some(model) = self.model.as_mut() else {
            return Toast::error("no tree: build one first");
        };
        let value = model.get_node(selected).map(|n| n.value);
        match model.delete_subtree(selected) {
            Ok(()) => {
                self.selected = None;
                match value {
                    Some(v) => Toast::success(format!("node {} deleted", v)),
                    None => Toast::success("node deleted"),
                }
            }
            Err(e) => Toast::error(e.to_string()),
        }
    }

    /// Runs an animated traversal walk, invoking `on_visit` per node with
    /// the configured settle delay in between. Requests while a walk is
    /// running are ignored.
    #[instrument(level = "debug", skip(self, on_visit))]
    pub fn walk<F>(&mut self, order: TraversalOrder, on_visit: F) -> Toast
    where
        F: FnMut(NodeId, i64),
    {
        let Some(model) = self.model.as_ref() else {
            return Toast::error("no tree: build one first");
        };
        match self.walker.walk(model, order, self.settle, on_visit) {
            WalkOutcome::Busy => Toast::info("traversal already running"),
            WalkOutcome::Completed(values) => {
                let rendered = values.iter().join(", ");
                self.last_walk = values;
                Toast::success(format!("{}: [ {} ]", order, rendered))
            }
        }
    }
}
