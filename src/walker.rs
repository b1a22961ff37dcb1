//! Animated traversal walk: the consumer contract around the traversal
//! engine. Single-threaded and cooperative; the only suspension points
//! are the settle delays between visited nodes.

use std::thread;
use std::time::Duration;

use tracing::{debug, instrument};

use crate::arena::{NodeId, TreeModel};
use crate::traversal::{traverse, TraversalOrder};

/// Result of a walk request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The walk ran to completion; carries the visited value sequence.
    Completed(Vec<i64>),
    /// A walk was already running; the request was ignored.
    Busy,
}

/// Drives `idle -> running -> idle` walks over a model.
///
/// A new walk request while one is running is a no-op, guarded by the
/// busy flag. There is no cancellation: a started walk runs to completion.
#[derive(Debug, Default)]
pub struct TraversalWalker {
    busy: bool,
}

impl TraversalWalker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Visits the traversal sequence in order, applying `on_visit` to each
    /// node and sleeping `settle` between elements.
    #[instrument(level = "debug", skip(self, model, on_visit))]
    pub fn walk<F>(
        &mut self,
        model: &TreeModel,
        order: TraversalOrder,
        settle: Duration,
        mut on_visit: F,
    ) -> WalkOutcome
    where
        F: FnMut(NodeId, i64),
    {
        if self.busy {
            debug!("walk request ignored: walker is busy");
            return WalkOutcome::Busy;
        }
        self.busy = true;

        let path = traverse(model, order);
        let mut values = Vec::with_capacity(path.len());
        for (i, id) in path.iter().enumerate() {
            if let Some(node) = model.get_node(*id) {
                on_visit(*id, node.value);
                values.push(node.value);
            }
            if i + 1 < path.len() && !settle.is_zero() {
                thread::sleep(settle);
            }
        }

        self.busy = false;
        WalkOutcome::Completed(values)
    }
}
