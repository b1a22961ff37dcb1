//! treelab: an arena-backed binary-tree playground.
//!
//! Core layers:
//! - [`arena`]: the tree model (insert, delete, lookups)
//! - [`builder`]: variant-driven construction from value sequences
//! - [`traversal`]: pre/in/post-order visit sequences
//! - [`walker`]: animated walks with settle delays
//! - [`layout`]: snapshots for external renderers
//! - [`session`]: presentation-shell state (selection, toasts)

pub mod arena;
pub mod builder;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod layout;
pub mod parser;
pub mod session;
pub mod traversal;
pub mod util;
pub mod walker;

pub use arena::{NodeId, TreeModel, TreeNode, TreeVariant, MAX_CHILDREN};
pub use builder::TreeBuilder;
pub use errors::{TreeError, TreeResult};
pub use traversal::{traverse, traverse_values, TraversalOrder};
pub use walker::{TraversalWalker, WalkOutcome};
