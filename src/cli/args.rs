//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::arena::TreeVariant;
use crate::traversal::TraversalOrder;

/// Interactive binary-tree playground: build, inspect, walk and export trees
#[derive(Parser, Debug)]
#[command(name = "treelab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree and print it
    Build {
        /// Comma-separated values (default: configured sample)
        values: Option<String>,
        /// Structural variant (default: configured)
        #[arg(short, long, value_enum)]
        variant: Option<VariantArg>,
    },

    /// Print a traversal sequence
    Traverse {
        /// Traversal order
        #[arg(value_enum)]
        order: OrderArg,
        /// Comma-separated values (default: configured sample)
        values: Option<String>,
        /// Structural variant (default: configured)
        #[arg(short, long, value_enum)]
        variant: Option<VariantArg>,
    },

    /// Animated traversal walk with per-node highlight
    Walk {
        /// Traversal order
        #[arg(value_enum)]
        order: OrderArg,
        /// Comma-separated values (default: configured sample)
        values: Option<String>,
        /// Structural variant (default: configured)
        #[arg(short, long, value_enum)]
        variant: Option<VariantArg>,
        /// Settle delay in ms between nodes (default: configured)
        #[arg(long)]
        delay: Option<u64>,
    },

    /// Export a layout snapshot as JSON for a renderer
    Layout {
        /// Comma-separated values (default: configured sample)
        values: Option<String>,
        /// Structural variant (default: configured)
        #[arg(short, long, value_enum)]
        variant: Option<VariantArg>,
    },

    /// Interactive shell: build, select, add, delete, walk
    Repl {
        /// Structural variant (default: configured)
        #[arg(short, long, value_enum)]
        variant: Option<VariantArg>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config paths
    Path,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum VariantArg {
    Bst,
    LevelOrder,
}

impl From<VariantArg> for TreeVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Bst => TreeVariant::Bst,
            VariantArg::LevelOrder => TreeVariant::LevelOrder,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OrderArg {
    Pre,
    In,
    Post,
}

impl From<OrderArg> for TraversalOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Pre => TraversalOrder::Pre,
            OrderArg::In => TraversalOrder::In,
            OrderArg::Post => TraversalOrder::Post,
        }
    }
}
