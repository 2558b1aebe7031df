//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::config::OrderSelection;

/// Build binary trees from numbers and inspect their structure
#[derive(Parser, Debug)]
#[command(name = "bintree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more: -d -d -d)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Extra config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print shell completions to stdout
    #[arg(long = "generate", value_enum)]
    pub generator: Option<clap_complete::Shell>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// How the input values are turned into a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Insert values one by one into a binary search tree
    Search,
    /// Fill slots level by level; `_` or `null` marks a missing child
    Level,
}

#[derive(Args, Debug)]
pub struct TreeInput {
    /// Tree layout
    #[arg(short, long, value_enum, default_value_t = Layout::Search)]
    pub layout: Layout,

    /// Values (integers)
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the tree structure
    Show {
        #[command(flatten)]
        input: TreeInput,
    },

    /// Print traversal orders
    Traverse {
        /// Order to print (default from config)
        #[arg(short, long, value_enum)]
        order: Option<OrderSelection>,
        #[command(flatten)]
        input: TreeInput,
    },

    /// Show size, height, leaf count and completeness
    Stats {
        #[command(flatten)]
        input: TreeInput,
    },

    /// Show parent, sibling, uncle, predecessor and successor of an element
    Neighbors {
        /// Element to inspect
        #[arg(short, long, allow_hyphen_values = true)]
        target: i64,
        #[command(flatten)]
        input: TreeInput,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Print a commented template config file
    Template,
}
