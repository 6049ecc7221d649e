//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use clap_complete::Shell;

/// Hierarchical record tables: load, inspect, expand, and prune record trees
#[derive(Parser, Debug)]
#[command(name = "rstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d, -d -d, -d -d -d)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print version and author info
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the record table
    Show {
        /// JSON payload file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Show root rows only (default: everything expanded)
        #[arg(short, long)]
        collapsed: bool,
    },

    /// Print the hierarchy as a tree
    Tree {
        /// JSON payload file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print the derived column headers
    Headers {
        /// JSON payload file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List records without children
    Leaves {
        /// JSON payload file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Remove one record (and its subtree), print the result
    Remove {
        /// JSON payload file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Structural path of the record: root position, then alternating
        /// group name and record position (e.g. 1 or 0/kids/1)
        path: String,
    },
}
