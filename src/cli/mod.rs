//! CLI argument parsing for taxograph
//!
//! Global flags: --input, --config, --format, --quiet, --verbose

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use taxograph_core::format::OutputFormat;
use taxograph_core::graph::Direction;

/// Taxograph - relationship queries over hierarchical taxonomies
#[derive(Parser, Debug)]
#[command(name = "taxograph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Taxonomy XML document (default: config `source.input`, then structure_released.xml)
    #[arg(long, short, global = true, env = "TAXOGRAPH_INPUT")]
    pub input: Option<PathBuf>,

    /// Explicit config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: human or json
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report graph statistics and shape diagnostics
    Check {
        /// Also verify that the graph has no cycles (slow on large inputs)
        #[arg(long)]
        acyclic: bool,
    },

    /// Show a node with its parents and children
    Show {
        /// Node identifier
        id: String,
    },

    /// List every ancestor of a node
    Ancestors {
        /// Node identifier
        id: String,
    },

    /// List every descendant of a node
    Descendants {
        /// Node identifier
        id: String,
    },

    /// Minimum depth of a node below the root
    Depth {
        /// Node identifier
        id: String,
    },

    /// List reached nodes with their minimum hop count along one direction
    Traverse {
        /// Starting node identifier
        id: String,

        /// Edge direction: ancestors (up) or descendants (down)
        #[arg(long, short, default_value = "descendants")]
        direction: Direction,

        /// Record this node but do not explore past it
        #[arg(long)]
        stop_at: Option<String>,
    },

    /// Edge distance between a node and one of its ancestors or descendants (-1 if unrelated)
    Distance {
        /// Starting node identifier
        from: String,

        /// Target node identifier
        to: String,
    },
}
