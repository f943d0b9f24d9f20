//! Command dispatch logic for taxograph
use std::time::Instant;

use taxograph_core::config::Config;
use taxograph_core::error::Result;
use taxograph_core::loader::load_graph;

use crate::cli::{Cli, Commands};
use crate::commands::{check, query, show};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?;
    let input = config.input_path(cli.input.as_deref());

    tracing::debug!(elapsed = ?start.elapsed(), input = %input.display(), "resolve_input");

    let graph = load_graph(&input, &config)?;

    tracing::debug!(elapsed = ?start.elapsed(), nodes = graph.len(), "load_graph");

    match &cli.command {
        Commands::Check { acyclic } => {
            check::execute(cli, &graph, *acyclic, config.graph.check_acyclic)
        }
        Commands::Show { id } => show::execute(cli, &graph, id),
        Commands::Ancestors { id } => query::ancestors(cli, &graph, id),
        Commands::Descendants { id } => query::descendants(cli, &graph, id),
        Commands::Depth { id } => query::depth(cli, &graph, id),
        Commands::Traverse {
            id,
            direction,
            stop_at,
        } => query::traverse(cli, &graph, id, *direction, stop_at.as_deref()),
        Commands::Distance { from, to } => query::distance(cli, &graph, from, to),
    }
}
