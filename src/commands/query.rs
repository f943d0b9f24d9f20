//! Relationship query commands
use std::collections::BTreeSet;

use taxograph_core::error::Result;
use taxograph_core::graph::{Direction, Graph};

use crate::cli::{Cli, OutputFormat};

/// Execute the ancestors command
pub fn ancestors(cli: &Cli, graph: &Graph, id: &str) -> Result<()> {
    let ids = graph.ancestors(id)?;
    output_set(cli, id, "ancestors", &ids)
}

/// Execute the descendants command
pub fn descendants(cli: &Cli, graph: &Graph, id: &str) -> Result<()> {
    let ids = graph.descendants(id)?;
    output_set(cli, id, "descendants", &ids)
}

/// Execute the depth command
pub fn depth(cli: &Cli, graph: &Graph, id: &str) -> Result<()> {
    let depth = graph.depth(id)?;

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "id": id, "depth": depth });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => println!("{}", depth),
    }

    Ok(())
}

/// Execute the traverse command, nearest nodes first
pub fn traverse(
    cli: &Cli,
    graph: &Graph,
    id: &str,
    direction: Direction,
    stop_at: Option<&str>,
) -> Result<()> {
    let mut reached: Vec<(String, usize)> =
        graph.traverse(id, direction, stop_at)?.into_iter().collect();
    reached.sort_by(|(a_id, a_hops), (b_id, b_hops)| {
        a_hops.cmp(b_hops).then_with(|| a_id.cmp(b_id))
    });

    match cli.format {
        OutputFormat::Json => {
            let count = reached.len();
            let reached: Vec<serde_json::Value> = reached
                .iter()
                .map(|(id, hops)| serde_json::json!({ "id": id, "distance": hops }))
                .collect();
            let json = serde_json::json!({
                "id": id,
                "direction": direction.to_string(),
                "stop_at": stop_at,
                "reached": reached,
                "count": count,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if reached.is_empty() {
                if !cli.quiet {
                    println!("No {} reached", direction);
                }
                return Ok(());
            }
            for (id, hops) in &reached {
                println!("{}\t{}", hops, id);
            }
        }
    }

    Ok(())
}

/// Execute the distance command; unrelated pairs print -1
pub fn distance(cli: &Cli, graph: &Graph, from: &str, to: &str) -> Result<()> {
    let distance = graph
        .distance(from, to)?
        .map_or(-1, |hops| i64::try_from(hops).unwrap_or(i64::MAX));

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "from": from, "to": to, "distance": distance });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => println!("{}", distance),
    }

    Ok(())
}

fn output_set(cli: &Cli, id: &str, label: &str, ids: &BTreeSet<String>) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "id": id, label: ids, "count": ids.len() });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if ids.is_empty() {
                if !cli.quiet {
                    println!("No {} found", label);
                }
                return Ok(());
            }
            for id in ids {
                println!("{}", id);
            }
        }
    }

    Ok(())
}
