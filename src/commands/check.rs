//! Check command
use taxograph_core::error::{Result, TaxoError};
use taxograph_core::graph::Graph;

use crate::cli::{Cli, OutputFormat};

/// Execute the check command.
///
/// `verified_on_load` is set when the loader has already rejected cyclic
/// graphs, in which case the scan is not repeated.
pub fn execute(
    cli: &Cli,
    graph: &Graph,
    check_acyclic: bool,
    verified_on_load: bool,
) -> Result<()> {
    if check_acyclic && verified_on_load {
        tracing::debug!("acyclicity verified during load, skipping scan");
    } else if check_acyclic {
        if let Some(id) = graph.find_cycle() {
            return Err(TaxoError::CycleDetected { id });
        }
    }
    let acyclic = check_acyclic || verified_on_load;

    let stats = graph.stats()?;
    let is_tree = graph.is_single_parent_tree();

    match cli.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_value(&stats)?;
            if let Some(obj) = json.as_object_mut() {
                obj.insert("root".to_string(), serde_json::json!(graph.root_id()));
                obj.insert("tree".to_string(), serde_json::json!(is_tree));
                if acyclic {
                    obj.insert("acyclic".to_string(), serde_json::json!(true));
                }
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            println!("root: {}", graph.root_id());
            println!("nodes: {}", stats.nodes);
            println!("edges: {}", stats.edges);
            println!("multi-parent nodes: {}", stats.multi_parent);
            println!("leaves: {}", stats.leaves);
            println!("max depth: {}", stats.max_depth);
            println!("tree: {}", if is_tree { "yes" } else { "no" });
            if acyclic {
                println!("acyclic: yes");
            }
        }
    }

    Ok(())
}
