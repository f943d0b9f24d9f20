//! Show command
use taxograph_core::error::Result;
use taxograph_core::graph::Graph;

use crate::cli::{Cli, OutputFormat};

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph, id: &str) -> Result<()> {
    let node = graph.lookup(id)?;
    let depth = graph.depth(id)?;

    match cli.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_value(node)?;
            if let Some(obj) = json.as_object_mut() {
                obj.insert("depth".to_string(), serde_json::json!(depth));
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            println!("{}", node.id);
            if let Some(words) = &node.words {
                println!("words: {}", words);
            }
            if let Some(gloss) = &node.gloss {
                println!("gloss: {}", gloss);
            }
            println!("depth: {}", depth);
            println!(
                "parents ({}): {}",
                node.parent_ids.len(),
                node.parent_ids.join(", ")
            );
            println!(
                "children ({}): {}",
                node.child_ids.len(),
                node.child_ids.join(", ")
            );
        }
    }

    Ok(())
}
