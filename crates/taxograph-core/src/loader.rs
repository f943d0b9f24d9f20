//! Load a taxonomy document into a graph and run the startup diagnostics

use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::error::{Result, TaxoError};
use crate::graph::{build_with, BuildOptions, Graph};
use crate::source::XmlReader;
use crate::trace_time;

impl From<&Config> for BuildOptions {
    fn from(config: &Config) -> Self {
        BuildOptions {
            dedup_child_ids: config.graph.dedup_child_ids,
        }
    }
}

/// Read the XML document at `path` and build its graph
#[tracing::instrument(skip(config), fields(path = %path.display()))]
pub fn load_graph(path: &Path, config: &Config) -> Result<Graph> {
    let start = Instant::now();

    tracing::info!("reading structure and populating graph");
    let root = XmlReader::from_config(config).read_file(path)?;
    trace_time!(start, "read_source");

    let graph = build_with(&root, &BuildOptions::from(config));
    trace_time!(start, "build_graph", nodes = graph.len());

    check_shape(&graph, config)?;
    trace_time!(start, "check_shape");

    Ok(graph)
}

/// Startup diagnostics: warn on multi-parent nodes, optionally verify acyclicity
pub fn check_shape(graph: &Graph, config: &Config) -> Result<()> {
    tracing::info!(nodes = graph.len(), "analysing graph");

    if !graph.is_single_parent_tree() {
        tracing::warn!(
            multi_parent = graph.multi_parent_nodes().len(),
            "graph is not a tree, nodes have multiple parents"
        );
    }

    if config.graph.check_acyclic {
        if let Some(id) = graph.find_cycle() {
            return Err(TaxoError::CycleDetected { id });
        }
        tracing::info!("no circular dependencies found");
    } else {
        tracing::debug!("acyclicity not checked, assuming DAG");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"<ImageNetStructure>
<synset wnid="a"><synset wnid="x"><synset wnid="y"/></synset></synset>
<synset wnid="b"><synset wnid="x"><synset wnid="y"/></synset></synset>
</ImageNetStructure>"#;

    #[test]
    fn test_load_graph() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("structure.xml");
        fs::write(&path, SAMPLE).unwrap();

        let graph = load_graph(&path, &Config::default()).unwrap();
        assert_eq!(graph.len(), 5);
        assert_eq!(graph.lookup("x").unwrap().child_ids, vec!["y", "y"]);
        assert_eq!(graph.depth("y").unwrap(), 3);
    }

    #[test]
    fn test_load_graph_dedup_from_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("structure.xml");
        fs::write(&path, SAMPLE).unwrap();

        let mut config = Config::default();
        config.graph.dedup_child_ids = true;
        config.graph.check_acyclic = true;

        let graph = load_graph(&path, &config).unwrap();
        assert_eq!(graph.lookup("x").unwrap().child_ids, vec!["y"]);
    }

    #[test]
    fn test_check_shape_rejects_cycle_when_enabled() {
        // Identity merging turns a self-nested identifier into a cycle
        let root = XmlReader::default()
            .read_str(r#"<r><synset wnid="a"><synset wnid="a"/></synset></r>"#)
            .unwrap();
        let graph = crate::graph::build(&root);

        assert!(check_shape(&graph, &Config::default()).is_ok());

        let mut config = Config::default();
        config.graph.check_acyclic = true;
        assert!(matches!(
            check_shape(&graph, &config),
            Err(TaxoError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_load_graph_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_graph(&dir.path().join("none.xml"), &Config::default()).unwrap_err();
        assert!(matches!(err, TaxoError::ReadFile { .. }));
    }
}
