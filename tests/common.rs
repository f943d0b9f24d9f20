use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// root -> A -> B, root -> C -> B, plus an unrelated leaf D
pub const FIXTURE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ImageNetStructure>
<releaseData>fixture</releaseData>
<synset wnid="A" words="alpha" gloss="first branch">
  <synset wnid="B" words="beta"/>
</synset>
<synset wnid="C" words="gamma">
  <synset wnid="B" words="beta"/>
</synset>
<synset wnid="D" words="delta"/>
</ImageNetStructure>"#;

/// A taxograph command isolated from any user config file
pub fn taxograph(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("taxograph");
    cmd.env("TAXOGRAPH_CONFIG_DIR", config_dir)
        .env_remove("TAXOGRAPH_INPUT")
        .env_remove("RUST_LOG")
        .env_remove("TAXOGRAPH_LOG");
    cmd
}

/// Write the fixture document into `dir` and return its path
pub fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("structure.xml");
    fs::write(&path, FIXTURE_XML).expect("write fixture");
    path
}
