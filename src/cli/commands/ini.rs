//! CLI implementation for `ut2u ini` commands

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::ini::Document;

/// Load and parse an INI file
pub fn load(path: &Path) -> Result<Document> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Document::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Execute `ut2u ini get`
pub fn execute_get(path: &Path, section: &str, key: &str) -> Result<()> {
    let doc = load(path)?;

    let Some(values) = doc.values(section, key) else {
        bail!("Key '{key}' not found in section [{section}] of {}", path.display());
    };

    for value in values {
        println!("{value}");
    }

    Ok(())
}
