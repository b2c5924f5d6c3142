//! Filesystem operations
//!
//! Thin wrappers that attach the offending path to build errors.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::ini::Document;
use crate::error::BuildError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), BuildError> {
    std::fs::create_dir_all(path).map_err(|e| BuildError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Write an INI document to `path`, replacing any existing file
pub fn write_ini(path: &Path, doc: &Document) -> Result<(), BuildError> {
    let write = || -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        doc.write_to(&mut writer)?;
        writer.flush()
    };

    write().map_err(|e| BuildError::WriteConfig {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a file, returning `false` if it did not exist
pub fn remove_file_if_exists(path: &Path) -> Result<bool, BuildError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(BuildError::RemoveArtifact {
            path: path.to_path_buf(),
            error: e.to_string(),
        }),
    }
}
