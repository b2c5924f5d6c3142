//! Clean logic
//!
//! Removes compiled artifacts of the packages being rebuilt from the system
//! directory. UCC refuses to rebuild a package whose `.u` file is already
//! present, so this must run before every build.

use std::path::{Path, PathBuf};

use crate::config::defaults::ARTIFACT_EXTS;
use crate::error::BuildError;
use crate::infra::filesystem;

/// Result of clean operation
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Files that were removed
    pub removed: Vec<PathBuf>,
    /// Files that didn't exist (skipped)
    pub skipped: Vec<PathBuf>,
}

/// Artifact paths for a package in the system directory
pub fn artifact_paths(system_dir: &Path, package: &str) -> Vec<PathBuf> {
    ARTIFACT_EXTS
        .iter()
        .map(|ext| system_dir.join(format!("{package}.{ext}")))
        .collect()
}

/// Remove every artifact of `packages` from `system_dir`
///
/// Missing files are skipped. Any other failure stops the clean and is
/// returned.
pub fn clean_artifacts<'a, I>(system_dir: &Path, packages: I) -> Result<CleanResult, BuildError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut result = CleanResult::default();

    for package in packages {
        for path in artifact_paths(system_dir, package) {
            if filesystem::remove_file_if_exists(&path)? {
                tracing::debug!("Removed {}", path.display());
                result.removed.push(path);
            } else {
                result.skipped.push(path);
            }
        }
    }

    Ok(result)
}
