//! Build orchestration logic
//!
//! A [`Builder`] collects the packages to compile and the dependencies they
//! need, then runs a single build: write `Build/build.ini`, clean stale
//! artifacts, invoke UCC.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;

use crate::config::defaults::{
    base_edit_packages, BUILD_DIR, BUILD_INI, COMPILER_EXE, PACKAGE_EXT, SYSTEM_DIR,
};
use crate::core::build_ini;
use crate::core::clean::clean_artifacts;
use crate::core::ini::Document;
use crate::error::BuildError;
use crate::infra::{compiler, filesystem};

/// Package source directory under the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub path: PathBuf,
}

/// Outcome of a successful build
#[derive(Debug)]
pub struct BuildReport {
    /// Generated compiler configuration
    pub config_path: PathBuf,
    /// Stale artifacts removed before compiling
    pub removed: Vec<PathBuf>,
}

/// Reject names that would resolve outside their directory
fn check_name(name: &str) -> Result<(), BuildError> {
    if Path::new(name).file_name() == Some(OsStr::new(name)) {
        Ok(())
    } else {
        Err(BuildError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// Build orchestrator state
#[derive(Debug, Clone)]
pub struct Builder {
    root: PathBuf,
    system_dir: PathBuf,
    ucc_path: PathBuf,
    base_packages: Vec<String>,
    packages: Vec<Package>,
    dependencies: Vec<String>,
}

impl Builder {
    /// Create a builder for the UT2004 installation at `root`
    ///
    /// The root is valid if it contains `System/UCC.exe`. Nothing is written
    /// to disk.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, BuildError> {
        let root = root.as_ref();
        let invalid = || BuildError::InvalidRoot {
            path: root.to_path_buf(),
        };

        let abs_root = std::path::absolute(root).map_err(|_| invalid())?;
        let system_dir = abs_root.join(SYSTEM_DIR);
        let ucc_path = system_dir.join(COMPILER_EXE);

        if !ucc_path.is_file() {
            return Err(invalid());
        }

        Ok(Self {
            root: abs_root,
            system_dir,
            ucc_path,
            base_packages: base_edit_packages(),
            packages: Vec::new(),
            dependencies: Vec::new(),
        })
    }

    /// Replace the stock packages that precede dependencies in `EditPackages`
    #[must_use]
    pub fn with_base_packages(mut self, packages: Vec<String>) -> Self {
        self.base_packages = packages;
        self
    }

    /// Add a compiled package that the targets depend on
    ///
    /// `System/<name>.u` must exist.
    pub fn add_dependency(&mut self, name: &str) -> Result<(), BuildError> {
        check_name(name)?;
        let path = self.system_dir.join(format!("{name}.{PACKAGE_EXT}"));
        if !path.is_file() {
            return Err(BuildError::DependencyNotFound {
                name: name.to_string(),
                path,
            });
        }

        tracing::debug!("Adding dependency {name}");
        self.dependencies.push(name.to_string());
        Ok(())
    }

    /// Add a package to build from `<root>/<name>/`
    ///
    /// `name` must be a plain directory name, not a path.
    pub fn add_package(&mut self, name: &str) -> Result<(), BuildError> {
        check_name(name)?;
        let path = self.root.join(name);
        if !path.is_dir() {
            return Err(BuildError::InvalidPackage { path });
        }

        tracing::debug!("Adding package {name} from {}", path.display());
        self.packages.push(Package {
            name: name.to_string(),
            path,
        });
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn system_dir(&self) -> &Path {
        &self.system_dir
    }

    pub fn ucc_path(&self) -> &Path {
        &self.ucc_path
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.join(BUILD_DIR)
    }

    pub fn config_path(&self) -> PathBuf {
        self.build_dir().join(BUILD_INI)
    }

    /// Base packages, then dependencies, then targets, in insertion order
    pub fn edit_packages(&self) -> Vec<String> {
        self.base_packages
            .iter()
            .chain(&self.dependencies)
            .chain(self.packages.iter().map(|p| &p.name))
            .cloned()
            .collect()
    }

    /// Compiler configuration for the current package set
    pub fn config(&self) -> Document {
        build_ini::generate(self.edit_packages())
    }

    /// Run the build
    ///
    /// Stops at the first failure. Once `cancel` fires no further step runs
    /// and a running compiler is killed.
    pub async fn build(&self, cancel: &CancellationToken) -> Result<BuildReport, BuildError> {
        let check_cancelled = || {
            if cancel.is_cancelled() {
                Err(BuildError::Cancelled)
            } else {
                Ok(())
            }
        };

        check_cancelled()?;
        let build_dir = self.build_dir();
        filesystem::create_dir_all(&build_dir)?;

        let config_path = self.config_path();
        tracing::info!("Writing {}", config_path.display());
        filesystem::write_ini(&config_path, &self.config())?;

        check_cancelled()?;
        let cleaned = clean_artifacts(
            &self.system_dir,
            self.packages.iter().map(|p| p.name.as_str()),
        )?;
        tracing::info!(
            "Removed {} stale artifacts ({} not present)",
            cleaned.removed.len(),
            cleaned.skipped.len()
        );

        check_cancelled()?;
        tracing::info!("Compiling {} packages", self.packages.len());
        compiler::run_make(&self.ucc_path, &self.system_dir, &config_path, cancel).await?;

        Ok(BuildReport {
            config_path,
            removed: cleaned.removed,
        })
    }
}
