//! Build command implementation
//!
//! Implements `ut2u build` to compile one or more packages with UCC.
//!
//! Package paths are made absolute and the UT2004 root is taken to be the
//! parent of the first one, so packages must live directly under the root.

use anyhow::{anyhow, Context, Result};
use std::path::{Component, Path, PathBuf};
use tokio_util::sync::CancellationToken;

use crate::cli::output::status;
use crate::core::builder::Builder;
use crate::core::global_config::GlobalConfig;
use crate::infra::dirs::Ut2uDirs;

/// Build options
pub struct BuildOptions {
    /// Package directories; empty means the current directory
    pub paths: Vec<PathBuf>,
    /// Extra compiled dependencies
    pub dependencies: Vec<String>,
    /// Print the generated config and stop
    pub dry_run: bool,
}

/// Execute the build command
pub async fn execute(current_dir: &Path, options: BuildOptions) -> Result<()> {
    let config = GlobalConfig::load(&Ut2uDirs::new()).context("Failed to load config")?;
    let builder = prepare(current_dir, &options, &config)?;

    if options.dry_run {
        print!("{}", builder.config());
        return Ok(());
    }

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    let listener = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });

    let result = builder.build(&cancel).await;
    listener.abort();
    let report = result.context("Build failed")?;

    for path in &report.removed {
        tracing::info!("Removed stale {}", path.display());
    }
    println!(
        "{} Built {}",
        status::SUCCESS,
        builder
            .packages()
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}

/// Resolve paths and set up a builder with all packages and dependencies
pub fn prepare(
    current_dir: &Path,
    options: &BuildOptions,
    config: &GlobalConfig,
) -> Result<Builder> {
    let packages = resolve_package_paths(current_dir, &options.paths);

    let root = packages
        .first()
        .and_then(|p| p.parent())
        .ok_or_else(|| anyhow!("No packages defined"))?;
    tracing::info!("Root: {}", root.display());

    let mut builder = Builder::new(root)?.with_base_packages(config.base_packages());

    for dep in config.dependencies().iter().chain(&options.dependencies) {
        builder.add_dependency(dep)?;
    }

    for path in &packages {
        let name = package_name(path)?;
        builder.add_package(name)?;
    }

    Ok(builder)
}

/// Absolute, lexically cleaned package paths; the current directory if none given
fn resolve_package_paths(current_dir: &Path, paths: &[PathBuf]) -> Vec<PathBuf> {
    if paths.is_empty() {
        return vec![clean_path(current_dir)];
    }

    paths
        .iter()
        .map(|p| clean_path(&current_dir.join(p)))
        .collect()
}

/// Final path component as a package name
fn package_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("Cannot determine package name from {}", path.display()))
}

/// Remove `.` components and resolve `..` against the preceding component
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{EDIT_PACKAGES_KEY, EDIT_PACKAGES_SECTION};
    use crate::core::global_config::BuildConfig;
    use crate::error::BuildError;
    use tempfile::TempDir;

    fn create_root() -> TempDir {
        let root = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir_all(root.path().join("System")).unwrap();
        std::fs::write(root.path().join("System/UCC.exe"), "").unwrap();
        std::fs::create_dir(root.path().join("MyMutator")).unwrap();
        root
    }

    fn options(paths: &[&str], deps: &[&str]) -> BuildOptions {
        BuildOptions {
            paths: paths.iter().map(PathBuf::from).collect(),
            dependencies: deps.iter().map(|d| (*d).to_string()).collect(),
            dry_run: false,
        }
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(
            clean_path(Path::new("/ut/MyMutator/./../Other/.")),
            PathBuf::from("/ut/Other")
        );
    }

    #[test]
    fn test_resolve_defaults_to_current_dir() {
        let paths = resolve_package_paths(Path::new("/ut/MyMutator"), &[]);
        assert_eq!(paths, [PathBuf::from("/ut/MyMutator")]);
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let paths = resolve_package_paths(
            Path::new("/ut"),
            &[PathBuf::from("MyMutator"), PathBuf::from("/ut/Other/")],
        );
        assert_eq!(
            paths,
            [PathBuf::from("/ut/MyMutator"), PathBuf::from("/ut/Other")]
        );
    }

    #[test]
    fn test_prepare_from_package_dir() {
        let root = create_root();
        let pkg_dir = root.path().join("MyMutator");

        let builder = prepare(&pkg_dir, &options(&[], &[]), &GlobalConfig::default()).unwrap();

        assert_eq!(builder.root(), root.path());
        assert_eq!(builder.packages()[0].name, "MyMutator");
    }

    #[test]
    fn test_prepare_dot_path() {
        let root = create_root();
        let pkg_dir = root.path().join("MyMutator");

        let builder = prepare(&pkg_dir, &options(&["."], &[]), &GlobalConfig::default()).unwrap();

        assert_eq!(builder.packages()[0].name, "MyMutator");
    }

    #[test]
    fn test_prepare_config_dependencies_come_first() {
        let root = create_root();
        std::fs::write(root.path().join("System/FromConfig.u"), "").unwrap();
        std::fs::write(root.path().join("System/FromCli.u"), "").unwrap();
        let config = GlobalConfig {
            build: BuildConfig {
                base_packages: Some(vec!["Core".to_string()]),
                dependencies: Some(vec!["FromConfig".to_string()]),
            },
        };

        let builder = prepare(root.path(), &options(&["MyMutator"], &["FromCli"]), &config).unwrap();

        assert_eq!(
            builder
                .config()
                .values(EDIT_PACKAGES_SECTION, EDIT_PACKAGES_KEY)
                .unwrap(),
            ["Core", "FromConfig", "FromCli", "MyMutator"]
        );
    }

    #[test]
    fn test_prepare_missing_dependency() {
        let root = create_root();

        let err = prepare(
            root.path(),
            &options(&["MyMutator"], &["Missing"]),
            &GlobalConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::DependencyNotFound { .. })
        ));
    }

    #[test]
    fn test_prepare_invalid_root() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("MyMutator")).unwrap();

        let err = prepare(
            temp.path(),
            &options(&["MyMutator"], &[]),
            &GlobalConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::InvalidRoot { .. })
        ));
    }
}
