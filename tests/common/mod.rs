//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Scratch UT2004 installation
///
/// Creates a temporary root with a `System/` directory and provides
/// utilities for setting up build scenarios.
pub struct TestRoot {
    /// Temporary directory acting as the UT2004 root
    pub dir: TempDir,
    /// Temporary directory used as the ut2u config dir
    pub config_dir: TempDir,
}

impl TestRoot {
    /// Create a root with an empty `System/` directory and no compiler
    pub fn new() -> Self {
        let root = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            config_dir: TempDir::new().expect("Failed to create temp directory"),
        };
        root.create_dir("System");
        root
    }

    /// Create a root whose `System/UCC.exe` is the compiler stub
    #[allow(dead_code)]
    pub fn with_stub_compiler() -> Self {
        let root = Self::new();
        std::fs::copy(env!("CARGO_BIN_EXE_ucc-stub"), root.compiler_path())
            .expect("Failed to install compiler stub");
        root
    }

    /// Create a root whose `System/UCC.exe` is a shell script
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn with_script_compiler(script: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let root = Self::new();
        let path = root.compiler_path();
        std::fs::write(&path, script).expect("Failed to write compiler script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make compiler script executable");
        root
    }

    /// Get the path to the root
    #[allow(dead_code)]
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Get the path to `System/`
    pub fn system_dir(&self) -> PathBuf {
        self.dir.path().join("System")
    }

    /// Get the path to `System/UCC.exe`
    pub fn compiler_path(&self) -> PathBuf {
        self.system_dir().join("UCC.exe")
    }

    /// Create a package source directory with one class file
    #[allow(dead_code)]
    pub fn create_package(&self, name: &str) -> PathBuf {
        self.create_file(
            &format!("{name}/Classes/{name}.uc"),
            &format!("class {name} extends Mutator;\n"),
        );
        self.dir.path().join(name)
    }

    /// Create a compiled dependency in `System/`
    #[allow(dead_code)]
    pub fn create_dependency(&self, name: &str) {
        self.create_file(&format!("System/{name}.u"), "compiled");
    }

    /// Create a file under the root
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory under the root
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists under the root
    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file under the root
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Write the ut2u global config
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write config");
    }

    /// Run the ut2u binary in `dir` with an isolated config directory
    #[allow(dead_code)]
    pub fn run_ut2u(&self, dir: &Path, args: &[&str]) -> std::process::Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ut2u"));
        cmd.current_dir(dir);
        cmd.env("UT2U_CONFIG_DIR", self.config_dir.path());
        cmd.env_remove("RUST_LOG");
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute ut2u")
    }
}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}

/// Package used by the end-to-end scenarios
#[allow(dead_code)]
pub const EXAMPLE_PACKAGE: &str = "ExamplePackage";
