//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod ini;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a UT2004 mutator or mod
    Build {
        /// Package directories to build (defaults to the current directory)
        #[arg(value_name = "PKG_PATH")]
        paths: Vec<PathBuf>,

        /// Compiled package the build depends on (repeatable, comma-separated)
        #[arg(short = 'd', long = "dep", value_name = "DEP", value_delimiter = ',')]
        deps: Vec<String>,

        /// Print the generated build.ini instead of building
        #[arg(long)]
        dry_run: bool,
    },

    /// Inspect INI files
    Ini {
        #[command(subcommand)]
        command: IniCommands,
    },
}

/// INI subcommands
#[derive(Subcommand, Debug)]
pub enum IniCommands {
    /// Print every value of a key, one per line
    Get {
        /// INI file to read
        file: PathBuf,

        /// Section name (case-sensitive)
        section: String,

        /// Key name (case-insensitive)
        key: String,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Build {
                paths,
                deps,
                dry_run,
            } => {
                let current_dir = std::env::current_dir()?;
                let options = build::BuildOptions {
                    paths,
                    dependencies: deps,
                    dry_run,
                };
                build::execute(&current_dir, options).await
            }
            Self::Ini { command } => match command {
                IniCommands::Get { file, section, key } => {
                    ini::execute_get(&file, &section, &key)
                }
            },
        }
    }
}
