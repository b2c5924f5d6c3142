//! UCC compiler invocation
//!
//! Runs `UCC.exe make -ini=<file>` from the system directory. UCC resolves
//! every path relative to its working directory, so the child must start in
//! `System/`. Output goes straight to the terminal.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::config::defaults::COMPILER_MAKE;
use crate::error::BuildError;

/// Spawn attempts while the executable is still open for writing elsewhere
const SPAWN_ATTEMPTS: u32 = 5;

/// Delay before the first retry, doubled on each attempt
const SPAWN_RETRY_DELAY: Duration = Duration::from_millis(50);

/// `-ini=<file>` argument, keeping the path bytes intact
fn ini_arg(ini: &Path) -> OsString {
    let mut arg = OsString::from("-ini=");
    arg.push(ini);
    arg
}

/// Build the `make` command line for the compiler
pub fn make_command(ucc: &Path, system_dir: &Path, ini: &Path) -> Command {
    let mut command = Command::new(ucc);
    command
        .arg(COMPILER_MAKE)
        .arg(ini_arg(ini))
        .current_dir(system_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);
    command
}

/// Run the compiler and wait for it, killing it if `cancel` fires first
pub async fn run_make(
    ucc: &Path,
    system_dir: &Path,
    ini: &Path,
    cancel: &CancellationToken,
) -> Result<(), BuildError> {
    let spawn_error = |e: std::io::Error| BuildError::Spawn {
        path: ucc.to_path_buf(),
        error: e.to_string(),
    };

    let mut command = make_command(ucc, system_dir, ini);
    tracing::debug!("Running command: {:?}", command);

    let mut delay = SPAWN_RETRY_DELAY;
    let mut attempt = 1;
    let mut child = loop {
        match command.spawn() {
            Ok(child) => break child,
            // A freshly written executable can stay busy until every writer closes it
            Err(e) if e.kind() == ErrorKind::ExecutableFileBusy && attempt < SPAWN_ATTEMPTS => {
                tracing::debug!("Compiler busy, retrying in {delay:?}");
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(e) => return Err(spawn_error(e)),
        }
    };

    tokio::select! {
        status = child.wait() => {
            let status = status.map_err(spawn_error)?;
            if status.success() {
                Ok(())
            } else {
                Err(BuildError::CompilerFailed { status })
            }
        }
        () = cancel.cancelled() => {
            tracing::info!("Interrupted, stopping compiler");
            if let Err(e) = child.kill().await {
                tracing::warn!("Failed to kill compiler: {e}");
            }
            Err(BuildError::Cancelled)
        }
    }
}
