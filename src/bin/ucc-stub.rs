//! Stand-in for `UCC.exe` used by the integration tests
//!
//! Understands `make -ini=<file>`: reads `EditPackages` from the given file
//! and, for every package that is not a stock UT2004 package, writes dummy
//! `<name>.u` and `<name>.ucl` files into the working directory. The ini path
//! it was given is recorded in `make.log`.
//!
//! Exit codes: 1 unknown command, 2 unreadable ini, 3 no `EditPackages`,
//! 4 no custom packages.

use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use ut2u::config::defaults::{
    BASE_EDIT_PACKAGES, EDIT_PACKAGES_KEY, EDIT_PACKAGES_SECTION,
};
use ut2u::core::ini::Document;

/// Artifacts written for each compiled package
const MAKE_EXTENSIONS: &[&str] = &["u", "ucl"];

/// Path from a `-ini=<file>` argument, bytes preserved
#[cfg(unix)]
fn ini_path(arg: &OsStr) -> Option<PathBuf> {
    use std::os::unix::ffi::OsStrExt;

    arg.as_bytes()
        .strip_prefix(b"-ini=")
        .map(|path| PathBuf::from(OsStr::from_bytes(path)))
}

#[cfg(not(unix))]
fn ini_path(arg: &OsStr) -> Option<PathBuf> {
    arg.to_str()?.strip_prefix("-ini=").map(PathBuf::from)
}

fn main() -> ExitCode {
    let mut args = std::env::args_os().skip(1);

    let command = args.next().unwrap_or_default();
    if !command.eq_ignore_ascii_case("make") {
        println!("Unknown command: {}", command.to_string_lossy());
        return ExitCode::from(1);
    }

    let ini_file = args.find_map(|arg| ini_path(&arg)).unwrap_or_default();

    println!("Processing {}", ini_file.display());
    if let Err(e) = std::fs::write("make.log", ini_file.as_os_str().as_encoded_bytes()) {
        println!("Failed to write make.log: {e}");
    }

    let doc = match File::open(&ini_file)
        .map_err(ut2u::error::IniError::from)
        .and_then(|f| Document::from_reader(BufReader::new(f)))
    {
        Ok(doc) => doc,
        Err(e) => {
            println!("Failed to parse {}: {e}", ini_file.display());
            return ExitCode::from(2);
        }
    };

    let Some(packages) = doc.values(EDIT_PACKAGES_SECTION, EDIT_PACKAGES_KEY) else {
        println!("No EditPackages found");
        return ExitCode::from(3);
    };

    let custom: Vec<&String> = packages
        .iter()
        .filter(|p| !BASE_EDIT_PACKAGES.contains(&p.as_str()))
        .collect();

    if custom.is_empty() {
        println!("No custom build packages defined");
        return ExitCode::from(4);
    }

    for package in custom {
        for ext in MAKE_EXTENSIONS {
            let file = format!("{package}.{ext}");
            match std::fs::write(&file, "Dummy file") {
                Ok(()) => println!("=> {file}"),
                Err(e) => println!("Failed to build {package}: {e}"),
            }
        }
    }

    ExitCode::SUCCESS
}
