//! Default configuration values
//!
//! Layout of a UT2004 installation and the fixed values written into the
//! generated `build.ini`.

/// Subdirectory of the root holding the engine binaries and compiled packages
pub const SYSTEM_DIR: &str = "System";

/// Compiler executable, relative to the system directory
pub const COMPILER_EXE: &str = "UCC.exe";

/// Subcommand passed to the compiler
pub const COMPILER_MAKE: &str = "make";

/// Directory under the root holding generated build files
pub const BUILD_DIR: &str = "Build";

/// Name of the generated compiler configuration
pub const BUILD_INI: &str = "build.ini";

/// Extension of a compiled package, used to validate dependencies
pub const PACKAGE_EXT: &str = "u";

/// Extensions of compiled artifacts removed before a rebuild
pub const ARTIFACT_EXTS: &[&str] = &["u", "ucl", "int"];

/// Section and key holding the ordered list of packages the compiler loads
pub const EDIT_PACKAGES_SECTION: &str = "Editor.EditorEngine";
pub const EDIT_PACKAGES_KEY: &str = "EditPackages";

/// Stock packages shipped with UT2004, in load order
pub const BASE_EDIT_PACKAGES: &[&str] = &[
    "Core",
    "Engine",
    "Fire",
    "Editor",
    "UnrealEd",
    "IpDrv",
    "UWeb",
    "GamePlay",
    "UnrealGame",
    "XGame_rc",
    "XEffects",
    "XWeapons_rc",
    "XPickups_rc",
    "XPickups",
    "XGame",
    "XWeapons",
    "XInterface",
    "XAdmin",
    "XWebAdmin",
    "Vehicles",
    "BonusPack",
    "SkaarjPack_rc",
    "SkaarjPack",
    "UTClassic",
    "UT2k4Assault",
    "Onslaught",
    "GUI2K4",
    "UT2k4AssaultFull",
    "OnslaughtFull",
    "xVoting",
    "StreamlineFX",
    "UTV2004c",
    "UTV2004s",
    "OnslaughtBP",
];

/// Owned copy of [`BASE_EDIT_PACKAGES`]
pub fn base_edit_packages() -> Vec<String> {
    BASE_EDIT_PACKAGES.iter().map(|s| (*s).to_string()).collect()
}
