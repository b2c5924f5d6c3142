//! Generated compiler configuration
//!
//! UCC only compiles packages listed in `EditPackages`, and loads them in
//! list order. Everything except that list is fixed.

use crate::config::defaults::{EDIT_PACKAGES_KEY, EDIT_PACKAGES_SECTION};
use crate::core::ini::{Document, Section};

/// Search paths UCC uses to locate packages, maps and resources
const SEARCH_PATHS: &[&str] = &[
    "../System/*.u",
    "../Maps/*.ut2",
    "../Textures/*.utx",
    "../Sounds/*.uax",
    "../Music/*.umx",
    "../StaticMeshes/*.usx",
    "../Animations/*.ukx",
    "../Saves/*.uvx",
];

/// Render `build.ini` for the given ordered package list
pub fn generate<I, S>(edit_packages: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Document::new()
        .with_section(
            Section::new("Engine.Engine").with_value("EditorEngine", "Editor.EditorEngine"),
        )
        .with_section(
            Section::new("Core.System")
                .with_value("SavePath", "../Save")
                .with_value("CachePath", "../Cache")
                .with_value("CacheExt", ".uxx")
                .with_value("CacheRecordPath", "../System/*.ucl")
                .with_value("MusicPath", "../Music")
                .with_value("SpeechPath", "../Speech")
                .with_values("Paths", SEARCH_PATHS.iter().copied()),
        )
        .with_section(
            Section::new(EDIT_PACKAGES_SECTION)
                .with_value("CacheSizeMegs", "32")
                .with_values(EDIT_PACKAGES_KEY, edit_packages),
        )
}
