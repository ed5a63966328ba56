use crate::models::error::AssemblyError;
use crate::models::paths::{is_override_folder, CHANGELOG_MARKER};
use crate::utils::file::FileUtils;
use camino::Utf8Path;
use tracing::debug;

/// Merges every immediate subdirectory of a mod's source into `target`.
///
/// Override folders (`config`, `defaultconfigs`) only ship when they carry a
/// changelog marker, and the marker itself is removed from the target copy.
/// Loose files at the top of the mod (such as `data.json`) are never copied.
pub fn merge(source: &Utf8Path, target: &Utf8Path) -> Result<(), AssemblyError> {
    for name in FileUtils::list_subdirs(source)? {
        let src = source.join(&name);
        let dst = target.join(&name);

        if !is_override_folder(&name) {
            FileUtils::copy_recursive(&src, &dst)?;
            continue;
        }

        if !src.join(CHANGELOG_MARKER).is_file() {
            debug!("Skipping '{}' in {}: no {}", name, source, CHANGELOG_MARKER);
            continue;
        }

        FileUtils::copy_recursive(&src, &dst)?;
        FileUtils::remove_if_file(&dst.join(CHANGELOG_MARKER))?;
    }

    Ok(())
}

/// Whole-tree merge for static content (core files, resource and shader packs).
/// No override-folder handling applies here.
pub fn merge_tree(source: &Utf8Path, target: &Utf8Path) -> Result<(), AssemblyError> {
    FileUtils::copy_recursive(source, target)
}
