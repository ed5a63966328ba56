use crate::models::error::AssemblyError;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use std::fs;
use walkdir::WalkDir;

pub struct FileUtils;

impl FileUtils {
    /// Recursively copies a directory tree from source to destination.
    /// Existing files at the same relative paths are overwritten, everything
    /// else already in the destination is left alone.
    pub fn copy_recursive(src: &Utf8Path, dst: &Utf8Path) -> Result<(), AssemblyError> {
        fs::create_dir_all(dst).map_err(|e| AssemblyError::unwritable(dst, e))?;

        for entry in WalkDir::new(src).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().map(|p| p.to_string_lossy().into_owned());
                AssemblyError::unreadable(path.unwrap_or_else(|| src.to_string()), e.into())
            })?;
            let src_path = Self::utf8(entry.path())?;

            let rel_path = src_path
                .strip_prefix(src)
                .map_err(|_| AssemblyError::InvalidPath {
                    path: src_path.to_string(),
                })?;
            let dst_path = dst.join(rel_path);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&dst_path).map_err(|e| AssemblyError::unwritable(&dst_path, e))?;
            } else {
                Self::copy_file(src_path, &dst_path)?;
            }
        }

        Ok(())
    }

    fn copy_file(src: &Utf8Path, dst: &Utf8Path) -> Result<(), AssemblyError> {
        // Open first so a bad source is not blamed on the target.
        fs::File::open(src).map_err(|e| AssemblyError::unreadable(src, e))?;

        if let Some(parent) = dst.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| AssemblyError::unwritable(parent, e))?;
            }
        }

        // Note: this overwrites existing files and carries over permission bits.
        fs::copy(src, dst).map_err(|e| AssemblyError::unwritable(dst, e))?;
        Ok(())
    }

    /// Removes a file if it exists. Returns whether something was removed.
    pub fn remove_if_file(path: &Utf8Path) -> Result<bool, AssemblyError> {
        if !path.is_file() {
            return Ok(false);
        }
        fs::remove_file(path).map_err(|e| AssemblyError::unwritable(path, e))?;
        Ok(true)
    }

    /// Names of the immediate subdirectories of `root`, sorted.
    pub fn list_subdirs(root: &Utf8Path) -> Result<Vec<String>, AssemblyError> {
        let mut names = Vec::new();

        for entry in fs::read_dir(root).map_err(|e| AssemblyError::unreadable(root, e))? {
            let entry = entry.map_err(|e| AssemblyError::unreadable(root, e))?;
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().into_string().map_err(|n| AssemblyError::InvalidPath {
                path: n.to_string_lossy().into_owned(),
            })?;
            names.push(name);
        }

        names.sort();
        Ok(names)
    }

    /// Canonical form of `path`, which need not exist yet: the deepest existing
    /// ancestor is canonicalized and the missing tail is appended to it.
    pub fn resolve(path: &Utf8Path) -> Result<Utf8PathBuf, AssemblyError> {
        let absolute = if path.is_absolute() {
            path.to_owned()
        } else {
            let cwd = std::env::current_dir().map_err(|e| AssemblyError::unreadable(".", e))?;
            Self::utf8_buf(cwd)?.join(path)
        };

        for existing in absolute.ancestors() {
            if !existing.exists() {
                continue;
            }
            let canonical =
                dunce::canonicalize(existing).map_err(|e| AssemblyError::unreadable(existing, e))?;
            let tail = absolute.strip_prefix(existing).map_err(|_| AssemblyError::InvalidPath {
                path: absolute.to_string(),
            })?;
            let mut resolved = Self::utf8_buf(canonical)?;
            for component in tail.components() {
                match component {
                    Utf8Component::ParentDir => {
                        resolved.pop();
                    }
                    Utf8Component::CurDir => {}
                    other => resolved.push(other.as_str()),
                }
            }
            return Ok(resolved);
        }

        Ok(absolute)
    }

    pub fn utf8(path: &std::path::Path) -> Result<&Utf8Path, AssemblyError> {
        Utf8Path::from_path(path).ok_or_else(|| AssemblyError::InvalidPath {
            path: path.to_string_lossy().into_owned(),
        })
    }

    pub fn utf8_buf(path: std::path::PathBuf) -> Result<Utf8PathBuf, AssemblyError> {
        Utf8PathBuf::from_path_buf(path).map_err(|p| AssemblyError::InvalidPath {
            path: p.to_string_lossy().into_owned(),
        })
    }
}
