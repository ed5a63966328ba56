use crate::models::error::AssemblyError;
use crate::models::paths::ProjectPaths;
use crate::models::variant::ModPool;
use crate::utils::file::FileUtils;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// Read-only index of the mods available to a run.
#[derive(Clone, Debug)]
pub struct ModCatalog {
    content_root: Utf8PathBuf,
    dependency_root: Utf8PathBuf,
    content: Vec<String>,
    dependency: Vec<String>,
}

impl ModCatalog {
    /// Scans both pool roots for their immediate subdirectories.
    pub fn build(content_root: &Utf8Path, dependency_root: &Utf8Path) -> Result<Self, AssemblyError> {
        let content = FileUtils::list_subdirs(content_root)?;
        let dependency = FileUtils::list_subdirs(dependency_root)?;
        debug!(
            "Catalog: {} content mods, {} dependency mods",
            content.len(),
            dependency.len()
        );

        Ok(Self {
            content_root: content_root.to_owned(),
            dependency_root: dependency_root.to_owned(),
            content,
            dependency,
        })
    }

    pub fn from_project(project: &ProjectPaths) -> Result<Self, AssemblyError> {
        Self::build(&project.content_mods, &project.dependency_mods)
    }

    /// Source directory of `name`, preferring the content pool on collision.
    pub fn locate(&self, name: &str) -> Result<Utf8PathBuf, AssemblyError> {
        self.pool_of(name)
            .map(|pool| self.root(pool).join(name))
            .ok_or_else(|| AssemblyError::ModNotFound {
                name: name.to_string(),
            })
    }

    pub fn pool_of(&self, name: &str) -> Option<ModPool> {
        let has = |names: &[String]| names.iter().any(|n| n == name);

        if has(&self.content) {
            Some(ModPool::ContentEnabled)
        } else if has(&self.dependency) {
            Some(ModPool::Dependency)
        } else {
            None
        }
    }

    pub fn root(&self, pool: ModPool) -> &Utf8Path {
        match pool {
            ModPool::ContentEnabled => &self.content_root,
            ModPool::Dependency => &self.dependency_root,
        }
    }

    /// Top-level install candidates, in name order.
    pub fn content_mods(&self) -> &[String] {
        &self.content
    }

    pub fn dependency_mods(&self) -> &[String] {
        &self.dependency
    }

    /// Every name in either pool: content first, then dependency, without repeats.
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        self.content.iter().map(String::as_str).chain(
            self.dependency
                .iter()
                .filter(move |n| !self.content.contains(n))
                .map(String::as_str),
        )
    }

    /// Names in either pool that are not part of `enabled`.
    pub fn unused(&self, enabled: &[String]) -> Vec<String> {
        self.all_names()
            .filter(|n| !enabled.iter().any(|e| e == n))
            .map(str::to_string)
            .collect()
    }
}
