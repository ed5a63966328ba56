use crate::core::catalog::ModCatalog;
use crate::core::install_root::InstallRootResolver;
use crate::core::merge;
use crate::core::resolver::{InstallState, Resolver};
use crate::models::error::AssemblyError;
use crate::models::paths::{ProjectPaths, TargetPaths};
use crate::models::report::AssemblyReport;
use crate::models::variant::TargetVariant;
use crate::utils::file::FileUtils;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{info, warn};

/// Drives one assembly run for a single variant.
pub struct Assembly {
    pub root: Utf8PathBuf,
    pub project: ProjectPaths,
    pub variant: TargetVariant,
    pub target: Utf8PathBuf,
}

impl Assembly {
    /// Targets `<launcher>/<instances|servers>/<project name>`.
    pub fn new(
        project_root: &Utf8Path,
        variant: TargetVariant,
        install_root: &dyn InstallRootResolver,
    ) -> Result<Self, AssemblyError> {
        let launcher_root = install_root.resolve_install_root()?;
        let project_name = Self::project_name(project_root)?;
        let target = variant.launcher_dir(&launcher_root).join(project_name);
        Ok(Self::with_target(project_root, variant, target))
    }

    pub fn with_target(project_root: &Utf8Path, variant: TargetVariant, target: Utf8PathBuf) -> Self {
        Self {
            root: project_root.to_owned(),
            project: ProjectPaths::new(project_root),
            variant,
            target,
        }
    }

    pub fn project_name(project_root: &Utf8Path) -> Result<String, AssemblyError> {
        let canonical = dunce::canonicalize(project_root)
            .map_err(|e| AssemblyError::unreadable(project_root, e))?;
        let canonical = FileUtils::utf8_buf(canonical)?;

        canonical
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AssemblyError::InvalidPath {
                path: canonical.to_string(),
            })
    }

    pub fn run(&self) -> Result<AssemblyReport, AssemblyError> {
        info!("Project directory: {}", self.root);
        self.check_target()?;
        self.prepare_target()?;
        self.add_core_files()?;

        let catalog = ModCatalog::from_project(&self.project)?;
        let installed = self.add_mods(&catalog)?;
        info!("Total mods added: {}", installed.len());

        if self.variant.ships_packs() {
            self.add_packs()?;
        }

        let unused = catalog.unused(&installed);
        if !unused.is_empty() {
            warn!(
                "The following mods included in the project are not required: {:?}",
                unused
            );
        }

        Ok(AssemblyReport {
            variant: self.variant,
            target: self.target.clone(),
            installed,
            unused,
        })
    }

    /// Refuses targets that would wipe project sources, or that sit in the
    /// launcher folder of the other variant.
    pub fn check_target(&self) -> Result<(), AssemblyError> {
        let project = FileUtils::resolve(&self.root)?;
        let target = FileUtils::resolve(&self.target)?;

        if target.starts_with(&project) || project.starts_with(&target) {
            return Err(AssemblyError::TargetOverlapsProject { target, project });
        }

        match TargetVariant::infer(&target) {
            Some(inferred) if inferred != self.variant => Err(AssemblyError::VariantMismatch {
                target,
                inferred,
                requested: self.variant,
            }),
            _ => Ok(()),
        }
    }

    fn prepare_target(&self) -> Result<(), AssemblyError> {
        if self.target.exists() {
            std::fs::remove_dir_all(&self.target)
                .map_err(|e| AssemblyError::unwritable(&self.target, e))?;
            info!("Removed existing {} directory", self.variant);
        }
        std::fs::create_dir_all(&self.target)
            .map_err(|e| AssemblyError::unwritable(&self.target, e))?;
        info!("Target directory: {}", self.target);
        Ok(())
    }

    fn add_core_files(&self) -> Result<(), AssemblyError> {
        let core = match self.variant {
            TargetVariant::Client => &self.project.instance_core,
            TargetVariant::Server => &self.project.server_core,
        };
        if !core.is_dir() {
            return Err(AssemblyError::unreadable(
                core,
                std::io::Error::new(std::io::ErrorKind::NotFound, "core directory missing"),
            ));
        }

        merge::merge_tree(core, &self.target)?;
        info!("Added core {} files", self.variant);

        if FileUtils::remove_if_file(&TargetPaths::new(&self.target).config_changelog)? {
            info!("Removed core config changelog file from target");
        }
        Ok(())
    }

    fn add_mods(&self, catalog: &ModCatalog) -> Result<Vec<String>, AssemblyError> {
        let resolver = Resolver::new(catalog, &self.target, self.variant);
        let mut state = InstallState::new();

        for name in catalog.content_mods() {
            resolver.install_mod(name, &mut state)?;
        }

        Ok(state.into_enabled())
    }

    fn add_packs(&self) -> Result<(), AssemblyError> {
        let target = TargetPaths::new(&self.target);
        let packs = [
            (&self.project.resource_packs, &target.resource_packs, "resource pack"),
            (&self.project.shader_packs, &target.shader_packs, "shader pack"),
        ];

        for (src, dst, label) in packs {
            if !src.is_dir() {
                warn!("No {} directory at {}, skipping", label, src);
                continue;
            }
            merge::merge_tree(src, dst)?;
            info!("Added {} files", label);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_name_uses_canonical_directory_name() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
        let project = root.join("My Pack");
        std::fs::create_dir_all(project.join("nested")).unwrap();

        assert_eq!(Assembly::project_name(&project).unwrap(), "My Pack");
        assert_eq!(
            Assembly::project_name(&project.join("nested").join("..")).unwrap(),
            "My Pack"
        );
    }
}
