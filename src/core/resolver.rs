use crate::core::catalog::ModCatalog;
use crate::core::merge;
use crate::core::mod_fs::ModFS;
use crate::models::error::AssemblyError;
use crate::models::variant::TargetVariant;
use camino::Utf8Path;
use tracing::{debug, info};

/// Mods merged into the current target during one run.
///
/// `enabled` only grows. `visiting` holds the mods on the active recursion
/// stack and is empty again whenever a top-level install returns.
#[derive(Default, Clone, Debug)]
pub struct InstallState {
    enabled: Vec<String>,
    visiting: Vec<String>,
}

impl InstallState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.iter().any(|m| m == name)
    }

    /// Installed mods in first-installed-first order.
    pub fn enabled(&self) -> &[String] {
        &self.enabled
    }

    pub fn into_enabled(self) -> Vec<String> {
        self.enabled
    }
}

/// Everything a resolution needs besides the mod name and the state.
pub struct Resolver<'a> {
    pub catalog: &'a ModCatalog,
    pub target: &'a Utf8Path,
    pub variant: TargetVariant,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a ModCatalog, target: &'a Utf8Path, variant: TargetVariant) -> Self {
        Self {
            catalog,
            target,
            variant,
        }
    }

    /// Installs `name` and its transitive dependencies into the target.
    ///
    /// Returns the names added by this call, dependencies first. A mod that
    /// is already enabled, or not eligible for the variant, yields nothing.
    pub fn install_mod(
        &self,
        name: &str,
        state: &mut InstallState,
    ) -> Result<Vec<String>, AssemblyError> {
        if state.is_enabled(name) {
            return Ok(Vec::new());
        }

        if state.visiting.iter().any(|m| m == name) {
            let mut chain = state.visiting.clone();
            chain.push(name.to_string());
            return Err(AssemblyError::CyclicDependency {
                chain: chain.join(" -> "),
            });
        }

        let source = self.catalog.locate(name)?;
        let descriptor = ModFS::load(&source)?;

        if !ModFS::supports(&descriptor, self.variant) {
            debug!("Excluding '{}': not a {} mod", name, self.variant);
            return Ok(Vec::new());
        }

        state.visiting.push(name.to_string());
        let result = self.install_eligible(name, &source, &descriptor.dependencies, state);
        state.visiting.pop();
        let mut added = result?;

        state.enabled.push(name.to_string());
        added.push(name.to_string());
        info!("Added mod: {}", name);
        Ok(added)
    }

    fn install_eligible(
        &self,
        name: &str,
        source: &Utf8Path,
        dependencies: &[String],
        state: &mut InstallState,
    ) -> Result<Vec<String>, AssemblyError> {
        let mut added = Vec::new();

        for dependency in dependencies {
            added.extend(self.install_mod(dependency, state)?);

            if !added.contains(dependency) && !state.is_enabled(dependency) {
                return Err(AssemblyError::UnsatisfiedDependency {
                    dependency: dependency.clone(),
                    required_by: name.to_string(),
                });
            }
        }

        merge::merge(source, self.target)?;
        Ok(added)
    }
}
