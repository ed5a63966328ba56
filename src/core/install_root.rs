use crate::config::AppSettings;
use crate::models::error::AssemblyError;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{info, warn};

/// Supplies the launcher install directory targets are assembled under.
pub trait InstallRootResolver {
    fn resolve_install_root(&self) -> Result<Utf8PathBuf, AssemblyError>;
}

/// An explicitly chosen launcher directory.
pub struct FixedInstallRoot(pub Utf8PathBuf);

impl InstallRootResolver for FixedInstallRoot {
    fn resolve_install_root(&self) -> Result<Utf8PathBuf, AssemblyError> {
        if !self.0.is_dir() {
            return Err(AssemblyError::InstallRootUnavailable {
                reason: format!("'{}' is not a directory", self.0),
            });
        }
        Ok(self.0.clone())
    }
}

/// The launcher directory remembered in [`AppSettings`].
pub struct CachedInstallRoot {
    pub settings: AppSettings,
}

impl CachedInstallRoot {
    fn validate(dir: &Utf8Path, executable: &str) -> Result<(), String> {
        if dir.as_str().is_empty() {
            return Err("settings don't contain a valid directory".into());
        }
        if !dir.join(executable).is_file() {
            return Err(format!("'{}' doesn't contain {}", dir, executable));
        }
        Ok(())
    }
}

impl InstallRootResolver for CachedInstallRoot {
    fn resolve_install_root(&self) -> Result<Utf8PathBuf, AssemblyError> {
        let Some(dir) = self.settings.launcher_dir.as_deref() else {
            warn!("Settings don't contain a launcher install directory");
            return Err(AssemblyError::InstallRootUnavailable {
                reason: "no launcher directory stored, pass --launcher-dir".into(),
            });
        };

        Self::validate(dir, &self.settings.launcher_executable).map_err(|reason| {
            warn!("Stored launcher install directory is invalid: {}", reason);
            AssemblyError::InstallRootUnavailable { reason }
        })?;

        info!("Launcher install directory: {}", dir);
        Ok(dir.to_owned())
    }
}

/// Stores `dir` as the remembered launcher directory.
pub fn remember_install_root(settings: &mut AppSettings, dir: &Utf8Path) -> Result<(), AssemblyError> {
    settings.launcher_dir = Some(dir.to_owned());
    settings.save()?;
    info!("Stored launcher install directory in settings");
    Ok(())
}
