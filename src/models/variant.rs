use crate::models::paths::LauncherPaths;
use camino::Utf8Path;
use clap::ValueEnum;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Deployment flavor a target directory is assembled for.
#[derive(Serialize, Deserialize, ValueEnum, Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetVariant {
    Client,
    Server,
}

impl TargetVariant {
    /// Infers the variant from the name of the target's parent directory
    /// (`instances` or `servers`).
    pub fn infer(target: &Utf8Path) -> Option<Self> {
        let rules = LauncherPaths::default();
        let parent = target.parent()?.file_name()?;

        if parent == rules.instances.as_str() {
            Some(Self::Client)
        } else if parent == rules.servers.as_str() {
            Some(Self::Server)
        } else {
            None
        }
    }

    /// Launcher subdirectory that holds targets of this variant.
    pub fn launcher_dir(self, launcher_root: &Utf8Path) -> camino::Utf8PathBuf {
        let rules = LauncherPaths::new(launcher_root);
        match self {
            Self::Client => rules.instances,
            Self::Server => rules.servers,
        }
    }

    /// Resource and shader packs are only shipped with client instances.
    pub fn ships_packs(self) -> bool {
        matches!(self, Self::Client)
    }
}

/// The two disjoint roots a mod can be resolved from.
#[derive(Serialize, Deserialize, Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModPool {
    ContentEnabled,
    Dependency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_variant_from_parent_segment() {
        assert_eq!(
            TargetVariant::infer(Utf8Path::new("/launcher/instances/Pack")),
            Some(TargetVariant::Client)
        );
        assert_eq!(
            TargetVariant::infer(Utf8Path::new("/launcher/servers/Pack")),
            Some(TargetVariant::Server)
        );
        assert_eq!(TargetVariant::infer(Utf8Path::new("/launcher/other/Pack")), None);
        assert_eq!(TargetVariant::infer(Utf8Path::new("Pack")), None);
    }

    #[test]
    fn only_clients_ship_packs() {
        assert!(TargetVariant::Client.ships_packs());
        assert!(!TargetVariant::Server.ships_packs());
    }
}
