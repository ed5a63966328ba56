use camino::{Utf8Path, Utf8PathBuf};

macro_rules! define_paths {
    ($name:ident { $($field:ident : $default:expr),* $(,)? }) => {
        #[derive(Clone, Debug)]
        pub struct $name {
            $(pub $field: Utf8PathBuf,)*
        }

        impl $name {
            pub fn to_absolute(mut self, base: &Utf8Path) -> Self {
                $(self.$field = base.join(self.$field);)*
                self
            }

            pub fn new(base: &Utf8Path) -> Self {
                Self::default().to_absolute(base)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.into(),)*
                }
            }
        }
    };
}

define_paths!(ProjectPaths {
    instance_core: "1 - Instance Core",
    server_core: "2 - Server Core",
    content_mods: "3 - Content Mods/Enabled",
    dependency_mods: "4 - Dependency Mods",
    resource_packs: "5 - Resource Packs",
    shader_packs: "6 - Shader Packs",
});

define_paths!(ModPaths {
    metadata: "data.json",
});

define_paths!(TargetPaths {
    resource_packs: "resourcepacks",
    shader_packs: "shaderpacks",
    config_changelog: "config/_changelog.txt",
});

define_paths!(LauncherPaths {
    instances: "instances",
    servers: "servers",
});

/// Sentinel file that lets an override folder ship. Never copied to a target.
pub const CHANGELOG_MARKER: &str = "_changelog.txt";

/// Subdirectories that only ship when they carry a [`CHANGELOG_MARKER`].
pub const OVERRIDE_FOLDERS: [&str; 2] = ["config", "defaultconfigs"];

pub fn is_override_folder(name: &str) -> bool {
    OVERRIDE_FOLDERS.contains(&name)
}
