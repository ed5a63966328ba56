use crate::models::error::AssemblyError;
use crate::models::mod_dto::{ModDescriptor, ModMetadata};
use crate::models::paths::ModPaths;
use crate::models::variant::TargetVariant;
use camino::Utf8Path;
use serde_json::Value;

pub struct ModFS;

impl ModFS {
    /// Reads `data.json` from a mod's source directory.
    pub fn load(mod_root: &Utf8Path) -> Result<ModDescriptor, AssemblyError> {
        let path = ModPaths::new(mod_root).metadata;

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AssemblyError::MetadataMissing { path })
            }
            Err(e) => return Err(AssemblyError::unreadable(path, e)),
        };

        // Two passes so malformed JSON and a wrong shape report differently.
        let value: Value = serde_json::from_str(&raw).map_err(|source| {
            AssemblyError::MetadataParse {
                path: path.clone(),
                source,
            }
        })?;
        let metadata: ModMetadata = serde_json::from_value(value)
            .map_err(|source| AssemblyError::MetadataSchema {
                path: path.clone(),
                source,
            })?;

        let name = mod_root
            .file_name()
            .ok_or_else(|| AssemblyError::InvalidPath {
                path: mod_root.to_string(),
            })?;

        Ok(ModDescriptor::from_metadata(name, metadata))
    }

    pub fn supports(descriptor: &ModDescriptor, variant: TargetVariant) -> bool {
        match variant {
            TargetVariant::Client => descriptor.supports_client,
            TargetVariant::Server => descriptor.supports_server,
        }
    }
}
