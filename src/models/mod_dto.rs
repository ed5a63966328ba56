use serde::{Deserialize, Serialize};

/// On-disk shape of a mod's `data.json`. Unknown fields are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModMetadata {
    #[serde(rename = "Client")]
    pub client: bool,
    #[serde(rename = "Server")]
    pub server: bool,
    #[serde(rename = "Dependencies")]
    pub dependencies: Vec<String>,
}

/// Parsed metadata for one mod. `name` is the mod's directory name in its pool.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModDescriptor {
    pub name: String,
    pub supports_client: bool,
    pub supports_server: bool,
    pub dependencies: Vec<String>,
}

impl ModDescriptor {
    pub fn from_metadata(name: impl Into<String>, metadata: ModMetadata) -> Self {
        Self {
            name: name.into(),
            supports_client: metadata.client,
            supports_server: metadata.server,
            dependencies: metadata.dependencies,
        }
    }
}
