use crate::models::variant::TargetVariant;
use camino::Utf8PathBuf;
use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum AssemblyError {
    #[display("Required mod \"{name}\" is missing from project")]
    ModNotFound { name: String },

    #[display("Mod metadata file not found: {path}")]
    MetadataMissing { path: Utf8PathBuf },

    #[display("Unable to read mod metadata {path}: {source}")]
    MetadataParse {
        path: Utf8PathBuf,
        source: serde_json::Error,
    },

    #[display("Mod metadata {path} does not match the expected schema: {source}")]
    MetadataSchema {
        path: Utf8PathBuf,
        source: serde_json::Error,
    },

    #[display("Required mod \"{dependency}\" of \"{required_by}\" was unable to be added")]
    UnsatisfiedDependency {
        dependency: String,
        required_by: String,
    },

    #[display("Cyclic mod dependency: {chain}")]
    CyclicDependency { chain: String },

    #[display("Unable to read {path}: {source}")]
    SourceUnreadable {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[display("Unable to write {path}: {source}")]
    TargetWrite {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[display("Target {target} overlaps the project at {project}")]
    TargetOverlapsProject {
        target: Utf8PathBuf,
        project: Utf8PathBuf,
    },

    #[display("Target {target} is a {inferred} directory, not a {requested} one")]
    VariantMismatch {
        target: Utf8PathBuf,
        inferred: TargetVariant,
        requested: TargetVariant,
    },

    #[display("Unable to load launcher install directory: {reason}")]
    InstallRootUnavailable { reason: String },

    #[display("Settings error: {source}")]
    Settings { source: confy::ConfyError },

    #[display("Invalid UTF-8 path: {path}")]
    InvalidPath { path: String },
}

impl AssemblyError {
    pub fn unreadable(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source,
        }
    }

    pub fn unwritable(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::TargetWrite {
            path: path.into(),
            source,
        }
    }
}

impl From<confy::ConfyError> for AssemblyError {
    fn from(source: confy::ConfyError) -> Self {
        Self::Settings { source }
    }
}
