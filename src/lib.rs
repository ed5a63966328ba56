pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::assembly::Assembly;
pub use crate::core::catalog::ModCatalog;
pub use crate::core::resolver::{InstallState, Resolver};
pub use crate::models::error::AssemblyError;
pub use crate::models::report::AssemblyReport;
pub use crate::models::variant::{ModPool, TargetVariant};
