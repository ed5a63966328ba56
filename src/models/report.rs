use crate::models::variant::TargetVariant;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one assembly run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AssemblyReport {
    pub variant: TargetVariant,
    pub target: Utf8PathBuf,
    /// Installed mods in first-installed-first order.
    pub installed: Vec<String>,
    /// Mods present in either pool but not reached by resolution.
    pub unused: Vec<String>,
}

impl fmt::Display for AssemblyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} assembled at {}", self.variant, self.target)?;
        writeln!(f, "Total mods added: {}", self.installed.len())?;
        for name in &self.installed {
            writeln!(f, "  + {}", name)?;
        }
        if !self.unused.is_empty() {
            writeln!(f, "The following mods included in the project are not required:")?;
            for name in &self.unused {
                writeln!(f, "  - {}", name)?;
            }
        }
        Ok(())
    }
}
