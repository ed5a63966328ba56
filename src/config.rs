use camino::Utf8PathBuf;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "mod_assembler";
const LOG_FILE_NAME: &str = "mod-assembler.log";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppSettings {
    pub version: u8,
    /// Launcher install directory remembered from an earlier run.
    pub launcher_dir: Option<Utf8PathBuf>,
    /// File that must exist inside `launcher_dir` for it to count as valid.
    pub launcher_executable: String,
    pub log_dir: Utf8PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        let base_dir = ProjectDirs::from("com", "martes", APP_NAME)
            .and_then(|dirs| Utf8PathBuf::from_path_buf(dirs.data_local_dir().to_path_buf()).ok())
            .unwrap_or_else(|| Utf8PathBuf::from("."));

        Self {
            version: 0,
            launcher_dir: None,
            launcher_executable: "ATLauncher.exe".to_string(),
            log_dir: base_dir.join("logs"),
        }
    }
}

impl AppSettings {
    /// Log file used when no explicit path is given.
    pub fn log_file(&self) -> Utf8PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    pub fn load() -> Result<AppSettings, confy::ConfyError> {
        confy::load(APP_NAME, None)
    }

    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, None, self)
    }

    pub fn load_path(path: &Utf8PathBuf) -> Result<AppSettings, confy::ConfyError> {
        confy::load_path(path)
    }

    pub fn save_path(&self, path: &Utf8PathBuf) -> Result<(), confy::ConfyError> {
        confy::store_path(path, self)
    }
}
