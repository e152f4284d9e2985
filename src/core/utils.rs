use dirs::home_dir;
use std::{env, fs, io, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".kharcha";
const JOURNAL_DIR: &str = "journals";
const CONFIG_FILE: &str = "config.json";

/// Returns the application-specific data directory, defaulting to `~/.kharcha`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("KHARCHA_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Absolute path to the managed journals directory.
pub fn journals_dir() -> PathBuf {
    app_data_dir().join(JOURNAL_DIR)
}

/// Path to the configuration file under an explicit base directory.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
