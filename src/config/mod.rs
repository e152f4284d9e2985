use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::utils::{app_data_dir, config_file_in, ensure_dir};
use crate::errors::{JournalError, Result};

const TMP_SUFFIX: &str = "tmp";

/// Payment apps offered by the entry form when the config does not override
/// them.
pub static DEFAULT_PAYMENT_APPS: Lazy<Vec<String>> =
    Lazy::new(|| ["Gpay", "Paytm", "Super", "Card"].map(String::from).to_vec());

/// Account tags offered by the entry form.
pub static DEFAULT_ACCOUNTS: Lazy<Vec<String>> = Lazy::new(|| {
    ["HDFC-0931", "HDFC-work", "CreditCard"]
        .map(String::from)
        .to_vec()
});

/// Categories offered by the entry form.
pub static DEFAULT_CATEGORIES: Lazy<Vec<String>> = Lazy::new(|| {
    ["Food", "Travel", "Others", "Essentials"]
        .map(String::from)
        .to_vec()
});

/// Form defaults and tag vocabularies for the entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_used_app: String,
    pub default_used_account: String,
    pub default_category: String,
    pub payment_apps: Vec<String>,
    pub accounts: Vec<String>,
    pub categories: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_used_app: "Gpay".into(),
            default_used_account: "HDFC-0931".into(),
            default_category: "Food".into(),
            payment_apps: DEFAULT_PAYMENT_APPS.clone(),
            accounts: DEFAULT_ACCOUNTS.clone(),
            categories: DEFAULT_CATEGORIES.clone(),
        }
    }
}

/// Loads and persists the config file in the application data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Reads the config, falling back to defaults when the file is absent.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| JournalError::Config(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_used_app, "Gpay");
    }

    #[test]
    fn save_then_load_roundtrips_changes() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();

        let mut config = Config::default();
        config.default_category = "Travel".into();
        config.categories.push("Rent".into());
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_config_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{ "default_category": "Essentials" }"#).unwrap();

        let config = manager.load().unwrap();
        assert_eq!(config.default_category, "Essentials");
        assert_eq!(config.payment_apps, *DEFAULT_PAYMENT_APPS);
    }
}
