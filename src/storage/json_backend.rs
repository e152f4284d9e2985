use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{core::utils::ensure_dir, journal::Journal};

use super::{JournalStore, Result};

const SLOT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Slot the shell reads and writes when none is named.
pub const DEFAULT_SLOT: &str = "expenses";

/// Filesystem-backed JSON persistence, one file per journal slot.
///
/// Saves stage the serialized array into a temp file and rename it into
/// place, so an interrupted write never corrupts the previous contents.
/// There is no locking: overlapping writers race and the last one wins.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    journals_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(journals_dir: PathBuf) -> Result<Self> {
        ensure_dir(&journals_dir)?;
        Ok(Self { journals_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(crate::core::utils::journals_dir())
    }

    fn slot_file(&self, slot: &str) -> PathBuf {
        self.journals_dir
            .join(format!("{}.{}", canonical_slot(slot), SLOT_EXTENSION))
    }
}

impl JournalStore for JsonStorage {
    fn save(&self, journal: &Journal, slot: &str) -> Result<()> {
        let path = self.slot_file(slot);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(journal)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Journal> {
        let data = fs::read_to_string(self.slot_file(slot))?;
        Ok(serde_json::from_str(&data)?)
    }

    fn load_or_default(&self, slot: &str) -> Result<Journal> {
        let path = self.slot_file(slot);
        if !path.exists() {
            return Ok(Journal::new());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.slot_file(slot)
    }
}

fn canonical_slot(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        DEFAULT_SLOT.into()
    } else {
        sanitized
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
    use crate::domain::ExpenseRecord;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().join("journals")).expect("json storage");
        (storage, temp)
    }

    fn sample_journal() -> Journal {
        let mut journal = Journal::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        journal.append(ExpenseRecord::new(date, "Food", 120.0).with_note("lunch"));
        journal
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let journal = sample_journal();
        storage.save(&journal, "expenses").expect("save journal");
        let loaded = storage.load("expenses").expect("load journal");
        assert_eq!(loaded, journal);
    }

    #[test]
    fn absent_slot_loads_empty() {
        let (storage, _guard) = storage_with_temp_dir();
        let journal = storage.load_or_default("never-written").expect("load");
        assert!(journal.is_empty());
    }

    #[test]
    fn stored_form_is_a_bare_array() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.save(&sample_journal(), "expenses").expect("save");
        let raw = fs::read_to_string(storage.slot_path("expenses")).expect("read file");
        assert!(raw.trim_start().starts_with('['));
        assert!(raw.trim_end().ends_with(']'));
    }

    #[test]
    fn slot_names_are_slugged() {
        let (storage, _guard) = storage_with_temp_dir();
        let path = storage.slot_path("My Expenses!");
        assert!(path.ends_with("my_expenses_.json"));
        assert!(storage.slot_path("  ").ends_with("expenses.json"));
    }
}
