pub mod json_backend;

use std::path::PathBuf;

use crate::{errors::JournalError, journal::Journal};

pub type Result<T> = std::result::Result<T, JournalError>;

/// Abstraction over persistence backends capable of storing journals.
///
/// Backends are injected wherever persistence is needed; nothing in the crate
/// reaches for a process-wide storage singleton.
pub trait JournalStore: Send + Sync {
    /// Writes the full sequence for `slot`, replacing whatever was there.
    fn save(&self, journal: &Journal, slot: &str) -> Result<()>;

    /// Reads the full sequence stored under `slot`.
    fn load(&self, slot: &str) -> Result<Journal>;

    /// Reads `slot`, or yields an empty journal when it was never written.
    fn load_or_default(&self, slot: &str) -> Result<Journal>;

    /// Filesystem location backing `slot`, for diagnostics.
    fn slot_path(&self, slot: &str) -> PathBuf;
}

pub use json_backend::{JsonStorage, DEFAULT_SLOT};
