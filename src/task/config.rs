//! Configuration for the persistent task store.

use camino::Utf8PathBuf;

/// Settings for the task store and its durable storage.
///
/// # Examples
///
/// ```
/// use taskboard::task::config::TaskStoreConfig;
///
/// let config = TaskStoreConfig::default();
/// assert_eq!(config.store_name, "tasks-storage");
///
/// let custom = TaskStoreConfig::default().with_store_name("sprint-board");
/// assert_eq!(custom.file_name(), "sprint-board.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStoreConfig {
    /// Name of the persisted record.
    pub store_name: String,
    /// Directory holding the persisted record for file-backed storage.
    pub storage_dir: Utf8PathBuf,
    /// Snapshot format version written and accepted by this build.
    pub snapshot_version: u32,
}

impl Default for TaskStoreConfig {
    fn default() -> Self {
        Self {
            store_name: Self::DEFAULT_STORE_NAME.to_owned(),
            storage_dir: Utf8PathBuf::from("."),
            snapshot_version: Self::CURRENT_SNAPSHOT_VERSION,
        }
    }
}

impl TaskStoreConfig {
    /// Record name used when none is configured.
    pub const DEFAULT_STORE_NAME: &'static str = "tasks-storage";

    /// Snapshot format version of this build.
    pub const CURRENT_SNAPSHOT_VERSION: u32 = 1;

    /// Sets the record name.
    #[must_use]
    pub fn with_store_name(mut self, store_name: impl Into<String>) -> Self {
        self.store_name = store_name.into();
        self
    }

    /// Sets the storage directory.
    #[must_use]
    pub fn with_storage_dir(mut self, storage_dir: impl Into<Utf8PathBuf>) -> Self {
        self.storage_dir = storage_dir.into();
        self
    }

    /// Returns the file name of the persisted record.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.store_name)
    }
}
