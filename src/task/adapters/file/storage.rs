//! Task storage persisted as one JSON document per store.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{self, ErrorKind, Write};
use std::sync::Arc;
use tracing::debug;

use crate::task::{
    config::TaskStoreConfig,
    ports::{TaskSnapshot, TaskStorage, TaskStorageError, TaskStorageResult},
};

const TMP_SUFFIX: &str = ".tmp";

/// Stores the task snapshot as `<store_name>.json` inside a directory.
///
/// Writes go to a temporary file that is renamed over the record, so a
/// crash mid-write leaves the previous snapshot intact. Only snapshots of
/// the configured store are read or written.
#[derive(Debug, Clone)]
pub struct FileTaskStorage {
    dir: Arc<Dir>,
    store_name: String,
    file_name: String,
    expected_version: u32,
}

impl FileTaskStorage {
    /// Opens storage in `config.storage_dir`, creating the directory when
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Persistence`] when the directory cannot
    /// be created or opened.
    pub fn from_config(config: &TaskStoreConfig) -> TaskStorageResult<Self> {
        let dir = open_storage_dir(&config.storage_dir)?;
        Ok(Self {
            dir: Arc::new(dir),
            store_name: config.store_name.clone(),
            file_name: config.file_name(),
            expected_version: config.snapshot_version,
        })
    }

    /// Returns the file name of the record inside the storage directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    fn tmp_file_name(&self) -> String {
        format!("{}{TMP_SUFFIX}", self.file_name)
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStorageResult<T>
    where
        F: FnOnce(&Dir) -> TaskStorageResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        tokio::task::spawn_blocking(move || f(&dir))
            .await
            .map_err(TaskStorageError::persistence)?
    }
}

fn open_storage_dir(path: &Utf8Path) -> TaskStorageResult<Dir> {
    Dir::create_ambient_dir_all(path, ambient_authority()).map_err(TaskStorageError::persistence)?;
    Dir::open_ambient_dir(path, ambient_authority()).map_err(TaskStorageError::persistence)
}

fn check_store(snapshot: &TaskSnapshot, expected_store: &str) -> TaskStorageResult<()> {
    if snapshot.store == expected_store {
        return Ok(());
    }
    Err(TaskStorageError::StoreMismatch {
        found: snapshot.store.clone(),
        expected: expected_store.to_owned(),
    })
}

fn decode(
    contents: &str,
    expected_store: &str,
    expected_version: u32,
) -> TaskStorageResult<TaskSnapshot> {
    let snapshot: TaskSnapshot =
        serde_json::from_str(contents).map_err(|err| TaskStorageError::Corrupt(err.to_string()))?;
    check_store(&snapshot, expected_store)?;
    if snapshot.version != expected_version {
        return Err(TaskStorageError::UnsupportedVersion {
            found: snapshot.version,
            expected: expected_version,
        });
    }
    Ok(snapshot)
}

fn write_then_rename(dir: &Dir, tmp_name: &str, file_name: &str, json: &str) -> io::Result<()> {
    let mut tmp_file = dir.create(tmp_name)?;
    tmp_file.write_all(json.as_bytes())?;
    tmp_file.sync_all()?;
    drop(tmp_file);
    dir.rename(tmp_name, dir, file_name)
}

#[async_trait]
impl TaskStorage for FileTaskStorage {
    async fn load(&self) -> TaskStorageResult<Option<TaskSnapshot>> {
        let file_name = self.file_name.clone();
        let store_name = self.store_name.clone();
        let expected_version = self.expected_version;
        self.run_blocking(move |dir| {
            let contents = match dir.read_to_string(&file_name) {
                Ok(contents) => contents,
                Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
                Err(err) => return Err(TaskStorageError::persistence(err)),
            };
            decode(&contents, &store_name, expected_version).map(Some)
        })
        .await
    }

    async fn save(&self, snapshot: &TaskSnapshot) -> TaskStorageResult<()> {
        check_store(snapshot, &self.store_name)?;
        let json = serde_json::to_string_pretty(snapshot).map_err(TaskStorageError::persistence)?;
        let file_name = self.file_name.clone();
        let tmp_name = self.tmp_file_name();
        let count = snapshot.tasks.len();
        self.run_blocking(move |dir| {
            if let Err(err) = write_then_rename(dir, &tmp_name, &file_name, &json) {
                if let Err(cleanup) = dir.remove_file(&tmp_name) {
                    debug!(file = %tmp_name, error = %cleanup, "temporary snapshot not removed");
                }
                return Err(TaskStorageError::persistence(err));
            }
            debug!(file = %file_name, count, "task snapshot written");
            Ok(())
        })
        .await
    }
}
