//! Flat JSON file backend: the whole collection lives in a single array document.

use std::{
    ffi::OsString,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use futures::future::BoxFuture;
use tokio::fs;
use tracing::{debug, info};

use crate::{
    dao::{
        game_store::GameStore,
        storage::{StorageError, StorageResult},
    },
    state::game::Game,
};

/// Game store persisting to a JSON file, rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct JsonFileGameStore {
    path: Arc<Path>,
}

impl JsonFileGameStore {
    /// Create a store backed by the file at `path`. The file is not touched until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        Self {
            path: Arc::from(path),
        }
    }
}

impl GameStore for JsonFileGameStore {
    fn load(&self) -> BoxFuture<'static, StorageResult<Vec<Game>>> {
        let path = self.path.clone();
        Box::pin(async move { read_games(&path).await })
    }

    fn save(&self, games: Vec<Game>) -> BoxFuture<'static, StorageResult<()>> {
        let path = self.path.clone();
        Box::pin(async move { write_games(&path, &games).await })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let path = self.path.clone();
        Box::pin(async move {
            let dir = parent_dir(&path);
            match fs::metadata(dir).await {
                Ok(meta) if meta.is_dir() => Ok(()),
                Ok(_) => Err(StorageError::Unavailable(format!(
                    "`{}` is not a directory",
                    dir.display()
                ))),
                // Saving creates missing directories, so only other failures count.
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
                Err(source) => Err(StorageError::Read {
                    path: dir.to_path_buf(),
                    source,
                }),
            }
        })
    }
}

async fn read_games(path: &Path) -> StorageResult<Vec<Game>> {
    let contents = match fs::read(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "games file not found; starting empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_slice(&contents).map_err(|source| StorageError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `games` next to `path` and rename the temporary file over it so
/// readers never observe a half-written document.
async fn write_games(path: &Path, games: &[Game]) -> StorageResult<()> {
    let payload =
        serde_json::to_vec_pretty(games).map_err(|source| StorageError::Encode { source })?;

    let dir = parent_dir(path);
    fs::create_dir_all(dir)
        .await
        .map_err(|source| StorageError::Write {
            path: dir.to_path_buf(),
            source,
        })?;

    let tmp_path = temp_path(path);
    fs::write(&tmp_path, payload)
        .await
        .map_err(|source| StorageError::Write {
            path: tmp_path.clone(),
            source,
        })?;

    if let Err(source) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(StorageError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!(path = %path.display(), count = games.len(), "persisted games");
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("games.json"));
    name.push(".tmp");
    path.with_file_name(name)
}
