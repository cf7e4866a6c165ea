//! File-backed key-value store.
//!
//! One JSON document per key under a single base directory, written
//! atomically (temp file + rename) so a reader sees either the previous
//! document or the whole new one. Keys arrive already namespaced per user
//! (`onboarding_<userId>`), so the directory never mixes accounts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use tx_core::ports::KeyValueStorePort;

pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }

    async fn ensure_base_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .await
            .with_context(|| format!("create store dir failed: {}", self.base_dir.display()))
    }

    /// Write `content` to a sibling temp file, then rename over the target.
    async fn atomic_write(&self, path: &Path, content: &str) -> Result<()> {
        self.ensure_base_dir().await?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp file failed: {}", tmp_path.display()))?;

        // TODO: rename-over-existing can misbehave on Windows; macOS/Linux OK.
        fs::rename(&tmp_path, path).await.with_context(|| {
            format!(
                "rename temp file to target failed: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read {} failed", path.display())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!(key, bytes = value.len(), "writing key-value document");
        self.atomic_write(&self.path_for(key), value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("remove {} failed", path.display())),
        }
    }
}
