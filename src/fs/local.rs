// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use std::path::Path;
use std::time::SystemTime;

use crate::fs::traits::FileSystem;

/// File system capability backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn modified(&self, path: &Path) -> anyhow::Result<SystemTime> {
        let metadata = tokio::fs::metadata(path).await?;
        Ok(metadata.modified()?)
    }

    async fn read(&self, path: &Path) -> anyhow::Result<Vec<u8>> {
        Ok(tokio::fs::read(path).await?)
    }
}
