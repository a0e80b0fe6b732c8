// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use std::path::Path;
use std::time::SystemTime;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Whether the path currently exists
    async fn exists(&self, path: &Path) -> bool;

    /// Last-write timestamp of the file
    async fn modified(&self, path: &Path) -> anyhow::Result<SystemTime>;

    /// Full contents of the file
    async fn read(&self, path: &Path) -> anyhow::Result<Vec<u8>>;
}
