// SPDX-License-Identifier: GPL-3.0-only
use std::path::Path;
use tracing::warn;

/// Receives the failures the monitor swallows with respect to its
/// notification stream. The default policy logs them; tests can inject a
/// recording policy to assert failure visibility.
pub trait FailurePolicy: Send + Sync {
    /// A poll cycle could not inspect or read the watched file.
    fn on_io_failure(&self, path: &Path, error: &anyhow::Error);

    /// The watched file was read but its content could not be decoded.
    fn on_decode_failure(&self, path: &Path, error: &serde_json::Error);
}

/// Default policy: log at warn level and move on.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFailurePolicy;

impl FailurePolicy for LogFailurePolicy {
    fn on_io_failure(&self, path: &Path, error: &anyhow::Error) {
        warn!(path = %path.display(), error = %error, "Failed to poll weapons file");
    }

    fn on_decode_failure(&self, path: &Path, error: &serde_json::Error) {
        warn!(path = %path.display(), error = %error, "Failed to decode weapons file");
    }
}
