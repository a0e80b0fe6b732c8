// SPDX-License-Identifier: GPL-3.0-only
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, SystemTime};

use anyhow::Context;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::fs::{FileSystem, LocalFileSystem};
use crate::monitor::traits::{FailurePolicy, LogFailurePolicy};
use crate::ticker::{Cancelled, IntervalTicker, Ticker};
use crate::weapons::{self, Weapon};

#[derive(thiserror::Error, Debug)]
pub enum MonitorError {
    #[error("path to monitor cannot be empty or whitespace")]
    InvalidPath,

    #[error(transparent)]
    Ticker(#[from] crate::ticker::TickerError),
}

/// Sink invoked with the freshly decoded weapon list on every change
/// notification. The list is borrowed; a sink that needs to keep it copies
/// it.
pub type WeaponsSink = Arc<dyn Fn(&[Weapon]) + Send + Sync>;

/// Single-slot, replaceable sink registration, shared between the consumer
/// threads and the background task.
#[derive(Clone, Default)]
struct SinkSlot {
    inner: Arc<Mutex<Option<WeaponsSink>>>,
}

impl SinkSlot {
    fn attach(&self, sink: WeaponsSink) {
        *self.lock() = Some(sink);
    }

    fn detach(&self) {
        *self.lock() = None;
    }

    fn is_attached(&self) -> bool {
        self.lock().is_some()
    }

    fn notify(&self, weapons: &[Weapon]) {
        // Clone out of the slot so the lock is not held while the sink runs.
        let sink = self.lock().clone();
        if let Some(sink) = sink {
            sink(weapons);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<WeaponsSink>> {
        // A sink that panicked must not wedge the slot for later polls.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Polls a single weapons file for changes (by last-write timestamp) and
/// notifies the attached sink with freshly decoded content.
///
/// The monitor is created stopped; [`WeaponsMonitor::start`] spawns the
/// background task and [`WeaponsMonitor::shutdown`] cancels it and waits for
/// it to finish. All file access happens on the background task, and none
/// happens while no sink is attached.
pub struct WeaponsMonitor {
    sink: SinkSlot,
    cancel: CancellationToken,
    worker: Option<MonitorWorker>,
    task: Option<JoinHandle<()>>,
}

impl WeaponsMonitor {
    /// Create a monitor over the local file system with a fixed poll period.
    pub fn new(path: impl Into<PathBuf>, period: Duration) -> Result<Self, MonitorError> {
        // Validate the path first so it wins over a bad period.
        let path = validated_path(path.into())?;
        let ticker = IntervalTicker::new(period)?;

        Self::with_capabilities(path, Arc::new(LocalFileSystem), Box::new(ticker))
    }

    /// Create a monitor with injected capabilities, primarily for testing.
    pub fn with_capabilities(
        path: impl Into<PathBuf>,
        fs: Arc<dyn FileSystem>,
        ticker: Box<dyn Ticker>,
    ) -> Result<Self, MonitorError> {
        let path = validated_path(path.into())?;

        let sink = SinkSlot::default();
        let worker = MonitorWorker {
            path,
            fs,
            ticker,
            sink: sink.clone(),
            policy: Arc::new(LogFailurePolicy),
            last_write_time: None,
        };

        Ok(Self {
            sink,
            cancel: CancellationToken::new(),
            worker: Some(worker),
            task: None,
        })
    }

    /// Replace the default failure policy. Only meaningful before `start`.
    pub fn with_failure_policy(mut self, policy: Arc<dyn FailurePolicy>) -> Self {
        if let Some(worker) = self.worker.as_mut() {
            worker.policy = policy;
        }
        self
    }

    /// Attach the sink, replacing any previous one.
    pub fn set_sink(&self, sink: impl Fn(&[Weapon]) + Send + Sync + 'static) {
        self.sink.attach(Arc::new(sink));
    }

    /// Detach the current sink, if any. Subsequent polls skip all file
    /// access until a sink is attached again.
    pub fn clear_sink(&self) {
        self.sink.detach();
    }

    /// Whether a sink is currently attached.
    pub fn has_sink(&self) -> bool {
        self.sink.is_attached()
    }

    /// Spawn the background poll loop. A second call is a no-op.
    ///
    /// Attaching the sink before `start` guarantees the first update cannot
    /// be missed; attaching shortly after is also safe because polls without
    /// a sink do no work and record no state.
    pub fn start(&mut self) {
        if let Some(worker) = self.worker.take() {
            let cancel = self.cancel.clone();
            self.task = Some(tokio::spawn(worker.run(cancel)));
        }
    }

    /// Whether the background task was started and has not yet exited.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Terminate monitoring and wait for the background task to finish.
    ///
    /// Cancellation-induced termination is normal and does not surface here.
    /// A panic on the background task is re-raised as an error so genuine
    /// bugs are not lost. Safe to call before `start` and before any tick
    /// has fired.
    pub async fn shutdown(mut self) -> anyhow::Result<()> {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.await.context("weapons monitor task failed")?;
        }
        Ok(())
    }
}

impl Drop for WeaponsMonitor {
    fn drop(&mut self) {
        // A monitor dropped without shutdown must not leak its task.
        self.cancel.cancel();
    }
}

fn validated_path(path: PathBuf) -> Result<PathBuf, MonitorError> {
    if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
        return Err(MonitorError::InvalidPath);
    }
    Ok(path)
}

/// State owned exclusively by the background task. `last_write_time` is
/// never touched from any other thread, so no lock is needed.
struct MonitorWorker {
    path: PathBuf,
    fs: Arc<dyn FileSystem>,
    ticker: Box<dyn Ticker>,
    sink: SinkSlot,
    policy: Arc<dyn FailurePolicy>,
    last_write_time: Option<SystemTime>,
}

impl MonitorWorker {
    async fn run(mut self, cancel: CancellationToken) {
        while !cancel.is_cancelled() {
            match self.ticker.wait_for_next_tick(&cancel).await {
                Ok(true) => {}
                // A retired ticker and cancellation both end the loop
                // normally, not as a fault.
                Ok(false) | Err(Cancelled) => return,
            }

            if self.check_for_update(&cancel).await.is_err() {
                return;
            }
        }
    }

    async fn check_for_update(&mut self, cancel: &CancellationToken) -> Result<(), Cancelled> {
        // No listener means no work. This also defers the first read until a
        // consumer has subscribed, so the initial update cannot be lost.
        if !self.sink.is_attached() {
            return Ok(());
        }

        if !self.fs.exists(&self.path).await {
            // Report a deletion once, then stay quiet until the file returns.
            if self.last_write_time.take().is_some() {
                self.sink.notify(&[]);
            }
            return Ok(());
        }

        let write_time = match self.fs.modified(&self.path).await {
            Ok(write_time) => write_time,
            Err(error) => {
                self.policy.on_io_failure(&self.path, &error);
                return Ok(());
            }
        };

        if self.last_write_time == Some(write_time) {
            return Ok(());
        }
        self.last_write_time = Some(write_time);

        let weapons = self.read_weapons(cancel).await?;
        self.sink.notify(&weapons);
        Ok(())
    }

    /// Read and decode the watched file, mapping read and decode failures to
    /// an empty list. Cancellation observed during the read propagates so
    /// the loop can exit promptly during shutdown.
    async fn read_weapons(&mut self, cancel: &CancellationToken) -> Result<Vec<Weapon>, Cancelled> {
        let bytes = tokio::select! {
            _ = cancel.cancelled() => return Err(Cancelled),
            result = self.fs.read(&self.path) => match result {
                Ok(bytes) => bytes,
                Err(error) => {
                    self.policy.on_io_failure(&self.path, &error);
                    return Ok(Vec::new());
                }
            },
        };

        match weapons::decode(&bytes) {
            Ok(weapons) => Ok(weapons),
            Err(error) => {
                self.policy.on_decode_failure(&self.path, &error);
                Ok(Vec::new())
            }
        }
    }
}
