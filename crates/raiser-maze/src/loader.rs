//! Background resource loading.
//!
//! [`ResourceLoad::spawn`] reads a file on a named worker thread, reporting
//! progress while it reads, then parses it and delivers the result over a
//! bounded channel. The frame loop calls [`ResourceLoad::poll`] once per
//! frame; nothing blocks unless [`ResourceLoad::wait`] is used.
//!
//! A failed load is reported once and never retried. There is no cancellation.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, bounded};
use tracing::{error, info};

use crate::error::MazeError;

const CHUNK_SIZE: usize = 16 * 1024;
const CHANNEL_CAPACITY: usize = 16;

/// Why a resource failed to load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    #[error("{0}")]
    Maze(#[from] MazeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A parse failure from a resource type defined outside this crate.
    #[error("{0}")]
    Resource(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("loader thread exited without a result")]
    Disconnected,
}

/// Messages sent from the loader thread.
#[derive(Debug)]
pub enum LoadEvent<T> {
    /// Fraction of the file read so far, in `[0, 1]`.
    Progress(f32),
    Loaded(T),
    Failed(LoadError),
}

/// What [`ResourceLoad::poll`] observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadStatus {
    Pending { fraction: f32 },
    Loaded,
    Failed,
}

enum Slot<T> {
    Pending,
    Loaded(T),
    Taken,
    Failed,
}

/// Handle to one in-flight (or finished) background load.
pub struct ResourceLoad<T> {
    path: PathBuf,
    receiver: Receiver<LoadEvent<T>>,
    fraction: f32,
    slot: Slot<T>,
}

impl<T: Send + 'static> ResourceLoad<T> {
    /// Start loading `path`, parsing the bytes with `parse` on the worker thread.
    pub fn spawn<F>(path: impl Into<PathBuf>, parse: F) -> Result<Self, LoadError>
    where
        F: FnOnce(&[u8]) -> Result<T, LoadError> + Send + 'static,
    {
        let path = path.into();
        let (sender, receiver) = bounded::<LoadEvent<T>>(CHANNEL_CAPACITY);
        let worker_path = path.clone();

        std::thread::Builder::new()
            .name("resource-loader".into())
            .spawn(move || {
                let event = match read_with_progress(&worker_path, &sender) {
                    Ok(bytes) => match parse(&bytes) {
                        Ok(value) => LoadEvent::Loaded(value),
                        Err(err) => LoadEvent::Failed(err),
                    },
                    Err(err) => LoadEvent::Failed(LoadError::Io(err)),
                };
                let _ = sender.send(event);
            })
            .map_err(LoadError::Io)?;

        Ok(Self {
            path,
            receiver,
            fraction: 0.0,
            slot: Slot::Pending,
        })
    }
}

impl<T> ResourceLoad<T> {
    /// Drain pending events without blocking.
    pub fn poll(&mut self) -> LoadStatus {
        while matches!(self.slot, Slot::Pending) {
            match self.receiver.try_recv() {
                Ok(event) => self.apply(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => self.apply(LoadEvent::Failed(LoadError::Disconnected)),
            }
        }
        self.status()
    }

    /// Block until the load finishes or `timeout` elapses.
    pub fn wait(&mut self, timeout: Duration) -> LoadStatus {
        let deadline = Instant::now() + timeout;
        while matches!(self.slot, Slot::Pending) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(remaining) {
                Ok(event) => self.apply(event),
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => {
                    self.apply(LoadEvent::Failed(LoadError::Disconnected));
                }
            }
        }
        self.status()
    }

    /// Move the loaded value out. Returns `None` before completion, after a
    /// failure, or on every call after the first successful one.
    pub fn take(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.slot, Slot::Taken) {
            Slot::Loaded(value) => Some(value),
            other => {
                self.slot = other;
                None
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        match self.slot {
            Slot::Pending => LoadStatus::Pending {
                fraction: self.fraction,
            },
            Slot::Loaded(_) | Slot::Taken => LoadStatus::Loaded,
            Slot::Failed => LoadStatus::Failed,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn apply(&mut self, event: LoadEvent<T>) {
        match event {
            LoadEvent::Progress(fraction) => {
                self.fraction = fraction;
                info!(
                    "Resource '{}' {:.0}% loaded.",
                    self.path.display(),
                    100.0 * fraction
                );
            }
            LoadEvent::Loaded(value) => {
                self.fraction = 1.0;
                self.slot = Slot::Loaded(value);
            }
            LoadEvent::Failed(err) => {
                error!("Error loading resource {} ({err}).", self.path.display());
                self.slot = Slot::Failed;
            }
        }
    }
}

fn read_with_progress<T>(path: &Path, progress: &Sender<LoadEvent<T>>) -> std::io::Result<Vec<u8>> {
    let mut file = std::fs::File::open(path)?;
    let total = file.metadata()?.len().max(1) as f32;
    let mut bytes = Vec::new();
    let mut chunk = vec![0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        bytes.extend_from_slice(&chunk[..read]);
        let fraction = (bytes.len() as f32 / total).min(1.0);
        // Progress is best-effort; a full channel drops the update.
        let _ = progress.try_send(LoadEvent::Progress(fraction));
    }
    Ok(bytes)
}
