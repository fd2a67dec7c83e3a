//! Persist Worker
//!
//! Background thread that performs durable storage for committed records.
//!
//! ```text
//! commit gate ──update()──▶ channel ──▶ worker thread ──store()──▶ ConfigSink
//!                                            │
//!                                            └──▶ UIEvent::PersistSucceeded / PersistFailed
//! ```
//!
//! The editor only sees the hand-off. Storage outcome travels on the UI
//! event channel and never touches the dirty flag. [`PersistWorker::flush`]
//! is the one barrier: it returns once everything queued before it is done,
//! so a reload never reads a record older than the last commit.

use crate::domain::camera::CameraConfig;
use crate::error::{Error, Result};
use crate::eventing::UIEvent;
use crate::services::collaborators::{ConfigSink, ConfigUpdater};
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info};

/// Work item for the persist thread
enum Job {
    Store(CameraConfig),
    /// Acknowledged once all earlier jobs are done
    Flush(Sender<()>),
}

/// Fire-and-forget persistence backed by a worker thread
pub struct PersistWorker {
    tx: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
    target: Arc<str>,
}

impl PersistWorker {
    /// Spawn a worker storing into `sink`. `target` names the destination in
    /// events and logs.
    pub fn spawn<S: ConfigSink>(
        sink: S,
        target: impl Into<Arc<str>>,
        events: Sender<UIEvent>,
    ) -> Result<Self> {
        let (tx, rx) = crossbeam_channel::unbounded::<Job>();
        let target = target.into();
        let worker_target = target.clone();

        let handle = thread::Builder::new()
            .name("camera-persist".to_string())
            .spawn(move || run_worker(&sink, &worker_target, &rx, &events))?;

        info!(destination = %target, "Persist worker started");

        Ok(Self {
            tx: Some(tx),
            handle: Some(handle),
            target,
        })
    }

    /// Queue a record for storage
    pub fn submit(&self, record: CameraConfig) -> Result<()> {
        self.send(Job::Store(record))
    }

    /// Wait until every record queued before this call has been processed.
    /// The outcome events are on the UI channel when this returns.
    pub fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = crossbeam_channel::bounded(0);
        self.send(Job::Flush(ack_tx))?;
        ack_rx.recv().map_err(|e| Error::ChannelSend {
            message: e.to_string(),
        })
    }

    fn send(&self, job: Job) -> Result<()> {
        let Some(tx) = &self.tx else {
            return Err(Error::ChannelSend {
                message: "persist worker is shut down".to_string(),
            });
        };
        tx.send(job).map_err(|e| Error::ChannelSend {
            message: e.to_string(),
        })
    }
}

fn run_worker<S: ConfigSink>(sink: &S, target: &Arc<str>, jobs: &Receiver<Job>, events: &Sender<UIEvent>) {
    for job in jobs.iter() {
        let record = match job {
            Job::Store(record) => record,
            Job::Flush(ack) => {
                if ack.send(()).is_err() {
                    debug!("Flush waiter went away");
                }
                continue;
            }
        };

        let event = match sink.store(&record) {
            Ok(()) => UIEvent::PersistSucceeded {
                target: target.clone(),
            },
            Err(e) => {
                error!(error = %e, destination = %target, "Failed to persist camera record");
                UIEvent::PersistFailed {
                    target: target.clone(),
                    message: e.to_string().into(),
                }
            }
        };
        if events.send(event).is_err() {
            debug!("UI event channel closed");
        }
    }
    debug!(destination = %target, "Persist worker stopped");
}

impl ConfigUpdater for PersistWorker {
    fn update(&self, record: CameraConfig) {
        if let Err(e) = self.submit(record) {
            error!(error = %e, destination = %self.target, "Failed to hand off camera record");
        }
    }

    fn flush(&self) {
        if let Err(e) = PersistWorker::flush(self) {
            error!(error = %e, destination = %self.target, "Failed to flush persist worker");
        }
    }
}

impl Drop for PersistWorker {
    fn drop(&mut self) {
        // Closing the channel lets the thread drain queued records and exit
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!(destination = %self.target, "Persist worker panicked");
            }
        }
    }
}
