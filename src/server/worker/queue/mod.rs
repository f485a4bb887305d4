//! Bounded in-process queue for telemetry jobs.

use dioxus_logger::tracing;
use tokio::sync::mpsc::{self, error::TrySendError};

use crate::server::model::worker::TelemetryJob;

/// Sending side of the telemetry queue, cheap to clone into every request handler
#[derive(Clone, Debug)]
pub struct TelemetryQueue {
    sender: mpsc::Sender<TelemetryJob>,
}

/// Receiving side of the telemetry queue, owned by the telemetry worker
#[derive(Debug)]
pub struct TelemetryReceiver {
    receiver: mpsc::Receiver<TelemetryJob>,
}

impl TelemetryQueue {
    /// Creates a queue holding at most `capacity` pending jobs, a capacity of 0 holds one
    pub fn new(capacity: usize) -> (Self, TelemetryReceiver) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));

        (Self { sender }, TelemetryReceiver { receiver })
    }

    /// Enqueues a job without waiting.
    ///
    /// Returns `false` when the job was dropped because the queue is full or the worker
    /// side has been dropped. The caller is never blocked or failed.
    pub fn dispatch(&self, job: TelemetryJob) -> bool {
        match self.sender.try_send(job) {
            Ok(()) => true,
            Err(TrySendError::Full(job)) => {
                tracing::warn!("Telemetry queue is full, dropping job: {}", job);
                false
            }
            Err(TrySendError::Closed(job)) => {
                tracing::warn!("Telemetry queue is closed, dropping job: {}", job);
                false
            }
        }
    }

    /// Number of jobs that can be enqueued before the queue is full
    pub fn remaining_capacity(&self) -> usize {
        self.sender.capacity()
    }

    /// Whether the receiving side has been dropped
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl TelemetryReceiver {
    /// Waits for the next job, `None` once every sender has been dropped
    pub async fn recv(&mut self) -> Option<TelemetryJob> {
        self.receiver.recv().await
    }

    /// Takes the next job if one is already queued
    pub fn try_recv(&mut self) -> Option<TelemetryJob> {
        self.receiver.try_recv().ok()
    }

    /// Number of jobs waiting to be processed
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Whether no job is waiting
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}
