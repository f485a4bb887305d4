//! Background telemetry writes.
//!
//! Analytics events and log entries are dispatched onto a bounded in-process
//! [`TelemetryQueue`] and written to the database by the [`TelemetryWorker`]. Delivery is
//! at most once: dispatch never blocks, a full or closed queue drops the job, and a failed
//! or timed out job is logged and discarded.

pub mod handler;
pub mod pool;
pub mod queue;

pub use handler::TelemetryJobHandler;
pub use pool::{TelemetryWorker, WorkerPoolConfig};
pub use queue::{TelemetryQueue, TelemetryReceiver};
