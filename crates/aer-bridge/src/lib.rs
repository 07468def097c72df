//! Cadence bridging between a free-running producer and a step-driven consumer.
//!
//! A [`CadenceBridge`] wraps a single internal queue with a producer-facing
//! injection endpoint and a consumer-facing retrieval endpoint. The consumer
//! side is called once per external step tick and never blocks; the producer
//! side may block on a bounded queue for backpressure. Two drain policies are
//! available, fixed at construction:
//!
//! - `DrainAll`: each retrieval atomically snapshots everything queued and
//!   folds it with a caller-supplied associative combine
//! - `DrainOne`: each retrieval forwards exactly one item, oldest first
//!
//! An empty queue yields the configured default value, so a step tick is
//! never stalled on producer health.

mod bridge;
mod error;
mod queue;

pub use bridge::{CadenceBridge, DrainPolicy, EventInjector, QueueCapacity, QueueStats};
pub use error::{BridgeError, BridgeResult};
pub use queue::BridgeState;
