use crate::error::{BridgeError, BridgeResult};
use crate::queue::{BridgeState, StepQueue};
use std::sync::{Arc, Weak};
use tracing::{debug, info, trace, warn};

/// Queue sizing for a bridge. Bounded queues apply backpressure to the
/// producer when full; unbounded queues never block `inject`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueCapacity {
    /// Must be positive
    Bounded(usize),
    Unbounded,
}

impl QueueCapacity {
    fn as_limit(self) -> BridgeResult<Option<usize>> {
        match self {
            QueueCapacity::Bounded(0) => Err(BridgeError::InvalidConfig(
                "bounded queue capacity must be positive, 0 given".into(),
            )),
            QueueCapacity::Bounded(cap) => Ok(Some(cap)),
            QueueCapacity::Unbounded => Ok(None),
        }
    }
}

/// Draining policy tag, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainPolicy {
    /// Fold everything queued at retrieval time into one combined item
    DrainAll,
    /// Forward exactly one queued item per retrieval, oldest first
    DrainOne,
}

/// Construction-time selected drain strategy. Holding the combine function
/// here (rather than inspecting item types at runtime) keeps the per-step
/// path free of any dispatch beyond one match.
enum Strategy<T> {
    All {
        combine: Box<dyn Fn(T, T) -> T + Send + Sync>,
    },
    One,
}

/// Snapshot of queue occupancy for monitoring.
#[derive(Debug, Clone, Copy)]
pub struct QueueStats {
    pub len: usize,
    /// `None` for unbounded queues
    pub capacity: Option<usize>,
    pub is_empty: bool,
    pub is_full: bool,
}

impl QueueStats {
    /// Occupancy ratio (0.0 to 1.0). Unbounded queues report 0.0.
    pub fn utilization(&self) -> f64 {
        match self.capacity {
            Some(cap) if cap > 0 => self.len as f64 / cap as f64,
            _ => 0.0,
        }
    }
}

/// Decouples an independently-timed producer from a step-driven consumer.
///
/// The bridge owns a single internal queue. Producers push through
/// [`inject`](Self::inject) (or a cloneable [`EventInjector`] handle) at
/// their own pace; the consumer calls [`retrieve`](Self::retrieve) exactly
/// once per external step tick and always returns immediately, with either
/// real data or the configured default. Producer and consumer share no state
/// other than the queue, which is the sole synchronization point.
///
/// # Lifecycle
/// `Created -> Started -> Stopped`. Both endpoints are only usable while
/// started; `stop()` is terminal, discards pending items, and is safe to call
/// concurrently with in-flight endpoint operations.
///
/// # Examples
/// ```
/// use aer_bridge::{CadenceBridge, QueueCapacity};
///
/// let bridge = CadenceBridge::drain_all(0i64, |a, b| a + b, QueueCapacity::Unbounded).unwrap();
/// bridge.start().unwrap();
///
/// bridge.inject(2).unwrap();
/// bridge.inject(3).unwrap();
/// assert_eq!(bridge.retrieve().unwrap(), 5);
/// assert_eq!(bridge.retrieve().unwrap(), 0); // empty step yields the default
///
/// bridge.stop();
/// ```
pub struct CadenceBridge<T> {
    queue: Arc<StepQueue<T>>,
    default: T,
    strategy: Strategy<T>,
}

impl<T: Clone + Send + 'static> CadenceBridge<T> {
    /// Creates a bridge that forwards one item per step, oldest first.
    ///
    /// Suited to producers whose cadence already matches the consumer and
    /// who send pre-shaped items.
    ///
    /// # Arguments
    /// * `default` - Returned by `retrieve` when nothing is queued
    /// * `capacity` - Queue sizing; `Bounded(0)` is rejected
    pub fn drain_one(default: T, capacity: QueueCapacity) -> BridgeResult<Self> {
        Ok(CadenceBridge {
            queue: Arc::new(StepQueue::new(capacity.as_limit()?)),
            default,
            strategy: Strategy::One,
        })
    }

    /// Creates a bridge that folds everything queued into one item per step.
    ///
    /// `combine` must be associative (e.g. elementwise addition, or ordered
    /// concatenation); the fold runs left-to-right over the FIFO order, so
    /// for items `a, b, c` the result is `combine(combine(a, b), c)`.
    pub fn drain_all<F>(default: T, combine: F, capacity: QueueCapacity) -> BridgeResult<Self>
    where
        F: Fn(T, T) -> T + Send + Sync + 'static,
    {
        Ok(CadenceBridge {
            queue: Arc::new(StepQueue::new(capacity.as_limit()?)),
            default,
            strategy: Strategy::All {
                combine: Box::new(combine),
            },
        })
    }

    pub fn policy(&self) -> DrainPolicy {
        match self.strategy {
            Strategy::All { .. } => DrainPolicy::DrainAll,
            Strategy::One => DrainPolicy::DrainOne,
        }
    }

    pub fn state(&self) -> BridgeState {
        self.queue.state()
    }

    pub fn is_started(&self) -> bool {
        self.queue.state() == BridgeState::Started
    }

    /// Opens both endpoints. No-op if already started; fails with a
    /// lifecycle error once stopped.
    pub fn start(&self) -> BridgeResult<()> {
        self.queue.start()?;
        info!(policy = ?self.policy(), "cadence bridge started");
        Ok(())
    }

    /// Closes both endpoints and discards anything still queued. Idempotent;
    /// any producer blocked on backpressure is woken with a lifecycle error.
    pub fn stop(&self) {
        let discarded = self.queue.stop();
        if discarded > 0 {
            warn!(discarded, "bridge stopped with pending items, discarding");
        }
        info!("cadence bridge stopped");
    }

    /// Producer-side enqueue. Blocks only the producer, and only when a
    /// bounded queue is at capacity.
    pub fn inject(&self, item: T) -> BridgeResult<()> {
        self.queue.push(item)?;
        trace!("item injected");
        Ok(())
    }

    /// Hands out a cloneable producer endpoint.
    ///
    /// The handle holds a weak reference: if the bridge is dropped, later
    /// injections fail with a transport-class error instead of keeping the
    /// queue alive.
    pub fn injector(&self) -> EventInjector<T> {
        EventInjector {
            queue: Arc::downgrade(&self.queue),
        }
    }

    /// Consumer-side retrieval, called once per external step tick.
    ///
    /// Never blocks. Under `DrainAll` this drains an atomic snapshot of the
    /// queue — items injected concurrently with the call land in the next
    /// step — and folds it with the configured combine. Under `DrainOne` it
    /// pops the oldest item. An empty queue yields a clone of the default.
    pub fn retrieve(&self) -> BridgeResult<T> {
        match &self.strategy {
            Strategy::One => {
                let item = self.queue.pop_front()?;
                Ok(item.unwrap_or_else(|| self.default.clone()))
            }
            Strategy::All { combine } => {
                let drained = self.queue.swap_out()?;
                debug!(count = drained.len(), "drained step snapshot");
                let mut items = drained.into_iter();
                match items.next() {
                    None => Ok(self.default.clone()),
                    Some(first) => Ok(items.fold(first, |acc, item| combine(acc, item))),
                }
            }
        }
    }

    pub fn stats(&self) -> QueueStats {
        let len = self.queue.len();
        let capacity = self.queue.capacity();
        QueueStats {
            len,
            capacity,
            is_empty: len == 0,
            is_full: capacity.map_or(false, |cap| len >= cap),
        }
    }
}

/// Cloneable producer endpoint of a [`CadenceBridge`].
///
/// Multiple producer threads may hold injectors into the same bridge; the
/// queue linearizes their items, with FIFO order guaranteed per producer.
pub struct EventInjector<T> {
    queue: Weak<StepQueue<T>>,
}

impl<T> Clone for EventInjector<T> {
    fn clone(&self) -> Self {
        EventInjector {
            queue: Weak::clone(&self.queue),
        }
    }
}

impl<T: Send + 'static> EventInjector<T> {
    /// Enqueues one item, with the same blocking and lifecycle behavior as
    /// [`CadenceBridge::inject`]. Fails with a transport-class error when the
    /// owning bridge no longer exists.
    pub fn inject(&self, item: T) -> BridgeResult<()> {
        match self.queue.upgrade() {
            Some(queue) => {
                queue.push(item)?;
                trace!("item injected via handle");
                Ok(())
            }
            None => Err(BridgeError::Disconnected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_tag_matches_constructor() {
        let all = CadenceBridge::drain_all(0, |a, b| a + b, QueueCapacity::Unbounded).unwrap();
        assert_eq!(all.policy(), DrainPolicy::DrainAll);
        let one = CadenceBridge::drain_one(0, QueueCapacity::Unbounded).unwrap();
        assert_eq!(one.policy(), DrainPolicy::DrainOne);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = CadenceBridge::drain_one(0, QueueCapacity::Bounded(0));
        assert!(matches!(result, Err(BridgeError::InvalidConfig(_))));
    }

    #[test]
    fn test_stats_track_occupancy() {
        let bridge = CadenceBridge::drain_one(0, QueueCapacity::Bounded(2)).unwrap();
        bridge.start().unwrap();
        bridge.inject(1).unwrap();

        let stats = bridge.stats();
        assert_eq!(stats.len, 1);
        assert_eq!(stats.capacity, Some(2));
        assert!(!stats.is_full);
        assert_eq!(stats.utilization(), 0.5);
    }
}
