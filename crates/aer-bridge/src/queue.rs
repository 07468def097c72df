//! Lock-protected step queue shared by the two bridge endpoints.
//!
//! The lifecycle state lives inside the same mutex as the item deque, so a
//! state check and the queue mutation it guards are one critical section.
//! That makes `stop()` safe to call concurrently with an in-flight `inject`
//! or `retrieve`: whichever side takes the lock second observes a consistent
//! state.

use crate::error::{BridgeError, BridgeResult};
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;

/// Lifecycle state of a bridge. Transitions: `Created -> Started -> Stopped`.
/// `Stopped` is terminal; a bridge is never restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Created,
    Started,
    Stopped,
}

pub(crate) struct StepQueue<T> {
    inner: Mutex<QueueInner<T>>,
    /// Wakes producers blocked on a full bounded queue
    space_available: Condvar,
    /// `None` means unbounded
    capacity: Option<usize>,
}

struct QueueInner<T> {
    items: VecDeque<T>,
    state: BridgeState,
}

impl<T> StepQueue<T> {
    pub(crate) fn new(capacity: Option<usize>) -> Self {
        StepQueue {
            inner: Mutex::new(QueueInner {
                items: VecDeque::new(),
                state: BridgeState::Created,
            }),
            space_available: Condvar::new(),
            capacity,
        }
    }

    pub(crate) fn state(&self) -> BridgeState {
        self.inner.lock().state
    }

    pub(crate) fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.lock().items.len()
    }

    /// Opens both endpoints. No-op when already started; a stopped queue is
    /// terminal and cannot be reopened.
    pub(crate) fn start(&self) -> BridgeResult<()> {
        let mut inner = self.inner.lock();
        match inner.state {
            BridgeState::Created => {
                inner.state = BridgeState::Started;
                Ok(())
            }
            BridgeState::Started => Ok(()),
            BridgeState::Stopped => Err(BridgeError::Stopped("start")),
        }
    }

    /// Closes both endpoints, discards pending items, and wakes any producer
    /// blocked on backpressure. Idempotent. Returns the discarded item count.
    pub(crate) fn stop(&self) -> usize {
        let mut inner = self.inner.lock();
        inner.state = BridgeState::Stopped;
        let discarded = inner.items.len();
        inner.items.clear();
        drop(inner);
        self.space_available.notify_all();
        discarded
    }

    /// Enqueues one item, blocking the caller while a bounded queue is at
    /// capacity. Wakes with a lifecycle error if the queue stops while the
    /// caller is waiting. Never drops silently.
    pub(crate) fn push(&self, item: T) -> BridgeResult<()> {
        let mut inner = self.inner.lock();
        loop {
            match inner.state {
                BridgeState::Created => return Err(BridgeError::NotStarted("inject")),
                BridgeState::Stopped => return Err(BridgeError::Stopped("inject")),
                BridgeState::Started => {}
            }
            let full = self
                .capacity
                .map_or(false, |cap| inner.items.len() >= cap);
            if !full {
                inner.items.push_back(item);
                return Ok(());
            }
            self.space_available.wait(&mut inner);
        }
    }

    /// Removes the oldest item, if any. Never blocks.
    pub(crate) fn pop_front(&self) -> BridgeResult<Option<T>> {
        let mut inner = self.inner.lock();
        match inner.state {
            BridgeState::Created => Err(BridgeError::NotStarted("retrieve")),
            BridgeState::Stopped => Err(BridgeError::Stopped("retrieve")),
            BridgeState::Started => {
                let item = inner.items.pop_front();
                drop(inner);
                self.space_available.notify_one();
                Ok(item)
            }
        }
    }

    /// Swaps out everything queued in one atomic step. Never blocks.
    ///
    /// Items injected after the swap belong to the next retrieval, which
    /// gives the all-at-once drain a well-defined snapshot boundary (peeking
    /// at the queue length and popping that many items would not).
    pub(crate) fn swap_out(&self) -> BridgeResult<VecDeque<T>> {
        let mut inner = self.inner.lock();
        match inner.state {
            BridgeState::Created => Err(BridgeError::NotStarted("retrieve")),
            BridgeState::Stopped => Err(BridgeError::Stopped("retrieve")),
            BridgeState::Started => {
                let drained = std::mem::take(&mut inner.items);
                drop(inner);
                self.space_available.notify_all();
                Ok(drained)
            }
        }
    }
}
