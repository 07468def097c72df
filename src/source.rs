use aer_bridge::{BridgeError, BridgeResult, BridgeState, CadenceBridge, EventInjector, QueueCapacity};
use aer_densify::Densifier;
use aer_structures::{DenseFrame, FrameShape, SparseEventBatch, ValidationError};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by a [`DensifyingSource`] step.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The retrieved batch failed densification (malformed producer data).
    /// Recoverable: reject the batch, the source stays usable.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The bridge was used outside its started state
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// A bridge carrying sparse batches with a densifier behind it.
///
/// Producers inject [`SparseEventBatch`] values at their own pace; each call
/// to [`next_frame`](Self::next_frame) runs one consumer step: drain per the
/// configured policy, densify, hand the dense frame to the caller. The
/// external step engine owns the tick; this type only reacts to it.
///
/// Batch accumulation uses ordered concatenation as the combine, so a step
/// that saw three injected batches densifies them as one — identical to
/// densifying each and summing occupancy, minus the per-cell counts that a
/// mark-with-1.0 encoding never keeps anyway.
pub struct DensifyingSource {
    bridge: CadenceBridge<SparseEventBatch>,
    densifier: Densifier,
}

impl DensifyingSource {
    /// Source that accumulates everything the producer emitted since the
    /// previous step (DrainAll over batch concatenation).
    pub fn accumulating(shape: FrameShape, capacity: QueueCapacity) -> BridgeResult<Self> {
        let bridge = CadenceBridge::drain_all(
            SparseEventBatch::empty(),
            SparseEventBatch::concat,
            capacity,
        )?;
        Ok(DensifyingSource {
            bridge,
            densifier: Densifier::new(shape),
        })
    }

    /// Source that forwards exactly one batch per step (DrainOne), for
    /// producers whose cadence already matches the consumer.
    pub fn one_per_step(shape: FrameShape, capacity: QueueCapacity) -> BridgeResult<Self> {
        let bridge = CadenceBridge::drain_one(SparseEventBatch::empty(), capacity)?;
        Ok(DensifyingSource {
            bridge,
            densifier: Densifier::new(shape),
        })
    }

    pub fn shape(&self) -> FrameShape {
        self.densifier.shape()
    }

    pub fn state(&self) -> BridgeState {
        self.bridge.state()
    }

    pub fn start(&self) -> BridgeResult<()> {
        self.bridge.start()
    }

    pub fn stop(&self) {
        self.bridge.stop()
    }

    /// Producer endpoint; cloneable, safe to hand to producer threads.
    pub fn injector(&self) -> EventInjector<SparseEventBatch> {
        self.bridge.injector()
    }

    /// Runs one consumer step: drain, densify, return the dense frame.
    ///
    /// A step with no queued batches yields an all-zero frame. Densification
    /// failures reject only the offending step's data; the source remains
    /// started and the next tick proceeds normally.
    pub fn next_frame(&self) -> Result<DenseFrame, SourceError> {
        let batch = self.bridge.retrieve()?;
        debug!(events = batch.len(), "step retrieved sparse batch");
        Ok(self.densifier.densify(&batch)?)
    }
}
