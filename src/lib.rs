//! # AER — address-event densification and cadence bridging
//!
//! Makes sparse event-camera-style data consumable by a fixed-cadence
//! downstream pipeline that expects dense tensor frames. This is the umbrella
//! crate over the workspace members:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Foundation: aer-structures                             │
//! │  (SparseEventBatch, FrameShape, DenseFrame)             │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Data Processing: aer-densify                           │
//! │  (sparse → dense, occupancy & polarity channels)        │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  I/O: aer-bridge                                        │
//! │  (cadence bridging, DrainAll / DrainOne policies)       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use aer::prelude::*;
//!
//! // A source that accumulates every batch the producer emitted since the
//! // previous step and densifies the result on each tick.
//! let shape = FrameShape::polarity_channels(8, 8)?;
//! let source = DensifyingSource::accumulating(shape, QueueCapacity::Unbounded)?;
//! source.start()?;
//!
//! let injector = source.injector();
//! injector.inject(SparseEventBatch::new_from_raw(vec![0, 9], vec![0, 1])?)?;
//!
//! // One external step tick:
//! let frame = source.next_frame()?;
//! assert_eq!(frame.flatten().sum(), 2.0);
//!
//! source.stop();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The members are also usable individually: `aer-bridge` is generic over the
//! item type, so pre-shaped dense frames (or anything else `Send + Clone`)
//! can be bridged without a densification stage behind the queue.

mod source;

// Re-export foundation
pub use aer_structures as structures;

// Re-export data processing
pub use aer_densify as densify;

// Re-export I/O layer
pub use aer_bridge as bridge;

pub use source::{DensifyingSource, SourceError};

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::source::{DensifyingSource, SourceError};

    pub use aer_bridge::{
        BridgeError, BridgeState, CadenceBridge, DrainPolicy, EventInjector, QueueCapacity,
    };
    pub use aer_densify::Densifier;
    pub use aer_structures::{
        DenseFrame, FrameShape, Polarity, PolarityEncoding, SparseEventBatch, ValidationError,
    };
}
