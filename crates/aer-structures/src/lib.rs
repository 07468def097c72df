//! The core crate for the AER pipeline. Defines the most common data structures
//! used throughout: sparse address-event batches, frame shape descriptors, and
//! dense tensor frames.

mod dense_frame;
mod descriptors;
mod error;
mod event_batch;

pub use dense_frame::DenseFrame;
pub use descriptors::{FrameShape, PolarityEncoding, POLARITY_CHANNEL_COUNT};
pub use error::ValidationError;
pub use event_batch::{Polarity, SparseEventBatch};
