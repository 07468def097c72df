//! Sparse-to-dense transformation for address-event data.
//!
//! Takes a validated [`SparseEventBatch`](aer_structures::SparseEventBatch)
//! and writes it into a fixed-shape [`DenseFrame`](aer_structures::DenseFrame),
//! either as a 2-D occupancy map or a 3-D polarity-channel volume.

mod densifier;

pub use densifier::Densifier;
