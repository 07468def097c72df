use thiserror::Error;

/// Validation failures for sparse event data and frame shapes.
///
/// Every variant carries the offending value and enough context to locate it,
/// so upstream producer bugs can be diagnosed without re-running the batch.
/// Validation errors are always recoverable: reject the batch, keep the
/// pipeline running.
///
/// # Examples
/// ```
/// use aer_structures::{SparseEventBatch, ValidationError};
///
/// let result = SparseEventBatch::new_from_raw(vec![0, 1], vec![0]);
/// assert!(matches!(result, Err(ValidationError::LengthMismatch { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Parallel arrays of a sparse batch differ in length
    #[error("indices length {indices} does not match polarities length {polarities}")]
    LengthMismatch { indices: usize, polarities: usize },

    /// A polarity value other than 0 or 1
    #[error("polarity {value} at position {position} is not a valid bit (expected 0 or 1)")]
    InvalidPolarity { value: u8, position: usize },

    /// A flat event index outside the target plane
    #[error(
        "event index {index} at position {position} out of range for {width}x{height} plane (bound {bound})"
    )]
    IndexOutOfRange {
        index: u32,
        position: usize,
        width: u32,
        height: u32,
        /// Exclusive upper bound, `width * height`
        bound: u32,
    },

    /// A frame dimension that must be positive was zero
    #[error("{axis} of frame shape must be positive, 0 given")]
    NonPositiveDimension { axis: &'static str },

    /// `width * height` does not fit the flat index type
    #[error("plane {width}x{height} exceeds the addressable flat index range")]
    PlaneTooLarge { width: u32, height: u32 },

    /// Two frames with different encodings or dimensions cannot be merged
    #[error("cannot merge frames with mismatched layouts ({left} vs {right})")]
    FrameLayoutMismatch { left: String, right: String },
}
