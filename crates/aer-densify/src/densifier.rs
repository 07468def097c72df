use aer_structures::{DenseFrame, FrameShape, SparseEventBatch, ValidationError};
use rayon::prelude::*;
use tracing::trace;

/// Pure sparse-to-dense transform against a fixed target shape.
///
/// The shape (and with it the encoding) is validated once at construction;
/// each call to [`densify`](Self::densify) only has to range-check the batch
/// against the plane. The transform is deterministic and side-effect free:
/// output depends solely on the batch and the shape, and the batch is never
/// mutated.
///
/// # Examples
/// ```
/// use aer_densify::Densifier;
/// use aer_structures::{FrameShape, SparseEventBatch};
///
/// let densifier = Densifier::new(FrameShape::occupancy(8, 8).unwrap());
/// let batch = SparseEventBatch::new_from_raw(vec![0, 9], vec![0, 1]).unwrap();
/// let frame = densifier.densify(&batch).unwrap();
/// assert_eq!(frame.flatten().sum(), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct Densifier {
    shape: FrameShape,
}

impl Densifier {
    pub fn new(shape: FrameShape) -> Self {
        Densifier { shape }
    }

    pub fn shape(&self) -> FrameShape {
        self.shape
    }

    /// Densifies one sparse batch into a zero-initialized frame.
    ///
    /// # Arguments
    /// * `batch` - Events to write; every index must lie in
    ///   `[0, width * height)`
    ///
    /// # Returns
    /// * `Result<DenseFrame, ValidationError>` - The frame, or an error
    ///   naming the first offending index, its position, and the plane bound.
    ///   Out-of-range indices are never clamped.
    ///
    /// An empty batch yields an all-zero frame. Duplicate events are
    /// idempotent: each mark stores a plain 1.0.
    pub fn densify(&self, batch: &SparseEventBatch) -> Result<DenseFrame, ValidationError> {
        self.validate(batch)?;

        let mut frame = DenseFrame::zeros(self.shape);
        for (index, polarity) in batch.iter() {
            let (row, col) = self.shape.unravel(index);
            frame.mark(row as usize, col as usize, polarity);
        }
        trace!(
            events = batch.len(),
            width = self.shape.width(),
            height = self.shape.height(),
            "densified sparse batch"
        );
        Ok(frame)
    }

    /// Range-checks every index against the plane before any write happens.
    fn validate(&self, batch: &SparseEventBatch) -> Result<(), ValidationError> {
        let shape = self.shape;
        batch
            .indices()
            .par_iter()
            .enumerate()
            .try_for_each(|(position, &index)| {
                if shape.contains(index) {
                    Ok(())
                } else {
                    Err(ValidationError::IndexOutOfRange {
                        index,
                        position,
                        width: shape.width(),
                        height: shape.height(),
                        bound: shape.plane_len(),
                    })
                }
            })
    }
}
