use crate::{FrameShape, Polarity, PolarityEncoding, ValidationError, POLARITY_CHANNEL_COUNT};
use ndarray::{Array1, Array2, Array3};

/// A dense tensor frame produced from sparse event data.
///
/// Two layouts exist, selected by the [`FrameShape`] a frame was created
/// against:
/// - `Occupancy`: `[height, width]`, a cell is 1.0 if any event landed there
/// - `PolarityChannels`: `[height, width, 2]`, one channel per polarity bit
///
/// Marking a cell stores a plain 1.0, so repeated events at the same
/// `(index, polarity)` are idempotent. Frames do not count events per cell;
/// accumulation across frames happens through [`merge`](Self::merge).
#[derive(Debug, Clone, PartialEq)]
pub enum DenseFrame {
    Occupancy(Array2<f32>),
    PolarityChannels(Array3<f32>),
}

impl DenseFrame {
    /// Creates an all-zero frame matching `shape`.
    ///
    /// # Examples
    /// ```
    /// use aer_structures::{DenseFrame, FrameShape};
    ///
    /// let shape = FrameShape::occupancy(4, 2).unwrap();
    /// let frame = DenseFrame::zeros(shape);
    /// assert!(frame.is_zero());
    /// assert_eq!((frame.height(), frame.width()), (2, 4));
    /// ```
    pub fn zeros(shape: FrameShape) -> Self {
        let (height, width) = (shape.height() as usize, shape.width() as usize);
        match shape.encoding() {
            PolarityEncoding::Occupancy => DenseFrame::Occupancy(Array2::zeros((height, width))),
            PolarityEncoding::PolarityChannels => DenseFrame::PolarityChannels(Array3::zeros((
                height,
                width,
                POLARITY_CHANNEL_COUNT,
            ))),
        }
    }

    /// Marks the cell at `(row, col)` for an event of the given polarity.
    ///
    /// Occupancy frames ignore the polarity for placement; polarity-channel
    /// frames route the mark to channel 0 or 1. Callers are responsible for
    /// bounds: `(row, col)` must come from decoding a validated index.
    pub fn mark(&mut self, row: usize, col: usize, polarity: Polarity) {
        match self {
            DenseFrame::Occupancy(plane) => plane[[row, col]] = 1.0,
            DenseFrame::PolarityChannels(volume) => {
                volume[[row, col, polarity.channel()]] = 1.0
            }
        }
    }

    /// Elementwise addition of two frames with identical layouts.
    ///
    /// Associative, which makes it a valid combine for accumulating
    /// pre-shaped frames across a consumer step. Mismatched encodings or
    /// dimensions are a validation error.
    pub fn merge(self, other: Self) -> Result<Self, ValidationError> {
        match (self, other) {
            (DenseFrame::Occupancy(a), DenseFrame::Occupancy(b)) if a.dim() == b.dim() => {
                Ok(DenseFrame::Occupancy(a + b))
            }
            (DenseFrame::PolarityChannels(a), DenseFrame::PolarityChannels(b))
                if a.dim() == b.dim() =>
            {
                Ok(DenseFrame::PolarityChannels(a + b))
            }
            (left, right) => Err(ValidationError::FrameLayoutMismatch {
                left: left.layout_label(),
                right: right.layout_label(),
            }),
        }
    }

    /// Flattens the frame into a 1-D row-major array.
    ///
    /// For occupancy frames the element at flat position `i` corresponds to
    /// the event index `i` that marked it.
    pub fn flatten(&self) -> Array1<f32> {
        match self {
            DenseFrame::Occupancy(plane) => Array1::from_iter(plane.iter().copied()),
            DenseFrame::PolarityChannels(volume) => Array1::from_iter(volume.iter().copied()),
        }
    }

    pub fn width(&self) -> usize {
        match self {
            DenseFrame::Occupancy(plane) => plane.dim().1,
            DenseFrame::PolarityChannels(volume) => volume.dim().1,
        }
    }

    pub fn height(&self) -> usize {
        match self {
            DenseFrame::Occupancy(plane) => plane.dim().0,
            DenseFrame::PolarityChannels(volume) => volume.dim().0,
        }
    }

    /// Channel count: `None` for occupancy frames, `Some(2)` otherwise.
    pub fn channels(&self) -> Option<usize> {
        match self {
            DenseFrame::Occupancy(_) => None,
            DenseFrame::PolarityChannels(volume) => Some(volume.dim().2),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            DenseFrame::Occupancy(plane) => plane.iter().all(|v| *v == 0.0),
            DenseFrame::PolarityChannels(volume) => volume.iter().all(|v| *v == 0.0),
        }
    }

    fn layout_label(&self) -> String {
        match self {
            DenseFrame::Occupancy(plane) => {
                format!("occupancy {}x{}", plane.dim().0, plane.dim().1)
            }
            DenseFrame::PolarityChannels(volume) => {
                let (h, w, c) = volume.dim();
                format!("polarity-channels {}x{}x{}", h, w, c)
            }
        }
    }
}
