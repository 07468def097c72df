use crate::ValidationError;
use serde::{Deserialize, Serialize};

/// Number of polarity channels in a 3-D frame (one per polarity bit).
pub const POLARITY_CHANNEL_COUNT: usize = 2;

/// Selects how events are laid out in a dense frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolarityEncoding {
    /// 2-D occupancy map: a cell is 1 if any event landed there, polarity ignored
    Occupancy,
    /// 3-D map with a depth of 2: channel 0 holds polarity-0 events, channel 1 polarity-1
    PolarityChannels,
}

/// Validated dimensions of a dense frame.
///
/// Width and height are checked once at construction and never re-validated
/// per step. The shape also fixes the encoding, so a `FrameShape` fully
/// determines the layout of every frame produced against it.
///
/// Flat event indices address the `width x height` plane in row-major order:
/// `row = index / width`, `col = index % width`.
///
/// # Examples
/// ```
/// use aer_structures::FrameShape;
///
/// let shape = FrameShape::occupancy(8, 8).unwrap();
/// assert_eq!(shape.plane_len(), 64);
/// assert_eq!(shape.unravel(9), (1, 1));
///
/// assert!(FrameShape::occupancy(0, 8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameShape {
    width: u32,
    height: u32,
    encoding: PolarityEncoding,
}

impl FrameShape {
    /// Creates a 2-D occupancy shape.
    ///
    /// # Arguments
    /// * `width` - Plane width in cells, must be positive
    /// * `height` - Plane height in cells, must be positive
    ///
    /// # Returns
    /// * `Result<Self, ValidationError>` - The shape, or an error if a
    ///   dimension is zero or `width * height` overflows the flat index range
    pub fn occupancy(width: u32, height: u32) -> Result<Self, ValidationError> {
        Self::new(width, height, PolarityEncoding::Occupancy)
    }

    /// Creates a 3-D polarity-channel shape (depth fixed at 2).
    pub fn polarity_channels(width: u32, height: u32) -> Result<Self, ValidationError> {
        Self::new(width, height, PolarityEncoding::PolarityChannels)
    }

    fn new(
        width: u32,
        height: u32,
        encoding: PolarityEncoding,
    ) -> Result<Self, ValidationError> {
        if width == 0 {
            return Err(ValidationError::NonPositiveDimension { axis: "width" });
        }
        if height == 0 {
            return Err(ValidationError::NonPositiveDimension { axis: "height" });
        }
        if width.checked_mul(height).is_none() {
            return Err(ValidationError::PlaneTooLarge { width, height });
        }
        Ok(FrameShape {
            width,
            height,
            encoding,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn encoding(&self) -> PolarityEncoding {
        self.encoding
    }

    /// Number of polarity channels: `None` for occupancy, `Some(2)` for
    /// polarity-channel frames.
    pub fn channels(&self) -> Option<u32> {
        match self.encoding {
            PolarityEncoding::Occupancy => None,
            PolarityEncoding::PolarityChannels => Some(POLARITY_CHANNEL_COUNT as u32),
        }
    }

    /// Number of addressable cells in the plane (`width * height`).
    ///
    /// This is the exclusive upper bound for flat event indices.
    pub fn plane_len(&self) -> u32 {
        // Overflow ruled out at construction
        self.width * self.height
    }

    /// Whether `index` addresses a cell inside the plane.
    pub fn contains(&self, index: u32) -> bool {
        index < self.plane_len()
    }

    /// Decodes a flat row-major index into `(row, col)`.
    ///
    /// The decode satisfies `row * width + col == index`. Callers must check
    /// [`contains`](Self::contains) first; out-of-plane indices decode to
    /// rows past the last one.
    pub fn unravel(&self, index: u32) -> (u32, u32) {
        (index / self.width, index % self.width)
    }
}
