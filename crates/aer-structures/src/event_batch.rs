use crate::ValidationError;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Binary polarity of an address event.
///
/// Event sensors report whether a cell brightened or darkened; downstream
/// this selects the channel slot in polarity-channel frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Polarity {
    Off = 0,
    On = 1,
}

impl Polarity {
    /// Interprets a raw bit as a polarity.
    ///
    /// Returns `None` for anything other than 0 or 1.
    pub fn from_bit(value: u8) -> Option<Self> {
        match value {
            0 => Some(Polarity::Off),
            1 => Some(Polarity::On),
            _ => None,
        }
    }

    /// Channel slot this polarity occupies in a polarity-channel frame.
    pub fn channel(&self) -> usize {
        *self as usize
    }
}

/// Structure-of-arrays storage for a batch of sparse address events.
///
/// Stores flat row-major spatial indices and polarity bits in separate
/// parallel arrays. A batch is built fresh from whatever a producer supplied
/// for one step, is immutable once constructed, and is discarded after one
/// densification.
///
/// Length equality of the two arrays is enforced at construction; index range
/// against a concrete plane is checked at densification time, since a batch
/// carries no target shape of its own.
///
/// # Examples
/// ```
/// use aer_structures::{Polarity, SparseEventBatch};
///
/// let batch = SparseEventBatch::new_from_raw(vec![0, 9, 17], vec![1, 0, 1]).unwrap();
/// assert_eq!(batch.len(), 3);
/// assert_eq!(batch.polarities()[0], Polarity::On);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseEventBatch {
    /// Flat row-major addresses into the target plane
    indices: Vec<u32>,
    /// Polarity bit per event, same length as `indices`
    polarities: Vec<Polarity>,
}

impl SparseEventBatch {
    /// Creates an empty batch. Densifies to an all-zero frame.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a batch from parallel vectors of indices and typed polarities.
    ///
    /// # Arguments
    /// * `indices` - Flat row-major event addresses
    /// * `polarities` - Polarity per event
    ///
    /// # Returns
    /// * `Result<Self, ValidationError>` - A new batch, or an error if the
    ///   vectors differ in length
    ///
    /// # Examples
    /// ```
    /// use aer_structures::{Polarity, SparseEventBatch};
    ///
    /// let batch = SparseEventBatch::new_from_vectors(
    ///     vec![3, 7],
    ///     vec![Polarity::On, Polarity::Off],
    /// ).unwrap();
    /// assert_eq!(batch.len(), 2);
    /// ```
    pub fn new_from_vectors(
        indices: Vec<u32>,
        polarities: Vec<Polarity>,
    ) -> Result<Self, ValidationError> {
        if indices.len() != polarities.len() {
            return Err(ValidationError::LengthMismatch {
                indices: indices.len(),
                polarities: polarities.len(),
            });
        }
        Ok(SparseEventBatch {
            indices,
            polarities,
        })
    }

    /// Creates a batch from raw polarity bits, validating each bit is 0 or 1.
    ///
    /// # Returns
    /// * `Result<Self, ValidationError>` - A new batch, or an error naming the
    ///   first invalid bit and its position
    pub fn new_from_raw(
        indices: Vec<u32>,
        polarity_bits: Vec<u8>,
    ) -> Result<Self, ValidationError> {
        if indices.len() != polarity_bits.len() {
            return Err(ValidationError::LengthMismatch {
                indices: indices.len(),
                polarities: polarity_bits.len(),
            });
        }
        let polarities = polarity_bits
            .into_iter()
            .enumerate()
            .map(|(position, value)| {
                Polarity::from_bit(value)
                    .ok_or(ValidationError::InvalidPolarity { value, position })
            })
            .collect::<Result<Vec<Polarity>, ValidationError>>()?;
        Ok(SparseEventBatch {
            indices,
            polarities,
        })
    }

    /// Creates a batch from two ndarray `Array1` instances of equal length.
    ///
    /// Ingestion path for producers that already hold their event data as
    /// ndarrays.
    ///
    /// # Examples
    /// ```
    /// use ndarray::Array1;
    /// use aer_structures::SparseEventBatch;
    ///
    /// let indices = Array1::from_vec(vec![1, 2, 3]);
    /// let bits = Array1::from_vec(vec![0, 1, 0]);
    /// let batch = SparseEventBatch::new_from_ndarrays(indices, bits).unwrap();
    /// assert_eq!(batch.len(), 3);
    /// ```
    pub fn new_from_ndarrays(
        indices: Array1<u32>,
        polarity_bits: Array1<u8>,
    ) -> Result<Self, ValidationError> {
        Self::new_from_raw(indices.to_vec(), polarity_bits.to_vec())
    }

    /// Number of events in the batch.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn polarities(&self) -> &[Polarity] {
        &self.polarities
    }

    /// Iterates events as `(flat_index, polarity)` pairs in batch order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Polarity)> + '_ {
        self.indices
            .iter()
            .copied()
            .zip(self.polarities.iter().copied())
    }

    /// Concatenates two batches, preserving order (`self` first).
    ///
    /// Concatenation is associative, which makes it the natural combine for
    /// accumulating every batch a producer emitted between two consumer steps.
    pub fn concat(mut self, other: Self) -> Self {
        self.indices.extend(other.indices);
        self.polarities.extend(other.polarities);
        self
    }
}
