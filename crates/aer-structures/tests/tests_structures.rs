//! Tests for the core data structures
//!
//! Covers the interplay between batches, shapes, and frames that the
//! per-module unit tests do not: decoding against non-square planes,
//! ndarray ingestion, and flattening as the inverse of unraveling.

use aer_structures::{DenseFrame, FrameShape, Polarity, SparseEventBatch, ValidationError};
use ndarray::Array1;

#[test]
fn test_unravel_on_non_square_plane() {
    // width 5, height 3: flat index 12 is row 2, col 2
    let shape = FrameShape::occupancy(5, 3).unwrap();
    assert_eq!(shape.plane_len(), 15);
    assert_eq!(shape.unravel(12), (2, 2));
    assert_eq!(shape.unravel(4), (0, 4));
    assert!(shape.contains(14));
    assert!(!shape.contains(15));
}

#[test]
fn test_ndarray_ingestion_matches_vec_ingestion() {
    let from_nd = SparseEventBatch::new_from_ndarrays(
        Array1::from_vec(vec![1, 2, 3]),
        Array1::from_vec(vec![0, 1, 0]),
    )
    .unwrap();
    let from_vecs = SparseEventBatch::new_from_raw(vec![1, 2, 3], vec![0, 1, 0]).unwrap();
    assert_eq!(from_nd, from_vecs);
}

#[test]
fn test_ndarray_ingestion_validates_bits() {
    let result = SparseEventBatch::new_from_ndarrays(
        Array1::from_vec(vec![1, 2]),
        Array1::from_vec(vec![0, 7]),
    );
    assert_eq!(
        result,
        Err(ValidationError::InvalidPolarity {
            value: 7,
            position: 1
        })
    );
}

#[test]
fn test_flatten_inverts_unravel_for_every_cell() {
    let shape = FrameShape::occupancy(6, 4).unwrap();
    for index in 0..shape.plane_len() {
        let (row, col) = shape.unravel(index);
        let mut frame = DenseFrame::zeros(shape);
        frame.mark(row as usize, col as usize, Polarity::Off);
        let flat = frame.flatten();
        assert_eq!(flat[index as usize], 1.0);
        assert_eq!(flat.sum(), 1.0);
    }
}

#[test]
fn test_merge_associativity() {
    let shape = FrameShape::polarity_channels(3, 3).unwrap();
    let mut a = DenseFrame::zeros(shape);
    let mut b = DenseFrame::zeros(shape);
    let mut c = DenseFrame::zeros(shape);
    a.mark(0, 0, Polarity::On);
    b.mark(0, 0, Polarity::On);
    c.mark(1, 1, Polarity::Off);

    let left = a
        .clone()
        .merge(b.clone())
        .unwrap()
        .merge(c.clone())
        .unwrap();
    let right = a.merge(b.merge(c).unwrap()).unwrap();
    assert_eq!(left, right);
}
