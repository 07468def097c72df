//! End-to-end tests: producer thread -> cadence bridge -> densifier -> frames
//!
//! Exercises the whole pipeline the way a step engine would drive it: a
//! free-running producer injecting sparse batches while the consumer ticks
//! at its own cadence.

use aer::prelude::*;
use std::thread;

#[test]
fn test_accumulating_source_folds_batches_across_one_tick() {
    let shape = FrameShape::occupancy(8, 8).unwrap();
    let source = DensifyingSource::accumulating(shape, QueueCapacity::Unbounded).unwrap();
    source.start().unwrap();

    let injector = source.injector();
    let producer = thread::spawn(move || {
        // Three bursts between two consumer ticks
        injector
            .inject(SparseEventBatch::new_from_raw(vec![0, 9], vec![0, 0]).unwrap())
            .unwrap();
        injector
            .inject(SparseEventBatch::new_from_raw(vec![17, 13], vec![1, 1]).unwrap())
            .unwrap();
        injector
            .inject(SparseEventBatch::new_from_raw(vec![23, 36], vec![0, 1]).unwrap())
            .unwrap();
    });
    producer.join().unwrap();

    let frame = source.next_frame().unwrap();
    match &frame {
        DenseFrame::Occupancy(plane) => {
            assert_eq!(plane.dim(), (8, 8));
            for (row, col) in [(0, 0), (1, 1), (2, 1), (1, 5), (2, 7), (4, 4)] {
                assert_eq!(plane[[row, col]], 1.0, "cell ({}, {})", row, col);
            }
            assert_eq!(plane.sum(), 6.0);
        }
        DenseFrame::PolarityChannels(_) => panic!("expected occupancy frame"),
    }

    // Everything was drained in that tick
    assert!(source.next_frame().unwrap().is_zero());
    source.stop();
}

#[test]
fn test_one_per_step_source_preserves_batch_boundaries() {
    let shape = FrameShape::polarity_channels(4, 4).unwrap();
    let source = DensifyingSource::one_per_step(shape, QueueCapacity::Bounded(8)).unwrap();
    source.start().unwrap();

    let injector = source.injector();
    injector
        .inject(SparseEventBatch::new_from_raw(vec![5], vec![1]).unwrap())
        .unwrap();
    injector
        .inject(SparseEventBatch::new_from_raw(vec![10], vec![0]).unwrap())
        .unwrap();

    let first = source.next_frame().unwrap();
    match &first {
        DenseFrame::PolarityChannels(volume) => {
            // Index 5 on a width-4 plane is row 1, col 1; polarity 1 -> channel 1
            assert_eq!(volume[[1, 1, 1]], 1.0);
            assert_eq!(volume.sum(), 1.0);
        }
        DenseFrame::Occupancy(_) => panic!("expected polarity-channel frame"),
    }

    let second = source.next_frame().unwrap();
    match &second {
        DenseFrame::PolarityChannels(volume) => {
            // Index 10 -> row 2, col 2; polarity 0 -> channel 0
            assert_eq!(volume[[2, 2, 0]], 1.0);
            assert_eq!(volume.sum(), 1.0);
        }
        DenseFrame::Occupancy(_) => panic!("expected polarity-channel frame"),
    }

    // No third batch queued
    assert!(source.next_frame().unwrap().is_zero());
    source.stop();
}

#[test]
fn test_stopped_source_rejects_both_endpoints() {
    let shape = FrameShape::occupancy(4, 4).unwrap();
    let source = DensifyingSource::accumulating(shape, QueueCapacity::Unbounded).unwrap();
    source.start().unwrap();
    source.stop();
    assert_eq!(source.state(), BridgeState::Stopped);

    let inject_result = source.injector().inject(SparseEventBatch::empty());
    match inject_result {
        Err(BridgeError::Stopped(_)) => {}
        other => panic!("expected lifecycle error, got {:?}", other),
    }
    assert!(matches!(
        source.next_frame(),
        Err(SourceError::Bridge(err)) if err.is_lifecycle()
    ));
}

#[test]
fn test_bridge_carries_pre_shaped_frames_directly() {
    // Dense producer path: frames are shaped upstream, the bridge only sums
    let shape = FrameShape::occupancy(4, 4).unwrap();
    let bridge = CadenceBridge::drain_all(
        DenseFrame::zeros(shape),
        move |a: DenseFrame, b: DenseFrame| {
            a.merge(b).expect("producer emits one fixed shape")
        },
        QueueCapacity::Unbounded,
    )
    .unwrap();
    bridge.start().unwrap();

    let densifier = Densifier::new(shape);
    let injector = bridge.injector();
    for index in [3u32, 3, 12] {
        let batch = SparseEventBatch::new_from_raw(vec![index], vec![0]).unwrap();
        injector.inject(densifier.densify(&batch).unwrap()).unwrap();
    }

    let accumulated = bridge.retrieve().unwrap();
    match accumulated {
        DenseFrame::Occupancy(plane) => {
            // Two frames marked cell (0, 3); sums accumulate across frames
            assert_eq!(plane[[0, 3]], 2.0);
            assert_eq!(plane[[3, 0]], 1.0);
            assert_eq!(plane.sum(), 3.0);
        }
        DenseFrame::PolarityChannels(_) => panic!("expected occupancy frame"),
    }
    bridge.stop();
}
