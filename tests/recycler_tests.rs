//! Allocate/recycle behavior of the size-classed recycler.

use repool_arrays::{ArrayBuf, ArrayRecycler};
use repool_core::error::{Error, Result};
use repool_core::ladder::{CLASS_COUNT, LADDER};

#[test]
fn test_allocate_rounds_up_to_class_capacity() {
    let ints = ArrayRecycler::<i32>::new();
    assert_eq!(ints.allocate(0).unwrap().backing_len(), 4);
    assert_eq!(ints.allocate(4).unwrap().backing_len(), 4);
    assert_eq!(ints.allocate(5).unwrap().backing_len(), 8);
    assert_eq!(ints.allocate(65).unwrap().backing_len(), 128);
    assert_eq!(ints.allocate(1000).unwrap().backing_len(), 1024);
    assert_eq!(ints.allocate(65536).unwrap().backing_len(), 65536);
}

#[test]
fn test_oversized_allocate_is_exact_and_unpooled() {
    let ints = ArrayRecycler::<i32>::new();
    let big = ints.allocate(100000).unwrap();
    assert_eq!(big.backing_len(), 100000);

    let before = ints.bag_sizes();
    ints.recycle(big);
    assert_eq!(ints.bag_sizes(), before, "bypass recycle must not touch any bag");
    assert_eq!(ints.stats().bypassed, 1);
    assert_eq!(ints.stats().dropped, 1);
}

#[test]
fn test_round_trip_reuses_identical_storage() {
    let ints = ArrayRecycler::<i32>::new();
    let buf = ints.allocate(1000).unwrap();
    assert_eq!(buf.backing_len(), 1024);
    let ptr = buf.as_ptr();
    ints.recycle(buf);

    // Exactly one array is parked in the 1024 class, so reuse is deterministic.
    let again = ints.allocate(1024).unwrap();
    assert_eq!(again.as_ptr(), ptr);
    assert_eq!(again.backing_len(), 1024);

    let stats = ints.stats();
    assert_eq!(stats.created, 1);
    assert_eq!(stats.reused, 1);
    assert_eq!(stats.recycled, 1);
}

#[test]
fn test_unreturned_buffers_are_distinct() {
    let ints = ArrayRecycler::<i32>::new();
    let first = ints.allocate(4).unwrap();
    let second = ints.allocate(4).unwrap();
    assert_eq!(first.backing_len(), 4);
    assert_eq!(second.backing_len(), 4);
    assert_ne!(first.as_ptr(), second.as_ptr());
    // Nothing was released, so the smallest class's bag stays empty.
    assert_eq!(ints.available_in_class(0), 0);
}

#[test]
fn test_zero_length_recycle_is_absorbed() {
    let ints = ArrayRecycler::<i32>::new();
    let before = ints.bag_sizes();
    ints.recycle(ArrayBuf::from(Vec::new().into_boxed_slice()));
    assert_eq!(ints.bag_sizes(), before);
    assert_eq!(ints.stats().dropped, 1);
}

#[test]
fn test_foreign_lengths_are_dropped_not_pooled() {
    let ints = ArrayRecycler::<i32>::new();
    for len in [1, 3, 100, 1000] {
        ints.recycle(ArrayBuf::from(vec![0i32; len].into_boxed_slice()));
    }
    assert_eq!(ints.bag_sizes(), [0; CLASS_COUNT]);
    assert_eq!(ints.stats().dropped, 4);

    // An exact class length from outside the recycler is pooled normally.
    ints.recycle(ArrayBuf::from(vec![0i32; 256].into_boxed_slice()));
    assert_eq!(ints.allocate(256).unwrap().backing_len(), 256);
    assert_eq!(ints.stats().reused, 1);
}

#[test]
fn test_bags_only_hold_exact_capacities() {
    let ints = ArrayRecycler::<i32>::new();
    // Mixed traffic across several classes, plus noise that must be dropped.
    for capacity in [0, 3, 4, 7, 12, 100, 1000, 5000, 65536, 70000] {
        let buf = ints.allocate(capacity).unwrap();
        ints.recycle(buf);
    }
    ints.recycle(ArrayBuf::from(vec![0i32; 99].into_boxed_slice()));

    for (index, &capacity) in LADDER.iter().enumerate() {
        while ints.available_in_class(index) > 0 {
            let buf = ints.allocate(capacity).unwrap();
            assert_eq!(buf.backing_len(), capacity, "class {}", index);
        }
    }
}

#[test]
fn test_warm_up_respects_depth_and_ceiling() {
    let ints = ArrayRecycler::<i32>::new();
    ints.warm_up(3, 64).unwrap();
    for (index, &capacity) in LADDER.iter().enumerate() {
        let expected = if capacity <= 64 { 3 } else { 0 };
        assert_eq!(ints.available_in_class(index), expected, "class {}", index);
    }

    // Warmed classes serve allocations without constructing.
    let buf = ints.allocate(50).unwrap();
    assert_eq!(buf.backing_len(), 64);
    assert_eq!(ints.stats().reused, 1);
    assert_eq!(ints.stats().created, 0);
}

fn all_ones(len: usize) -> Result<Box<[u32]>> {
    Ok(vec![1u32; len].into_boxed_slice())
}

#[test]
fn test_custom_constructor_is_the_only_per_kind_hook() {
    let ones = ArrayRecycler::with_constructor(all_ones);
    let buf = ones.allocate(10).unwrap();
    assert_eq!(buf.backing_len(), 16);
    assert!(buf.iter().all(|&v| v == 1));
}

fn refuse(len: usize) -> Result<Box<[u32]>> {
    Err(Error::AllocFailed {
        kind: "u32",
        requested: len,
    })
}

#[test]
fn test_construction_failure_propagates() {
    let broken = ArrayRecycler::with_constructor(refuse);
    let err = broken.allocate(100).unwrap_err();
    assert!(matches!(err, Error::AllocFailed { requested: 128, .. }));

    // Bypass construction fails the same way, with the exact request.
    let err = broken.allocate(100000).unwrap_err();
    assert!(matches!(err, Error::AllocFailed { requested: 100000, .. }));

    // A cached array is still served without calling the constructor.
    broken.recycle(ArrayBuf::from(vec![7u32; 128].into_boxed_slice()));
    assert_eq!(broken.allocate(100).unwrap().backing_len(), 128);
}

#[test]
fn test_stats_snapshot_serializes_to_json() {
    let ints = ArrayRecycler::<i32>::new();
    let buf = ints.allocate(8).unwrap();
    ints.recycle(buf);

    let json = serde_json::to_value(ints.stats()).unwrap();
    assert_eq!(json["created"], 1);
    assert_eq!(json["recycled"], 1);
    assert_eq!(json["reused"], 0);
}

#[test]
fn test_logical_use_shorter_than_backing_still_routes_by_backing() {
    let ints = ArrayRecycler::<i32>::new();
    let mut buf = ints.allocate(1000).unwrap();
    // Caller logically uses only the first 10 slots.
    for slot in buf.iter_mut().take(10) {
        *slot = 42;
    }
    ints.recycle(buf);
    // The storage landed in the 1024 class, not anywhere smaller.
    assert_eq!(ints.available_in_class(8), 1);
    assert_eq!(ints.bag_sizes().iter().sum::<usize>(), 1);
}
