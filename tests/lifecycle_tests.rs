use std::sync::atomic::{AtomicUsize, Ordering};

use fixcap::FixVec;

static DROPS: AtomicUsize = AtomicUsize::new(0);

#[derive(Default)]
struct Tracked(#[allow(dead_code)] u32);

impl Drop for Tracked {
    fn drop(&mut self) {
        DROPS.fetch_add(1, Ordering::SeqCst);
    }
}

fn drops() -> usize {
    DROPS.load(Ordering::SeqCst)
}

// One test owns the counter so parallel tests cannot skew it. Every stage
// states the running total it expects.
#[test]
fn test_values_drop_only_when_overwritten_or_with_the_vector() {
    let mut vec: FixVec<Tracked, 3> = FixVec::new();
    // new() constructed three defaults, dropped nothing.
    assert_eq!(drops(), 0);

    vec.push(Tracked(1)).unwrap();
    vec.push(Tracked(2)).unwrap();
    // Each push overwrote one default slot.
    assert_eq!(drops(), 2);

    vec.pop();
    assert_eq!(drops(), 2);

    vec.clear();
    // pop and clear only move the fence; the stale values stay live.
    assert_eq!(drops(), 2);

    vec.resize(2).unwrap();
    // Growing wrote defaults over the stale Tracked(1) and Tracked(2).
    assert_eq!(drops(), 4);

    vec.push(Tracked(9)).unwrap();
    // Overwrote the untouched default in slot 2.
    assert_eq!(drops(), 5);

    let rejected = vec.push(Tracked(10));
    assert!(rejected.is_err());
    // The vector is full: the rejected value was dropped, nothing else.
    assert_eq!(drops(), 6);

    drop(vec);
    // All three slots went down with the container.
    assert_eq!(drops(), 9);
}

#[test]
fn test_element_addresses_survive_every_operation() {
    let mut vec: FixVec<u32, 8> = FixVec::new();
    vec.push(1).unwrap();
    let base = vec.as_slice().as_ptr();

    vec.push(2).unwrap();
    vec.push(3).unwrap();
    assert_eq!(vec.as_slice().as_ptr(), base);

    vec.pop();
    assert_eq!(vec.as_slice().as_ptr(), base);

    vec.clear();
    vec.resize(5).unwrap();
    assert_eq!(vec.as_slice().as_ptr(), base);

    vec.reserve(8).unwrap();
    vec.shrink_to_fit();
    assert_eq!(vec.as_slice().as_ptr(), base);

    // A failed push must not disturb the storage either.
    vec.resize(8).unwrap();
    assert!(vec.push(99).is_err());
    assert_eq!(vec.as_slice().as_ptr(), base);
}

#[test]
fn test_pushed_reference_points_into_the_vector() {
    let mut vec: FixVec<u32, 4> = FixVec::new();

    let slot: *const u32 = vec.push(5).unwrap();
    let from_slice: *const u32 = &vec.as_slice()[0];

    assert_eq!(slot, from_slice);
}
