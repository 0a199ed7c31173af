//! Integration test: element lifecycle across growth, shrink and ownership
//! transfer.
//!
//! Uses the counting fixtures from `dynarray-test-utils` to check that
//! growth moves rather than clones, that logical shrinks never drop, and
//! that every tracked value is dropped exactly once in the end.

use dynarray::DynamicArray;
use dynarray_test_utils::{CloneCounter, DropCounter, MoveOnly, Tally};

// ── Drops ────────────────────────────────────────────────────────────

fn tracked(n: u32, tally: &Tally) -> DynamicArray<DropCounter> {
    let mut arr = DynamicArray::new();
    for id in 0..n {
        arr.push_back(DropCounter::new(id, tally)).unwrap();
    }
    arr
}

#[test]
fn growth_drops_nothing_and_drop_releases_each_value_once() {
    let tally = Tally::new();
    let arr = tracked(9, &tally);
    assert_eq!(arr.capacity(), 16);
    assert_eq!(tally.get(), 0);

    drop(arr);
    assert_eq!(tally.get(), 9);
}

#[test]
fn pop_back_keeps_value_until_slot_is_reused() {
    let tally = Tally::new();
    let mut arr = tracked(3, &tally);

    arr.pop_back();
    assert_eq!(tally.get(), 0);

    // Slot 2 still holds the popped value; overwriting it drops it.
    arr.push_back(DropCounter::new(99, &tally)).unwrap();
    assert_eq!(tally.get(), 1);
    assert_eq!(arr[2].id, 99);

    drop(arr);
    assert_eq!(tally.get(), 4);
}

#[test]
fn clear_is_logical_only() {
    let tally = Tally::new();
    let mut arr = tracked(3, &tally);
    arr.clear();
    assert_eq!(tally.get(), 0);
    drop(arr);
    assert_eq!(tally.get(), 3);
}

#[test]
fn erase_parks_value_in_stale_slot() {
    let tally = Tally::new();
    let mut arr = tracked(3, &tally);
    arr.erase(0);
    assert_eq!(tally.get(), 0);
    assert_eq!(arr.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 2]);
    drop(arr);
    assert_eq!(tally.get(), 3);
}

#[test]
fn into_iter_drops_stale_values_immediately() {
    let tally = Tally::new();
    let mut arr = tracked(3, &tally);
    arr.pop_back();

    let live: Vec<DropCounter> = arr.into_iter().collect();
    assert_eq!(tally.get(), 1);
    assert_eq!(live.len(), 2);

    drop(live);
    assert_eq!(tally.get(), 3);
}

#[test]
fn assign_drops_previous_contents() {
    let tally = Tally::new();
    let mut target = tracked(2, &tally);
    let source = tracked(3, &tally);

    target.assign(source).unwrap();
    assert_eq!(tally.get(), 2);
    assert_eq!(target.len(), 3);
    assert_eq!(target.capacity(), 3);

    drop(target);
    assert_eq!(tally.get(), 5);
}

// ── Clones ───────────────────────────────────────────────────────────

fn counted(n: i32, tally: &Tally) -> DynamicArray<CloneCounter> {
    let mut arr = DynamicArray::new();
    for v in 0..n {
        arr.push_back(CloneCounter::new(v, tally)).unwrap();
    }
    arr
}

#[test]
fn reallocation_moves_instead_of_cloning() {
    let tally = Tally::new();
    let mut arr = counted(20, &tally);
    arr.insert(0, CloneCounter::new(-1, &tally)).unwrap();
    arr.reserve(100).unwrap();
    arr.resize(250).unwrap();
    assert_eq!(tally.get(), 0);
    assert_eq!(arr[0].value, -1);
    assert_eq!(arr[20].value, 19);
}

#[test]
fn clone_copies_each_live_element_once() {
    let tally = Tally::new();
    let mut arr = counted(5, &tally);
    arr.pop_back();

    let copy = arr.try_clone().unwrap();
    assert_eq!(tally.get(), 4);
    assert_eq!(copy, arr);
    assert_eq!(copy.capacity(), 4);
}

#[test]
fn clone_from_builds_then_swaps() {
    let tally = Tally::new();
    let source = counted(3, &tally);
    let mut target = counted(7, &tally);

    target.clone_from(&source);
    assert_eq!(tally.get(), 3);
    assert_eq!(target, source);
}

// ── Move-only elements ───────────────────────────────────────────────

#[test]
fn move_only_elements_support_every_mutation() {
    let mut arr: DynamicArray<MoveOnly> = DynamicArray::new();
    for i in 0..4 {
        arr.push_back(MoveOnly(i)).unwrap();
    }
    arr.insert(2, MoveOnly(10)).unwrap();
    arr.erase(0);
    arr.reserve(32).unwrap();
    arr.resize(6).unwrap();

    let expected = [1, 10, 2, 3, 0, 0].map(MoveOnly);
    assert_eq!(arr.as_slice(), &expected);

    let mut other = arr.take();
    assert!(arr.is_empty());
    assert_eq!(arr.capacity(), 0);

    arr.swap(&mut other);
    assert_eq!(arr.len(), 6);
    assert!(other.is_empty());

    let mut target = DynamicArray::from([MoveOnly(7)]);
    target.assign(arr).unwrap();
    assert_eq!(target.len(), 6);
    assert_eq!(target.capacity(), 6);
}
