#![allow(non_snake_case)]

use super::*;
use crate::waiter::Wait;
use test_case::test_case;

fn queue_with(n: usize) -> (WaitQueue, Vec<Waiter>) {
    let wq = WaitQueue::new();
    let waiters = (0..n).map(|_| wq.new_waiter()).collect();
    (wq, waiters)
}

#[test]
fn WaitQueue___new___is_empty() {
    let wq = WaitQueue::new();

    assert_eq!(wq.len(), 0);
    assert!(wq.is_empty());
}

#[test]
fn WaitQueue___new_waiter___appends_open_waiter() {
    let (wq, waiters) = queue_with(3);

    assert_eq!(wq.len(), 3);
    assert!(waiters.iter().all(|w| !w.is_signaled()));
}

#[test]
fn WaitQueue___release___signals_oldest_first() {
    let (wq, waiters) = queue_with(5);

    let released = wq.release(2);

    assert_eq!(released, 2);
    assert_eq!(wq.len(), 3);
    let signaled: Vec<bool> = waiters.iter().map(|w| w.is_signaled()).collect();
    assert_eq!(signaled, vec![true, true, false, false, false]);
}

#[test_case(5, 0, 0, 5 ; "zero releases nothing")]
#[test_case(5, 2, 2, 3 ; "partial release")]
#[test_case(3, 3, 3, 0 ; "exact release")]
#[test_case(3, 10, 3, 0 ; "over release is clamped")]
#[test_case(0, 4, 0, 0 ; "empty queue")]
fn WaitQueue___release___reports_count(size: usize, n: usize, released: usize, remaining: usize) {
    let (wq, _waiters) = queue_with(size);

    assert_eq!(wq.release(n), released);
    assert_eq!(wq.len(), remaining);
}

#[test]
fn WaitQueue___release_all___signals_everything() {
    let (wq, waiters) = queue_with(4);
    wq.release(1);

    let released = wq.release_all();

    assert_eq!(released, 3);
    assert!(wq.is_empty());
    assert!(waiters.iter().all(|w| w.is_signaled()));
}

#[test]
fn WaitQueue___release_all_on_empty___returns_zero() {
    let wq = WaitQueue::new();

    assert_eq!(wq.release_all(), 0);
}

#[test]
fn WaitQueue___after_release___accepts_new_waiters() {
    let (wq, _waiters) = queue_with(2);
    wq.release_all();

    let waiter = wq.new_waiter();

    assert_eq!(wq.len(), 1);
    assert!(!waiter.is_signaled());
}
