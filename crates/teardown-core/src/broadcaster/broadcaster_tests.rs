#![allow(non_snake_case)]

use super::*;
use crate::waiter::Wait;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

type Trace = Arc<Mutex<Vec<&'static str>>>;

fn spawn_holder(waiter: ReceiptableWaiter, trace: &Trace, name: &'static str) -> JoinHandle<()> {
    let trace = trace.clone();
    thread::spawn(move || {
        waiter.wait();
        trace.lock().push(name);
        waiter.done();
    })
}

fn joined(trace: &Trace) -> String {
    trace.lock().join("-")
}

#[test]
fn Broadcaster___new___is_open_and_empty() {
    let b = Broadcaster::new();

    assert!(b.is_empty());
    assert_eq!(b.len(), 0);
    assert!(!b.is_closed());
}

#[test]
fn Broadcaster___new_waiter___registers_open_waiter() {
    let b = Broadcaster::new();

    let waiter = b.new_waiter();

    assert_eq!(b.len(), 1);
    assert!(!waiter.is_signaled());
    assert!(!waiter.is_empty());
}

#[test]
fn Broadcaster___broadcast___handshakes_in_reverse_order() {
    let b = Broadcaster::new();
    let trace: Trace = Arc::default();

    let holders = vec![
        spawn_holder(b.new_waiter(), &trace, "A"),
        spawn_holder(b.new_waiter(), &trace, "B"),
        spawn_holder(b.new_waiter(), &trace, "C"),
    ];

    b.broadcast();

    assert_eq!(joined(&trace), "C-B-A");
    for holder in holders {
        holder.join().unwrap();
    }
}

#[test]
fn Broadcaster___broadcast___resets_to_open_state() {
    let b = Broadcaster::new();
    let trace: Trace = Arc::default();

    let first = [
        spawn_holder(b.new_waiter(), &trace, "A"),
        spawn_holder(b.new_waiter(), &trace, "B"),
    ];
    b.broadcast();
    assert_eq!(joined(&trace), "B-A");
    assert!(b.is_empty());
    assert!(!b.is_closed());

    let second = [
        spawn_holder(b.new_waiter(), &trace, "C"),
        spawn_holder(b.new_waiter(), &trace, "D"),
    ];
    b.close();
    assert_eq!(joined(&trace), "B-A-D-C");

    for holder in first.into_iter().chain(second) {
        holder.join().unwrap();
    }
}

#[test]
fn Broadcaster___close___later_waiters_are_already_signaled() {
    let b = Broadcaster::new();
    b.close();

    let waiter = b.new_waiter();

    assert!(b.is_closed());
    assert!(b.is_empty());
    assert!(waiter.is_empty());
    assert!(waiter.is_signaled());
    waiter.wait();
    waiter.done();
}

#[test]
fn Broadcaster___repeated_close_and_broadcast___are_no_ops() {
    let b = Broadcaster::new();

    b.broadcast();
    b.close();
    b.close();
    b.broadcast();

    assert!(b.is_closed());
}

#[test]
fn Broadcaster___done_before_signal___does_not_block_broadcast() {
    let b = Broadcaster::new();
    let waiter = b.new_waiter();
    waiter.done();

    b.broadcast();

    assert!(waiter.is_signaled());
}

#[tokio::test]
async fn Broadcaster___async_holder___observes_notified() {
    let b = Arc::new(Broadcaster::new());
    let waiter = b.new_waiter();

    let holder = tokio::spawn(async move {
        waiter.notified().await;
        waiter.done();
    });

    let broadcaster = b.clone();
    tokio::task::spawn_blocking(move || broadcaster.broadcast())
        .await
        .unwrap();

    holder.await.unwrap();
}
