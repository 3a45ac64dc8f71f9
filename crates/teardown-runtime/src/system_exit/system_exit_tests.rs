#![allow(non_snake_case)]

use super::*;

// Firing the process-wide waiter is covered in tests/system_exit_tests.rs,
// which runs in its own process.

#[test]
fn system_exit___repeated_calls___share_one_signal() {
    let first = system_exit();
    let second = system_exit();

    assert!(first.same_as(&second));
}

#[test]
fn system_exit___listener___started_once() {
    system_exit();
    system_exit();

    assert!(LISTENER.get().is_some());
}
