//! Property-based tests for error aggregation and queue release counts

use proptest::prelude::*;
use teardown_core::{AggregateError, BoxError, Wait, WaitQueue};

// Strategy: a list of groups; each group becomes either a bare error or a nested aggregate
fn arb_groups() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z]{1,6}", 1..4), 0..8)
}

proptest! {
    /// Property: nested aggregates are flattened in encounter order
    #[test]
    fn proptest_aggregate_flattens_in_order(groups in arb_groups()) {
        let mut errs = AggregateError::new();
        for group in &groups {
            if group.len() == 1 {
                errs.add(group[0].clone());
            } else {
                let mut nested = AggregateError::new();
                for msg in group {
                    nested.add(msg.clone());
                }
                errs.add(nested);
            }
        }

        let expected: Vec<String> = groups.iter().flatten().cloned().collect();
        let actual: Vec<String> = errs.all().iter().map(|e| e.to_string()).collect();
        prop_assert_eq!(&actual, &expected);
        prop_assert!(errs.all().iter().all(|e| !e.is::<AggregateError>()));

        if expected.len() > 1 {
            prop_assert_eq!(errs.to_string(), expected.join("; "));
        }
    }

    /// Property: into_result yields nothing, the single error, or the aggregate
    #[test]
    fn proptest_aggregate_into_result_shape(msgs in prop::collection::vec("[a-z]{1,6}", 0..5)) {
        let errors: Vec<BoxError> = msgs.iter().map(|m| m.clone().into()).collect();
        let result = AggregateError::from(errors).into_result();

        match msgs.len() {
            0 => prop_assert!(result.is_ok()),
            1 => {
                let err = result.unwrap_err();
                prop_assert!(!err.is::<AggregateError>());
                prop_assert_eq!(err.to_string(), msgs[0].clone());
            }
            _ => prop_assert!(result.unwrap_err().is::<AggregateError>()),
        }
    }

    /// Property: release(n) signals exactly the oldest min(n, len) waiters
    #[test]
    fn proptest_release_signals_oldest(size in 0usize..20, n in 0usize..30) {
        let queue = WaitQueue::new();
        let waiters: Vec<_> = (0..size).map(|_| queue.new_waiter()).collect();

        let released = queue.release(n);

        prop_assert_eq!(released, n.min(size));
        prop_assert_eq!(queue.len(), size - released);
        for (i, waiter) in waiters.iter().enumerate() {
            prop_assert_eq!(waiter.is_signaled(), i < released);
        }
    }
}
