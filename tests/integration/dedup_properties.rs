//! Property-based tests for candidate deduplication

use confview::complete::dedup_values;
use confview::tree::Node;
use proptest::prelude::*;

fn leaves(values: &[String]) -> Vec<Node> {
    values.iter().map(|v| Node::leaf("name", v.as_str())).collect()
}

fn dedup(values: &[String]) -> Vec<String> {
    let nodes = leaves(values);
    let refs: Vec<&Node> = nodes.iter().collect();
    dedup_values(&refs).unwrap()
}

/// Every value appears once, in order of first occurrence
#[test]
fn test_dedup_keeps_first_occurrence_order() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec("[a-c]{1,2}", 0..24), |values| {
            let out = dedup(&values);

            for (i, v) in out.iter().enumerate() {
                prop_assert!(!out[..i].contains(v));
            }

            let mut expected: Vec<String> = Vec::new();
            for v in &values {
                if !expected.contains(v) {
                    expected.push(v.clone());
                }
            }
            prop_assert_eq!(out, expected);
            Ok(())
        })
        .unwrap();
}

/// Deduplicating twice changes nothing
#[test]
fn test_dedup_is_idempotent() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(any::<String>(), 0..16), |values| {
            let once = dedup(&values);
            let twice = dedup(&once);
            prop_assert_eq!(once, twice);
            Ok(())
        })
        .unwrap();
}

/// A value-less match anywhere fails the whole call
#[test]
fn test_missing_value_always_fails() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec("[a-z]{1,4}", 0..10), any::<prop::sample::Index>()),
            |(values, index)| {
                let mut nodes = leaves(&values);
                let position = index.index(nodes.len() + 1);
                nodes.insert(position, Node::element("name"));
                let refs: Vec<&Node> = nodes.iter().collect();
                prop_assert!(dedup_values(&refs).is_err());
                Ok(())
            },
        )
        .unwrap();
}
