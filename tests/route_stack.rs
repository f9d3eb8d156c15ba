//! Behaviour tests for the public route stack API.
//!
//! Routes of several shapes are exercised through `serde_json::Value`;
//! plain `&str` stacks cover the positional scenarios.

use std::collections::HashSet;

use serde_json::{json, Value};

use routestack::core::key::Key;
use routestack::core::stack::{RouteStack, StackError};

/// Routes of different kinds.
fn routes() -> Vec<Value> {
    vec![
        json!("foo"),
        json!(1),
        json!(true),
        json!({"foo": "bar"}),
        json!(["foo"]),
    ]
}

fn stack(index: usize, routes: &[&'static str]) -> RouteStack<&'static str> {
    RouteStack::new(index, routes.iter().copied()).unwrap()
}

// =============================================================================
// Basic
// =============================================================================

#[test]
fn gets_index() {
    assert_eq!(stack(1, &["a", "b", "c"]).index(), 1);
}

#[test]
fn gets_size() {
    assert_eq!(stack(1, &["a", "b", "c"]).size(), 3);
}

#[test]
fn gets_route() {
    let stack = stack(0, &["a", "b", "c"]);
    assert_eq!(stack.get(2), Ok(&"c"));
    assert_eq!(
        stack.get(3),
        Err(StackError::InvalidIndex { index: 3, size: 3 })
    );
}

#[test]
fn converts_to_vec() {
    assert_eq!(stack(0, &["a", "b"]).to_vec(), vec!["a", "b"]);
}

#[test]
fn creates_a_new_stack_after_mutation() {
    let stack1 = stack(0, &["a", "b"]);
    let stack2 = stack1.push("c").unwrap();
    assert!(!stack1.ptr_eq(&stack2));
}

#[test]
fn rejects_index_out_of_bounds() {
    assert!(matches!(
        RouteStack::new(100, ["a", "b"]),
        Err(StackError::InvalidIndex { index: 100, size: 2 })
    ));
    assert!(matches!(
        RouteStack::new(2, ["a", "b"]),
        Err(StackError::InvalidIndex { .. })
    ));
}

#[test]
fn finds_index() {
    let stack = stack(0, &["a", "b"]);
    assert_eq!(stack.index_of(&"b"), Some(1));
    assert_eq!(stack.index_of(&"c"), None);
}

#[test]
fn finds_first_index_of_duplicate() {
    let stack = stack(0, &["a", "b", "a"]);
    assert_eq!(stack.index_of(&"a"), Some(0));
}

#[test]
fn mutations_leave_the_receiver_unchanged() {
    let original = stack(1, &["a", "b", "c"]);
    let keys: Vec<Key> = original.keys().cloned().collect();

    let _ = original.push("d").unwrap();
    let _ = original.pop().unwrap();
    let _ = original.slice(Some(1), None).unwrap();
    let _ = original.jump_to_index(0).unwrap();
    let _ = original.replace_at_index(0, "x").unwrap();

    assert_eq!(original.to_vec(), vec!["a", "b", "c"]);
    assert_eq!(original.index(), 1);
    assert_eq!(original.keys().cloned().collect::<Vec<_>>(), keys);
}

// =============================================================================
// Key
// =============================================================================

#[test]
fn gets_key_for_route() {
    for route in routes() {
        let stack = RouteStack::new(0, [json!("a")]).unwrap();
        let key = stack.push(route.clone()).unwrap().key_of(&route).cloned();
        assert!(key.is_some_and(|k| !k.as_str().is_empty()));
    }
}

#[test]
fn later_keys_compare_greater() {
    let mut stack = RouteStack::new(0, [json!("a")]).unwrap();
    let mut last = stack.key_of(&json!("a")).cloned().unwrap();

    for route in routes() {
        stack = stack.push(route.clone()).unwrap();
        let key = stack.key_of(&route).cloned().unwrap();
        assert!(key > last, "{key} should sort after {last}");
        last = key;
    }
}

#[test]
fn gets_a_unique_key_for_each_route() {
    let mut stack = RouteStack::new(0, [json!("a")]).unwrap();
    let mut keys = HashSet::new();

    for route in routes() {
        stack = stack.push(route.clone()).unwrap();
        let key = stack.key_of(&route).cloned().unwrap();
        assert!(keys.insert(key));
    }
}

#[test]
fn gets_the_same_key_for_the_same_route() {
    for route in routes() {
        let stack = RouteStack::new(0, [route.clone()]).unwrap();
        assert_eq!(stack.key_of(&route), stack.key_of(&route));
    }
}

#[test]
fn derived_stack_keeps_keys() {
    for route in routes() {
        let stack = RouteStack::new(0, [route.clone()]).unwrap();
        let derived = stack
            .push(json!("wow"))
            .unwrap()
            .pop()
            .unwrap()
            .slice(Some(0), Some(10))
            .unwrap()
            .push(json!("blah"))
            .unwrap();
        assert_eq!(derived.key_of(&route), stack.key_of(&route));
    }
}

#[test]
fn different_stacks_give_different_keys() {
    for route in routes() {
        let stack1 = RouteStack::new(0, [route.clone()]).unwrap();
        let stack2 = RouteStack::new(0, [route.clone()]).unwrap();
        assert_ne!(stack1.key_of(&route), stack2.key_of(&route));
        assert!(!stack1.is_derived_from(&stack2));
    }
}

#[test]
fn no_key_for_missing_route() {
    let stack = stack(0, &["a"]);
    assert_eq!(stack.key_of(&"b"), None);
}

#[test]
fn new_key_for_route_removed_and_added_again() {
    for route in routes() {
        let stack = RouteStack::new(0, [json!("a")]).unwrap();
        let key1 = stack.push(route.clone()).unwrap().key_of(&route).cloned();
        let key2 = stack
            .push(route.clone())
            .unwrap()
            .pop()
            .unwrap()
            .push(route.clone())
            .unwrap()
            .key_of(&route)
            .cloned();
        assert_ne!(key1, key2);
    }
}

#[test]
fn sibling_pushes_get_distinct_keys() {
    let parent = stack(0, &["a"]);
    let left = parent.push("b").unwrap();
    let right = parent.push("b").unwrap();
    assert_ne!(left.key_of(&"b"), right.key_of(&"b"));
    assert_eq!(left.subtract(&right).routes().collect::<Vec<_>>(), vec![&"b"]);
}

#[test]
fn key_of_prefers_most_recent_duplicate() {
    let stack = stack(0, &["a"]).push("b").unwrap().push("a").unwrap();
    assert_eq!(stack.key_of(&"a"), stack.key_at(2));
    assert_ne!(stack.key_of(&"a"), stack.key_at(0));
}

// =============================================================================
// Slice
// =============================================================================

#[test]
fn slices() {
    let stack1 = stack(1, &["a", "b", "c", "d"]);
    let stack2 = stack1.slice(Some(1), Some(3)).unwrap();
    assert!(!stack2.ptr_eq(&stack1));
    assert_eq!(stack2.to_vec(), vec!["b", "c"]);
}

#[test]
fn updates_index_after_slicing() {
    let stack = stack(2, &["a", "b", "c"]);
    assert_eq!(stack.slice(None, None).unwrap().index(), 2);
    assert_eq!(stack.slice(Some(0), Some(1)).unwrap().index(), 0);
    assert_eq!(stack.slice(Some(0), Some(2)).unwrap().index(), 1);
    assert_eq!(stack.slice(Some(0), Some(3)).unwrap().index(), 2);
    assert_eq!(stack.slice(Some(0), Some(100)).unwrap().index(), 2);
    assert_eq!(stack.slice(Some(-2), None).unwrap().index(), 1);
}

#[test]
fn pointer_before_slice_clamps_to_start() {
    let stack = stack(0, &["a", "b", "c"]);
    let sliced = stack.slice(Some(1), None).unwrap();
    assert_eq!(sliced.index(), 0);
    assert_eq!(*sliced.current(), "b");
}

#[test]
fn slices_without_params_returns_same_instance() {
    let stack1 = stack(1, &["a", "b", "c"]);
    let stack2 = stack1.slice(None, None).unwrap();
    assert!(stack2.ptr_eq(&stack1));
}

#[test]
fn slices_from_the_end() {
    let stack = stack(1, &["a", "b", "c", "d"]);
    assert_eq!(stack.slice(Some(-2), None).unwrap().to_vec(), vec!["c", "d"]);
    assert_eq!(
        stack.slice(Some(-3), Some(-1)).unwrap().to_vec(),
        vec!["b", "c"]
    );
}

#[test]
fn slicing_to_empty_fails() {
    let stack = stack(1, &["a", "b"]);
    assert_eq!(
        stack.slice(Some(100), None).unwrap_err(),
        StackError::InvalidSlice {
            begin: Some(100),
            end: None,
            size: 2
        }
    );
    assert!(matches!(
        stack.slice(Some(1), Some(1)),
        Err(StackError::InvalidSlice { .. })
    ));
    assert!(matches!(
        stack.slice(Some(1), Some(0)),
        Err(StackError::InvalidSlice { .. })
    ));
}

#[test]
fn slice_preserves_keys() {
    let stack = stack(1, &["a", "b", "c", "d"]);
    let sliced = stack.slice(Some(1), Some(3)).unwrap();
    assert_eq!(sliced.key_of(&"b"), stack.key_of(&"b"));
    assert_eq!(sliced.key_of(&"c"), stack.key_of(&"c"));
}

// =============================================================================
// Push
// =============================================================================

#[test]
fn pushes_route() {
    let stack1 = stack(1, &["a", "b"]);
    let stack2 = stack1.push("c").unwrap();

    assert!(!stack2.ptr_eq(&stack1));
    assert_eq!(stack2.to_vec(), vec!["a", "b", "c"]);
    assert_eq!(stack2.index(), 2);
    assert_eq!(stack2.size(), 3);
}

#[test]
fn pushing_empty_route_fails() {
    let stack = stack(1, &["a", "b"]);
    assert_eq!(stack.push("").unwrap_err(), StackError::InvalidRoute);

    let optional = RouteStack::new(1, [Some("a"), Some("b")]).unwrap();
    assert_eq!(optional.push(None).unwrap_err(), StackError::InvalidRoute);

    let values = RouteStack::new(0, [json!("a")]).unwrap();
    assert_eq!(values.push(json!(null)).unwrap_err(), StackError::InvalidRoute);
    assert_eq!(values.push(json!("")).unwrap_err(), StackError::InvalidRoute);
}

#[test]
fn push_replaces_forward_history() {
    let stack1 = stack(1, &["a", "b", "c"]);
    let stack2 = stack1.push("d").unwrap();
    assert!(!stack2.ptr_eq(&stack1));
    assert_eq!(stack2.to_vec(), vec!["a", "b", "d"]);
    assert_eq!(stack2.index(), 2);
}

// =============================================================================
// Pop
// =============================================================================

#[test]
fn pops_route() {
    let stack1 = stack(2, &["a", "b", "c"]);
    let stack2 = stack1.pop().unwrap();
    assert!(!stack2.ptr_eq(&stack1));
    assert_eq!(stack2.to_vec(), vec!["a", "b"]);
    assert_eq!(stack2.index(), 1);
    assert_eq!(stack2.size(), 2);
}

#[test]
fn pop_drops_forward_history() {
    let stack1 = stack(1, &["a", "b", "c"]);
    let stack2 = stack1.pop().unwrap();
    assert_eq!(stack2.to_vec(), vec!["a"]);
    assert_eq!(stack2.index(), 0);
}

#[test]
fn popping_to_empty_fails() {
    assert_eq!(stack(0, &["a"]).pop().unwrap_err(), StackError::InvalidPop);
    assert_eq!(
        stack(0, &["a", "b"]).pop().unwrap_err(),
        StackError::InvalidPop
    );
}

// =============================================================================
// Jump
// =============================================================================

#[test]
fn jumps_to_index() {
    let stack1 = stack(0, &["a", "b", "c"]);
    let stack2 = stack1.jump_to_index(2).unwrap();
    assert!(!stack2.ptr_eq(&stack1));
    assert_eq!(stack2.index(), 2);
    assert_eq!(stack2.to_vec(), stack1.to_vec());
}

#[test]
fn jumping_out_of_bounds_fails() {
    let stack = stack(1, &["a", "b"]);
    assert_eq!(
        stack.jump_to_index(2).unwrap_err(),
        StackError::InvalidIndex { index: 2, size: 2 }
    );
}

// =============================================================================
// Replace
// =============================================================================

#[test]
fn replaces_route_at_index() {
    let stack1 = stack(1, &["a", "b"]);
    let stack2 = stack1.replace_at_index(0, "x").unwrap();
    assert!(!stack2.ptr_eq(&stack1));
    assert_eq!(stack2.to_vec(), vec!["x", "b"]);
    assert_eq!(stack2.index(), 0);
}

#[test]
fn replaces_route_at_negative_index() {
    let stack1 = stack(1, &["a", "b"]);
    let stack2 = stack1.replace_at_index(-1, "x").unwrap();
    assert_eq!(stack2.to_vec(), vec!["a", "x"]);
    assert_eq!(stack2.index(), 1);
}

#[test]
fn replacing_with_empty_route_fails() {
    let stack = RouteStack::new(1, [json!("a"), json!("b")]).unwrap();
    assert_eq!(
        stack.replace_at_index(1, json!(null)).unwrap_err(),
        StackError::InvalidRoute
    );
}

#[test]
fn replacing_out_of_bounds_fails() {
    let stack = stack(1, &["a", "b"]);
    assert_eq!(
        stack.replace_at_index(100, "x").unwrap_err(),
        StackError::InvalidIndex {
            index: 100,
            size: 2
        }
    );
}

#[test]
fn replacement_gets_a_fresh_key() {
    let stack1 = stack(1, &["a", "b"]);
    let stack2 = stack1.replace_at_index(1, "b").unwrap();
    assert_ne!(stack2.key_at(1), stack1.key_at(1));
    assert_eq!(stack2.key_at(0), stack1.key_at(0));
    assert!(stack2.key_at(1) > stack1.key_at(1));
}

// =============================================================================
// Iteration
// =============================================================================

struct Named {
    name: &'static str,
    seen: HashSet<Key>,
}

#[test]
fn iterates_each_item() {
    let stack = stack(0, &["a", "b"]);
    let mut context = Named {
        name: "yo",
        seen: HashSet::new(),
    };
    let mut logs = Vec::new();

    stack.for_each(&mut context, |ctx, route, index, key| {
        assert!(!key.as_str().is_empty());
        if ctx.seen.insert(key.clone()) {
            logs.push((*route, index, ctx.name));
        }
    });

    assert_eq!(logs, vec![("a", 0, "yo"), ("b", 1, "yo")]);
}

#[test]
fn maps_to_vec() {
    let stack = stack(0, &["a", "b"]);
    let mut context = Named {
        name: "yo",
        seen: HashSet::new(),
    };

    let logs = stack.map_to_vec(&mut context, |ctx, route, index, key| {
        assert!(!key.as_str().is_empty());
        ctx.seen
            .insert(key.clone())
            .then(|| (*route, index, ctx.name))
    });

    assert_eq!(logs, vec![("a", 0, "yo"), ("b", 1, "yo")]);
}

#[test]
fn map_to_vec_omits_none() {
    let stack = stack(0, &["a", "b", "c", "d"]);
    let odd = stack.map_to_vec(&mut (), |_, route, index, _| (index % 2 == 1).then_some(*route));
    assert_eq!(odd, vec!["b", "d"]);
}

#[test]
fn iter_yields_entries_in_order() {
    let stack = stack(0, &["a", "b"]);
    let entries: Vec<(usize, &str, &Key)> = stack.iter().map(|e| (e.index, *e.route, e.key)).collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].0, 1);
    assert_eq!(entries[1].1, "b");
    assert_eq!(Some(entries[1].2), stack.key_at(1));
}

// =============================================================================
// Diff
// =============================================================================

#[test]
fn subtracts_stack() {
    let stack1 = stack(2, &["a", "b", "c"]);
    let stack2 = stack1
        .pop()
        .unwrap()
        .pop()
        .unwrap()
        .push("x")
        .unwrap()
        .push("y")
        .unwrap();

    let diff = stack1.subtract(&stack2);
    let result: Vec<(usize, &str)> = diff
        .iter()
        .map(|record| {
            assert!(!record.key().as_str().is_empty());
            (record.index(), *record.route())
        })
        .collect();

    // `b` and `c` are no longer in the stack.
    assert_eq!(result, vec![(1, "b"), (2, "c")]);
}

#[test]
fn only_subtracts_the_derived_stack() {
    let stack1 = stack(2, &["a", "b", "c"]);
    let stack2 = stack(0, &["a"]);

    let result: Vec<(usize, &str)> = stack1
        .subtract(&stack2)
        .iter()
        .map(|record| (record.index(), *record.route()))
        .collect();

    assert_eq!(result, vec![(0, "a"), (1, "b"), (2, "c")]);
}

#[test]
fn subtract_is_empty_for_a_descendant_that_only_grew() {
    let stack1 = stack(1, &["a", "b"]);
    let stack2 = stack1.push("c").unwrap().push("d").unwrap();
    assert!(stack1.subtract(&stack2).is_empty());
    assert_eq!(stack2.subtract(&stack1).len(), 2);
}
