//! Tests for collection adapters

use super::*;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// Slice / Vec Tests
// ============================================================================

#[test]
fn test_vec_total_items() {
    let items = vec![1, 2, 3];
    assert_eq!(items.total_items(), 3);

    let empty: Vec<i32> = Vec::new();
    assert_eq!(empty.total_items(), 0);
}

#[test]
fn test_vec_item_range() {
    let items = vec!["john", "paul", "george", "ringo"];
    assert_eq!(items.item_range(0, 2).unwrap(), vec!["john", "paul"]);
    assert_eq!(items.item_range(2, 2).unwrap(), vec!["george", "ringo"]);
    assert_eq!(items.item_range(1, 0).unwrap(), Vec::<&str>::new());
}

#[test]
fn test_slice_item_range_past_end_truncates() {
    let items = [10, 20, 30];
    let slice: &[i32] = &items;
    assert_eq!(slice.item_range(2, 5).unwrap(), vec![30]);
    assert_eq!(slice.item_range(3, 5).unwrap(), Vec::<i32>::new());
    assert_eq!(slice.item_range(100, 1).unwrap(), Vec::<i32>::new());
    assert_eq!(slice.item_range(1, usize::MAX).unwrap(), vec![20, 30]);
}

#[test]
fn test_vec_deque_item_range() {
    let mut items = VecDeque::new();
    items.push_back('b');
    items.push_back('c');
    items.push_front('a');

    assert_eq!(items.total_items(), 3);
    assert_eq!(items.item_range(1, 2).unwrap(), vec!['b', 'c']);
    assert_eq!(items.item_range(2, 10).unwrap(), vec!['c']);
}

// ============================================================================
// Forwarding Tests
// ============================================================================

fn total_of<P: Pageable>(source: P) -> usize {
    source.total_items()
}

#[test]
fn test_forwarding_impls() {
    let items = vec![1, 2, 3, 4, 5];

    assert_eq!(total_of(&items), 5);
    assert_eq!(total_of(Box::new(items.clone())), 5);
    assert_eq!(total_of(Rc::new(items.clone())), 5);
    assert_eq!(total_of(Arc::new(items.clone())), 5);

    let shared = Arc::new(items);
    assert_eq!(shared.item_range(3, 2).unwrap(), vec![4, 5]);
}

#[test]
fn test_custom_adapter_error_propagates() {
    struct Broken;

    impl Pageable for Broken {
        type Item = u8;

        fn total_items(&self) -> usize {
            10
        }

        fn item_range(&self, _offset: usize, _count: usize) -> crate::Result<Vec<u8>> {
            Err(crate::Error::item_source("backend unavailable"))
        }
    }

    let err = (&Broken).item_range(0, 5).unwrap_err();
    assert!(err.is_source_error());
    assert_eq!(err.to_string(), "Item source error: backend unavailable");
}

#[test]
fn test_adapter_wraps_foreign_errors_with_context() {
    use crate::ResultExt;

    struct Rows(Vec<&'static str>);

    impl Pageable for Rows {
        type Item = u32;

        fn total_items(&self) -> usize {
            self.0.len()
        }

        fn item_range(&self, offset: usize, count: usize) -> crate::Result<Vec<u32>> {
            self.0
                .iter()
                .enumerate()
                .skip(offset)
                .take(count)
                .map(|(index, row)| {
                    row.parse::<u32>()
                        .with_source_context(|| format!("row {index}"))
                })
                .collect()
        }
    }

    let rows = Rows(vec!["1", "2", "three", "4"]);
    assert_eq!(rows.item_range(0, 2).unwrap(), vec![1, 2]);

    let err = rows.item_range(2, 2).unwrap_err();
    assert!(err.is_source_error());
    assert_eq!(
        err.to_string(),
        "Item source error: row 2: invalid digit found in string"
    );
}
