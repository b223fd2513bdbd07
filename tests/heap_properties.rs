use graphkit::{GraphkitError, IndexedMinHeap, MaxPriorityQueue, UnionFind};

#[test]
fn test_len_counts_live_keys_only() {
    let mut heap = IndexedMinHeap::new();
    heap.push("a", 3.0);
    heap.push("b", 2.0);
    heap.push("a", 1.0);
    heap.push("c", 4.0);
    assert_eq!(heap.len(), 3);

    heap.remove(&"b").unwrap();
    assert_eq!(heap.len(), 2);
    assert!(!heap.contains(&"b"));
}

#[test]
fn test_equal_priorities_pop_in_push_order() {
    let mut heap = IndexedMinHeap::new();
    heap.push("a", 5.0);
    heap.push("b", 5.0);
    heap.push("c", 1.0);
    assert_eq!(heap.pop_all(), vec!["c", "a", "b"]);
}

#[test]
fn test_decrease_key() {
    let mut heap = IndexedMinHeap::new();
    heap.push("x", 10.0);
    heap.push("y", 5.0);
    heap.push("x", 1.0);
    assert_eq!(heap.priority(&"x"), Some(1.0));
    assert_eq!(heap.pop().unwrap(), "x");
    assert_eq!(heap.pop().unwrap(), "y");
    assert!(matches!(heap.pop(), Err(GraphkitError::EmptyQueue)));
}

#[test]
fn test_pop_order_is_non_decreasing() {
    let priorities = [7.0, 3.5, 9.0, 3.5, 0.0, 12.25, 1.0, 9.0];
    let mut heap: IndexedMinHeap<usize> = priorities.iter().copied().enumerate().collect();
    heap.push(2, 0.5);
    heap.remove(&5).unwrap();

    let mut popped = Vec::new();
    while let Ok(key) = heap.pop() {
        popped.push(key);
    }
    assert_eq!(popped, vec![4, 2, 6, 1, 3, 0, 7]);
}

#[test]
fn test_remove_missing_key() {
    let mut heap: IndexedMinHeap<&str> = IndexedMinHeap::new();
    let err = heap.remove(&"ghost").unwrap_err();
    assert_eq!(err.error_type(), "key_not_found");
}

#[test]
fn test_max_priority_queue_order() {
    let mut queue = MaxPriorityQueue::build([2.0, 1.0, 10.0, 4.0, 5.0].into_iter().enumerate());
    assert_eq!(queue.pop().unwrap(), 2);
    queue.push(0, 11.0);
    assert_eq!(queue.pop_all(), vec![0, 4, 3, 1]);
}

#[test]
fn test_union_find_connectivity() {
    let mut sets = UnionFind::new(6);
    sets.union(0, 1);
    sets.union(2, 3);
    sets.union(1, 3);

    assert!(sets.connected(0, 2));
    assert!(!sets.connected(0, 4));
    assert_eq!(sets.set_count(), 3);
}
