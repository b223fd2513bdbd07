use std::cmp::Ordering;

/// Monotonic insertion counter used to break priority ties
pub type Sequence = u64;

/// A single slot in heap storage.
///
/// Ordered by `(priority, sequence)` only; the key never takes part in the
/// comparison, so keys need no ordering of their own.
#[derive(Debug, Clone)]
pub struct HeapEntry<K> {
    pub priority: f64,
    pub sequence: Sequence,
    pub key: K,
}

impl<K> PartialEq for HeapEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K> Eq for HeapEntry<K> {}

impl<K> PartialOrd for HeapEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for HeapEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}
