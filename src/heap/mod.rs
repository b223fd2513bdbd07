//! Indexed binary min-heap with lazy deletion
//!
//! Each key has at most one *live* entry. Pushing a key that is already live
//! supersedes the old entry instead of moving it: the old slot stays in heap
//! storage as a tombstone and is discarded when it surfaces at pop time. This
//! gives decrease-key (and increase-key) in O(log n) without position
//! bookkeeping.
//!
//! Liveness is tracked by sequence number. The index maps a key to the
//! sequence of its live entry; a slot whose sequence no longer matches is a
//! tombstone.
//!
//! Equal priorities pop in push order. `-0.0` and `0.0` count as equal.

pub mod entry;
mod max;

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::hash::Hash;

use crate::error::{GraphkitError, Result};

pub use entry::{HeapEntry, Sequence};
pub use max::MaxPriorityQueue;

/// Live-entry bookkeeping for one key
#[derive(Debug, Clone, Copy)]
struct LiveSlot {
    sequence: Sequence,
    priority: f64,
}

#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K> {
    storage: BinaryHeap<Reverse<HeapEntry<K>>>,
    index: HashMap<K, LiveSlot>,
    next_sequence: Sequence,
}

impl<K: Eq + Hash + Clone> IndexedMinHeap<K> {
    pub fn new() -> Self {
        Self {
            storage: BinaryHeap::new(),
            index: HashMap::new(),
            next_sequence: 0,
        }
    }

    /// Bulk-build from `(key, priority)` pairs in a single heapify pass.
    ///
    /// Sequence numbers follow input order. A key repeated in the input keeps
    /// only its last occurrence live.
    pub fn build<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut heap = Self::new();
        let entries: Vec<Reverse<HeapEntry<K>>> = pairs
            .into_iter()
            .map(|(key, priority)| Reverse(heap.register(key, priority)))
            .collect();
        heap.storage = BinaryHeap::from(entries);
        heap
    }

    /// Push `key`, superseding its live entry if there is one
    pub fn push(&mut self, key: K, priority: f64) {
        let entry = self.register(key, priority);
        self.storage.push(Reverse(entry));
    }

    /// Pop the key of the minimum live entry
    pub fn pop(&mut self) -> Result<K> {
        while let Some(Reverse(entry)) = self.storage.pop() {
            if self.is_live(&entry) {
                self.index.remove(&entry.key);
                return Ok(entry.key);
            }
            tracing::trace!(
                sequence = entry.sequence,
                priority = entry.priority,
                "discarded tombstone"
            );
        }
        Err(GraphkitError::EmptyQueue)
    }

    /// Minimum live entry without removing it.
    ///
    /// Tombstones sitting at the top are discarded first.
    pub fn peek(&mut self) -> Option<(&K, f64)> {
        while let Some(Reverse(top)) = self.storage.peek() {
            if self.is_live(top) {
                break;
            }
            self.storage.pop();
        }
        self.storage
            .peek()
            .map(|Reverse(entry)| (&entry.key, entry.priority))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Priority of the live entry for `key`
    pub fn priority(&self, key: &K) -> Option<f64> {
        self.index.get(key).map(|slot| slot.priority)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Heap storage size, tombstones included
    pub fn storage_len(&self) -> usize {
        self.storage.len()
    }

    /// Drain every live key in pop order
    pub fn pop_all(&mut self) -> Vec<K> {
        let mut output = Vec::with_capacity(self.len());
        while let Ok(key) = self.pop() {
            output.push(key);
        }
        output
    }

    fn register(&mut self, key: K, priority: f64) -> HeapEntry<K> {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        // `total_cmp` orders -0.0 before 0.0; equal priorities must tie.
        let priority = if priority == 0.0 { 0.0 } else { priority };
        // A previous live slot for this key becomes a tombstone here.
        self.index.insert(key.clone(), LiveSlot { sequence, priority });
        HeapEntry {
            priority,
            sequence,
            key,
        }
    }

    fn is_live(&self, entry: &HeapEntry<K>) -> bool {
        self.index
            .get(&entry.key)
            .is_some_and(|slot| slot.sequence == entry.sequence)
    }
}

impl<K: Eq + Hash + Clone + fmt::Debug> IndexedMinHeap<K> {
    /// Tombstone the live entry for `key`
    pub fn remove(&mut self, key: &K) -> Result<()> {
        match self.index.remove(key) {
            Some(_) => Ok(()),
            None => Err(GraphkitError::key_not_found(key)),
        }
    }
}

impl<K: Eq + Hash + Clone> Default for IndexedMinHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<(K, f64)> for IndexedMinHeap<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self::build(iter)
    }
}
