use std::fmt;
use std::hash::Hash;

use super::IndexedMinHeap;
use crate::error::Result;

/// Max-first priority queue over the same lazy-deletion machinery.
///
/// Priorities are negated on the way in, so ties still pop in push order.
#[derive(Debug, Clone)]
pub struct MaxPriorityQueue<K> {
    inner: IndexedMinHeap<K>,
}

impl<K: Eq + Hash + Clone> MaxPriorityQueue<K> {
    pub fn new() -> Self {
        Self {
            inner: IndexedMinHeap::new(),
        }
    }

    pub fn build<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        Self {
            inner: IndexedMinHeap::build(
                pairs
                    .into_iter()
                    .map(|(key, priority)| (key, -priority)),
            ),
        }
    }

    pub fn push(&mut self, key: K, priority: f64) {
        self.inner.push(key, -priority);
    }

    /// Pop the key with the highest live priority
    pub fn pop(&mut self) -> Result<K> {
        self.inner.pop()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains(key)
    }

    pub fn priority(&self, key: &K) -> Option<f64> {
        self.inner.priority(key).map(|priority| -priority)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn pop_all(&mut self) -> Vec<K> {
        self.inner.pop_all()
    }
}

impl<K: Eq + Hash + Clone + fmt::Debug> MaxPriorityQueue<K> {
    pub fn remove(&mut self, key: &K) -> Result<()> {
        self.inner.remove(key)
    }
}

impl<K: Eq + Hash + Clone> Default for MaxPriorityQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}
