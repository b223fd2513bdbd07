use std::fmt;

use crate::bail_out_of_range;
use crate::error::{GraphkitError, Result};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Singly linked list with owned boxed nodes
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append a value at the tail. Walks the list, so O(n).
    pub fn append(&mut self, value: T) {
        let node = Some(Box::new(Node { value, next: None }));
        match self.len.checked_sub(1).and_then(|last| self.node_mut(last)) {
            Some(tail) => tail.next = node,
            None => self.head = node,
        }
        self.len += 1;
    }

    /// Push a value at the head
    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Remove and return the head value
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Insert `value` directly after the element at `pos`.
    ///
    /// Fails with `IndexOutOfRange` when `pos` is not a current position,
    /// which includes every position of an empty list.
    pub fn insert(&mut self, value: T, pos: usize) -> Result<()> {
        let len = self.len;
        let Some(node) = self.node_mut(pos) else {
            bail_out_of_range!(pos, len);
        };
        let next = node.next.take();
        node.next = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `pos`
    pub fn delete(&mut self, pos: usize) -> Result<T> {
        let len = self.len;
        if pos >= len {
            bail_out_of_range!(pos, len);
        }
        if pos == 0 {
            return self
                .pop_front()
                .ok_or(GraphkitError::IndexOutOfRange { index: pos, len });
        }

        let removed = self
            .node_mut(pos - 1)
            .and_then(|prev| {
                let mut removed = prev.next.take()?;
                prev.next = removed.next.take();
                Some(removed.value)
            })
            .ok_or(GraphkitError::IndexOutOfRange { index: pos, len })?;
        self.len -= 1;
        Ok(removed)
    }

    pub fn get(&self, pos: usize) -> Result<&T> {
        self.iter()
            .nth(pos)
            .ok_or(GraphkitError::IndexOutOfRange {
                index: pos,
                len: self.len,
            })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut node = self.head.as_deref_mut();
        for _ in 0..index {
            node = node?.next.as_deref_mut();
        }
        node
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn search(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Iterative drop so long lists don't recurse through Box destructors.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        while let Some(value) = values.pop() {
            list.push(value);
        }
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
