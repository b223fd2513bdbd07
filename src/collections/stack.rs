use super::LinkedList;
use crate::error::{GraphkitError, Result};

/// LIFO stack over linked nodes
#[derive(Debug, Default)]
pub struct Stack<T> {
    items: LinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: LinkedList::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.items
            .pop_front()
            .ok_or_else(|| GraphkitError::empty("pop"))
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
