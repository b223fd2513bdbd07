//! Sequence containers
//!
//! - `LinkedList`: singly linked list with positional access
//! - `Stack`: LIFO over linked nodes, drives iterative DFS
//! - `Queue`: FIFO, drives BFS

pub mod linked_list;
pub mod queue;
pub mod stack;

pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
