//! Frontier containers for the traversals: a LIFO stack for DFS and a FIFO
//! queue for BFS.
//!
//! Removing from an empty container returns `None` instead of failing.

use std::collections::VecDeque;

/// Last-in first-out stack.
#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Empty stack with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Put `item` on top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the top item; `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// The item `pop` would return next.
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there is nothing to remove.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// First-in first-out queue.
#[derive(Debug, Clone, Default)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Add `item` at the back.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove the front item; `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The item `dequeue` would return next.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there is nothing to remove.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
