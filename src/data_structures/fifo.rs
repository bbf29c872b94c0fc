use std::collections::VecDeque;

use crate::{Error, Result};

/// First in, first out queue used as the breadth-first frontier
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element that would be dequeued next
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// The most recently enqueued element
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::EmptyQueue)
    }
}
