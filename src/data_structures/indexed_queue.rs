use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::heap::{FnOrder, Heap, HeapOrder, MaxOrder, MinOrder, PositionTracker};
use crate::data_structures::priority_queue::{ByPriority, Entry, KeyedQueue};
use crate::{Error, Result};

/// Value -> heap index map kept current by the heap
#[derive(Debug, Clone)]
struct EntryPositions<V> {
    positions: HashMap<V, usize>,
}

impl<V> Default for EntryPositions<V> {
    fn default() -> Self {
        EntryPositions {
            positions: HashMap::new(),
        }
    }
}

impl<V, P> PositionTracker<Entry<V, P>> for EntryPositions<V>
where
    V: Hash + Eq + Clone,
{
    fn placed(&mut self, item: &Entry<V, P>, index: usize) {
        match self.positions.get_mut(&item.value) {
            Some(slot) => *slot = index,
            None => {
                self.positions.insert(item.value.clone(), index);
            }
        }
    }

    fn removed(&mut self, item: &Entry<V, P>) {
        self.positions.remove(&item.value);
    }
}

/// Priority queue with O(log n) priority changes.
///
/// Each value may be queued at most once; its heap index is tracked on every
/// swap so `change_priority` can sift in place instead of scanning.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<V, P, O> {
    heap: Heap<Entry<V, P>, ByPriority<O>, EntryPositions<V>>,
}

impl<V, P> IndexedPriorityQueue<V, P, MinOrder>
where
    V: Hash + Eq + Clone + Debug,
    P: PartialOrd,
{
    /// Creates a queue serving the smallest priority first
    pub fn min() -> Self {
        Self::new(MinOrder)
    }
}

impl<V, P> IndexedPriorityQueue<V, P, MaxOrder>
where
    V: Hash + Eq + Clone + Debug,
    P: PartialOrd,
{
    /// Creates a queue serving the largest priority first
    pub fn max() -> Self {
        Self::new(MaxOrder)
    }
}

impl<V, P, F> IndexedPriorityQueue<V, P, FnOrder<F>>
where
    V: Hash + Eq + Clone + Debug,
    F: Fn(&P, &P) -> bool,
{
    pub fn with_comparator(comparator: F) -> Self {
        Self::new(FnOrder(comparator))
    }
}

impl<V, P, O> IndexedPriorityQueue<V, P, O>
where
    V: Hash + Eq + Clone + Debug,
    O: HeapOrder<P>,
{
    /// Creates a new empty priority queue
    pub fn new(order: O) -> Self {
        IndexedPriorityQueue {
            heap: Heap::with_tracker(ByPriority(order), EntryPositions::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn front(&self) -> Option<&V> {
        self.heap.peek().map(|entry| &entry.value)
    }

    pub fn front_priority(&self) -> Option<&P> {
        self.heap.peek().map(|entry| &entry.priority)
    }

    /// Heap index currently holding `value`. O(1)
    pub fn position_of(&self, value: &V) -> Option<usize> {
        self.heap.tracker().positions.get(value).copied()
    }

    pub fn contains(&self, value: &V) -> bool {
        self.position_of(value).is_some()
    }

    pub fn priority_of(&self, value: &V) -> Option<&P> {
        self.position_of(value)
            .map(|index| &self.heap.as_slice()[index].priority)
    }

    /// Queues `value`, or moves it to `priority` if it is already queued
    pub fn enqueue(&mut self, value: V, priority: P) {
        match self.position_of(&value) {
            // index comes from the tracker, so it is in bounds
            Some(index) => {
                let _ = self.heap.update_at(index, |entry| entry.priority = priority);
            }
            None => self.heap.push(Entry::new(value, priority)),
        }
    }

    /// Removes the value at the front. O(log n)
    pub fn dequeue(&mut self) -> Result<V> {
        self.pop().map(|(value, _)| value).ok_or(Error::EmptyQueue)
    }

    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .remove_root()
            .ok()
            .map(|entry| (entry.value, entry.priority))
    }

    /// Moves `value` to `priority` and sifts it in place. O(log n)
    pub fn change_priority(&mut self, value: &V, priority: P) -> Result<()> {
        let index = self
            .position_of(value)
            .ok_or_else(|| Error::NotQueued(format!("{:?}", value)))?;
        self.heap.update_at(index, |entry| entry.priority = priority)
    }

    /// Takes `value` out of the queue, returning its priority
    pub fn remove(&mut self, value: &V) -> Result<P> {
        let index = self
            .position_of(value)
            .ok_or_else(|| Error::NotQueued(format!("{:?}", value)))?;
        self.heap.remove_at(index).map(|entry| entry.priority)
    }

    /// Checks heap order and that every tracked index points at its value
    pub fn is_consistent(&self) -> bool {
        let entries = self.heap.as_slice();
        let positions = &self.heap.tracker().positions;
        self.heap.is_heap()
            && positions.len() == entries.len()
            && entries
                .iter()
                .enumerate()
                .all(|(index, entry)| positions.get(&entry.value) == Some(&index))
    }
}

impl<V, P, O> KeyedQueue<V, P> for IndexedPriorityQueue<V, P, O>
where
    V: Hash + Eq + Clone + Debug,
    O: HeapOrder<P>,
{
    fn enqueue(&mut self, value: V, priority: P) {
        IndexedPriorityQueue::enqueue(self, value, priority)
    }

    fn dequeue(&mut self) -> Result<V> {
        IndexedPriorityQueue::dequeue(self)
    }

    fn change_priority(&mut self, value: &V, priority: P) -> Result<()> {
        IndexedPriorityQueue::change_priority(self, value, priority)
    }

    fn contains(&self, value: &V) -> bool {
        IndexedPriorityQueue::contains(self, value)
    }

    fn len(&self) -> usize {
        IndexedPriorityQueue::len(self)
    }
}
