use std::fmt::Debug;

use crate::data_structures::heap::{FnOrder, Heap, HeapOrder, MaxOrder, MinOrder};
use crate::{Error, Result};

/// A value stored together with its priority
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V, P> {
    pub value: V,
    pub priority: P,
}

impl<V, P> Entry<V, P> {
    pub fn new(value: V, priority: P) -> Self {
        Entry { value, priority }
    }
}

/// Orders entries by priority alone, using the wrapped relation
#[derive(Debug, Clone, Copy, Default)]
pub struct ByPriority<O>(pub O);

impl<V, P, O> HeapOrder<Entry<V, P>> for ByPriority<O>
where
    O: HeapOrder<P>,
{
    fn precedes(&self, a: &Entry<V, P>, b: &Entry<V, P>) -> bool {
        self.0.precedes(&a.priority, &b.priority)
    }
}

/// Queue operations the shortest path solver relies on
pub trait KeyedQueue<V, P> {
    /// Adds `value` with the given priority
    fn enqueue(&mut self, value: V, priority: P);

    /// Removes the value at the front
    fn dequeue(&mut self) -> Result<V>;

    /// Moves an already queued value to a new priority
    fn change_priority(&mut self, value: &V, priority: P) -> Result<()>;

    /// Returns true if `value` is waiting in the queue
    fn contains(&self, value: &V) -> bool;

    /// Returns the number of queued values
    fn len(&self) -> usize;

    /// Returns true if nothing is queued
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Priority queue over a binary heap of (value, priority) pairs.
///
/// Values are located by equality with a linear scan, so `change_priority`
/// costs O(n). See [`IndexedPriorityQueue`](super::IndexedPriorityQueue) for the
/// O(log n) variant.
#[derive(Debug, Clone)]
pub struct PriorityQueue<V, P, O> {
    /// The underlying binary heap
    heap: Heap<Entry<V, P>, ByPriority<O>>,
}

impl<V, P> PriorityQueue<V, P, MinOrder>
where
    P: PartialOrd,
{
    /// Creates a queue serving the smallest priority first
    pub fn min() -> Self {
        Self::new(MinOrder)
    }
}

impl<V, P> PriorityQueue<V, P, MaxOrder>
where
    P: PartialOrd,
{
    /// Creates a queue serving the largest priority first
    pub fn max() -> Self {
        Self::new(MaxOrder)
    }
}

impl<V, P, F> PriorityQueue<V, P, FnOrder<F>>
where
    F: Fn(&P, &P) -> bool,
{
    /// Creates a queue whose front is decided by `comparator` on priorities
    pub fn with_comparator(comparator: F) -> Self {
        Self::new(FnOrder(comparator))
    }
}

impl<V, P, O> PriorityQueue<V, P, O>
where
    O: HeapOrder<P>,
{
    /// Creates a new empty priority queue
    pub fn new(order: O) -> Self {
        PriorityQueue {
            heap: Heap::new(ByPriority(order)),
        }
    }

    /// Creates a queue holding every value at the same priority
    pub fn from_values<I>(values: I, priority: P, order: O) -> Self
    where
        I: IntoIterator<Item = V>,
        P: Clone,
    {
        let entries = values
            .into_iter()
            .map(|value| Entry::new(value, priority.clone()))
            .collect();
        PriorityQueue {
            heap: Heap::from_vec(entries, ByPriority(order)),
        }
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The value that `dequeue` would return
    pub fn front(&self) -> Option<&V> {
        self.heap.peek().map(|entry| &entry.value)
    }

    pub fn front_priority(&self) -> Option<&P> {
        self.heap.peek().map(|entry| &entry.priority)
    }

    /// Pushes a value with the given priority. O(log n)
    pub fn enqueue(&mut self, value: V, priority: P) {
        self.heap.push(Entry::new(value, priority));
    }

    /// Removes the value at the front. O(log n)
    pub fn dequeue(&mut self) -> Result<V> {
        self.pop().map(|(value, _)| value).ok_or(Error::EmptyQueue)
    }

    /// Removes the front value together with its priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .remove_root()
            .ok()
            .map(|entry| (entry.value, entry.priority))
    }

    /// Reprioritizes the entry stored at `index` of the heap array
    pub fn change_priority_at(&mut self, index: usize, priority: P) -> Result<()> {
        let mut entry = self.heap.remove_at(index)?;
        entry.priority = priority;
        self.heap.push(entry);
        Ok(())
    }

    /// Queued entries in heap order
    pub fn iter(&self) -> impl Iterator<Item = (&V, &P)> + '_ {
        self.heap.iter().map(|entry| (&entry.value, &entry.priority))
    }
}

impl<V, P, O> PriorityQueue<V, P, O>
where
    V: PartialEq + Debug,
    O: HeapOrder<P>,
{
    /// Heap index of the first entry holding `value`. O(n)
    pub fn position_of(&self, value: &V) -> Option<usize> {
        self.heap.position(|entry| entry.value == *value)
    }

    pub fn contains(&self, value: &V) -> bool {
        self.position_of(value).is_some()
    }

    pub fn priority_of(&self, value: &V) -> Option<&P> {
        self.position_of(value)
            .map(|index| &self.heap.as_slice()[index].priority)
    }

    /// Finds `value`, pulls it out of the heap and reinserts it with `priority`.
    ///
    /// O(n) because of the scan; the heap surgery itself is O(log n).
    pub fn change_priority(&mut self, value: &V, priority: P) -> Result<()> {
        let index = self
            .position_of(value)
            .ok_or_else(|| Error::NotQueued(format!("{:?}", value)))?;
        self.change_priority_at(index, priority)
    }
}

impl<V, P, O> KeyedQueue<V, P> for PriorityQueue<V, P, O>
where
    V: PartialEq + Debug,
    O: HeapOrder<P>,
{
    fn enqueue(&mut self, value: V, priority: P) {
        PriorityQueue::enqueue(self, value, priority)
    }

    fn dequeue(&mut self) -> Result<V> {
        PriorityQueue::dequeue(self)
    }

    fn change_priority(&mut self, value: &V, priority: P) -> Result<()> {
        PriorityQueue::change_priority(self, value, priority)
    }

    fn contains(&self, value: &V) -> bool {
        PriorityQueue::contains(self, value)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }
}
