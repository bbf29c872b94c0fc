use std::fmt::{self, Debug};

use crate::{Error, Result};

/// Ordering relation injected into a [`Heap`].
///
/// `precedes(a, b)` returns true when `a` must sit closer to the root than `b`.
/// Supplying a "less than" relation yields a min-heap, "greater than" a max-heap.
pub trait HeapOrder<T> {
    fn precedes(&self, a: &T, b: &T) -> bool;
}

/// Smallest element at the root
#[derive(Debug, Clone, Copy, Default)]
pub struct MinOrder;

impl<T: PartialOrd> HeapOrder<T> for MinOrder {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element at the root
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOrder;

impl<T: PartialOrd> HeapOrder<T> for MaxOrder {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Ordering given by an arbitrary strict comparison closure
#[derive(Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<T, F> HeapOrder<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn precedes(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder(..)")
    }
}

/// Observer told about every position an element takes inside a [`Heap`].
///
/// Lets a wrapper keep a value -> index map in sync with the heap array so that
/// lookups by value don't need a linear scan.
pub trait PositionTracker<T> {
    /// `item` now lives at `index`
    fn placed(&mut self, item: &T, index: usize);

    /// `item` left the heap
    fn removed(&mut self, item: &T);
}

/// Tracker that records nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Untracked;

impl<T> PositionTracker<T> for Untracked {
    fn placed(&mut self, _item: &T, _index: usize) {}

    fn removed(&mut self, _item: &T) {}
}

/// Array-backed complete binary tree ordered by an injected relation.
///
/// The parent of index `i` is `(i - 1) / 2`, its children are `2i + 1` and `2i + 2`.
/// For every non-root index `i`, `order.precedes(items[i], items[parent(i)])` is false.
#[derive(Debug, Clone)]
pub struct Heap<T, O, S = Untracked> {
    /// Dense storage of the tree, root at index 0
    items: Vec<T>,

    /// Relation deciding which element rises
    order: O,

    /// Notified of every move
    tracker: S,
}

impl<T, O> Heap<T, O, Untracked>
where
    O: HeapOrder<T>,
{
    /// Creates a new empty heap
    pub fn new(order: O) -> Self {
        Self::with_tracker(order, Untracked)
    }

    /// Builds a heap from arbitrary items in O(n)
    pub fn from_vec(items: Vec<T>, order: O) -> Self {
        Self::from_vec_tracked(items, order, Untracked)
    }
}

impl<T: PartialOrd> Heap<T, MinOrder, Untracked> {
    /// Creates an empty min-heap
    pub fn min() -> Self {
        Self::new(MinOrder)
    }
}

impl<T: PartialOrd> Heap<T, MaxOrder, Untracked> {
    /// Creates an empty max-heap
    pub fn max() -> Self {
        Self::new(MaxOrder)
    }
}

impl<T, F> Heap<T, FnOrder<F>, Untracked>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap ordered by `comparator`
    pub fn with_comparator(comparator: F) -> Self {
        Self::new(FnOrder(comparator))
    }
}

impl<T, O, S> Heap<T, O, S>
where
    O: HeapOrder<T>,
    S: PositionTracker<T>,
{
    /// Creates a new empty heap reporting moves to `tracker`
    pub fn with_tracker(order: O, tracker: S) -> Self {
        Heap {
            items: Vec::new(),
            order,
            tracker,
        }
    }

    /// Builds a tracked heap from arbitrary items in O(n)
    pub fn from_vec_tracked(items: Vec<T>, order: O, tracker: S) -> Self {
        let mut heap = Heap {
            items,
            order,
            tracker,
        };

        for (index, item) in heap.items.iter().enumerate() {
            heap.tracker.placed(item, index);
        }

        let len = heap.items.len();
        if len > 1 {
            for index in (0..=(len - 2) / 2).rev() {
                heap.sift_down(index);
            }
        }

        heap
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the root without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// The backing array in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn tracker(&self) -> &S {
        &self.tracker
    }

    /// Inserts an element, sifting it up to its place. O(log n)
    pub fn push(&mut self, item: T) {
        let index = self.items.len();
        self.items.push(item);
        self.tracker.placed(&self.items[index], index);
        self.sift_up(index);
    }

    /// Removes and returns the root. O(log n)
    pub fn remove_root(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyHeap);
        }
        self.remove_at(0)
    }

    /// Removes the element stored at `index` of the backing array. O(log n)
    ///
    /// The last element takes the freed slot and is sifted in whichever
    /// direction its new neighbours require.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.items.len();
        if index >= len {
            return Err(Error::HeapIndexOutOfBounds { index, len });
        }

        let last = len - 1;
        if index != last {
            self.swap(index, last);
        }
        let item = self.items.pop().ok_or(Error::EmptyHeap)?;
        self.tracker.removed(&item);

        if index < self.items.len() {
            self.restore(index);
        }
        Ok(item)
    }

    /// Mutates the element at `index` in place and restores heap order. O(log n)
    ///
    /// `update` may change anything the ordering looks at, but not what the
    /// tracker identifies the element by.
    pub fn update_at<F>(&mut self, index: usize, update: F) -> Result<()>
    where
        F: FnOnce(&mut T),
    {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(Error::HeapIndexOutOfBounds { index, len })?;
        update(item);
        self.tracker.placed(&self.items[index], index);
        self.restore(index);
        Ok(())
    }

    /// First index whose element satisfies `predicate`. O(n)
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    /// Checks the heap-order invariant over the whole array
    pub fn is_heap(&self) -> bool {
        (1..self.items.len())
            .all(|i| !self.order.precedes(&self.items[i], &self.items[(i - 1) / 2]))
    }

    fn restore(&mut self, index: usize) {
        if self.sift_down(index) == index {
            self.sift_up(index);
        }
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.order.precedes(&self.items[index], &self.items[parent]) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.order.precedes(&self.items[right], &self.items[left]) {
                right
            } else {
                left
            };

            if !self.order.precedes(&self.items[child], &self.items[index]) {
                break;
            }
            self.swap(index, child);
            index = child;
        }
        index
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.tracker.placed(&self.items[a], a);
        self.tracker.placed(&self.items[b], b);
    }
}

impl<T, O, S> Heap<T, O, S>
where
    T: PartialEq,
    O: HeapOrder<T>,
    S: PositionTracker<T>,
{
    /// First index of `item` in the backing array. O(n)
    pub fn first_index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    /// Last index of `item` in the backing array. O(n)
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().rposition(|candidate| candidate == item)
    }

    /// Removes the first occurrence of `item`
    pub fn remove_item(&mut self, item: &T) -> Result<T> {
        match self.first_index_of(item) {
            Some(index) => self.remove_at(index),
            None => Err(Error::NotInHeap),
        }
    }
}
