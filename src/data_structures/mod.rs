pub mod fifo;
pub mod heap;
pub mod indexed_queue;
pub mod priority_queue;

pub use fifo::Queue;
pub use heap::{FnOrder, Heap, HeapOrder, MaxOrder, MinOrder, PositionTracker, Untracked};
pub use indexed_queue::IndexedPriorityQueue;
pub use priority_queue::{ByPriority, Entry, KeyedQueue, PriorityQueue};
