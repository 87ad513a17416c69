//! Array-backed binary heap with a max or min ordering chosen at
//! construction.
//!
//! Unlike [`std::collections::BinaryHeap`], items carry an explicit priority
//! separate from the item itself, so the item type needs no ordering.
//! Ties between equal priorities come out in unspecified order.

use std::fmt;

/// Capacity reserved by [`PriorityQueue::new`].
const DEFAULT_CAPACITY: usize = 10;

/// Which end of the priority range [`PriorityQueue::remove`] yields first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeapOrder {
    /// Highest priority first.
    Max,
    /// Lowest priority first.
    Min,
}

/// Returned by [`PriorityQueue::remove`] when the queue holds no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the priority queue is empty")
    }
}

impl std::error::Error for EmptyQueueError {}

#[derive(Debug, Clone)]
struct Entry<T, P> {
    item: T,
    priority: P,
}

/// A generic priority queue over a binary heap.
///
/// `add` and `remove` are O(log n); `len` is O(1).
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P = i32> {
    heap: Vec<Entry<T, P>>,
    order: HeapOrder,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Create an empty queue with the given ordering.
    pub fn new(order: HeapOrder) -> Self {
        Self::with_capacity(order, DEFAULT_CAPACITY)
    }

    /// Create an empty queue, reserving room for `capacity` elements.
    ///
    /// The capacity is only an allocation hint; the queue grows past it.
    pub fn with_capacity(order: HeapOrder, capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Shorthand for `PriorityQueue::new(HeapOrder::Max)`.
    pub fn max_heap() -> Self {
        Self::new(HeapOrder::Max)
    }

    /// Shorthand for `PriorityQueue::new(HeapOrder::Min)`.
    pub fn min_heap() -> Self {
        Self::new(HeapOrder::Min)
    }

    /// The ordering fixed at construction.
    #[inline]
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert `item` with the given priority.
    pub fn add(&mut self, item: T, priority: P) {
        self.heap.push(Entry { item, priority });
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the element with the extreme priority.
    pub fn remove(&mut self) -> Result<(T, P), EmptyQueueError> {
        if self.heap.is_empty() {
            return Err(EmptyQueueError);
        }
        let Entry { item, priority } = self.heap.swap_remove(0);
        self.sift_down(0);
        Ok((item, priority))
    }

    /// The element [`remove`](Self::remove) would return next.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.first().map(|e| (&e.item, &e.priority))
    }

    /// Drop every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.wins(i, parent) {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            if left >= self.heap.len() {
                break;
            }
            let child = if self.wins(left, right) { left } else { right };
            if !self.wins(child, i) {
                break;
            }
            self.heap.swap(i, child);
            i = child;
        }
    }

    /// Whether slot `a` belongs above slot `b`.
    ///
    /// A slot past the end of the heap never wins, whichever side it is on.
    fn wins(&self, a: usize, b: usize) -> bool {
        let len = self.heap.len();
        match (a < len, b < len) {
            (false, _) => false,
            (true, false) => true,
            (true, true) => {
                let (pa, pb) = (&self.heap[a].priority, &self.heap[b].priority);
                match self.order {
                    HeapOrder::Max => pa > pb,
                    HeapOrder::Min => pa < pb,
                }
            }
        }
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::max_heap()
    }
}

/// Lists `(item,priority)` pairs in heap-array order.
impl<T: fmt::Display, P: fmt::Display> fmt::Display for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.heap {
            write!(f, "({},{})", e.item, e.priority)?;
        }
        Ok(())
    }
}
