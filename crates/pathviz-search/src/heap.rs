//! Array-backed binary heap with an injected priority predicate.
//!
//! The heap is stored in a dense `Vec` used as an implicit binary tree:
//! the parent of `i` is `((i + 1) >> 1) - 1`, its children are
//! `(i << 1) + 1` and `(i + 1) << 1`.
//!
//! Ordering comes from a [`Priority`] predicate rather than `Ord`, so the
//! same value type can be ranked differently per queue. Equal-priority
//! values are **not** popped in insertion order: ties resolve by the swap
//! history of the heap.

use std::fmt;

/// Strict "is higher priority than" predicate.
///
/// `higher(a, b)` must return `true` only when `a` should leave the queue
/// before `b`. Any closure `Fn(&T, &T) -> bool` is a `Priority<T>`.
pub trait Priority<T> {
    fn higher(&self, a: &T, b: &T) -> bool;
}

impl<T, F: Fn(&T, &T) -> bool> Priority<T> for F {
    #[inline]
    fn higher(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Largest value first.
#[derive(Copy, Clone, Debug, Default)]
pub struct MaxFirst;

impl<T: PartialOrd> Priority<T> for MaxFirst {
    #[inline]
    fn higher(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Smallest value first.
#[derive(Copy, Clone, Debug, Default)]
pub struct MinFirst;

impl<T: PartialOrd> Priority<T> for MinFirst {
    #[inline]
    fn higher(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Error returned when reading from an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("priority queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}

#[inline]
const fn parent(i: usize) -> usize {
    ((i + 1) >> 1) - 1
}

#[inline]
const fn left(i: usize) -> usize {
    (i << 1) + 1
}

#[inline]
const fn right(i: usize) -> usize {
    (i + 1) << 1
}

/// A priority queue over `T` ranked by `P`.
#[derive(Clone)]
pub struct PriorityQueue<T, P = MaxFirst> {
    heap: Vec<T>,
    priority: P,
}

impl<T: PartialOrd> PriorityQueue<T, MaxFirst> {
    /// An empty queue popping the largest value first.
    pub fn new() -> Self {
        Self::with_priority(MaxFirst)
    }
}

impl<T: PartialOrd> Default for PriorityQueue<T, MaxFirst> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Priority<T>> PriorityQueue<T, P> {
    /// An empty queue ranked by `priority`.
    pub fn with_priority(priority: P) -> Self {
        Self {
            heap: Vec::new(),
            priority,
        }
    }

    /// Number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The next value [`pop`](Self::pop) would return.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.heap.first().ok_or(QueueError::Empty)
    }

    /// Insert `value` and return the new size.
    pub fn push(&mut self, value: T) -> usize {
        self.heap.push(value);
        self.sift_up();
        self.heap.len()
    }

    /// Remove and return the highest-priority value.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::Empty);
        }
        let removed = self.heap.swap_remove(0);
        self.sift_down();
        Ok(removed)
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterate over the queued values in heap (not priority) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    #[inline]
    fn higher(&self, i: usize, j: usize) -> bool {
        self.priority.higher(&self.heap[i], &self.heap[j])
    }

    fn sift_up(&mut self) {
        let mut pos = self.heap.len().saturating_sub(1);
        while pos > 0 && self.higher(pos, parent(pos)) {
            self.heap.swap(pos, parent(pos));
            pos = parent(pos);
        }
    }

    fn sift_down(&mut self) {
        let len = self.heap.len();
        let mut pos = 0;
        loop {
            let (l, r) = (left(pos), right(pos));
            let left_higher = l < len && self.higher(l, pos);
            let right_higher = r < len && self.higher(r, pos);
            if !left_higher && !right_higher {
                break;
            }
            let child = if r < len && self.higher(r, l) { r } else { l };
            self.heap.swap(pos, child);
            pos = child;
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}
