use derive_more::Display;
use log::trace;
use thiserror::Error;

use crate::heap_index::index_is_leaf;
use crate::heap_index::index_left_child;
use crate::heap_index::index_parent;
use crate::heap_index::index_right_child;
use crate::priority::Priority;

/// Capacity used when construction gets none (or zero).
pub const DEFAULT_CAPACITY: usize = 1;

/// A queue slot: an opaque payload tagged with the priority that orders it.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[display("{value}({priority})")]
pub struct Entry<V, P> {
    pub value: V,
    pub priority: P,
}

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum PQueueError {
    #[error("The queue is empty.")]
    Empty,
}

/// Array-backed max-priority queue.
///
/// The entries live in a single owned buffer laid out as a binary heap:
/// `buffer[0]` is the best entry, and every node's priority is `>=` both its
/// children's priorities (see [`crate::heap_index`] for the index scheme).
/// `push` and `pop` each run one sift pass to restore that order, so both
/// cost `O(log n)`; [`PQueue::front`] is `O(1)`.
///
/// The buffer grows to `1.5 * capacity + 1` whenever `push` finds it full,
/// and never shrinks on its own. [`PQueue::resize`] reclaims slack.
///
/// Single-owner, single-threaded. Cloning duplicates the whole buffer; two
/// live queues never share storage.
#[derive(Debug)]
pub struct PQueue<V, P>
where
    P: Priority,
{
    heap: Vec<Entry<V, P>>,
}

impl<V, P> PQueue<V, P>
where
    P: Priority,
{
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A queue with `capacity` pre-allocated slots.
    ///
    /// Zero falls back to [`DEFAULT_CAPACITY`]; the buffer always exists.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// The value of the best entry.
    pub fn front(&self) -> Result<&V, PQueueError> {
        self.heap
            .first()
            .map(|e| &e.value)
            .ok_or(PQueueError::Empty)
    }

    pub fn push(&mut self, value: V, priority: P) {
        self.verify_heap();

        if self.heap.len() == self.heap.capacity() {
            let capacity = self.heap.capacity();
            self.resize(capacity + capacity / 2 + 1);
        }

        self.heap.push(Entry { value, priority });
        self.sift_up(self.heap.len() - 1);

        self.verify_heap();
    }

    /// Removes and returns the best entry.
    pub fn pop(&mut self) -> Result<Entry<V, P>, PQueueError> {
        self.verify_heap();

        if self.heap.is_empty() {
            return Err(PQueueError::Empty);
        }

        // The tail entry lands in the root slot; with a single entry there's
        // no movement at all.
        let top = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        self.verify_heap();
        Ok(top)
    }

    /// Re-allocates the buffer to `new_capacity` slots.
    ///
    /// Clamped up to `len()`, so live entries are never discarded. `push`
    /// uses this for growth; callers can use it to shrink unused slack.
    pub fn resize(&mut self, new_capacity: usize) {
        let new_capacity = std::cmp::max(new_capacity, self.heap.len());
        trace!(
            "Resizing heap buffer {} -> {} slots ({} used)",
            self.heap.capacity(),
            new_capacity,
            self.heap.len(),
        );

        let mut buffer = Vec::with_capacity(new_capacity);
        buffer.append(&mut self.heap);
        self.heap = buffer;
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    pub(crate) fn verify_heap(&self) {
        // All good... (hopefully)
    }

    #[inline(always)]
    #[cfg(feature = "verify")]
    pub(crate) fn verify_heap(&self) {
        // Every node goes after its parent node, if any.
        for i in 1..self.heap.len() {
            let p = index_parent(i);
            debug_assert!(
                self.heap[p].priority >= self.heap[i].priority,
                "Node[{p}]={:?} !>= child [{i}]={:?}. Out of heap of len={}",
                self.heap[p],
                self.heap[i],
                self.heap.len(),
            );
        }
    }

    /// Entries in buffer order, root first.
    #[cfg(feature = "inspect")]
    pub fn entries(&self) -> &[Entry<V, P>] {
        &self.heap
    }
    pub(crate) fn as_slice(&self) -> &[Entry<V, P>] {
        &self.heap
    }

    // Implementation details

    /// Raises the entry at `index` until its parent outranks it.
    #[inline(always)]
    fn sift_up(&mut self, index: usize) {
        debug_assert!(index < self.heap.len(), "Sift-up index out of bounds");

        let mut pos = index;
        while pos != 0 {
            let parent = index_parent(pos);
            if self.heap[pos].priority <= self.heap[parent].priority {
                break;
            }
            self.heap.swap(parent, pos);
            pos = parent;
        }
    }

    /// Lowers the entry at `index` below every child that outranks it.
    ///
    /// The `<=` keeps swapping on priority ties. That still restores the
    /// heap order, but relative order among tied entries is unspecified.
    #[inline(always)]
    fn sift_down(&mut self, index: usize) {
        let len = self.heap.len();
        debug_assert!(index < len, "Sift-down index out of bounds");

        let mut pos = index;
        while !index_is_leaf(pos, len) {
            let child = self.big_child_index(pos);
            if self.heap[pos].priority > self.heap[child].priority {
                break;
            }
            self.heap.swap(pos, child);
            pos = child;
        }
    }

    /// The child of `index` whose priority is not smaller than its sibling's.
    ///
    /// The left child wins ties. The right child may not exist even for the
    /// root (a heap of exactly two entries), so its bound is always checked.
    #[inline(always)]
    #[must_use]
    fn big_child_index(&self, index: usize) -> usize {
        debug_assert!(
            !index_is_leaf(index, self.heap.len()),
            "A leaf has no children to pick from"
        );

        let left = index_left_child(index);
        let right = index_right_child(index);
        if right < self.heap.len() && self.heap[right].priority > self.heap[left].priority {
            right
        } else {
            left
        }
    }
}

impl<V, P> Default for PQueue<V, P>
where
    P: Priority,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> Clone for PQueue<V, P>
where
    V: Clone,
    P: Priority,
{
    fn clone(&self) -> Self {
        let mut heap = Vec::with_capacity(self.heap.capacity());
        heap.extend(self.heap.iter().cloned());
        Self { heap }
    }

    fn clone_from(&mut self, source: &Self) {
        self.heap.clear();
        self.heap.reserve(source.heap.len());
        self.heap.extend(source.heap.iter().cloned());
    }
}
