use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_utils::CachePadded;
use parking_lot::RwLock;

use crate::error::ConcurrencySafetyError;
use crate::unsync;

static NEXT_ID: CachePadded<AtomicU64> = CachePadded::new(AtomicU64::new(0));

/// Thread-safe FIFO circular buffer handle.
///
/// See [`Binary`][crate::sync::Binary] for the shared locking discipline.
/// This engine does not order by priority; `push`/`pop` is pure FIFO.
pub struct CircularBuffer<T> {
    id: u64,
    inner: RwLock<unsync::CircularBuffer<T>>,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty handle with a freshly drawn id. Time: O(1).
    pub fn new() -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            inner: RwLock::new(unsync::CircularBuffer::new()),
        }
    }

    /// Removes all elements. Time: O(n).
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Returns the number of live elements. Time: O(1).
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if there are no live elements. Time: O(1).
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns a clone of the value at the head. Time: O(1).
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().peek().cloned()
    }

    /// Appends `v` as the new tail. Time: O(1).
    pub fn push(&self, v: T) {
        self.inner.write().push(v);
    }

    /// Removes and returns the value at the head. Time: O(1).
    pub fn pop(&self) -> Option<T> {
        self.inner.write().pop()
    }

    /// Splices `other`'s contents onto `self`'s tail, emptying `other`,
    /// acquiring both write locks in ascending-`id` order. Panics with
    /// [`ConcurrencySafetyError`] if `self` and `other` share an id.
    /// Time: O(m) in the size of `other`.
    pub fn meld(&self, other: &Self) {
        if self.id == other.id {
            panic!("{}", ConcurrencySafetyError);
        }

        if self.id < other.id {
            let mut a = self.inner.write();
            let mut b = other.inner.write();
            a.meld(&mut b);
        } else {
            let mut b = other.inner.write();
            let mut a = self.inner.write();
            a.meld(&mut b);
        }
    }
}

impl<T> Default for CircularBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
