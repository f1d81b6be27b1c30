use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_utils::CachePadded;
use parking_lot::RwLock;

use crate::error::ConcurrencySafetyError;
use crate::unsync;

static NEXT_ID: CachePadded<AtomicU64> = CachePadded::new(AtomicU64::new(0));

/// Thread-safe binary heap handle.
///
/// Each handle owns an internal [`RwLock`]-guarded [`unsync::Binary`] and a
/// process-wide unique `id` drawn at construction time. Read operations
/// ([`len`][Self::len], [`is_empty`][Self::is_empty], [`peek`][Self::peek])
/// take the read lock; mutations take the write lock. [`meld`][Self::meld]
/// is the only operation that touches two handles at once, and always
/// acquires their write locks in ascending-`id` order.
///
/// # Examples
///
/// ```rust
/// use pqueue::sync::Binary;
///
/// let heap = Binary::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub struct Binary<K, V> {
    id: u64,
    inner: RwLock<unsync::Binary<K, V>>,
}

impl<K, V> Binary<K, V>
where
    K: PartialOrd,
{
    /// Creates an empty handle with a freshly drawn id. Time: O(1).
    pub fn new() -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            inner: RwLock::new(unsync::Binary::new()),
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

    /// Returns a clone of the minimum `(key, value)`. Time: O(1).
    pub fn peek(&self) -> Option<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.inner.read().peek().cloned()
    }

    /// Inserts `(key, value)`. Time: O(log n).
    pub fn push(&self, key: K, value: V) {
        self.inner.write().insert(key, value);
    }

    /// Removes and returns the minimum element. Time: O(log n).
    pub fn pop(&self) -> Option<(K, V)> {
        self.inner.write().remove_min()
    }

    /// Absorbs `other`'s contents into `self`, emptying `other`. Both
    /// write locks are acquired in ascending-`id` order so that any two
    /// threads melding the same pair of handles in opposite directions
    /// cannot deadlock. Panics with [`ConcurrencySafetyError`] if `self`
    /// and `other` share an id (only possible by melding a handle with
    /// itself). Time: O(n + m).
    pub fn meld(&self, other: &Self) {
        if self.id == other.id {
            panic!("{}", ConcurrencySafetyError);
        }

        if self.id < other.id {
            let mut a = self.inner.write();
            let mut b = other.inner.write();
            a.merge_from(&mut b);
        } else {
            let mut b = other.inner.write();
            let mut a = self.inner.write();
            a.merge_from(&mut b);
        }
    }
}

impl<K, V> Default for Binary<K, V>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}
