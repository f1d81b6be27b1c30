use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_utils::CachePadded;
use parking_lot::RwLock;

use crate::error::ConcurrencySafetyError;
use crate::unsync;

static NEXT_ID: CachePadded<AtomicU64> = CachePadded::new(AtomicU64::new(0));

/// Thread-safe pairing heap handle.
///
/// See [`Binary`][crate::sync::Binary] for the shared locking discipline.
/// Unlike the binary engine, [`meld`][Self::meld] here is O(1): the
/// underlying [`unsync::Pairing::meld`] just relinks two tree roots.
pub struct Pairing<K, V> {
    id: u64,
    inner: RwLock<unsync::Pairing<K, V>>,
}

impl<K, V> Pairing<K, V>
where
    K: PartialOrd,
{
    /// Creates an empty handle with a freshly drawn id. Time: O(1).
    pub fn new() -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            inner: RwLock::new(unsync::Pairing::new()),
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
        self.inner
            .read()
            .peek()
            .map(|(k, v)| (k.clone(), v.clone()))
    }

    /// Inserts `(key, value)`. Time: O(1).
    pub fn push(&self, key: K, value: V) {
        self.inner.write().insert(key, value);
    }

    /// Removes and returns the minimum element. Time: amortized O(log n).
    pub fn pop(&self) -> Option<(K, V)> {
        self.inner.write().remove_min()
    }

    /// Absorbs `other`'s contents into `self`, emptying `other`, acquiring
    /// both write locks in ascending-`id` order. Panics with
    /// [`ConcurrencySafetyError`] if `self` and `other` share an id.
    /// Time: O(1).
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

impl<K, V> Default for Pairing<K, V>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}
