use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_utils::CachePadded;
use parking_lot::RwLock;

use crate::error::ConcurrencySafetyError;
use crate::unsync;

static NEXT_ID: CachePadded<AtomicU64> = CachePadded::new(AtomicU64::new(0));

/// Thread-safe skew binomial forest handle.
///
/// See [`Binary`][crate::sync::Binary] for the shared locking discipline.
pub struct SkewBinomial<K, V> {
    id: u64,
    inner: RwLock<unsync::SkewBinomial<K, V>>,
}

impl<K, V> SkewBinomial<K, V>
where
    K: PartialOrd,
{
    /// Creates an empty handle with a freshly drawn id. Time: O(1).
    pub fn new() -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            inner: RwLock::new(unsync::SkewBinomial::new()),
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

    /// Returns a clone of the minimum `(key, value)`. Time: O(log n).
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

    /// Removes and returns the minimum element. Time: O(log n).
    pub fn pop(&self) -> Option<(K, V)> {
        self.inner.write().remove_min()
    }

    /// Absorbs `other`'s contents into `self`, emptying `other`, acquiring
    /// both write locks in ascending-`id` order. Panics with
    /// [`ConcurrencySafetyError`] if `self` and `other` share an id.
    /// Time: O(log n).
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

impl<K, V> Default for SkewBinomial<K, V>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_order() {
        let heap = SkewBinomial::new();
        for k in [5, 3, 8, 1, 4] {
            heap.push(k, k);
        }
        let mut out = Vec::new();
        while let Some((k, _)) = heap.pop() {
            out.push(k);
        }
        assert_eq!(out, vec![1, 3, 4, 5, 8]);
    }

    #[test]
    fn meld_moves_contents_and_empties_other() {
        let a = SkewBinomial::new();
        let b = SkewBinomial::new();
        for k in [4, 10, 2] {
            a.push(k, k);
        }
        for k in [7, 1, 5] {
            b.push(k, k);
        }
        a.meld(&b);
        assert!(b.is_empty());
        assert_eq!(a.len(), 6);
    }

    #[test]
    #[should_panic]
    fn self_meld_is_fatal() {
        let a = SkewBinomial::<i32, i32>::new();
        a.meld(&a);
    }
}
