use std::fmt;

/// Raised when [`Meld`][crate::sync] is attempted between two handles of the
/// same flavor that share an underlying `id`.
///
/// Two distinct handles produced by their designated constructor always have
/// distinct ids (each flavor draws from its own process-wide monotonic
/// counter), so this only fires on `q.meld(&q)` (a handle melded with itself)
/// or on API misuse that bypasses the constructor. It is fatal, not
/// recoverable locally: the check runs before either write-lock is acquired,
/// so a meld that raises this error never partially mutates either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrencySafetyError;

impl fmt::Display for ConcurrencySafetyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "concurrency-safety error: one or more queues share the same underlying id; \
             ensure that all queues are being created via their designated constructors"
        )
    }
}

impl std::error::Error for ConcurrencySafetyError {}

/// Reserves the capability for melding between *different* queue flavors.
///
/// No flavor in this crate implements `CrossMeld`; the trait exists only to
/// name the contract a future cross-engine meld must obey. Any
/// implementation must:
///
/// - pick a canonical target engine to absorb the other's contents into,
/// - preserve the contents-conservation law (`self`'s multiset becomes the
///   disjoint union of both sides, `other` becomes empty),
/// - acquire both handles' locks in the same strictly-ascending-`id` order
///   that [`Meld`][crate::sync] already uses, so that a mix of same-flavor
///   melds and cross-flavor melds among arbitrary handles still cannot
///   deadlock.
pub trait CrossMeld<Rhs: ?Sized = Self> {
    /// Absorbs `other`'s contents into `self`, emptying `other`.
    fn cross_meld(&self, other: &Rhs);
}
