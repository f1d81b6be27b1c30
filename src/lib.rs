//! Concurrency-safe, mergeable minimum-priority queues.
//!
//! Four heap engines — [`Binary`], [`Pairing`], [`Skew`], [`SkewBinomial`] —
//! share one contract: `new`, `clear`, `len`/`is_empty`, `peek`, `push`,
//! `pop`, and `meld`, over a generic `(K: PartialOrd, V)` pair. A fifth
//! engine, [`CircularBuffer`], shares the same contract but orders by
//! insertion (FIFO) rather than by key.
//!
//! Every type here is exposed in two layers:
//! - [`unsync`] — plain single-threaded engines, no locking.
//! - [`sync`] — each engine wrapped in a [`parking_lot::RwLock`] behind a
//!   `&self` API, safe to share across threads via `Arc`.
//!
//! The top-level re-exports below are the `sync` handles; reach for
//! [`unsync`] directly only when single-threaded use makes the lock
//! overhead pointless.
//!
//! `Meld` is the one operation that touches two handles at once. Each
//! flavor draws its `id` from its own process-wide monotonic counter at
//! construction, and `meld` always acquires both handles' write locks in
//! ascending-`id` order, so no set of concurrent `meld` calls over any
//! number of handles can deadlock. Melding a handle with itself (the only
//! way two handles can share an id) raises [`ConcurrencySafetyError`].
//!
//! # Examples
//!
//! ```rust
//! use pqueue::Pairing;
//!
//! let a = Pairing::new();
//! let b = Pairing::new();
//! a.push(4, "four");
//! b.push(1, "one");
//! a.meld(&b);
//! assert_eq!(a.pop(), Some((1, "one")));
//! assert_eq!(a.pop(), Some((4, "four")));
//! ```

pub mod error;
pub mod sync;
pub mod unsync;
mod util;

pub use error::{ConcurrencySafetyError, CrossMeld};
pub use sync::{Binary, CircularBuffer, Pairing, Skew, SkewBinomial};
