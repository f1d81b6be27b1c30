//! Thread-safe handles wrapping the [`crate::unsync`] engines behind an
//! [`parking_lot::RwLock`] and a per-flavor monotonic id, used to order lock
//! acquisition during [`Meld`](Binary::meld) and its siblings.

pub mod binary;
pub mod circular;
pub mod pairing;
pub mod skew;
pub mod skew_binomial;

pub use binary::Binary;
pub use circular::CircularBuffer;
pub use pairing::Pairing;
pub use skew::Skew;
pub use skew_binomial::SkewBinomial;
