//! Single-threaded engines. No locking, no ids — these are the algorithms
//! that [`crate::sync`] wraps for concurrent use.

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
