//!
//! Pluggable keyed signing algorithms
//!

mod hmac;

pub use self::hmac::{HmacSha256, HmacSha512};

/// Keyed signing capability bound to a [`Secret`](crate::Secret)
///
/// Implementations are swappable at construction time; the authenticator only
/// depends on this contract. Asymmetric schemes slot in through the same
/// trait.
pub trait SigningAlgorithm {
    /// Registry name of the algorithm, e.g. `hmac-sha512`
    fn name(&self) -> &'static str;

    /// Sign `msg` with the shared `secret` and return the raw signature bytes
    fn sign(&self, msg: &[u8], secret: &[u8]) -> Vec<u8>;
}
