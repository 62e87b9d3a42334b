//!
//! Request checks that run before signature verification
//!

mod date;
mod digest;

pub use self::{date::DateValidator, digest::DigestValidator};

use crate::Error;
use bytes::Bytes;
use http::Request;

/// A single pre-verification check over the buffered request
///
/// Validators are composed into an ordered chain; the first failure rejects
/// the request.
pub trait Validator {
    /// Check the request, returning the rejection on failure
    fn validate(&self, req: &Request<Bytes>) -> Result<(), Error>;
}
