#![doc = include_str!("../README.md")]

use http::HeaderName;

pub use self::{
    authenticator::{
        Authenticator, AuthenticatorBuilder, AuthenticatorBuilderError, Identity, Secret, Secrets,
        DEFAULT_REQUIRED_HEADERS,
    },
    error::Error,
    header::SignatureHeader,
    newtypes::*,
    parse::{parse, ParseError},
    serialise::serialise,
};

pub mod crypto;
pub mod signature_string;
pub mod validator;

mod authenticator;
mod error;
mod header;
mod parse;
mod serialise;

static SIGNATURE_HEADER: HeaderName = HeaderName::from_static("signature");
static DIGEST_HEADER: HeaderName = HeaderName::from_static("digest");

/// Scheme prefix of the `Authorization` header form
const SIGNATURE_PREFIX: &str = "Signature ";

mod newtypes {
    /// Opaque identifier selecting which shared secret verifies a request
    #[aliri_braid::braid]
    pub struct KeyId;
}
