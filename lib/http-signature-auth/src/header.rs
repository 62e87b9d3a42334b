use crate::{parse, Error, SIGNATURE_HEADER, SIGNATURE_PREFIX};
use http::{header, Request};

/// Parsed representation of one request's signature metadata
///
/// Borrows from the raw header value; constructed fresh per request and
/// discarded with it.
#[derive(Clone, Debug)]
pub struct SignatureHeader<'a> {
    /// Identifier of the secret the signature was created with
    pub key_id: &'a str,

    /// Header names covered by the signature, in signing order
    pub headers: Vec<&'a str>,

    /// Declared signing algorithm; `None` means "accept whatever the key is bound to"
    pub algorithm: Option<&'a str>,

    /// Decoded signature bytes
    pub signature: Vec<u8>,
}

impl<'a> SignatureHeader<'a> {
    /// Parse a raw parameter string (without the `Signature ` prefix)
    ///
    /// Repeated parameters follow last-write-wins. Unknown parameters are
    /// ignored. A missing or empty `headers` list defaults to `date`.
    pub fn parse(raw: &'a str) -> Result<Self, Error> {
        let mut key_id = None;
        let mut signature = None;
        let mut headers = None;
        let mut algorithm = None;

        for pair in parse(raw) {
            let (key, value) = pair?;

            match key {
                "keyId" => key_id = Some(value),
                "signature" => signature = Some(value),
                "headers" => headers = Some(value),
                "algorithm" => algorithm = Some(value),
                _ => (),
            }
        }

        let key_id = key_id
            .filter(|key_id| !key_id.is_empty())
            .ok_or(Error::MissingKeyId)?;
        let signature =
            base64_simd::STANDARD.decode_to_vec(signature.ok_or(Error::MissingSignature)?)?;

        let headers = match headers {
            Some(list) if !list.is_empty() => list.split(' ').collect(),
            _ => vec!["date"],
        };

        Ok(Self {
            key_id,
            headers,
            algorithm: algorithm.filter(|algorithm| !algorithm.is_empty()),
            signature,
        })
    }

    /// Extract and parse the signature metadata of a request
    ///
    /// The `Authorization` header has to start with the literal `Signature `
    /// prefix; a bare `Signature` header is used as-is. Pure over the header
    /// text, the body is never touched.
    pub fn from_request<B>(req: &'a Request<B>) -> Result<Self, Error> {
        let raw = if let Some(authorization) = req.headers().get(header::AUTHORIZATION) {
            authorization
                .to_str()?
                .strip_prefix(SIGNATURE_PREFIX)
                .ok_or(Error::InvalidAuthorizationHeader)?
        } else if let Some(signature) = req.headers().get(&SIGNATURE_HEADER) {
            signature.to_str()?
        } else {
            return Err(Error::NoSignature);
        };

        Self::parse(raw)
    }
}
