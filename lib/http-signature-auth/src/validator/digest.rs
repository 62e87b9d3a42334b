use super::Validator;
use crate::{Error, DIGEST_HEADER};
use bytes::Bytes;
use http::Request;
use sha2::{Digest, Sha256};

/// Content-integrity check of the `Digest` header against the body
///
/// The digest form is `SHA-256=<base64>`. An absent header passes only when
/// the body is empty; a present header is always recomputed, over empty
/// content if need be.
pub struct DigestValidator;

/// Digest-header value for `body`
pub(crate) fn digest_value(body: &[u8]) -> String {
    let hash = Sha256::digest(body);
    format!("SHA-256={}", base64_simd::STANDARD.encode_to_string(hash))
}

impl Validator for DigestValidator {
    fn validate(&self, req: &Request<Bytes>) -> Result<(), Error> {
        let declared = match req.headers().get(&DIGEST_HEADER) {
            Some(value) => value.to_str()?,
            None if req.body().is_empty() => return Ok(()),
            None => return Err(Error::InvalidDigest),
        };

        if digest_value(req.body()) != declared {
            return Err(Error::InvalidDigest);
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{digest_value, DigestValidator, Validator};
    use crate::Error;
    use bytes::Bytes;
    use http::Request;

    const BODY: &str = "hello world";
    const BODY_DIGEST: &str = "SHA-256=uU0nuZNNPgilLlLX2n2r+sSE7+N6U4DukIj3rOLvzek=";

    fn request(digest: Option<&str>, body: &'static str) -> Request<Bytes> {
        let mut builder = Request::builder();
        if let Some(digest) = digest {
            builder = builder.header("Digest", digest);
        }

        builder.body(Bytes::from_static(body.as_bytes())).unwrap()
    }

    #[test]
    fn known_digest_value() {
        assert_eq!(digest_value(BODY.as_bytes()), BODY_DIGEST);
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(digest_value(BODY.as_bytes()), digest_value(BODY.as_bytes()));
    }

    #[test]
    fn matching_digest_passes() {
        let req = request(Some(BODY_DIGEST), BODY);
        assert!(DigestValidator.validate(&req).is_ok());
    }

    #[test]
    fn mismatching_digest_fails() {
        let req = request(Some("this is wrong digest"), BODY);
        assert!(matches!(
            DigestValidator.validate(&req),
            Err(Error::InvalidDigest)
        ));
    }

    #[test]
    fn tampered_body_fails() {
        let req = request(Some(BODY_DIGEST), "hello world!");
        assert!(matches!(
            DigestValidator.validate(&req),
            Err(Error::InvalidDigest)
        ));
    }

    #[test]
    fn empty_body_without_header_passes() {
        let req = request(None, "");
        assert!(DigestValidator.validate(&req).is_ok());
    }

    #[test]
    fn body_without_header_fails() {
        let req = request(None, BODY);
        assert!(matches!(
            DigestValidator.validate(&req),
            Err(Error::InvalidDigest)
        ));
    }

    #[test]
    fn declared_digest_over_an_empty_body_is_recomputed() {
        // SHA-256 of empty content
        let req = request(Some("SHA-256=47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="), "");
        assert!(DigestValidator.validate(&req).is_ok());
    }
}
