use crate::parse::ParseError;
use http::StatusCode;
use miette::Diagnostic;
use thiserror::Error;

/// Everything that can go wrong while authenticating a request
///
/// The first failing check wins; nothing is aggregated. [`Error::status_code`]
/// gives the response class: 400 for malformed input and policy violations,
/// 401 for authentication failures. Callers should keep the response body
/// opaque and log the variant instead.
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// Neither an `Authorization: Signature …` nor a `Signature` header was present
    #[error("no signature found in request")]
    NoSignature,

    /// The `Authorization` header does not carry the `Signature ` scheme prefix
    #[error("malformed `Authorization` header")]
    InvalidAuthorizationHeader,

    /// The parameter string failed to parse
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// The `keyId` parameter is missing or empty
    #[error("`keyId` must be on header")]
    MissingKeyId,

    /// The `signature` parameter is missing
    #[error("`signature` must be on header")]
    MissingSignature,

    /// The signature value is not valid Base64
    #[error(transparent)]
    InvalidSignatureEncoding(#[from] base64_simd::Error),

    /// The signed-header list does not cover the configured required headers
    #[error("signed headers do not cover the required set")]
    HeaderNotEnough,

    /// The `Date` header is missing or not an HTTP date
    #[error("invalid `Date` header")]
    DateParse,

    /// The `Date` header is outside the accepted clock-skew window
    #[error("`Date` is not in the acceptable range")]
    DateNotInRange,

    /// The `Digest` header does not match the request body
    #[error("`Digest` does not match the request body")]
    InvalidDigest,

    /// No secret is registered under the declared `keyId`
    #[error("unknown `keyId`")]
    UnknownKeyId,

    /// The declared algorithm differs from the one bound to the secret
    #[error("algorithm does not match the key's algorithm")]
    IncorrectAlgorithm,

    /// Signature verification failed
    #[error("invalid signature")]
    InvalidSignature,

    /// A header involved in authentication had a non-UTF-8 value
    #[error(transparent)]
    InvalidHeaderValue(#[from] http::header::ToStrError),
}

impl Error {
    /// Response status class for this rejection
    ///
    /// Authentication failures map to 401, everything else to 400
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownKeyId | Self::IncorrectAlgorithm | Self::InvalidSignature => {
                StatusCode::UNAUTHORIZED
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Error;
    use http::StatusCode;

    #[test]
    fn authentication_failures_are_unauthorized() {
        assert_eq!(Error::UnknownKeyId.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            Error::IncorrectAlgorithm.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            Error::InvalidSignature.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn malformed_input_is_bad_request() {
        assert_eq!(Error::NoSignature.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::HeaderNotEnough.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::DateNotInRange.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::InvalidDigest.status_code(), StatusCode::BAD_REQUEST);
    }
}
