use crate::{
    crypto::SigningAlgorithm,
    signature_string,
    validator::{DateValidator, DigestValidator, Validator},
    Error, KeyId, KeyIdRef, SignatureHeader,
};
use bytes::Bytes;
use derive_builder::Builder;
use http::Request;
use ring::constant_time;
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, instrument};

/// Signed-header names every request has to cover unless configured otherwise
pub const DEFAULT_REQUIRED_HEADERS: &[&str] = &["(request-target)", "date", "digest"];

/// Server-side credential record
pub struct Secret {
    /// Shared secret material
    pub key: Vec<u8>,

    /// Signing algorithm the key is bound to
    pub algorithm: Arc<dyn SigningAlgorithm + Send + Sync>,
}

impl Secret {
    /// Bind secret material to its signing algorithm
    pub fn new(
        key: impl Into<Vec<u8>>,
        algorithm: Arc<dyn SigningAlgorithm + Send + Sync>,
    ) -> Self {
        Self {
            key: key.into(),
            algorithm,
        }
    }
}

/// Secret table, one entry per key identifier
pub type Secrets = HashMap<KeyId, Secret>;

/// Authenticated peer, attached to the request on success
#[derive(Clone, Debug)]
pub struct Identity {
    /// Key the request was verified against
    pub key_id: KeyId,

    /// Name of the algorithm that verified it
    pub algorithm: &'static str,
}

fn default_validators() -> Vec<Box<dyn Validator + Send + Sync>> {
    vec![Box::new(DateValidator::default()), Box::new(DigestValidator)]
}

fn default_required_headers() -> Vec<String> {
    DEFAULT_REQUIRED_HEADERS
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Long-lived authentication configuration
///
/// Read-only after construction, so freely shareable across concurrent
/// requests without locking.
#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct Authenticator {
    /// Mapping from key identifier to its secret
    secrets: Secrets,

    /// Ordered pre-verification checks
    #[builder(default = "default_validators()")]
    validators: Vec<Box<dyn Validator + Send + Sync>>,

    /// Header names every signature has to cover
    #[builder(default = "default_required_headers()")]
    required_headers: Vec<String>,
}

impl Authenticator {
    /// Return a builder of the authenticator
    #[must_use]
    pub fn builder() -> AuthenticatorBuilder {
        AuthenticatorBuilder::default()
    }

    /// Authenticate a request with a buffered body
    ///
    /// Runs the full chain: header parse, validator chain, coverage check,
    /// secret lookup, signing-string reconstruction, signing and
    /// constant-time comparison. The first failing step rejects the request.
    #[instrument(skip_all)]
    pub fn authenticate(&self, req: &Request<Bytes>) -> Result<Identity, Error> {
        self.run(req)
            .inspect_err(|error| debug!(%error, "rejected request"))
    }

    fn run(&self, req: &Request<Bytes>) -> Result<Identity, Error> {
        let signature_header = SignatureHeader::from_request(req)?;

        for validator in &self.validators {
            validator.validate(req)?;
        }

        if !is_subset(&self.required_headers, &signature_header.headers) {
            return Err(Error::HeaderNotEnough);
        }

        let secret = self
            .secrets
            .get(KeyIdRef::from_str(signature_header.key_id))
            .ok_or(Error::UnknownKeyId)?;

        if let Some(algorithm) = signature_header.algorithm {
            if algorithm != secret.algorithm.name() {
                return Err(Error::IncorrectAlgorithm);
            }
        }

        let message = signature_string::construct(req, &signature_header.headers)?;
        let expected = secret.algorithm.sign(message.as_bytes(), &secret.key);

        constant_time::verify_slices_are_equal(&expected, &signature_header.signature)
            .map_err(|_| Error::InvalidSignature)?;

        Ok(Identity {
            key_id: signature_header.key_id.into(),
            algorithm: secret.algorithm.name(),
        })
    }
}

/// Whether every required name appears in the declared list, order-insensitive
fn is_subset(required: &[String], declared: &[&str]) -> bool {
    required
        .iter()
        .all(|name| declared.iter().any(|header| *header == name.as_str()))
}

#[cfg(test)]
mod test {
    use super::is_subset;
    use proptest::{prop_assert_eq, proptest};
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn subset_check_behaves_like_sets(left: HashSet<String>, right: HashSet<String>) {
            let required = left.iter().cloned().collect::<Vec<_>>();
            let declared = right.iter().map(String::as_str).collect::<Vec<_>>();

            prop_assert_eq!(is_subset(&required, &declared), left.is_subset(&right));
        }
    }
}
