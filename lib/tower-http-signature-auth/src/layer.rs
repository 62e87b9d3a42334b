use crate::HttpSignatureService;
use http_signature_auth::Authenticator;
use std::sync::Arc;
use tower_layer::Layer;

/// Layer wrapping services with signature authentication
///
/// The authenticator configuration is shared between all services produced by
/// this layer.
#[derive(Clone)]
pub struct HttpSignatureLayer {
    authenticator: Arc<Authenticator>,
}

impl HttpSignatureLayer {
    #[must_use]
    pub fn new(authenticator: Authenticator) -> Self {
        Self {
            authenticator: Arc::new(authenticator),
        }
    }
}

impl<S> Layer<S> for HttpSignatureLayer {
    type Service = HttpSignatureService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpSignatureService::new(inner, Arc::clone(&self.authenticator))
    }
}
