use crate::{BoxError, BufferedBody, ResponseFuture};
use http::{Request, Response};
use http_body::Body;
use http_signature_auth::Authenticator;
use std::{
    mem,
    sync::Arc,
    task::{Context, Poll},
};
use tower_service::Service;

/// Middleware authenticating requests before they reach the inner service
#[derive(Clone)]
pub struct HttpSignatureService<S> {
    inner: S,
    authenticator: Arc<Authenticator>,
}

impl<S> HttpSignatureService<S> {
    pub(crate) fn new(inner: S, authenticator: Arc<Authenticator>) -> Self {
        Self {
            inner,
            authenticator,
        }
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HttpSignatureService<S>
where
    S: Service<Request<BufferedBody>, Response = Response<ResBody>> + Clone,
    S::Error: Into<BoxError>,
    ReqBody: Body,
    ReqBody::Error: Into<BoxError>,
    ResBody: Default,
{
    type Response = Response<ResBody>;
    type Error = BoxError;
    type Future = ResponseFuture<S, ReqBody>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // Hand the readied service to the future, leave the clone behind
        let clone = self.inner.clone();
        let inner = mem::replace(&mut self.inner, clone);

        let (parts, body) = req.into_parts();
        ResponseFuture::buffer(inner, Arc::clone(&self.authenticator), parts, body)
    }
}
