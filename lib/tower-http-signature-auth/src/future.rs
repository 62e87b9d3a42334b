use crate::{BoxError, BufferedBody};
use bytes::{BufMut, BytesMut};
use http::{request::Parts, Request, Response};
use http_body::Body;
use http_signature_auth::Authenticator;
use pin_project_lite::pin_project;
use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{self, ready, Poll},
};
use tower_service::Service;
use tracing::debug;

pin_project! {
    /// Response future of [`HttpSignatureService`](crate::HttpSignatureService)
    pub struct ResponseFuture<S, B>
    where
        S: Service<Request<BufferedBody>>,
        B: Body,
    {
        service: S,
        authenticator: Arc<Authenticator>,
        #[pin]
        state: State<B, S::Future>,
    }
}

pin_project! {
    #[project = StateProj]
    enum State<B, F> {
        Buffer {
            parts: Option<Parts>,
            #[pin]
            body: B,
            accumulator: BytesMut,
        },
        Respond {
            #[pin]
            future: F,
        },
    }
}

impl<S, B> ResponseFuture<S, B>
where
    S: Service<Request<BufferedBody>>,
    B: Body,
{
    pub(crate) fn buffer(
        service: S,
        authenticator: Arc<Authenticator>,
        parts: Parts,
        body: B,
    ) -> Self {
        Self {
            service,
            authenticator,
            state: State::Buffer {
                parts: Some(parts),
                body,
                accumulator: BytesMut::new(),
            },
        }
    }
}

impl<S, B, ResBody> Future for ResponseFuture<S, B>
where
    S: Service<Request<BufferedBody>, Response = Response<ResBody>>,
    S::Error: Into<BoxError>,
    B: Body,
    B::Error: Into<BoxError>,
    ResBody: Default,
{
    type Output = Result<Response<ResBody>, BoxError>;

    fn poll(self: Pin<&mut Self>, cx: &mut task::Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            let next_state = match this.state.as_mut().project() {
                StateProj::Buffer {
                    parts,
                    mut body,
                    accumulator,
                } => {
                    while let Some(frame) = ready!(body.as_mut().poll_frame(cx))
                        .transpose()
                        .map_err(Into::into)?
                    {
                        if let Ok(data) = frame.into_data() {
                            accumulator.put(data);
                        }
                    }

                    let parts = parts.take().expect("future polled after completion");
                    let request = Request::from_parts(parts, accumulator.split().freeze());

                    match this.authenticator.authenticate(&request) {
                        Ok(identity) => {
                            let (mut parts, bytes) = request.into_parts();
                            parts.extensions.insert(identity);

                            let request = Request::from_parts(parts, BufferedBody::new(bytes));
                            State::Respond {
                                future: this.service.call(request),
                            }
                        }
                        Err(error) => {
                            debug!(%error, "rejecting unauthenticated request");

                            // Opaque rejection; the reason only goes to the logs
                            let mut response = Response::new(ResBody::default());
                            *response.status_mut() = error.status_code();

                            return Poll::Ready(Ok(response));
                        }
                    }
                }
                StateProj::Respond { future } => return future.poll(cx).map_err(Into::into),
            };

            this.state.set(next_state);
        }
    }
}
