use bytes::Bytes;
use http_body::{Body, Frame, SizeHint};
use std::{
    convert::Infallible,
    pin::Pin,
    task::{Context, Poll},
};

/// Replayable request body handed to the inner service after authentication
///
/// Yields the buffered bytes as a single data frame, restoring the body
/// byte-identical to what was read off the wire.
pub struct BufferedBody {
    bytes: Option<Bytes>,
}

impl BufferedBody {
    pub(crate) fn new(bytes: Bytes) -> Self {
        Self { bytes: Some(bytes) }
    }
}

impl Body for BufferedBody {
    type Data = Bytes;
    type Error = Infallible;

    fn poll_frame(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        Poll::Ready(match self.get_mut().bytes.take() {
            Some(bytes) if !bytes.is_empty() => Some(Ok(Frame::data(bytes))),
            _ => None,
        })
    }

    fn is_end_stream(&self) -> bool {
        self.bytes.as_ref().map_or(true, Bytes::is_empty)
    }

    fn size_hint(&self) -> SizeHint {
        self.bytes
            .as_ref()
            .map_or_else(|| SizeHint::with_exact(0), |bytes| {
                SizeHint::with_exact(bytes.len() as u64)
            })
    }
}
