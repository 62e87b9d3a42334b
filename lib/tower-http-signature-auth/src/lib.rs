#![doc = include_str!("../README.md")]

pub use self::{
    body::BufferedBody, future::ResponseFuture, layer::HttpSignatureLayer,
    service::HttpSignatureService,
};

mod body;
mod future;
mod layer;
mod service;

type BoxError = Box<dyn std::error::Error + Send + Sync>;
