// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Body buffering
//!
//! Streams here are pull-based: nothing is produced until the reader polls,
//! so a stream handed to [`read_stream`] cannot lose chunks that were emitted
//! before reading started.

use std::pin::Pin;

use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};

use crate::error::{Error, Result};

/// A lazily produced sequence of body chunks
pub type BodyStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send + 'static>>;

/// Drain a stream into one contiguous buffer.
///
/// Chunks are concatenated in arrival order. The first error aborts the read
/// and is returned; bytes gathered up to that point are dropped.
pub async fn read_stream<S, B, E>(stream: S) -> Result<Bytes>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<Error>,
{
    futures::pin_mut!(stream);

    let mut buffer = BytesMut::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(Into::<Error>::into)?;
        buffer.extend_from_slice(chunk.as_ref());
    }

    Ok(buffer.freeze())
}

/// Box any compatible stream into a [`BodyStream`]
pub fn boxed<S, B, E>(stream: S) -> BodyStream
where
    S: Stream<Item = std::result::Result<B, E>> + Send + 'static,
    B: Into<Bytes>,
    E: Into<Error>,
{
    Box::pin(stream.map(|chunk| chunk.map(Into::<Bytes>::into).map_err(Into::<Error>::into)))
}

/// A body stream that yields a single buffer
pub fn once(bytes: impl Into<Bytes>) -> BodyStream {
    let bytes = bytes.into();
    Box::pin(futures::stream::once(async move { Ok(bytes) }))
}
