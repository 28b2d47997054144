// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP request types

use std::fmt;
use std::pin::Pin;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use super::headers;
use crate::error::{Error, Result};
use crate::form::{self, MultipartForm};

/// Outgoing chunk stream; the transport may poll it from another thread
pub type PayloadStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send + Sync + 'static>>;

/// Request body: nothing, a buffer sent in one piece, or a stream piped
/// through as it produces chunks
pub enum Payload {
    Empty,
    Fixed(Bytes),
    Streaming(PayloadStream),
}

impl Payload {
    /// Wrap a live stream without buffering it
    pub fn streaming<S, B, E>(stream: S) -> Self
    where
        S: Stream<Item = std::result::Result<B, E>> + Send + Sync + 'static,
        B: Into<Bytes>,
        E: Into<Error>,
    {
        Payload::Streaming(Box::pin(
            stream.map(|chunk| chunk.map(Into::<Bytes>::into).map_err(Into::<Error>::into)),
        ))
    }

    /// Check if there is nothing to send
    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Empty => true,
            Payload::Fixed(bytes) => bytes.is_empty(),
            Payload::Streaming(_) => false,
        }
    }

    pub(crate) fn into_reqwest_body(self) -> Option<reqwest::Body> {
        match self {
            Payload::Empty => None,
            Payload::Fixed(bytes) => Some(reqwest::Body::from(bytes)),
            Payload::Streaming(stream) => Some(reqwest::Body::wrap_stream(stream)),
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Empty
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Empty => f.write_str("Empty"),
            Payload::Fixed(bytes) => f.debug_tuple("Fixed").field(&bytes.len()).finish(),
            Payload::Streaming(_) => f.write_str("Streaming"),
        }
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Payload::Fixed(bytes)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Fixed(bytes.into())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Fixed(text.into())
    }
}

impl From<&'static str> for Payload {
    fn from(text: &'static str) -> Self {
        Payload::Fixed(Bytes::from_static(text.as_bytes()))
    }
}

impl From<&'static [u8]> for Payload {
    fn from(bytes: &'static [u8]) -> Self {
        Payload::Fixed(Bytes::from_static(bytes))
    }
}

/// HTTP request representation
#[derive(Debug)]
pub struct Request {
    /// Request method
    pub method: Method,
    /// Request URL, always http or https
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub payload: Payload,
}

impl Request {
    /// Create a new GET request
    pub fn get(url: impl AsRef<str>) -> Result<Self> {
        Self::new(Method::GET, url)
    }

    /// Create a new POST request
    pub fn post(url: impl AsRef<str>) -> Result<Self> {
        Self::new(Method::POST, url)
    }

    /// Create a new request with arbitrary method
    pub fn new(method: Method, url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            method,
            url: parse_url(url.as_ref())?,
            headers: HeaderMap::new(),
            payload: Payload::Empty,
        })
    }

    /// Set a header, replacing any previous value
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let (name, value) = header_pair(name.as_ref(), value.as_ref())?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Set multiple headers
    pub fn headers<I, K, V>(mut self, headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in headers {
            let (name, value) = header_pair(name.as_ref(), value.as_ref())?;
            self.headers.insert(name, value);
        }
        Ok(self)
    }

    /// Set the request body
    pub fn payload(mut self, payload: impl Into<Payload>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Set JSON body
    pub fn json<T: Serialize>(self, data: &T) -> Result<Self> {
        let json = serde_json::to_vec(data)?;
        self.payload(json).header(headers::CONTENT_TYPE, "application/json")
    }

    /// Set a url-encoded form body
    pub fn form<I, K, V>(self, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let body = form::stringify(fields);
        self.payload(body)
            .header(headers::CONTENT_TYPE, "application/x-www-form-urlencoded")
    }

    /// Set a multipart/form-data body along with its boundary header
    pub fn multipart(self, form: MultipartForm) -> Result<Self> {
        let content_type = form.content_type();
        self.payload(form.payload)
            .header(headers::CONTENT_TYPE, content_type)
    }

    /// Get the host
    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }
}

/// Parse an absolute http(s) URL
pub(crate) fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url)?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::UnsupportedScheme {
            url: url.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

pub(crate) fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name =
        HeaderName::try_from(name).map_err(|e| Error::invalid_header(name, e))?;
    let header_value =
        HeaderValue::try_from(value).map_err(|e| Error::invalid_header(name, e))?;
    Ok((header_name, header_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_creation() {
        let req = Request::get("https://example.com/path").unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.host(), Some("example.com"));
        assert!(req.payload.is_empty());
    }

    #[test]
    fn test_rejects_other_schemes() {
        let err = Request::get("ftp://example.com/file").unwrap_err();
        assert!(matches!(err, Error::UnsupportedScheme { ref scheme, .. } if scheme == "ftp"));
        assert!(matches!(Request::post("/relative").unwrap_err(), Error::Url(_)));
    }

    #[test]
    fn test_request_headers() {
        let req = Request::get("https://example.com")
            .unwrap()
            .header("x-custom", "value")
            .unwrap()
            .headers([("cookie", "a=1"), ("x-custom", "other")])
            .unwrap();
        assert_eq!(req.headers.get("x-custom").unwrap(), "other");
        assert_eq!(req.headers.get("cookie").unwrap(), "a=1");

        let err = Request::get("https://example.com")
            .unwrap()
            .header("bad header", "v")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { .. }));
    }

    #[test]
    fn test_form_body() {
        let req = Request::post("http://example.com/login")
            .unwrap()
            .form([("user", "bob smith"), ("pw", "x&y")])
            .unwrap();
        assert_eq!(
            req.headers.get("content-type").unwrap(),
            "application/x-www-form-urlencoded"
        );
        match req.payload {
            Payload::Fixed(body) => assert_eq!(&body[..], b"user=bob%20smith&pw=x%26y"),
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn test_multipart_body() {
        let form = form::build_form([("name", "bob")]);
        let boundary = form.boundary.clone();
        let req = Request::post("http://example.com/upload")
            .unwrap()
            .multipart(form)
            .unwrap();
        assert_eq!(
            req.headers.get("content-type").unwrap().to_str().unwrap(),
            format!("multipart/form-data; boundary={}", boundary)
        );
    }

    #[test]
    fn test_json_body() {
        let req = Request::post("http://example.com/api")
            .unwrap()
            .json(&serde_json::json!({"ok": true}))
            .unwrap();
        assert_eq!(req.headers.get("content-type").unwrap(), "application/json");
        assert!(matches!(req.payload, Payload::Fixed(ref b) if &b[..] == br#"{"ok":true}"#));
    }

    #[test]
    fn test_streaming_payload() {
        let stream = futures::stream::iter(vec![Ok::<_, Error>(Bytes::from_static(b"chunk"))]);
        let payload = Payload::streaming(stream);
        assert!(!payload.is_empty());
        assert!(payload.into_reqwest_body().is_some());
        assert!(Payload::Empty.into_reqwest_body().is_none());
    }
}
