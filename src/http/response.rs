// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;
use futures::Stream;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use super::body::{self, BodyStream};
use super::headers;
use crate::error::{Error, Result};

/// HTTP response whose body has not been read yet.
///
/// The response is available as soon as the status line and headers arrive.
/// Whoever consumes the body (`bytes`, `text`, `json`, `into_body`) takes
/// ownership of it.
pub struct Response {
    /// Response status code
    pub status: StatusCode,
    /// Response headers, repeated names kept in order
    pub headers: HeaderMap,
    /// URL the response came from
    pub url: Url,
    body: BodyStream,
}

impl Response {
    /// Build a response from parts and an arbitrary body stream
    pub fn from_parts<S, B, E>(status: StatusCode, headers: HeaderMap, url: Url, body: S) -> Self
    where
        S: Stream<Item = std::result::Result<B, E>> + Send + 'static,
        B: Into<Bytes>,
        E: Into<Error>,
    {
        Self {
            status,
            headers,
            url,
            body: body::boxed(body),
        }
    }

    /// Build a response with an already buffered body
    pub fn with_body(status: StatusCode, headers: HeaderMap, url: Url, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            url,
            body: body::once(body),
        }
    }

    pub(crate) fn from_reqwest(response: reqwest::Response) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        Self::from_parts(status, headers, url, response.bytes_stream())
    }

    /// Response status
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the first value of a header
    pub fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers.get(name).map(header_text)
    }

    /// Get all values for a header
    pub fn header_all(&self, name: &str) -> Vec<Cow<'_, str>> {
        self.headers.get_all(name).iter().map(header_text).collect()
    }

    /// Get Set-Cookie headers
    pub fn set_cookies(&self) -> Vec<Cow<'_, str>> {
        self.header_all(headers::SET_COOKIE)
    }

    /// Get content type
    pub fn content_type(&self) -> Option<Cow<'_, str>> {
        self.header(headers::CONTENT_TYPE)
    }

    /// URL the response came from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Take the unread body stream
    pub fn into_body(self) -> BodyStream {
        self.body
    }

    /// Read the whole body
    pub async fn bytes(self) -> Result<Bytes> {
        body::read_stream(self.body).await
    }

    /// Read the whole body as UTF-8 text
    pub async fn text(self) -> Result<String> {
        let bytes = self.bytes().await?;
        String::from_utf8(bytes.to_vec()).map_err(|e| Error::Stream(e.to_string()))
    }

    /// Read the whole body and parse it as JSON
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Error::from)
    }
}

/// Header value as text. Bytes that are not UTF-8 are read as Latin-1
/// (obs-text), so no value is ever dropped.
pub(crate) fn header_text(value: &HeaderValue) -> Cow<'_, str> {
    match std::str::from_utf8(value.as_bytes()) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(value.as_bytes().iter().map(|&b| char::from(b)).collect()),
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://example.com").unwrap()
    }

    #[tokio::test]
    async fn test_response_text() {
        let resp = Response::with_body(StatusCode::OK, HeaderMap::new(), url(), "Hello, World!");
        assert_eq!(resp.status_code(), 200);
        assert_eq!(resp.text().await.unwrap(), "Hello, World!");
    }

    #[tokio::test]
    async fn test_response_json() {
        let resp = Response::with_body(StatusCode::OK, HeaderMap::new(), url(), r#"{"a":[1,2]}"#);
        let value: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(value["a"][1], 2);

        let resp = Response::with_body(StatusCode::OK, HeaderMap::new(), url(), "not json");
        let err = resp.json::<serde_json::Value>().await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_repeated_headers() {
        let mut headers = HeaderMap::new();
        headers.append("set-cookie", HeaderValue::from_static("a=1"));
        headers.append("set-cookie", HeaderValue::from_static("b=2; Path=/"));
        headers.insert("content-type", HeaderValue::from_static("text/plain"));

        let resp = Response::with_body(StatusCode::OK, headers, url(), Bytes::new());
        assert_eq!(resp.set_cookies(), vec!["a=1", "b=2; Path=/"]);
        assert_eq!(resp.content_type().as_deref(), Some("text/plain"));
        assert_eq!(resp.header("x-missing"), None);
    }

    #[test]
    fn test_non_utf8_header_values() {
        let mut headers = HeaderMap::new();
        headers.append("x-name", HeaderValue::from_bytes(b"caf\xe9").unwrap());
        headers.append("x-name", HeaderValue::from_static("plain"));

        let resp = Response::with_body(StatusCode::OK, headers, url(), Bytes::new());
        assert_eq!(resp.header("x-name").as_deref(), Some("caf\u{e9}"));
        assert_eq!(resp.header_all("x-name"), vec!["caf\u{e9}", "plain"]);
    }
}
