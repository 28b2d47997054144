// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # cookiejar-http
//!
//! Small helpers around an async HTTP client for scripted request flows:
//!
//! - Dispatch GET/POST requests and get the response back as soon as the
//!   headers arrive, body still unread
//! - Buffer a body stream into one `Bytes`
//! - Assert a response status against an allow-list, as a pass-through step
//! - Carry cookies from `Set-Cookie` responses into later `Cookie` headers
//! - Encode url-encoded query strings and multipart/form-data bodies
//! - Open raw TCP connections
//!
//! ## Example
//!
//! ```rust,no_run
//! use cookiejar_http::{build_form, ensure_status_code, headers, CookieJar, HttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new()?;
//!     let jar = CookieJar::new();
//!
//!     let form = build_form([("user", "bob"), ("password", "hunter2")]);
//!     let content_type = form.content_type();
//!     client
//!         .post(
//!             "https://example.com/login",
//!             form.payload,
//!             [
//!                 (headers::COOKIE, jar.cookie()),
//!                 (headers::CONTENT_TYPE, content_type),
//!             ],
//!         )
//!         .await
//!         .map(|resp| jar.set_cookie(resp))
//!         .and_then(ensure_status_code([200, 302]))?;
//!
//!     let profile: serde_json::Value = client
//!         .get_json("https://example.com/api/me", [(headers::COOKIE, jar.cookie())])
//!         .await?;
//!     println!("{}", profile);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod form;
pub mod http;
pub mod net;

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{
    ensure_status_code, headers, read_stream, BodyStream, CookieJar, CookieStore, Cookies,
    ExpectedStatus, HttpClient, HttpClientConfig, Method, NoopStore, Payload, PayloadStream,
    Request, Response, StatusCode, DEFAULT_USER_AGENT, NO_HEADERS,
};

// Encoders
pub use form::{build_form, encode_component, stringify, stringify_with, MultipartForm};

// Raw sockets
pub use net::{tcp, tcp_with_timeout};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
