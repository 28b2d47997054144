// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer
//!
//! Request dispatch, lazy response bodies, body buffering, status
//! assertions and a caller-owned cookie jar.

mod body;
mod client;
mod cookie;
mod request;
mod response;
mod status;

pub use body::{read_stream, BodyStream};
pub use client::{HttpClient, HttpClientConfig};
pub use cookie::{CookieJar, CookieStore, Cookies, NoopStore};
pub use request::{Payload, PayloadStream, Request};
pub use response::Response;
pub use status::{ensure_status_code, ExpectedStatus};

pub use reqwest::{Method, StatusCode};

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("cookiejar-http/", env!("CARGO_PKG_VERSION"));

/// Empty header list for calls that send no extra headers
pub const NO_HEADERS: [(&str, &str); 0] = [];

/// Common HTTP headers
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const COOKIE: &str = "cookie";
    pub const SET_COOKIE: &str = "set-cookie";
    pub const USER_AGENT: &str = "user-agent";
}
