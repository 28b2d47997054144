// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Status code assertions

use reqwest::StatusCode;

use super::response::Response;
use crate::error::{Error, Result};

/// Accepted status codes, in the order given by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedStatus(Vec<u16>);

impl ExpectedStatus {
    /// Check membership
    pub fn accepts(&self, code: u16) -> bool {
        self.0.contains(&code)
    }

    /// Accepted codes
    pub fn codes(&self) -> &[u16] {
        &self.0
    }
}

impl From<u16> for ExpectedStatus {
    fn from(code: u16) -> Self {
        Self(vec![code])
    }
}

impl From<StatusCode> for ExpectedStatus {
    fn from(code: StatusCode) -> Self {
        Self(vec![code.as_u16()])
    }
}

impl From<Vec<u16>> for ExpectedStatus {
    fn from(codes: Vec<u16>) -> Self {
        Self(codes)
    }
}

impl From<&[u16]> for ExpectedStatus {
    fn from(codes: &[u16]) -> Self {
        Self(codes.to_vec())
    }
}

impl<const N: usize> From<[u16; N]> for ExpectedStatus {
    fn from(codes: [u16; N]) -> Self {
        Self(codes.to_vec())
    }
}

/// Build a pass-through check that a response status is one of `expected`.
///
/// ```rust,no_run
/// # async fn run() -> cookiejar_http::Result<()> {
/// use cookiejar_http::{ensure_status_code, HttpClient, NO_HEADERS};
///
/// let client = HttpClient::new()?;
/// let response = client
///     .get("https://example.com", NO_HEADERS)
///     .await
///     .and_then(ensure_status_code([200, 204]))?;
/// # Ok(())
/// # }
/// ```
pub fn ensure_status_code(
    expected: impl Into<ExpectedStatus>,
) -> impl Fn(Response) -> Result<Response> {
    let expected = expected.into();
    move |response| {
        let actual = response.status_code();
        if expected.accepts(actual) {
            Ok(response)
        } else {
            Err(Error::status_mismatch(expected.codes(), actual))
        }
    }
}
