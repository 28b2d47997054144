// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Cookie jar
//!
//! The jar is a flat `name -> value` map. Cookies are global to the jar:
//! domain, path, expiry and flags from `Set-Cookie` are ignored, only the
//! leading `name=value` pair of each header is kept.
//!
//! Usage is two-step per round trip: send [`CookieJar::cookie`] as the
//! `Cookie` request header, then pass the response through
//! [`CookieJar::set_cookie`] before inspecting it.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use reqwest::header::HeaderMap;

use super::headers::SET_COOKIE;
use super::response::{header_text, Response};
use crate::error::{Error, Result};

/// Cookie name to value, in insertion order
pub type Cookies = IndexMap<String, String>;

/// Persistence hook for a [`CookieJar`]
pub trait CookieStore: Send + Sync + fmt::Debug {
    /// Persist the current cookies
    fn save(&self, cookies: &Cookies) -> Result<()>;

    /// Load previously saved cookies, if any
    fn restore(&self) -> Result<Option<Cookies>>;
}

/// Store that keeps nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl CookieStore for NoopStore {
    fn save(&self, _cookies: &Cookies) -> Result<()> {
        Ok(())
    }

    fn restore(&self) -> Result<Option<Cookies>> {
        Ok(None)
    }
}

/// Shared cookie storage; clones see the same cookies
#[derive(Debug, Clone)]
pub struct CookieJar {
    cookies: Arc<RwLock<Cookies>>,
    store: Arc<dyn CookieStore>,
}

impl Default for CookieJar {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieJar {
    /// Create a new empty cookie jar
    pub fn new() -> Self {
        Self::with_cookies(Cookies::new())
    }

    /// Create a jar seeded with cookies
    pub fn with_cookies<I, K, V>(cookies: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cookies: Arc::new(RwLock::new(
                cookies
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            )),
            store: Arc::new(NoopStore),
        }
    }

    /// Install a persistence hook
    pub fn with_store(mut self, store: impl CookieStore + 'static) -> Self {
        self.store = Arc::new(store);
        self
    }

    /// `Cookie` request header value for the current contents.
    ///
    /// Rebuilt on every call, so it always reflects the latest update.
    pub fn cookie(&self) -> String {
        self.cookies
            .read()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Snapshot of the current cookies
    pub fn cookies(&self) -> Cookies {
        self.cookies.read().clone()
    }

    /// Get a cookie value by name
    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies.read().get(name).cloned()
    }

    /// Record every `Set-Cookie` of a response, then hand the response back
    pub fn set_cookie(&self, response: Response) -> Response {
        self.set_cookie_headers(response.headers());
        response
    }

    /// Record every `Set-Cookie` value found in `headers`.
    ///
    /// Values are applied in header order, so a later header wins over an
    /// earlier one with the same name.
    pub fn set_cookie_headers(&self, headers: &HeaderMap) {
        let mut cookies = self.cookies.write();
        for value in headers.get_all(SET_COOKIE) {
            let value = header_text(value);
            if let Some((name, value)) = parse_set_cookie(&value) {
                tracing::trace!(cookie = name, "Storing cookie");
                cookies.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Get total cookie count
    pub fn len(&self) -> usize {
        self.cookies.read().len()
    }

    /// Check if jar is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Persist the cookies through the installed store
    pub fn save(&self) -> Result<()> {
        let cookies = self.cookies();
        self.store.save(&cookies)
    }

    /// Merge cookies loaded by the installed store into the jar
    pub fn restore(&self) -> Result<()> {
        if let Some(saved) = self.store.restore()? {
            self.cookies.write().extend(saved);
        }
        Ok(())
    }

    /// Export all cookies as JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&*self.cookies.read()).map_err(Error::from)
    }

    /// Import cookies from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let cookies: Cookies = serde_json::from_str(json)?;
        Ok(Self::with_cookies(cookies))
    }
}

/// Split the leading `name=value` pair off a `Set-Cookie` value.
///
/// The value runs from the first `=` to the first `;`. A pair without `=`
/// yields an empty value. A pair with an empty name (`=x`) is dropped
/// rather than stored under the key `""`, which a plain split would do.
fn parse_set_cookie(header: &str) -> Option<(&str, &str)> {
    let pair = header.split(';').next().unwrap_or_default();
    let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
    if name.is_empty() {
        None
    } else {
        Some((name, value))
    }
}
