// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use super::request::{header_pair, Payload, Request};
use super::response::Response;
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Whole-request timeout, none by default
    pub timeout: Option<Duration>,
    /// Connect timeout, none by default
    pub connect_timeout: Option<Duration>,
    /// Headers sent unless a request sets the same name
    pub default_headers: HeaderMap,
    /// Proxy URL
    pub proxy: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("accept", HeaderValue::from_static("*/*"));

        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            connect_timeout: None,
            default_headers,
            proxy: None,
        }
    }
}

impl HttpClientConfig {
    /// Create a new client config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Add a default header
    pub fn default_header(mut self, name: &str, value: &str) -> Result<Self> {
        let (name, value) = header_pair(name, value)?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Set proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }
}

/// Request dispatcher.
///
/// Every call is one round trip. Redirects are not followed and no cookies
/// are kept here; session state belongs to a caller-owned
/// [`CookieJar`](super::CookieJar).
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(Policy::none())
            .default_headers(config.default_headers.clone());

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Send a request and return as soon as the response headers arrive.
    ///
    /// The body is left unread on the returned [`Response`].
    pub async fn request<H, K, V>(
        &self,
        method: Method,
        url: impl AsRef<str>,
        payload: impl Into<Payload>,
        headers: H,
    ) -> Result<Response>
    where
        H: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let request = Request::new(method, url)?
            .headers(headers)?
            .payload(payload);
        self.execute(request).await
    }

    /// Execute a GET request
    pub async fn get<H, K, V>(&self, url: impl AsRef<str>, headers: H) -> Result<Response>
    where
        H: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.request(Method::GET, url, Payload::Empty, headers).await
    }

    /// Execute a POST request
    pub async fn post<H, K, V>(
        &self,
        url: impl AsRef<str>,
        payload: impl Into<Payload>,
        headers: H,
    ) -> Result<Response>
    where
        H: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.request(Method::POST, url, payload, headers).await
    }

    /// GET a URL, read the whole body and parse it as JSON
    pub async fn get_json<T, H, K, V>(&self, url: impl AsRef<str>, headers: H) -> Result<T>
    where
        T: DeserializeOwned,
        H: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.get(url, headers).await?.json().await
    }

    /// Execute a prepared request
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let start = Instant::now();
        let Request {
            method,
            url,
            headers,
            payload,
        } = request;

        tracing::debug!(method = %method, url = %url, payload = ?payload, "Sending request");

        let mut builder = self.client.request(method.clone(), url.clone()).headers(headers);
        if let Some(body) = payload.into_reqwest_body() {
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(method = %method, url = %url, error = %e, "Request failed");
                return Err(e.into());
            }
        };

        tracing::debug!(
            method = %method,
            url = %url,
            status = %response.status(),
            time_ms = start.elapsed().as_millis() as u64,
            "Response headers received"
        );

        Ok(Response::from_reqwest(response))
    }
}
