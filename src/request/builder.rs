//! Builder pattern implementation for creating [`TransferRequest`] instances.
//!
//! # Examples
//!
//! ```rust
//! use rget::request::{Method, TransferRequestBuilder};
//!
//! # fn example() -> rget::Result<()> {
//! let request = TransferRequestBuilder::new("https://example.test/data.txt")
//!     .post(true)
//!     .header_strings(["Accept:text/plain", "malformed"])
//!     .timeout_secs(10)
//!     .build()?;
//!
//! assert_eq!(request.method(), Method::Post);
//! assert_eq!(request.headers().len(), 1);
//! # Ok(())
//! # }
//! ```

use super::headers::append_header_strings;
use super::request::{Method, TransferRequest};
use crate::{Error, Result};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use reqwest::Url;
use std::time::Duration;

/// A builder used to create a [`TransferRequest`].
///
/// No network activity happens here; [`build`](Self::build) only validates.
#[derive(Debug, Clone)]
pub struct TransferRequestBuilder {
    url: String,
    method: Method,
    headers: HeaderMap,
    timeout: Duration,
    concurrent_downloads: usize,
}

impl TransferRequestBuilder {
    /// Default timeout for the whole transfer.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a builder for `url` with the default options.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::default(),
            headers: HeaderMap::new(),
            timeout: Self::DEFAULT_TIMEOUT,
            concurrent_downloads: 1,
        }
    }

    /// Set the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Use POST instead of GET when `post` is `true`.
    pub fn post(self, post: bool) -> Self {
        self.method(if post { Method::Post } else { Method::Get })
    }

    /// Add headers given as `Name:Value` strings.
    ///
    /// Malformed strings are dropped. See [`parse_header`](super::parse_header).
    pub fn header_strings<I, S>(mut self, raw_headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        append_header_strings(&mut self.headers, raw_headers);
        self
    }

    /// Add one already typed header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Set the deadline for the request plus body read.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the deadline in whole seconds.
    pub fn timeout_secs(self, seconds: u64) -> Self {
        self.timeout(Duration::from_secs(seconds))
    }

    /// Set the number of concurrent downloads.
    pub fn concurrent_downloads(mut self, concurrent_downloads: usize) -> Self {
        self.concurrent_downloads = concurrent_downloads;
        self
    }

    /// Validate the options and create the [`TransferRequest`].
    pub fn build(self) -> Result<TransferRequest> {
        let raw = self.url.trim();
        if raw.is_empty() {
            return Err(Error::InvalidConfiguration("the url is empty".into()));
        }

        let url = Url::parse(raw).map_err(|e| {
            Error::InvalidConfiguration(format!("the url \"{}\" cannot be parsed: {}", raw, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidConfiguration(format!(
                "the url \"{}\" does not use http or https",
                url
            )));
        }

        if self.timeout.is_zero() {
            return Err(Error::InvalidConfiguration(
                "the timeout must be greater than zero".into(),
            ));
        }

        if self.concurrent_downloads == 0 {
            return Err(Error::InvalidConfiguration(
                "the number of concurrent downloads must be at least 1".into(),
            ));
        }

        Ok(TransferRequest {
            url,
            method: self.method,
            headers: self.headers,
            timeout: self.timeout,
            concurrent_downloads: self.concurrent_downloads,
        })
    }
}
