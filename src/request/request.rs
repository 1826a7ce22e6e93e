//! The prepared, immutable description of one transfer.

use reqwest::header::HeaderMap;
use reqwest::Url;
use std::fmt;
use std::time::Duration;

/// HTTP method used for a transfer.
///
/// POST requests are sent without a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A validated request, created by [`TransferRequestBuilder`] and consumed
/// once by [`Transfer`].
///
/// [`TransferRequestBuilder`]: crate::request::TransferRequestBuilder
/// [`Transfer`]: crate::transfer::Transfer
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub(crate) url: Url,
    pub(crate) method: Method,
    pub(crate) headers: HeaderMap,
    pub(crate) timeout: Duration,
    pub(crate) concurrent_downloads: usize,
}

impl TransferRequest {
    /// Target URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Custom headers, in the order they were given.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Deadline for the whole request plus body read.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Requested number of concurrent downloads.
    ///
    /// Carried through from the configuration; transfers always run over a
    /// single connection.
    pub fn concurrent_downloads(&self) -> usize {
        self.concurrent_downloads
    }
}
