//! Error handling for rget.
//!
//! Every failure a transfer can end with is one variant of [`Error`]. The
//! request builder only ever produces [`Error::InvalidConfiguration`]; the
//! transfer engine produces the network-facing variants; the CLI adds
//! [`Error::IOError`] when persisting the result.

use reqwest::StatusCode;
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Errors that can happen when using rget.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration was rejected before any network call was made.
    ///
    /// Returned for an empty or unparsable URL, an unsupported scheme, a zero
    /// timeout or a zero concurrency value.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The server answered with a non-success status code.
    ///
    /// No byte of the body is read when this happens.
    #[error("HTTP status error: {code}")]
    HttpStatus { code: StatusCode },

    /// Connection, DNS or mid-stream I/O fault.
    #[error("Transfer failed: {source}")]
    TransferFailed {
        #[source]
        source: reqwest_middleware::Error,
    },

    /// The request plus body read did not finish within the configured timeout.
    #[error("Transfer timed out after {0:?}")]
    TransferTimeout(Duration),

    /// I/O Error.
    ///
    /// Raised while writing the downloaded bytes to the output file.
    #[error("I/O error: {source}")]
    IOError {
        #[from]
        source: io::Error,
    },
}

impl Error {
    /// Short label identifying the kind of failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidConfiguration(_) => "invalid configuration",
            Error::HttpStatus { .. } => "http status",
            Error::TransferFailed { .. } => "transfer failed",
            Error::TransferTimeout(_) => "timeout",
            Error::IOError { .. } => "i/o",
        }
    }

    /// Process exit code used by the command line for this kind of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidConfiguration(_) => 2,
            Error::HttpStatus { .. } => 3,
            Error::TransferFailed { .. } => 4,
            Error::TransferTimeout(_) => 5,
            Error::IOError { .. } => 6,
        }
    }

    /// Map a transport error, keeping timeouts distinguishable.
    pub(crate) fn from_transport(source: reqwest_middleware::Error, timeout: Duration) -> Self {
        let timed_out = match &source {
            reqwest_middleware::Error::Reqwest(e) => e.is_timeout(),
            reqwest_middleware::Error::Middleware(_) => false,
        };

        if timed_out {
            Error::TransferTimeout(timeout)
        } else {
            Error::TransferFailed { source }
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(source: reqwest_middleware::Error) -> Self {
        Error::TransferFailed { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::TransferFailed {
            source: reqwest_middleware::Error::Reqwest(source),
        }
    }
}

/// Result type alias for operations that can fail with an rget error.
pub type Result<T> = std::result::Result<T, Error>;
