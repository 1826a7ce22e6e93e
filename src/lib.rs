//! rget downloads a single file over HTTP(S), streaming the body in bounded
//! chunks and reporting progress as it arrives.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rget::{Error, Transfer, TransferProgress, TransferRequestBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let request = TransferRequestBuilder::new("https://example.test/data.txt")
//!     .header_strings(["Accept:text/plain"])
//!     .timeout_secs(30)
//!     .build()?;
//!
//! let body = Transfer::new(request)
//!     .execute(&|p: &TransferProgress| {
//!         if let Some(percent) = p.percentage() {
//!             eprintln!("{}%", percent);
//!         }
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`request`] - Validated `TransferRequest` and its builder
//! - [`transfer`] - The streaming transfer engine and progress events
//! - [`progress`] - Console rendering of progress events
//! - [`http`] - HTTP client construction
//! - [`cli`] - Command line glue used by the `rget` binary
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod cli;
pub mod error;
pub mod http;
pub mod progress;
pub mod request;
pub mod transfer;

pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use progress::{ConsoleProgress, ProgressBarOpts};
pub use request::{Method, TransferRequest, TransferRequestBuilder};
pub use transfer::{
    ProgressObserver, Transfer, TransferProgress, TransferResult, TransferState, CHUNK_SIZE,
};
