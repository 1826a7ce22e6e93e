//! Core transfer implementation with the streaming read loop.
//!
//! A [`Transfer`] owns one [`TransferRequest`]. Executing it sends the
//! request, rejects non-success statuses before touching the body, then reads
//! the body in chunks of at most [`CHUNK_SIZE`] bytes, notifying the observer
//! after each one. The whole sequence runs under the request timeout; when the
//! deadline fires the in-flight future is dropped, which releases the
//! connection whatever phase it was in.
//!
//! # Examples
//!
//! ```rust,no_run
//! use rget::request::TransferRequestBuilder;
//! use rget::transfer::{Transfer, TransferProgress};
//!
//! # async fn example() -> rget::Result<()> {
//! let request = TransferRequestBuilder::new("https://example.test/data.txt").build()?;
//! let body = Transfer::new(request)
//!     .execute(&|p: &TransferProgress| println!("{:?}%", p.percentage()))
//!     .await?;
//! println!("{} bytes", body.len());
//! # Ok(())
//! # }
//! ```

use super::progress::{ProgressObserver, TransferProgress};
use crate::http::{create_http_client, HttpClientConfig};
use crate::request::TransferRequest;
use crate::{Error, Result};

use futures::StreamExt;
use reqwest_middleware::ClientWithMiddleware;
use tracing::{debug, trace};

/// Largest number of bytes handed to the observer in one progress event.
pub const CHUNK_SIZE: usize = 4096;

/// Upper bound on the buffer reserved up front from the content length.
const MAX_PREALLOCATION: u64 = 64 * 1024 * 1024;

/// The complete response body.
pub type TransferResult = Vec<u8>;

/// Executes a single [`TransferRequest`].
#[derive(Debug)]
pub struct Transfer {
    request: TransferRequest,
}

impl Transfer {
    /// Creates a transfer for `request`.
    pub fn new(request: TransferRequest) -> Self {
        Self { request }
    }

    /// Runs the transfer to completion and returns the response body.
    ///
    /// The observer receives one event per chunk and a final
    /// [`Complete`](super::TransferState::Complete) event. On failure the
    /// bytes read so far are discarded.
    pub async fn execute<O>(self, observer: &O) -> Result<TransferResult>
    where
        O: ProgressObserver + ?Sized,
    {
        let timeout = self.request.timeout;
        let client = create_http_client(HttpClientConfig {
            timeout: Some(timeout),
            headers: Some(self.request.headers.clone()),
        })?;

        match tokio::time::timeout(timeout, self.run(&client, observer)).await {
            Ok(result) => result,
            Err(_) => {
                debug!("Transfer of {} exceeded {:?}", self.request.url, timeout);
                Err(Error::TransferTimeout(timeout))
            }
        }
    }

    async fn run<O>(&self, client: &ClientWithMiddleware, observer: &O) -> Result<TransferResult>
    where
        O: ProgressObserver + ?Sized,
    {
        let timeout = self.request.timeout;

        debug!(
            concurrent_downloads = self.request.concurrent_downloads,
            "{} {}", self.request.method, self.request.url
        );
        let res = client
            .request(self.request.method.into(), self.request.url.clone())
            .send()
            .await
            .map_err(|e| Error::from_transport(e, timeout))?;

        let status = res.status();
        if !status.is_success() {
            debug!("Server answered {}, body left unread", status);
            return Err(Error::HttpStatus { code: status });
        }

        let total_bytes = res.content_length();
        debug!("Streaming body, content length {:?}", total_bytes);

        let capacity = total_bytes.map_or(0, |len| len.min(MAX_PREALLOCATION) as usize);
        let mut body = Vec::with_capacity(capacity);
        let mut bytes_read: u64 = 0;

        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let frame = item.map_err(|e| {
                Error::from_transport(reqwest_middleware::Error::Reqwest(e), timeout)
            })?;

            for chunk in frame.chunks(CHUNK_SIZE) {
                bytes_read += chunk.len() as u64;
                body.extend_from_slice(chunk);
                trace!("Read {} bytes ({} total)", chunk.len(), bytes_read);
                observer.on_progress(&TransferProgress::streaming(bytes_read, total_bytes));
            }
        }

        debug!("Transfer complete, {} bytes", bytes_read);
        observer.on_progress(&TransferProgress::complete(bytes_read, total_bytes));

        Ok(body)
    }
}
