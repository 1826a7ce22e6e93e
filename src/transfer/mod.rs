//! Streaming transfer engine.
//!
//! - `transfer` - [`Transfer`], which executes one request and assembles the body
//! - `progress` - [`TransferProgress`] events and the [`ProgressObserver`] seam
//!
//! The engine never writes to a file or the console; presentation subscribes
//! through [`ProgressObserver`].
//!
//! # Examples
//!
//! ## Recording progress headlessly
//!
//! ```rust,no_run
//! use rget::request::TransferRequestBuilder;
//! use rget::transfer::{Transfer, TransferProgress};
//! use std::cell::RefCell;
//!
//! # async fn example() -> rget::Result<()> {
//! let events = RefCell::new(Vec::new());
//! let request = TransferRequestBuilder::new("http://example.test/data.txt").build()?;
//! let body = Transfer::new(request)
//!     .execute(&|p: &TransferProgress| events.borrow_mut().push(*p))
//!     .await?;
//! assert_eq!(events.borrow().last().map(|p| p.bytes_read), Some(body.len() as u64));
//! # Ok(())
//! # }
//! ```

pub mod progress;
pub mod transfer;

pub use progress::{ProgressObserver, TransferProgress, TransferState};
pub use transfer::{Transfer, TransferResult, CHUNK_SIZE};
