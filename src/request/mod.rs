//! Request module turning raw configuration into a validated [`TransferRequest`].
//!
//! - `request` - the immutable [`TransferRequest`] and the [`Method`] enum
//! - `builder` - [`TransferRequestBuilder`], the configuration layer
//! - `headers` - lenient parsing of `Name:Value` header strings

pub mod builder;
pub mod headers;
pub mod request;

pub use builder::TransferRequestBuilder;
pub use headers::parse_header;
pub use request::{Method, TransferRequest};
