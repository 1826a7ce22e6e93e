//! Parsing of `Name:Value` header strings given on the command line.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

/// Parse a single `Name:Value` string.
///
/// The string is split on the first `:` only, so values may contain colons.
/// Both sides are trimmed and must be non-empty and valid for HTTP.
///
/// ```rust
/// use rget::request::parse_header;
///
/// let (name, value) = parse_header("X-Foo:bar").unwrap();
/// assert_eq!(name.as_str(), "x-foo");
/// assert_eq!(value, "bar");
///
/// assert!(parse_header("X-Foo").is_none());
/// ```
pub fn parse_header(raw: &str) -> Option<(HeaderName, HeaderValue)> {
    let (name, value) = raw.split_once(':')?;
    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() || value.is_empty() {
        return None;
    }

    let name = HeaderName::from_bytes(name.as_bytes()).ok()?;
    let value = HeaderValue::from_str(value).ok()?;
    Some((name, value))
}

/// Parse every header string, appending the valid ones to `headers` in order.
///
/// Malformed strings are dropped; each drop is logged at `warn` level.
pub fn append_header_strings<I, S>(headers: &mut HeaderMap, raw_headers: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for raw in raw_headers {
        let raw = raw.as_ref();
        match parse_header(raw) {
            Some((name, value)) => {
                headers.append(name, value);
            }
            None => warn!("Ignoring malformed header {:?}", raw),
        }
    }
}
