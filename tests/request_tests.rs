//! Tests for building transfer requests from raw configuration.

use rget::request::parse_header;
use rget::{Error, Method, TransferRequestBuilder};
use std::time::Duration;

mod common;
use common::helpers::*;

#[test]
fn test_malformed_header_is_dropped() {
    let request = TransferRequestBuilder::new("http://example.test/data.txt")
        .header_strings(["X-Foo"])
        .build()
        .unwrap();

    assert!(request.headers().is_empty());
}

#[test]
fn test_well_formed_header_is_kept() {
    let request = TransferRequestBuilder::new("http://example.test/data.txt")
        .header_strings(["X-Foo:bar"])
        .build()
        .unwrap();

    assert_eq!(request.headers().len(), 1);
    assert_eq!(request.headers().get("X-Foo").unwrap(), "bar");
}

#[test]
fn test_parse_header_splits_on_first_colon() {
    let (name, value) = parse_header("Authorization:Basic a:b").unwrap();
    assert_eq!(name.as_str(), "authorization");
    assert_eq!(value, "Basic a:b");
}

#[test]
fn test_building_twice_yields_equal_requests() {
    let builder = TransferRequestBuilder::new("https://example.test/data.txt")
        .post(true)
        .header_strings(["X-A:1", "X-B:2"])
        .timeout_secs(12)
        .concurrent_downloads(3);

    let first = builder.clone().build().unwrap();
    let second = builder.build().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_options_are_carried() {
    let request = TransferRequestBuilder::new("https://example.test/data.txt")
        .post(true)
        .timeout(Duration::from_millis(1500))
        .concurrent_downloads(8)
        .build()
        .unwrap();

    assert_eq!(request.url().as_str(), "https://example.test/data.txt");
    assert_eq!(request.method(), Method::Post);
    assert_eq!(request.timeout(), Duration::from_millis(1500));
    assert_eq!(request.concurrent_downloads(), 8);
}

#[test]
fn test_empty_url_is_invalid() {
    for url in ["", "   "] {
        let err = TransferRequestBuilder::new(url).build().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }
}

#[test]
fn test_unparsable_url_is_invalid() {
    let err = TransferRequestBuilder::new("not a url").build().unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_zero_timeout_is_invalid() {
    let err = TransferRequestBuilder::new("http://example.test/")
        .timeout(Duration::ZERO)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn test_request_from_cli_arguments() {
    let args = parse_download_args(&[
        "http://example.test/data.txt",
        "-h",
        "X-A:1,broken,X-B:2",
        "-t",
        "7",
        "-c",
        "2",
        "-p",
    ]);

    let request = args.to_request().unwrap();
    assert_eq!(request.method(), Method::Post);
    assert_eq!(request.headers().len(), 2);
    assert_eq!(request.timeout(), Duration::from_secs(7));
    assert_eq!(request.concurrent_downloads(), 2);
}
