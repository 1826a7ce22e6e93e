#![allow(dead_code)]

use clap::Parser;
use rand::Rng;
use rget::cli::{Cli, Command, DownloadArgs};
use rget::{ProgressObserver, TransferProgress, TransferRequest, TransferRequestBuilder, TransferState};
use std::cell::RefCell;
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Common test constants
pub const TEST_PATH: &str = "/data.txt";
pub const TEST_BODY: &[u8] = b"0123456789";
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/data.txt";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Creates random content of specified size
pub fn create_random_content(size: usize) -> Vec<u8> {
    let mut content = vec![0u8; size];
    rand::rng().fill(&mut content[..]);
    content
}

// === Mock Server Helpers ===

/// Starts a mock server answering `GET path` with `body`
pub async fn serve_body(route: &str, body: Vec<u8>) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(&server)
        .await;
    server
}

/// Starts a mock server answering `GET path` with `status` after `delay`
pub async fn serve_status(route: &str, status: u16, delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_bytes(TEST_BODY)
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    server
}

/// Starts a one-shot raw HTTP server.
///
/// After reading the request head it writes `response` verbatim, keeps the
/// connection open for `stall`, then closes it. Returns the URL to request.
pub async fn serve_raw(response: &'static [u8], stall: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind raw server");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => head.extend_from_slice(&buf[..n]),
            }
        }

        if socket.write_all(response).await.is_ok() {
            let _ = socket.flush().await;
            tokio::time::sleep(stall).await;
        }
    });

    format!("http://{}{}", addr, TEST_PATH)
}

/// Full URL of `route` on the mock server
pub fn test_url(server: &MockServer, route: &str) -> String {
    format!("{}{}", server.uri(), route)
}

/// Builds a GET request with default options
pub fn build_request(url: &str) -> TransferRequest {
    TransferRequestBuilder::new(url)
        .build()
        .expect("Failed to build request")
}

// === Progress Helpers ===

/// Progress observer keeping every event it receives
#[derive(Default)]
pub struct ProgressRecorder {
    events: RefCell<Vec<TransferProgress>>,
}

impl ProgressRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TransferProgress> {
        self.events.borrow().clone()
    }

    pub fn last(&self) -> Option<TransferProgress> {
        self.events.borrow().last().copied()
    }
}

impl ProgressObserver for ProgressRecorder {
    fn on_progress(&self, progress: &TransferProgress) {
        self.events.borrow_mut().push(*progress);
    }
}

/// Asserts that bytes_read never decreases across events
pub fn assert_non_decreasing(events: &[TransferProgress]) {
    for pair in events.windows(2) {
        assert!(
            pair[0].bytes_read <= pair[1].bytes_read,
            "bytes_read went backwards: {:?}",
            pair
        );
    }
}

/// Asserts that only the last event is the terminal one
pub fn assert_single_terminal_event(events: &[TransferProgress]) {
    let terminal = events
        .iter()
        .filter(|p| p.state == TransferState::Complete)
        .count();
    assert_eq!(terminal, 1, "expected exactly one terminal event");
    assert!(events.last().is_some_and(|p| p.is_complete()));
}

// === CLI Helpers ===

/// Parses `rget download <args...>` into [`DownloadArgs`]
pub fn parse_download_args(args: &[&str]) -> DownloadArgs {
    let argv = ["rget", "download"].into_iter().chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).expect("Failed to parse arguments");
    let Command::Download(args) = cli.command;
    args
}
