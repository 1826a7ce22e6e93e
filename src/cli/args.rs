//! Command line arguments.

use crate::request::{TransferRequest, TransferRequestBuilder};
use crate::Result;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Download a file over HTTP with a live progress bar.
#[derive(Parser, Debug)]
#[command(name = "rget", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download a file.
    #[command(disable_help_flag = true)]
    Download(DownloadArgs),
}

/// Options of the `download` command.
///
/// `-h` is taken by `--headers`, so help is only available as `--help`.
#[derive(Args, Debug, Clone)]
pub struct DownloadArgs {
    /// URL to download
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Custom headers (comma-separated)
    #[arg(short = 'h', long, value_delimiter = ',', value_name = "NAME:VALUE")]
    pub headers: Vec<String>,

    /// Number of concurrent downloads
    #[arg(short, long, default_value_t = 1)]
    pub concurrent: usize,

    /// Timeout in seconds for each request
    #[arg(short, long, default_value_t = 30)]
    pub timeout: u64,

    /// Use POST request instead of GET
    #[arg(short, long)]
    pub post: bool,

    /// Do not draw the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl DownloadArgs {
    /// Build the [`TransferRequest`] described by these arguments.
    pub fn to_request(&self) -> Result<TransferRequest> {
        TransferRequestBuilder::new(self.url.as_str())
            .post(self.post)
            .header_strings(&self.headers)
            .timeout_secs(self.timeout)
            .concurrent_downloads(self.concurrent)
            .build()
    }
}
