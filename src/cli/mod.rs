//! Command line glue around the transfer engine.
//!
//! - `args` - the [`Cli`] definition parsed with clap
//! - `output` - colored messages and writing the result to disk
//!
//! Every failure surfaces as an [`Error`](crate::Error); `main` turns it into
//! a message and an exit code with [`Error::exit_code`](crate::Error::exit_code).

pub mod args;
pub mod output;

pub use args::{Cli, Command, DownloadArgs};
pub use output::{error_message, usage_error_message};

use crate::progress::{ConsoleProgress, ProgressBarOpts};
use crate::transfer::{Transfer, TransferResult};
use crate::Result;

use std::io::Write;
use tracing::debug;

/// Run the parsed command, writing messages to `out`.
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Command::Download(args) => download(&args, out).await.map(|_| ()),
    }
}

/// Execute the `download` command.
///
/// The bytes are saved to `--output` when given, and their decoded text is
/// always written to `out`.
pub async fn download<W: Write>(args: &DownloadArgs, out: &mut W) -> Result<TransferResult> {
    let request = args.to_request()?;
    debug!(
        "Prepared {} request for {} with {} header(s)",
        request.method(),
        request.url(),
        request.headers().len()
    );

    let opts = match args.quiet {
        true => ProgressBarOpts::hidden(),
        false => ProgressBarOpts::default(),
    };
    let progress = ConsoleProgress::new(opts);

    output::announce(out, request.url().as_str())?;
    let body = Transfer::new(request).execute(&progress).await?;

    if let Some(path) = &args.output {
        output::save(path, &body).await?;
        output::saved(out, path)?;
    }
    output::content(out, &body)?;

    Ok(body)
}
