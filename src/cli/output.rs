//! Colored console messages and persistence of the downloaded bytes.

use crate::Error;

use console::style;
use std::io::{self, Write};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Ends with a newline so the progress bar starts on its own line.
pub(crate) fn announce<W: Write>(out: &mut W, url: &str) -> io::Result<()> {
    writeln!(out, "Downloading from {}...", url)?;
    out.flush()
}

pub(crate) fn saved<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    let message = format!("Data downloaded successfully and saved to {}", path.display());
    writeln!(out, "\n{}", style(message).cyan())
}

pub(crate) fn content<W: Write>(out: &mut W, body: &[u8]) -> io::Result<()> {
    writeln!(out, "\nContent:\n{}", String::from_utf8_lossy(body))
}

/// Single line describing `error`, including its kind.
pub fn error_message(error: &Error) -> String {
    let message = format!("An error occurred ({}): {}", error.kind(), error);
    style(message).red().to_string()
}

/// Message printed when the command line cannot be parsed.
pub fn usage_error_message(details: &str) -> String {
    let message = format!(
        "Invalid command-line arguments. Please check the provided options.\n{}",
        details.trim_end()
    );
    style(message).red().to_string()
}

/// Write `body` to `path`, creating missing parent directories.
pub async fn save(path: &Path, body: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Creating destination directory {:?}", parent);
        fs::create_dir_all(parent).await?;
    }

    debug!("Writing {} bytes to {:?}", body.len(), path);
    fs::write(path, body).await
}
