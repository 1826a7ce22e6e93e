use clap::Parser;
use rget::cli::{self, Cli};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code for arguments clap could not parse.
const USAGE_EXIT_CODE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so the downloaded content on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", cli::usage_error_message(&e.to_string()));
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    let mut stdout = io::stdout();
    match cli::run(cli, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", cli::error_message(&e));
            ExitCode::from(e.exit_code())
        }
    }
}
