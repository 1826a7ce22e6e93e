//! Terminal rendering of transfer progress.
//!
//! [`ConsoleProgress`] is a [`ProgressObserver`]: it only reacts to the
//! events a transfer emits and never touches the transfer itself.
//!
//! ```rust
//! use rget::progress::ConsoleProgress;
//! use rget::transfer::{ProgressObserver, TransferProgress, TransferState};
//!
//! let console = ConsoleProgress::hidden();
//! console.on_progress(&TransferProgress {
//!     bytes_read: 10,
//!     total_bytes: Some(10),
//!     state: TransferState::Complete,
//! });
//! assert!(console.bar().is_finished());
//! ```

use crate::progress::ProgressBarOpts;
use crate::transfer::{ProgressObserver, TransferProgress};

use indicatif::{ProgressBar, ProgressDrawTarget};
use std::cell::Cell;

/// Progress bar drawn on standard output for a single transfer.
pub struct ConsoleProgress {
    bar: ProgressBar,
    opts: ProgressBarOpts,
    /// Set once the style matching the first event has been applied.
    styled: Cell<bool>,
}

impl ConsoleProgress {
    /// Create a renderer drawing on stdout, unless `opts` disables it.
    pub fn new(opts: ProgressBarOpts) -> Self {
        let bar = match opts.is_enabled() {
            true => ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout()),
            false => ProgressBar::hidden(),
        };

        Self {
            bar,
            opts,
            styled: Cell::new(false),
        }
    }

    /// Create a renderer which draws nothing.
    pub fn hidden() -> Self {
        Self::new(ProgressBarOpts::hidden())
    }

    /// The underlying progress bar.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }

    fn apply_style(&self, total_bytes: Option<u64>) {
        if self.styled.replace(true) {
            return;
        }

        match total_bytes {
            Some(total) => {
                self.bar.set_length(total);
                self.bar.set_style(self.opts.to_progress_style());
            }
            None => self.bar.set_style(self.opts.to_spinner_style()),
        }
    }
}

impl ProgressObserver for ConsoleProgress {
    fn on_progress(&self, progress: &TransferProgress) {
        self.apply_style(progress.total_bytes);
        self.bar.set_position(progress.bytes_read);

        if progress.is_complete() {
            if progress.total_bytes.is_none() {
                self.bar.set_length(progress.bytes_read);
            }
            if self.opts.clears() {
                self.bar.finish_and_clear();
            } else {
                self.bar.finish();
            }
        }
    }
}
