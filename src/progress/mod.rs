//! Progress module containing the console presentation of a transfer.
//!
//! - `style` - progress bar styling options and templates
//! - `display` - the [`ConsoleProgress`] observer drawing the bar
//!
//! # Examples
//!
//! ```rust
//! use rget::progress::{ConsoleProgress, ProgressBarOpts};
//!
//! let console = ConsoleProgress::new(ProgressBarOpts::default());
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ConsoleProgress;
pub use style::ProgressBarOpts;
