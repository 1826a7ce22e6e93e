//! Progress bar styling and configuration options.
//!
//! # Examples
//!
//! ```rust
//! use rget::progress::ProgressBarOpts;
//!
//! // The default look: `Progress: 42% [#####################          ] ...`
//! let opts = ProgressBarOpts::default();
//! assert!(!opts.clears());
//!
//! // Nothing drawn at all.
//! let hidden = ProgressBarOpts::hidden();
//! assert!(!hidden.is_enabled());
//! ```

use indicatif::ProgressStyle;
use tracing::warn;

/// Define the options for the transfer progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Template used when the total size is known.
    template: Option<String>,
    /// Template used when the server did not announce a content length.
    spinner_template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_PERCENT.into()),
            spinner_template: Some(ProgressBarOpts::TEMPLATE_SPINNER.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_HASH.into()),
            enabled: true,
            clear: false,
        }
    }
}

impl ProgressBarOpts {
    /// Percentage followed by a 50 column bar.
    ///
    /// `Progress: 40% [####################                              ] 4.00 KiB/10.00 KiB`
    pub const TEMPLATE_PERCENT: &'static str =
        "Progress: {percent:>3}% [{bar:50.green/black}] {bytes}/{total_bytes}";
    /// Spinner with a byte counter, for bodies of unknown length.
    pub const TEMPLATE_SPINNER: &'static str =
        "Progress: {spinner:.green} {bytes} ({bytes_per_sec})";
    /// Use hashes and blanks as progress characters: `"#  "`.
    pub const CHARS_HASH: &'static str = "#  ";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            spinner_template: Some(ProgressBarOpts::TEMPLATE_SPINNER.into()),
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Whether anything will be drawn.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the bar is removed from the screen once complete.
    pub fn clears(&self) -> bool {
        self.clear
    }

    /// Create the [`ProgressStyle`] for a body of known length.
    ///
    /// An invalid template falls back to indicatif's default bar.
    pub fn to_progress_style(&self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = &self.template {
            style = match style.clone().template(template) {
                Ok(s) => s,
                Err(e) => {
                    warn!("Invalid progress template {:?}: {}", template, e);
                    style
                }
            };
        }
        if let Some(progress_chars) = &self.progress_chars {
            style = style.progress_chars(progress_chars);
        }
        style
    }

    /// Create the [`ProgressStyle`] for a body of unknown length.
    pub fn to_spinner_style(&self) -> ProgressStyle {
        let style = ProgressStyle::default_spinner();
        match &self.spinner_template {
            Some(template) => match style.clone().template(template) {
                Ok(s) => s,
                Err(e) => {
                    warn!("Invalid spinner template {:?}: {}", template, e);
                    style
                }
            },
            None => style,
        }
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bar.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }
}
