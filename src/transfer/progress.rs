//! Progress events emitted while a transfer streams its body.

/// Phase of a transfer as seen by progress observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    /// Body chunks are still arriving.
    Streaming,
    /// End of stream was reached; this is the last event of a transfer.
    Complete,
}

/// Snapshot of a transfer after one chunk, or at completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress {
    /// Cumulative number of body bytes read so far.
    pub bytes_read: u64,
    /// Content length announced by the server, if any.
    pub total_bytes: Option<u64>,
    /// Phase of the transfer.
    pub state: TransferState,
}

impl TransferProgress {
    pub(crate) fn streaming(bytes_read: u64, total_bytes: Option<u64>) -> Self {
        Self {
            bytes_read,
            total_bytes,
            state: TransferState::Streaming,
        }
    }

    pub(crate) fn complete(bytes_read: u64, total_bytes: Option<u64>) -> Self {
        Self {
            bytes_read,
            total_bytes,
            state: TransferState::Complete,
        }
    }

    /// Whether this is the terminal event.
    pub fn is_complete(&self) -> bool {
        self.state == TransferState::Complete
    }

    /// Completion percentage, `floor(bytes_read * 100 / total_bytes)`.
    ///
    /// Returns `None` while streaming a body of unknown length. The terminal
    /// event always reports 100.
    ///
    /// ```rust
    /// use rget::transfer::{TransferProgress, TransferState};
    ///
    /// let p = TransferProgress { bytes_read: 1, total_bytes: Some(3), state: TransferState::Streaming };
    /// assert_eq!(p.percentage(), Some(33));
    ///
    /// let p = TransferProgress { bytes_read: 1, total_bytes: None, state: TransferState::Streaming };
    /// assert_eq!(p.percentage(), None);
    /// ```
    pub fn percentage(&self) -> Option<u64> {
        if self.is_complete() {
            return Some(100);
        }

        match self.total_bytes {
            None => None,
            Some(0) => Some(100),
            Some(total) => {
                let percent = u128::from(self.bytes_read) * 100 / u128::from(total);
                Some(percent.min(100) as u64)
            }
        }
    }
}

/// Subscriber to the progress events of a transfer.
///
/// Any `Fn(&TransferProgress)` closure is an observer, which lets tests record
/// events without a terminal.
pub trait ProgressObserver {
    /// Called after every chunk, then once more when the transfer completes.
    fn on_progress(&self, progress: &TransferProgress);
}

impl<F> ProgressObserver for F
where
    F: Fn(&TransferProgress),
{
    fn on_progress(&self, progress: &TransferProgress) {
        self(progress)
    }
}
