//! Upload progress reporting.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// Percentage of an upload transferred, published to a watch channel.
///
/// The published value is `sent * 100 / total`, clamped to 100, and never
/// decreases while this sink is in use.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use scriptoria_interface::UploadProgress;
/// use tokio::sync::watch;
///
/// let (tx, rx) = watch::channel(0u8);
/// let progress = UploadProgress::new(Arc::new(tx), 200);
/// progress.advance(50);
/// assert_eq!(*rx.borrow(), 25);
/// progress.advance(500);
/// assert_eq!(*rx.borrow(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct UploadProgress {
    tx: Arc<watch::Sender<u8>>,
    total: u64,
    sent: Arc<AtomicU64>,
}

impl UploadProgress {
    /// Track an upload of `total` bytes.
    pub fn new(tx: Arc<watch::Sender<u8>>, total: u64) -> Self {
        Self {
            tx,
            total,
            sent: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record `bytes` more transferred.
    pub fn advance(&self, bytes: u64) {
        let sent = self.sent.fetch_add(bytes, Ordering::Relaxed) + bytes;
        let percent = if self.total == 0 {
            100
        } else {
            (sent.saturating_mul(100) / self.total).min(100) as u8
        };
        self.tx.send_if_modified(|current| {
            if percent > *current {
                *current = percent;
                true
            } else {
                false
            }
        });
    }

    /// Mark the transfer complete.
    pub fn finish(&self) {
        self.tx.send_if_modified(|current| {
            let changed = *current != 100;
            *current = 100;
            changed
        });
    }

    /// Currently published percentage.
    pub fn percent(&self) -> u8 {
        *self.tx.borrow()
    }

    /// Total bytes expected.
    pub fn total(&self) -> u64 {
        self.total
    }
}
