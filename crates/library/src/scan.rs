//! Barcode scanning sessions.

use bookshelf_asyncutils::Latch;
use bookshelf_catalog::isbn;

use crate::error::{ErrorKind, Result};

/// Outcome of asking for camera access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPermission {
    Granted,
    Denied,
}

/// One scanning session.
///
/// The camera keeps reporting the same barcode many times a second. The
/// session accepts the first valid ISBN and ignores everything after it
/// until [`reset`](Self::reset).
#[derive(Debug, Default)]
pub struct ScanSession {
    accepted: Latch,
}

impl ScanSession {
    /// Starts a session, failing with [`ErrorKind::PermissionDenied`] if the
    /// camera is off limits.
    pub fn start(permission: CameraPermission) -> Result<Self> {
        exn::ensure!(permission == CameraPermission::Granted, ErrorKind::PermissionDenied);
        Ok(Self::default())
    }

    /// Feeds one raw detection. Returns the normalised ISBN the first time a
    /// valid one is seen.
    pub fn detect(&self, raw: &str) -> Option<String> {
        if !isbn::is_valid(raw) || !self.accepted.try_close() {
            return None;
        }
        let code = isbn::normalize(raw);
        tracing::info!(isbn = %code, "barcode accepted");
        Some(code)
    }

    pub fn is_finished(&self) -> bool {
        self.accepted.is_closed()
    }

    /// Scan again.
    pub fn reset(&self) {
        self.accepted.reset();
    }
}
