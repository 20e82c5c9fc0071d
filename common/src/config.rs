use std::time::Duration;

use crate::options::ScanOptions;

/// Maximum number of bytes kept from each captured frame.
pub const SNAPSHOT_LEN: usize = 65_535;

/// How long a single read blocks before the reader re-checks its consumer.
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Low-level parameters handed to a capture backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSettings {
    pub snapshot_len: usize,
    /// Receive frames that are not addressed to this host.
    pub promiscuous: bool,
    pub read_timeout: Duration,
    /// Total wall-clock duration of one capture run.
    pub exit_timeout: Duration,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            snapshot_len: SNAPSHOT_LEN,
            promiscuous: true,
            read_timeout: READ_TIMEOUT,
            exit_timeout: Duration::from_secs(crate::options::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl From<&ScanOptions> for CaptureSettings {
    fn from(opts: &ScanOptions) -> Self {
        Self {
            exit_timeout: opts.exit_timeout(),
            ..Default::default()
        }
    }
}
