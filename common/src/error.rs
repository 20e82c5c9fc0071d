use std::io;

use thiserror::Error;

/// Everything that can stop a sniffing session before or during capture.
#[derive(Debug, Error)]
pub enum SniffError {
    /// The prompt line did not match the flag grammar.
    #[error("malformed arguments: {0}")]
    MalformedArguments(String),

    /// No interface is up, non-loopback and carrying an IPv4 address.
    #[error("no suitable network interface found")]
    NoInterfaceFound,

    #[error("failed to open capture on {interface}: {source}")]
    CaptureOpenFailed {
        interface: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write capture output: {0}")]
    Output(#[from] io::Error),
}

impl SniffError {
    pub fn capture_open(interface: impl Into<String>, source: io::Error) -> Self {
        SniffError::CaptureOpenFailed {
            interface: interface.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SniffError>;
