//! The capture loop.
//!
//! Waits on two sources at once: the stream of captured frames and a one-shot
//! exit timer. Whichever is ready first wins; when both are ready at the same
//! instant either may be chosen.

use std::io::Write;
use std::time::Duration;

use tracing::debug;

use macsniff_common::config::CaptureSettings;
use macsniff_common::error::Result;

use crate::frame;
use crate::network::channel::FrameStream;

/// Something that can open a live capture on a named interface.
pub trait CaptureBackend {
    fn open(&mut self, interface: &str, settings: &CaptureSettings) -> Result<FrameStream>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureEnd {
    /// The frame stream closed before the timer fired.
    StreamClosed,
    /// The exit timer fired.
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSummary {
    pub end: CaptureEnd,
    pub frames_received: usize,
    pub lines_printed: usize,
}

/// Opens `interface` through `backend` and runs [`capture_loop`] on it.
pub async fn capture<B, W>(
    backend: &mut B,
    interface: &str,
    settings: &CaptureSettings,
    out: &mut W,
) -> Result<CaptureSummary>
where
    B: CaptureBackend + ?Sized,
    W: Write,
{
    let frames = backend.open(interface, settings)?;
    capture_loop(frames, interface, settings.exit_timeout, out).await
}

/// Prints one line per Ethernet frame until the stream ends or `exit_timeout` passes.
pub async fn capture_loop<W: Write>(
    mut frames: FrameStream,
    interface: &str,
    exit_timeout: Duration,
    out: &mut W,
) -> Result<CaptureSummary> {
    let deadline = tokio::time::sleep(exit_timeout);
    tokio::pin!(deadline);

    writeln!(out, "Capturing on {interface:?} (will stop after {exit_timeout:?})...\n")?;
    out.flush()?;

    let mut frames_received: usize = 0;
    let mut lines_printed: usize = 0;

    let end = loop {
        tokio::select! {
            frame = frames.next_frame() => {
                let Some(bytes) = frame else {
                    debug!("Frame stream closed after {frames_received} frame(s)");
                    break CaptureEnd::StreamClosed;
                };
                frames_received += 1;
                if let Some(summary) = frame::summarize(&bytes) {
                    writeln!(out, "{summary}")?;
                    out.flush()?;
                    lines_printed += 1;
                }
            }

            _ = &mut deadline => {
                writeln!(out, "\nExit timeout reached ({exit_timeout:?}). Stopping capture.")?;
                out.flush()?;
                break CaptureEnd::TimedOut;
            }
        }
    };

    Ok(CaptureSummary {
        end,
        frames_received,
        lines_printed,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
