//! One interactive run: parse → (help | version | resolve → capture).
//!
//! Every stage reports failure as a [`SniffError`]; nothing here terminates the
//! process, that is left to the binary.

use std::io::Write;

use pnet::datalink::{self, NetworkInterface};
use tracing::info;

use macsniff_common::config::CaptureSettings;
use macsniff_common::error::Result;
use macsniff_common::network::interface;
use macsniff_common::options::ScanOptions;

use crate::capture::{self, CaptureBackend, CaptureSummary};
use crate::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Help,
    Version,
    Captured(CaptureSummary),
}

pub struct Session<B, W> {
    backend: B,
    out: W,
    enumerate: fn() -> Vec<NetworkInterface>,
}

impl<B, W> Session<B, W>
where
    B: CaptureBackend,
    W: Write,
{
    pub fn new(backend: B, out: W) -> Self {
        Self {
            backend,
            out,
            enumerate: datalink::interfaces,
        }
    }

    /// Replaces host interface enumeration, e.g. with a fixed list.
    pub fn with_interfaces(mut self, enumerate: fn() -> Vec<NetworkInterface>) -> Self {
        self.enumerate = enumerate;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Decodes one prompt line and runs it. A malformed line touches nothing.
    pub async fn run_line(&mut self, line: &str) -> Result<SessionOutcome> {
        let opts = ScanOptions::parse_line(line)?;
        self.run(&opts).await
    }

    pub async fn run(&mut self, opts: &ScanOptions) -> Result<SessionOutcome> {
        if opts.help {
            report::write_help(&mut self.out)?;
            return Ok(SessionOutcome::Help);
        }
        if opts.version {
            report::write_version(&mut self.out)?;
            return Ok(SessionOutcome::Version);
        }

        let capture_on = if opts.wants_auto_interface() {
            let name = interface::resolve_default_interface(self.enumerate)?;
            info!("Auto-selected interface {name}");
            if opts.verbose {
                writeln!(self.out, "Auto-selected interface: {name}")?;
            }
            name
        } else {
            opts.interface.clone()
        };

        if opts.verbose {
            report::write_options(&mut self.out, opts, &capture_on)?;
        }

        let settings = CaptureSettings::from(opts);
        let summary: CaptureSummary =
            capture::capture(&mut self.backend, &capture_on, &settings, &mut self.out).await?;
        Ok(SessionOutcome::Captured(summary))
    }
}
