mod terminal;

use std::io::{self, ErrorKind};
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, warn};

use macsniff_common::error::SniffError;
use macsniff_core::network::channel::PnetBackend;
use macsniff_core::session::Session;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    logging::init_logging();

    let line: String = print::prompt(&mut io::stdout(), &mut io::stdin().lock())
        .context("failed to read options from stdin")?;

    let mut session = Session::new(PnetBackend, io::stdout());
    match session.run_line(&line).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => Ok(report_failure(&err)),
    }
}

fn report_failure(err: &SniffError) -> ExitCode {
    match err {
        SniffError::MalformedArguments(msg) => {
            error!("Error parsing flags: {msg}");
            ExitCode::from(2)
        }
        SniffError::NoInterfaceFound => {
            error!("Interface detection failed: {err}");
            ExitCode::FAILURE
        }
        SniffError::CaptureOpenFailed { source, .. } => {
            error!("{err}");
            if source.kind() == ErrorKind::PermissionDenied {
                warn!("Live capture needs root or the CAP_NET_RAW capability");
            }
            ExitCode::FAILURE
        }
        SniffError::Output(_) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
