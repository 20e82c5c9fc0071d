//! Flag grammar for the interactive prompt.
//!
//! A prompt line is split on whitespace (no quoting, no shell expansion) and
//! decoded against [`ScanOptions`]. Older revisions of the tool spelled some
//! long flags with a single dash (`-help`, `-csv`, ...); those spellings are
//! rewritten to their `--` form before decoding.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use tracing::debug;

use crate::error::{Result, SniffError};

pub const DEFAULT_TARGET: &str = "local";
pub const DEFAULT_INTERFACE: &str = "default";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

const SINGLE_DASH_LONG: &[&str] = &["help", "csv", "noping", "debug", "net"];

/// Options for one sniffing run, decoded once from the prompt line.
///
/// Boolean flags take an optional `=true`/`=false`. Bare words are kept in
/// `extra` and otherwise ignored.
///
/// `output`, `csv`, `noping`, `debug` and `target` are accepted for
/// compatibility and echoed in verbose mode, nothing else reads them.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "macsniff",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct ScanOptions {
    /// Target network or IP to scan
    #[arg(short = 'N', long = "net", value_name = "ADDR", default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Enable verbose output
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub verbose: bool,

    /// Timeout in seconds
    #[arg(
        short = 't',
        long = "timeout",
        value_name = "SEC",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Network interface to capture from
    #[arg(short, long, value_name = "IF", default_value = DEFAULT_INTERFACE)]
    pub interface: String,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Save result as CSV
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub csv: bool,

    /// Skip ping check
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub noping: bool,

    /// Enable debug mode
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub debug: bool,

    /// Show help message
    #[arg(
        short = 'h',
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub help: bool,

    /// Show version info
    #[arg(
        short = 'V',
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub version: bool,

    /// Bare words between flags; accepted and ignored
    #[arg(hide = true, value_name = "ARG")]
    pub extra: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            verbose: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            interface: DEFAULT_INTERFACE.to_string(),
            output: None,
            csv: false,
            noping: false,
            debug: false,
            help: false,
            version: false,
            extra: Vec::new(),
        }
    }
}

impl ScanOptions {
    /// Decodes one line of prompt input.
    pub fn parse_line(line: &str) -> Result<Self> {
        Self::parse_tokens(tokenize(line))
    }

    pub fn parse_tokens<I, T>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let opts = Self::try_parse_from(tokens)
            .map_err(|e| SniffError::MalformedArguments(first_line(&e)))?;
        if !opts.extra.is_empty() {
            debug!("Ignoring positional arguments {:?}", opts.extra);
        }
        Ok(opts)
    }

    pub fn exit_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `true` when the interface must be picked by the resolver.
    pub fn wants_auto_interface(&self) -> bool {
        self.interface == DEFAULT_INTERFACE
    }
}

/// Splits a prompt line into flag tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(normalize_token).collect()
}

fn normalize_token(token: &str) -> String {
    match token.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => {
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_LONG.contains(&name) {
                format!("-{token}")
            } else {
                token.to_string()
            }
        }
        _ => token.to_string(),
    }
}

fn first_line(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).trim().to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
