//! Static help and version text, and the verbose option echo.

use std::io::{self, Write};

use macsniff_common::options::ScanOptions;

const HELP: &str = "\
Available flags:
  -h, --help           Show help message
  -N, --net <addr>     Target network or IP to scan (default: local)
  -v, --verbose        Enable verbose output
  -V, --version        Show version info
  -t, --timeout <sec>  Timeout in seconds (default: 5)
  -i, --interface <if> Network interface (default: \"default\")
  -o, --output <file>  Output file path
  -c, --csv            Save result as CSV
  -n, --noping         Skip ping check
  -d, --debug          Enable debug mode

Use -h or --help to see this message again.
";

pub fn help_text() -> &'static str {
    HELP
}

pub fn version_text() -> String {
    format!("macsniff v{}", env!("CARGO_PKG_VERSION"))
}

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    out.write_all(help_text().as_bytes())?;
    out.flush()
}

pub fn write_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", version_text())?;
    out.flush()
}

/// Lists the decoded options, `interface` being the one actually used.
pub fn write_options<W: Write>(out: &mut W, opts: &ScanOptions, interface: &str) -> io::Result<()> {
    let output = opts
        .output
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();

    writeln!(out, "Parsed options:")?;
    writeln!(out, "  ip:             {}", opts.target)?;
    writeln!(out, "  -v/--verbose:   {}", opts.verbose)?;
    writeln!(out, "  -t/--timeout:   {}", opts.timeout_secs)?;
    writeln!(out, "  -i/--interface: {interface}")?;
    writeln!(out, "  -o/--output:    {output:?}")?;
    writeln!(out, "  -c/--csv:       {}", opts.csv)?;
    writeln!(out, "  -n/--noping:    {}", opts.noping)?;
    writeln!(out, "  -d/--debug:     {}", opts.debug)?;
    writeln!(out)?;
    out.flush()
}
