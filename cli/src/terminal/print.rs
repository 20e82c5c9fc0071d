use std::io::{self, BufRead, Write};

use colored::*;

const EXAMPLE: &str = "-N 192.168.1.1 -v -t 5 -i eth0 -c";

/// Shows the usage hint and reads one line of flags.
///
/// End of input counts as an empty line.
pub fn prompt<W: Write, R: BufRead>(out: &mut W, input: &mut R) -> io::Result<String> {
    writeln!(out, "You can use {} to list flags.", "-h or --help".bold())?;
    writeln!(out, "Example: {}", EXAMPLE.italic())?;
    write!(out, "{} ", ":".bright_black())?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
