//! Serial console output.
//!
//! Writes status lines to the process's standard output, standing in
//! for the board's UART.  The "\n\r" terminator (newline before
//! carriage return) is the wire contract consumed downstream; it is not
//! a typo for "\r\n".

use std::io::{self, Write};

use log::warn;

/// Terminator appended to every status line.
const LINE_TERMINATOR: &str = "\n\r";

#[derive(Debug, Default)]
pub struct SerialConsole;

impl SerialConsole {
    pub fn new() -> Self {
        Self
    }

    /// Write one line plus the terminator.  Best effort: a failed write
    /// is logged and dropped, it never stalls the control loop.
    pub fn write_line(&mut self, line: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = write_terminated(&mut out, line) {
            warn!("serial write failed: {e}");
        }
    }
}

fn write_terminated(out: &mut impl Write, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.write_all(LINE_TERMINATOR.as_bytes())?;
    out.flush()
}
