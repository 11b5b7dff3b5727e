/*!
 * Read-Eval-Print Loop
 * Drives a session from a line-oriented reader
 */

use super::session::{Outcome, Session};
use miette::Diagnostic;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Banner printed once before the first prompt
pub const BANNER: &str = "Memory Management Simulator\nType 'help' for available commands";

/// Run `session` over `input` until `exit` or end of input
///
/// Command errors are printed and the loop continues; only I/O errors on the
/// reader or writer end the loop early. Bytes that are not valid UTF-8 are
/// replaced, so a garbled line fails as a command instead of ending the session.
pub fn run<R, W>(session: &mut Session, mut input: R, output: &mut W, prompt: &str) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", BANNER)?;
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        match session.execute_line(&line) {
            Ok(Outcome::Exit) => {
                writeln!(output, "End")?;
                info!("Session ended by user");
                return Ok(());
            }
            Ok(Outcome::Continue(text)) => {
                if !text.is_empty() {
                    writeln!(output, "{}", text)?;
                }
            }
            Err(err) => {
                debug!(error = %err, code = ?err.code().map(|c| c.to_string()), "command failed");
                writeln!(output, "{}", err)?;
                if let Some(help) = err.help() {
                    writeln!(output, "help: {}", help)?;
                }
            }
        }
        write!(output, "{}", prompt)?;
        output.flush()?;
    }

    writeln!(output)?;
    info!("Input closed, session ended");
    Ok(())
}
