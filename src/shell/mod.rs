/*!
 * Command Shell
 *
 * Line-oriented front end for the address space: tokenizes input, routes
 * commands to an explicit `Session`, and renders results as text or JSON.
 */

mod command;
mod errors;
mod render;
mod repl;
mod session;

pub use command::{Command, OutputFormat};
pub use errors::{ShellError, ShellResult};
pub use render::{render_layout, render_stats, HELP_TEXT};
pub use repl::{run, BANNER};
pub use session::{Outcome, Session};
