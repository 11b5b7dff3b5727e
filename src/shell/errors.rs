/*!
 * Shell Error Types
 */

use crate::memory::MemoryError;
use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced to the user by the command shell
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[non_exhaustive]
pub enum ShellError {
    /// A memory command was issued before `init memory`
    #[error("Memory not initialized. Use 'init memory <size>' first")]
    #[diagnostic(code(shell::not_initialized))]
    NotInitialized,

    /// Missing or malformed arguments; carries the expected usage
    #[error("Usage: {0}")]
    #[diagnostic(code(shell::usage), help("Type 'help' for the full command list."))]
    Usage(&'static str),

    /// An argument that should be a non-negative integer was not
    #[error("Invalid number: '{0}'")]
    #[diagnostic(code(shell::invalid_number), help("Sizes and ids are non-negative integers."))]
    InvalidNumber(String),

    #[error("Unknown command: '{0}'. Type 'help' for available commands")]
    #[diagnostic(code(shell::unknown_command))]
    UnknownCommand(String),

    /// Recognized command for a subsystem this simulator does not model
    #[error("{0} is not supported by this simulator")]
    #[diagnostic(code(shell::unsupported))]
    Unsupported(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Memory(#[from] MemoryError),

    #[error("Serialization failed: {0}")]
    #[diagnostic(code(shell::serialization))]
    Serialization(String),
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        ShellError::Serialization(err.to_string())
    }
}

pub type ShellResult<T> = Result<T, ShellError>;
