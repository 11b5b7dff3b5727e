/*!
 * Shell Commands
 * Tokenizing and parsing of input lines
 */

use super::errors::{ShellError, ShellResult};
use crate::core::types::{RegionId, Size};
use crate::memory::PlacementPolicy;
use std::str::FromStr;

/// Output format for `dump` and `stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    InitMemory { size: Size },
    SetAllocator { policy: PlacementPolicy },
    Malloc { size: Size },
    Free { id: RegionId },
    Dump { format: OutputFormat },
    Stats { format: OutputFormat },
    Help,
    Exit,
}

impl Command {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> ShellResult<Option<Command>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let command = match tokens.as_slice() {
            [] => return Ok(None),
            ["exit"] | ["quit"] => Command::Exit,
            ["help"] => Command::Help,

            ["init", "memory", size] => Command::InitMemory {
                size: parse_number(size)?,
            },
            ["init", "memory", ..] => return Err(ShellError::Usage("init memory <size>")),
            ["init", "cache", ..] | ["cache", "stats"] | ["read", ..] => {
                return Err(ShellError::Unsupported("Cache simulation".to_string()))
            }
            ["init", "virtual", ..] | ["translate", ..] => {
                return Err(ShellError::Unsupported("Virtual memory".to_string()))
            }
            ["init", ..] => return Err(ShellError::Usage("init memory <size>")),

            ["set", "allocator", policy] => Command::SetAllocator {
                policy: policy.parse()?,
            },
            ["set", ..] => return Err(ShellError::Usage("set allocator <first|best|worst>")),

            ["malloc", size] => Command::Malloc {
                size: parse_number(size)?,
            },
            ["malloc", ..] => return Err(ShellError::Usage("malloc <size>")),

            ["free", id] => Command::Free {
                id: parse_number(id)?,
            },
            ["free", ..] => return Err(ShellError::Usage("free <id>")),

            ["dump"] => Command::Dump {
                format: OutputFormat::Text,
            },
            ["dump", "json"] => Command::Dump {
                format: OutputFormat::Json,
            },
            ["dump", ..] => return Err(ShellError::Usage("dump [json]")),

            ["stats"] => Command::Stats {
                format: OutputFormat::Text,
            },
            ["stats", "json"] => Command::Stats {
                format: OutputFormat::Json,
            },
            ["stats", ..] => return Err(ShellError::Usage("stats [json]")),

            [verb, ..] => return Err(ShellError::UnknownCommand(verb.to_string())),
        };

        Ok(Some(command))
    }

    /// Short name used for tracing
    pub fn name(&self) -> &'static str {
        match self {
            Command::InitMemory { .. } => "init_memory",
            Command::SetAllocator { .. } => "set_allocator",
            Command::Malloc { .. } => "malloc",
            Command::Free { .. } => "free",
            Command::Dump { .. } => "dump",
            Command::Stats { .. } => "stats",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}

fn parse_number<T: FromStr>(token: &str) -> ShellResult<T> {
    token
        .parse()
        .map_err(|_| ShellError::InvalidNumber(token.to_string()))
}
