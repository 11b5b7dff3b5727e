/*!
 * Shell Session
 * Explicit simulator context passed to command execution
 */

use super::command::{Command, OutputFormat};
use super::errors::{ShellError, ShellResult};
use super::render::{render_layout, render_stats, HELP_TEXT};
use crate::core::config::SimulatorConfig;
use crate::memory::{AddressSpace, MemoryError, MemoryInfo, PlacementPolicy};
use crate::monitoring::CommandSpan;
use tracing::{info, warn};

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading; the string is the text to show (possibly empty)
    Continue(String),
    /// The user asked to leave
    Exit,
}

/// Simulator session: at most one address space plus the active policy
#[derive(Debug, Clone, Default)]
pub struct Session {
    memory: Option<AddressSpace>,
    policy: PlacementPolicy,
    lines: u64,
}

impl Session {
    pub fn new(policy: PlacementPolicy) -> Self {
        Self {
            memory: None,
            policy,
            lines: 0,
        }
    }

    /// Create a session from startup configuration
    pub fn from_config(config: &SimulatorConfig) -> ShellResult<Self> {
        let mut session = Self::new(config.policy);
        if let Some(size) = config.initial_memory {
            session.memory = Some(AddressSpace::new(size)?);
        }
        Ok(session)
    }

    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    pub fn memory(&self) -> Option<&AddressSpace> {
        self.memory.as_ref()
    }

    /// Parse and execute one input line
    pub fn execute_line(&mut self, line: &str) -> ShellResult<Outcome> {
        self.lines += 1;
        match Command::parse(line)? {
            Some(command) => {
                let span = CommandSpan::new(command.name(), self.lines);
                let result = span.in_scope(|| self.execute(command));
                span.finish(result.is_ok());
                result
            }
            None => Ok(Outcome::Continue(String::new())),
        }
    }

    /// Execute a parsed command against this session
    pub fn execute(&mut self, command: Command) -> ShellResult<Outcome> {
        let output = match command {
            Command::Exit => return Ok(Outcome::Exit),
            Command::Help => HELP_TEXT.to_string(),

            Command::InitMemory { size } => {
                if self.memory.is_some() {
                    warn!("Replacing existing address space with a fresh one of {} units", size);
                }
                self.memory = Some(AddressSpace::new(size)?);
                format!("memory of size {} created", size)
            }

            Command::SetAllocator { policy } => {
                info!(from = %self.policy, to = %policy, "placement policy changed");
                self.policy = policy;
                format!("Allocator set to {}", policy)
            }

            Command::Malloc { size } => {
                let policy = self.policy;
                match self.memory_mut()?.allocate(size, policy) {
                    Ok(id) => format!("Memory allocated with ID: {} using {}", id, policy),
                    Err(MemoryError::OutOfMemory { .. }) => "memory not available".to_string(),
                    Err(err) => return Err(err.into()),
                }
            }

            Command::Free { id } => match self.memory_mut()?.release(id) {
                Ok(()) => format!("Memory with ID {} freed successfully", id),
                Err(MemoryError::UnknownId(_)) => format!("No memory block with Id: {} found", id),
                Err(err) => return Err(err.into()),
            },

            Command::Dump { format } => {
                let memory = self.memory_ref()?;
                match format {
                    OutputFormat::Text => render_layout(memory.dump()),
                    OutputFormat::Json => serde_json::to_string_pretty(&memory.layout())?,
                }
            }

            Command::Stats { format } => {
                let stats = self.memory_ref()?.stats();
                match format {
                    OutputFormat::Text => render_stats(&stats),
                    OutputFormat::Json => serde_json::to_string_pretty(&stats)?,
                }
            }
        };

        Ok(Outcome::Continue(output))
    }

    fn memory_ref(&self) -> ShellResult<&AddressSpace> {
        self.memory.as_ref().ok_or(ShellError::NotInitialized)
    }

    fn memory_mut(&mut self) -> ShellResult<&mut AddressSpace> {
        self.memory.as_mut().ok_or(ShellError::NotInitialized)
    }
}
