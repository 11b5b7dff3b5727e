/*!
 * memsim Library
 * Physical memory allocator simulator exposed as a library
 */

pub mod core;
pub mod memory;
pub mod monitoring;
pub mod shell;

// Re-exports
pub use crate::core::{ConfigError, SimulatorConfig};
pub use memory::{
    AddressSpace, Allocator, MemoryError, MemoryInfo, MemoryResult, MemoryStats, PlacementPolicy,
    Region, RegionState, RegionView,
};
pub use monitoring::init_tracing;
pub use shell::{Command, Outcome, Session, ShellError};
