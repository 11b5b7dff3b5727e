/*!
 * Simulator Limits and Constants
 *
 * Centralized location for thresholds and defaults shared by the allocator,
 * the shell and the configuration layer.
 */

// =============================================================================
// ALLOCATOR
// =============================================================================

/// First handle handed out by a fresh address space (0 is reserved)
pub const FIRST_REGION_ID: u64 = 1;

/// Utilization at which the address space reports MEDIUM pressure
pub const PRESSURE_MEDIUM_THRESHOLD: f64 = 0.60;

/// Utilization at which the address space reports HIGH pressure
pub const PRESSURE_HIGH_THRESHOLD: f64 = 0.80;

/// Utilization at which the address space reports CRITICAL pressure
pub const PRESSURE_CRITICAL_THRESHOLD: f64 = 0.95;

// =============================================================================
// SHELL
// =============================================================================

/// Prompt printed before each command
pub const DEFAULT_PROMPT: &str = "> ";

/// Default log filter when RUST_LOG is unset
/// Kept at warn so log lines on stderr do not drown the interactive output
pub const DEFAULT_LOG_FILTER: &str = "warn";

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Initial address space size; when unset the user must run `init memory`
pub const ENV_MEMORY_SIZE: &str = "MEMSIM_MEMORY_SIZE";

/// Initial placement policy
pub const ENV_ALLOCATOR: &str = "MEMSIM_ALLOCATOR";

/// Prompt override
pub const ENV_PROMPT: &str = "MEMSIM_PROMPT";

/// Emit JSON log lines instead of the compact format
pub const ENV_TRACE_JSON: &str = "MEMSIM_TRACE_JSON";
