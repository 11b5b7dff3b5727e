/*!
 * Core Types
 * Common types used across the simulator
 */

/// Address type for simulated memory offsets
pub type Address = usize;

/// Size type for simulated memory extents, in address units
pub type Size = usize;

/// Handle identifying an allocated region.
///
/// Handles start at 1 and are never reused for the lifetime of an address space.
pub type RegionId = u64;
