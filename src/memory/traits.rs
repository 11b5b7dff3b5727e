/*!
 * Memory Traits
 * Allocator abstractions consumed by the shell
 */

use super::types::*;
use crate::core::types::{RegionId, Size};

/// Memory allocator interface
pub trait Allocator {
    /// Allocate `size` units using the given placement policy
    fn allocate(&mut self, size: Size, policy: PlacementPolicy) -> MemoryResult<RegionId>;

    /// Release the region currently holding `id`
    fn release(&mut self, id: RegionId) -> MemoryResult<()>;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Get the region layout in address order
    fn layout(&self) -> Vec<RegionView>;

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}
