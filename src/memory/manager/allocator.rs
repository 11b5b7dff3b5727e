/*!
 * Address Space Allocator Implementation
 * Allocation and release logic
 */

use super::super::types::{
    MemoryError, MemoryPressure, MemoryResult, PlacementPolicy, Region, RegionState,
};
use super::placement::select_region;
use super::AddressSpace;
use crate::core::types::{RegionId, Size};
use log::{debug, info, warn};

impl AddressSpace {
    /// Allocate `size` units with the given placement policy
    ///
    /// On success the chosen free region is truncated to exactly `size` and
    /// any remainder is re-inserted as a free region right after it.
    pub fn allocate(&mut self, size: Size, policy: PlacementPolicy) -> MemoryResult<RegionId> {
        if size == 0 {
            return Err(MemoryError::InvalidArgument(
                "allocation size must be positive".to_string(),
            ));
        }

        self.attempts += 1;

        let idx = match select_region(&self.regions, size, policy) {
            Some(idx) => idx,
            None => {
                self.failures += 1;
                let (total_free, largest_free) = self.free_totals();
                warn!(
                    "OOM: requested {} units using {}, largest free region is {} ({} free in total)",
                    size, policy, largest_free, total_free
                );
                return Err(MemoryError::OutOfMemory {
                    requested: size,
                    largest_free,
                    total_free,
                });
            }
        };

        self.successes += 1;
        let id = self.next_id;
        self.next_id += 1;

        let region = &mut self.regions[idx];
        let start = region.start;
        let remainder = region.length - size;
        region.length = size;
        region.state = RegionState::Allocated { id };

        // If the free region is larger than needed, split it and keep the tail free
        if remainder > 0 {
            self.regions.insert(idx + 1, Region::free(start + size, remainder));
            debug!(
                "Split region at {}: keeping {} units, {} units free at {}",
                start,
                size,
                remainder,
                start + size
            );
        }

        debug_assert!(self.verify().is_ok(), "{:?}", self.verify());

        let (total_free, _) = self.free_totals();
        let used = self.total_size - total_free;
        let level = MemoryPressure::from_utilization(used as f64 / self.total_size as f64);
        if level > MemoryPressure::Low {
            warn!(
                "Memory pressure {}: allocated {} units at {} with id {} ({:.1}% used: {} / {})",
                level,
                size,
                start,
                id,
                used as f64 / self.total_size as f64 * 100.0,
                used,
                self.total_size
            );
        } else {
            info!(
                "Allocated {} units at {} with id {} using {}",
                size, start, id, policy
            );
        }

        Ok(id)
    }

    /// Release the region holding `id` and coalesce it with free neighbors
    pub fn release(&mut self, id: RegionId) -> MemoryResult<()> {
        let idx = match self.position_of(id) {
            Some(idx) => idx,
            None => {
                warn!("Attempted to release unknown or already released id {}", id);
                return Err(MemoryError::UnknownId(id));
            }
        };

        let Region { start, length, .. } = self.regions[idx];
        self.regions[idx].state = RegionState::Free;

        let survivor = self.coalesce_around(idx);
        let merged = &self.regions[survivor];

        debug_assert!(self.verify().is_ok(), "{:?}", self.verify());

        info!(
            "Released id {} ({} units at {}), free region now spans [{}, {})",
            id,
            length,
            start,
            merged.start,
            merged.end()
        );

        Ok(())
    }

    /// Sum and maximum of free region lengths
    pub(super) fn free_totals(&self) -> (Size, Size) {
        self.regions
            .iter()
            .filter(|region| region.is_free())
            .fold((0, 0), |(total, largest), region| {
                (total + region.length, largest.max(region.length))
            })
    }
}
