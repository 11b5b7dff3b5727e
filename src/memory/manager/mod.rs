/*!
 * Address Space Management
 *
 * Explicit free-list allocator over a fixed, contiguous address space.
 *
 * ## Layout
 *
 * The address space is an address-ordered `Vec<Region>` that always covers
 * `[0, total_size)` with no gaps and no overlaps. Each region is either FREE
 * or ALLOCATED; allocated regions carry a handle that is never reused.
 *
 * ## Features
 *
 * - **Placement policies**: first-fit, best-fit and worst-fit over a linear scan
 * - **Block splitting**: a larger free region is split and the remainder stays free
 * - **Eager coalescing**: a released region is merged with free neighbors immediately
 * - **Accounting**: attempts/successes/failures, utilization and external fragmentation
 * - **Memory pressure tracking**: warns at 60%, 80% and 95% utilization
 */

mod allocator;
mod coalesce;
mod placement;
mod stats;

use super::traits::{Allocator, MemoryInfo};
use super::types::{
    MemoryError, MemoryResult, MemoryStats, PlacementPolicy, Region, RegionState, RegionView,
};
use crate::core::limits::FIRST_REGION_ID;
use crate::core::types::{RegionId, Size};
use log::info;

/// Simulated physical address space
#[derive(Debug, Clone)]
pub struct AddressSpace {
    regions: Vec<Region>,
    total_size: Size,
    next_id: RegionId,
    // Allocation counters, never decremented
    attempts: u64,
    successes: u64,
    failures: u64,
}

impl AddressSpace {
    /// Create an address space of `total_size` units, initially one free region
    pub fn new(total_size: Size) -> MemoryResult<Self> {
        if total_size == 0 {
            return Err(MemoryError::InvalidArgument(
                "address space size must be positive".to_string(),
            ));
        }

        info!("Address space initialized with {} units", total_size);
        Ok(Self {
            regions: vec![Region::free(0, total_size)],
            total_size,
            next_id: FIRST_REGION_ID,
            attempts: 0,
            successes: 0,
            failures: 0,
        })
    }

    pub fn total_size(&self) -> Size {
        self.total_size
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Iterate over regions in address order
    pub fn regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter()
    }

    /// Region currently holding `id`, if it is allocated
    pub fn lookup(&self, id: RegionId) -> Option<&Region> {
        self.position_of(id).map(|idx| &self.regions[idx])
    }

    pub fn is_allocated(&self, id: RegionId) -> bool {
        self.position_of(id).is_some()
    }

    pub(super) fn position_of(&self, id: RegionId) -> Option<usize> {
        self.regions
            .iter()
            .position(|region| region.state == RegionState::Allocated { id })
    }

    /// Re-check the layout invariants
    ///
    /// Reports the first violation found: a gap or overlap, a zero-length
    /// region, two adjacent free regions, or a duplicated or out-of-range id.
    pub fn verify(&self) -> MemoryResult<()> {
        let mut expected_start = 0;
        let mut previous_free = false;
        let mut seen_ids = std::collections::HashSet::new();

        for region in &self.regions {
            if region.start != expected_start {
                return Err(MemoryError::CorruptionDetected {
                    address: region.start,
                    reason: format!("region should start at {}", expected_start),
                });
            }
            if region.length == 0 {
                return Err(MemoryError::CorruptionDetected {
                    address: region.start,
                    reason: "zero-length region".to_string(),
                });
            }
            match region.state {
                RegionState::Free if previous_free => {
                    return Err(MemoryError::CorruptionDetected {
                        address: region.start,
                        reason: "adjacent free regions were not coalesced".to_string(),
                    });
                }
                RegionState::Allocated { id } if id == 0 || id >= self.next_id => {
                    return Err(MemoryError::CorruptionDetected {
                        address: region.start,
                        reason: format!("id {} was never handed out", id),
                    });
                }
                RegionState::Allocated { id } if !seen_ids.insert(id) => {
                    return Err(MemoryError::CorruptionDetected {
                        address: region.start,
                        reason: format!("id {} held by more than one region", id),
                    });
                }
                _ => {}
            }
            previous_free = region.is_free();
            expected_start = region.end();
        }

        if expected_start != self.total_size {
            return Err(MemoryError::CorruptionDetected {
                address: expected_start,
                reason: format!("regions end short of total size {}", self.total_size),
            });
        }

        Ok(())
    }
}

// Implement trait interfaces
impl Allocator for AddressSpace {
    fn allocate(&mut self, size: Size, policy: PlacementPolicy) -> MemoryResult<RegionId> {
        AddressSpace::allocate(self, size, policy)
    }

    fn release(&mut self, id: RegionId) -> MemoryResult<()> {
        AddressSpace::release(self, id)
    }
}

impl MemoryInfo for AddressSpace {
    fn stats(&self) -> MemoryStats {
        AddressSpace::stats(self)
    }

    fn layout(&self) -> Vec<RegionView> {
        self.dump().collect()
    }
}
