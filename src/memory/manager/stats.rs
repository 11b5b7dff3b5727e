/*!
 * Address Space Statistics
 * Layout dumps and utilization/fragmentation accounting
 */

use super::super::types::{MemoryStats, RegionView};
use super::AddressSpace;

impl AddressSpace {
    /// Regions in address order as read-only views
    ///
    /// The iterator borrows the address space; call again to restart.
    pub fn dump(&self) -> impl Iterator<Item = RegionView> + '_ {
        self.regions.iter().map(RegionView::from)
    }

    /// Compute a statistics snapshot in a single traversal
    pub fn stats(&self) -> MemoryStats {
        let mut total_free = 0;
        let mut largest_free = 0;
        let mut free_regions = 0;
        let mut allocated_regions = 0;

        for region in &self.regions {
            if region.is_free() {
                total_free += region.length;
                largest_free = largest_free.max(region.length);
                free_regions += 1;
            } else {
                allocated_regions += 1;
            }
        }

        let total_memory = self.total_size;
        let allocated_memory = total_memory - total_free;

        let utilization_pct = if total_memory > 0 {
            allocated_memory as f64 / total_memory as f64 * 100.0
        } else {
            0.0
        };

        // 0% means all free space is a single contiguous region
        let external_fragmentation_pct = if total_free > 0 {
            (1.0 - largest_free as f64 / total_free as f64) * 100.0
        } else {
            0.0
        };

        let success_rate_pct = if self.attempts > 0 {
            Some(self.successes as f64 / self.attempts as f64 * 100.0)
        } else {
            None
        };

        MemoryStats {
            total_memory,
            total_free,
            largest_free,
            allocated_memory,
            utilization_pct,
            external_fragmentation_pct,
            internal_fragmentation_pct: 0.0,
            attempts: self.attempts,
            successes: self.successes,
            failures: self.failures,
            success_rate_pct,
            free_regions,
            allocated_regions,
        }
    }
}
