/*!
 * Free Region Coalescing
 * Merges a just-released region with its free neighbors
 */

use super::AddressSpace;
use log::debug;

impl AddressSpace {
    /// Merge the free region at `idx` with free neighbors, returning the
    /// index of the surviving region.
    ///
    /// The successor is absorbed first so that the predecessor merge sees the
    /// already-extended length; at most one region is left spanning all three.
    pub(super) fn coalesce_around(&mut self, idx: usize) -> usize {
        debug_assert!(self.regions[idx].is_free());

        if self
            .regions
            .get(idx + 1)
            .map_or(false, |next| next.is_free())
        {
            let next = self.regions.remove(idx + 1);
            self.regions[idx].length += next.length;
            debug!(
                "Coalesced successor at {} into region at {}",
                next.start, self.regions[idx].start
            );
        }

        if idx > 0 && self.regions[idx - 1].is_free() {
            let current = self.regions.remove(idx);
            self.regions[idx - 1].length += current.length;
            debug!(
                "Coalesced region at {} into predecessor at {}",
                current.start,
                self.regions[idx - 1].start
            );
            return idx - 1;
        }

        idx
    }
}
