/*!
 * Placement Search
 * Free-region selection for the three placement policies
 */

use super::super::types::{PlacementPolicy, Region};
use crate::core::types::Size;

/// Index of the free region `policy` picks for a request of `size` units.
///
/// Every policy is a single linear scan in address order. Best-fit and
/// worst-fit only replace the current candidate on a strictly better length,
/// so among equal extremal lengths the lowest address wins.
pub(super) fn select_region(regions: &[Region], size: Size, policy: PlacementPolicy) -> Option<usize> {
    let mut candidates = regions
        .iter()
        .enumerate()
        .filter(|(_, region)| region.is_free() && region.length >= size);

    match policy {
        PlacementPolicy::FirstFit => candidates.next().map(|(idx, _)| idx),
        PlacementPolicy::BestFit => candidates
            .fold(None, |best: Option<(usize, Size)>, (idx, region)| match best {
                Some((_, len)) if len <= region.length => best,
                _ => Some((idx, region.length)),
            })
            .map(|(idx, _)| idx),
        PlacementPolicy::WorstFit => candidates
            .fold(None, |worst: Option<(usize, Size)>, (idx, region)| match worst {
                Some((_, len)) if len >= region.length => worst,
                _ => Some((idx, region.length)),
            })
            .map(|(idx, _)| idx),
    }
}
