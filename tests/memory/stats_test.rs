/*!
 * Statistics Tests
 * Utilization, fragmentation and allocation counters
 */

use memsim::memory::{AddressSpace, MemoryInfo, MemoryPressure, PlacementPolicy};
use pretty_assertions::assert_eq;

#[test]
fn test_fresh_space_statistics() {
    let space = AddressSpace::new(256).unwrap();
    let stats = space.stats();

    assert_eq!(stats.total_memory, 256);
    assert_eq!(stats.total_free, 256);
    assert_eq!(stats.largest_free, 256);
    assert_eq!(stats.allocated_memory, 0);
    assert_eq!(stats.utilization_pct, 0.0);
    assert_eq!(stats.external_fragmentation_pct, 0.0);
    assert_eq!(stats.internal_fragmentation_pct, 0.0);
    assert_eq!(stats.success_rate_pct, None);
    assert_eq!(stats.free_regions, 1);
    assert_eq!(stats.allocated_regions, 0);
}

#[test]
fn test_external_fragmentation_metric() {
    let mut space = AddressSpace::new(100).unwrap();
    let a = space.allocate(10, PlacementPolicy::FirstFit).unwrap();
    space.allocate(10, PlacementPolicy::FirstFit).unwrap();
    let c = space.allocate(20, PlacementPolicy::FirstFit).unwrap();
    space.allocate(60, PlacementPolicy::FirstFit).unwrap();

    space.release(a).unwrap();
    space.release(c).unwrap();

    let stats = space.stats();
    assert_eq!(stats.total_free, 30);
    assert_eq!(stats.largest_free, 20);
    assert_eq!(stats.allocated_memory, 70);
    assert!((stats.utilization_pct - 70.0).abs() < 1e-9);
    assert!((stats.external_fragmentation_pct - 100.0 / 3.0).abs() < 0.01);
    assert_eq!(stats.free_regions, 2);
    assert_eq!(stats.allocated_regions, 2);
}

#[test]
fn test_fully_allocated_space_reports_zero_fragmentation() {
    let mut space = AddressSpace::new(50).unwrap();
    space.allocate(50, PlacementPolicy::WorstFit).unwrap();

    let stats = space.stats();
    assert_eq!(stats.total_free, 0);
    assert_eq!(stats.largest_free, 0);
    assert_eq!(stats.external_fragmentation_pct, 0.0);
    assert_eq!(stats.utilization_pct, 100.0);
}

#[test]
fn test_success_rate_counts_every_attempt() {
    let mut space = AddressSpace::new(40).unwrap();
    space.allocate(30, PlacementPolicy::FirstFit).unwrap();
    assert!(space.allocate(20, PlacementPolicy::FirstFit).is_err());
    space.allocate(10, PlacementPolicy::FirstFit).unwrap();
    assert!(space.allocate(1, PlacementPolicy::FirstFit).is_err());

    let stats = space.stats();
    assert_eq!(stats.attempts, 4);
    assert_eq!(stats.successes, 2);
    assert_eq!(stats.failures, 2);
    assert_eq!(stats.success_rate_pct, Some(50.0));
}

#[test]
fn test_counters_survive_release() {
    let mut space = AddressSpace::new(40).unwrap();
    let id = space.allocate(30, PlacementPolicy::FirstFit).unwrap();
    space.release(id).unwrap();

    let stats = space.stats();
    assert_eq!((stats.attempts, stats.successes, stats.failures), (1, 1, 0));
    assert_eq!(stats.allocated_memory, 0);
}

#[test]
fn test_memory_pressure_levels() {
    let mut space = AddressSpace::new(100).unwrap();
    assert_eq!(space.pressure(), MemoryPressure::Low);

    space.allocate(60, PlacementPolicy::FirstFit).unwrap();
    assert_eq!(space.pressure(), MemoryPressure::Medium);

    space.allocate(25, PlacementPolicy::FirstFit).unwrap();
    assert_eq!(space.pressure(), MemoryPressure::High);

    space.allocate(15, PlacementPolicy::FirstFit).unwrap();
    assert_eq!(space.pressure(), MemoryPressure::Critical);
}

#[test]
fn test_stats_serialize_to_json() {
    let mut space = AddressSpace::new(10).unwrap();
    space.allocate(5, PlacementPolicy::FirstFit).unwrap();

    let json = serde_json::to_value(space.stats()).unwrap();
    assert_eq!(json["total_memory"], 10);
    assert_eq!(json["allocated_memory"], 5);
    assert_eq!(json["success_rate_pct"], 100.0);
    assert_eq!(json["internal_fragmentation_pct"], 0.0);
}
