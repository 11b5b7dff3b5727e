/*!
 * Memory Types
 * Common types for the simulated address space
 */

use crate::core::limits::{
    PRESSURE_CRITICAL_THRESHOLD, PRESSURE_HIGH_THRESHOLD, PRESSURE_MEDIUM_THRESHOLD,
};
use crate::core::types::{Address, RegionId, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// None of these are fatal to the address space: every failing operation
/// leaves the region layout exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(memory::invalid_argument),
        help("Sizes must be positive and the policy one of first, best or worst.")
    )]
    InvalidArgument(String),

    #[error("Out of memory: requested {requested} units, largest free region is {largest_free} ({total_free} free in total)")]
    #[diagnostic(
        code(memory::out_of_memory),
        help("Release allocated regions or retry with a smaller size.")
    )]
    OutOfMemory {
        requested: Size,
        largest_free: Size,
        total_free: Size,
    },

    #[error("No allocated region with id {0}")]
    #[diagnostic(
        code(memory::unknown_id),
        help("The id was never handed out or has already been released.")
    )]
    UnknownId(RegionId),

    #[error("Memory corruption detected at {address}: {reason}")]
    #[diagnostic(code(memory::corruption_detected))]
    CorruptionDetected { address: Address, reason: String },
}

/// Region state
///
/// The id lives inside the allocated variant, so a free region can never
/// carry a stale handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RegionState {
    Free,
    Allocated { id: RegionId },
}

impl fmt::Display for RegionState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegionState::Free => write!(f, "FREE"),
            RegionState::Allocated { .. } => write!(f, "ALLOCATED"),
        }
    }
}

/// Contiguous, non-empty span of the address space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub start: Address,
    pub length: Size,
    pub state: RegionState,
}

impl Region {
    pub fn free(start: Address, length: Size) -> Self {
        Self {
            start,
            length,
            state: RegionState::Free,
        }
    }

    /// One past the last address covered by this region
    pub fn end(&self) -> Address {
        self.start + self.length
    }

    pub fn is_free(&self) -> bool {
        self.state == RegionState::Free
    }

    pub fn id(&self) -> Option<RegionId> {
        match self.state {
            RegionState::Allocated { id } => Some(id),
            RegionState::Free => None,
        }
    }
}

/// Read-only view of a region as produced by `dump`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionView {
    pub start: Address,
    pub end_inclusive: Address,
    #[serde(flatten)]
    pub state: RegionState,
}

impl RegionView {
    pub fn id(&self) -> Option<RegionId> {
        match self.state {
            RegionState::Allocated { id } => Some(id),
            RegionState::Free => None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.state == RegionState::Free
    }
}

impl From<&Region> for RegionView {
    fn from(region: &Region) -> Self {
        Self {
            start: region.start,
            end_inclusive: region.end() - 1,
            state: region.state,
        }
    }
}

/// Placement policy used to choose among qualifying free regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// First qualifying region in address order
    #[default]
    FirstFit,
    /// Smallest qualifying region, earliest on ties
    BestFit,
    /// Largest qualifying region, earliest on ties
    WorstFit,
}

impl PlacementPolicy {
    pub const ALL: [PlacementPolicy; 3] = [
        PlacementPolicy::FirstFit,
        PlacementPolicy::BestFit,
        PlacementPolicy::WorstFit,
    ];
}

impl fmt::Display for PlacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlacementPolicy::FirstFit => write!(f, "first-fit"),
            PlacementPolicy::BestFit => write!(f, "best-fit"),
            PlacementPolicy::WorstFit => write!(f, "worst-fit"),
        }
    }
}

impl FromStr for PlacementPolicy {
    type Err = MemoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "first-fit" | "first_fit" | "firstfit" | "ff" => Ok(PlacementPolicy::FirstFit),
            "best" | "best-fit" | "best_fit" | "bestfit" | "bf" => Ok(PlacementPolicy::BestFit),
            "worst" | "worst-fit" | "worst_fit" | "worstfit" | "wf" => Ok(PlacementPolicy::WorstFit),
            other => Err(MemoryError::InvalidArgument(format!(
                "unknown placement policy '{}'",
                other
            ))),
        }
    }
}

/// Memory statistics snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub total_free: Size,
    pub largest_free: Size,
    pub allocated_memory: Size,
    pub utilization_pct: f64,
    pub external_fragmentation_pct: f64,
    /// Always zero: regions are granted at exactly the requested size
    pub internal_fragmentation_pct: f64,
    pub attempts: u64,
    pub successes: u64,
    pub failures: u64,
    /// `None` until the first allocation attempt
    pub success_rate_pct: Option<f64>,
    pub free_regions: usize,
    pub allocated_regions: usize,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        MemoryPressure::from_utilization(self.utilization_pct / 100.0)
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl MemoryPressure {
    /// Classify a utilization ratio in `[0, 1]`
    pub fn from_utilization(ratio: f64) -> Self {
        if ratio >= PRESSURE_CRITICAL_THRESHOLD {
            MemoryPressure::Critical
        } else if ratio >= PRESSURE_HIGH_THRESHOLD {
            MemoryPressure::High
        } else if ratio >= PRESSURE_MEDIUM_THRESHOLD {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

impl fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
