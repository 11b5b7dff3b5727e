/*!
 * Shell Output Rendering
 * Text forms of layouts and statistics
 */

use crate::memory::{MemoryStats, RegionState, RegionView};

pub const HELP_TEXT: &str = "\
Available Commands:
init memory <size>                - Initialize physical memory
set allocator <first|best|worst>  - Set memory allocation strategy
malloc <size>                     - Allocate memory
free <id>                         - Free memory by ID
dump [json]                       - Show memory layout
stats [json]                      - Show memory statistics
help                              - Show this help message
exit                              - Exit simulator";

/// One line per region, in address order
pub fn render_layout(views: impl IntoIterator<Item = RegionView>) -> String {
    views
        .into_iter()
        .map(|view| match view.state {
            RegionState::Free => format!(
                "Free memory from: {} to: {}",
                view.start, view.end_inclusive
            ),
            RegionState::Allocated { id } => format!(
                "Memory alloted from: {} to: {} to user with ID: {}",
                view.start, view.end_inclusive, id
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_stats(stats: &MemoryStats) -> String {
    let success_rate = match stats.success_rate_pct {
        Some(rate) => format!("{:.2}%", rate),
        None => "N/A".to_string(),
    };

    [
        format!("Total memory {}", stats.total_memory),
        format!("Free memory {}", stats.total_free),
        format!("Allocated memory {}", stats.allocated_memory),
        format!("Largest free block {}", stats.largest_free),
        format!("Memory Utilization {:.2}%", stats.utilization_pct),
        format!("External Fragmentation {:.2}%", stats.external_fragmentation_pct),
        format!("Internal Fragmentation {:.2}%", stats.internal_fragmentation_pct),
        format!("Total Allocation Attempts: {}", stats.attempts),
        format!("Successful Allocations: {}", stats.successes),
        format!("Failed Allocations: {}", stats.failures),
        format!("Allocation Success Rate {}", success_rate),
        format!("Memory Pressure {}", stats.memory_pressure()),
    ]
    .join("\n")
}
