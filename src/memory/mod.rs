/*!
 * Memory Module
 * Simulated physical address space and its allocator
 */

pub mod manager;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use manager::AddressSpace;
pub use traits::*;
pub use types::*;
