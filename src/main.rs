/*!
 * memsim - Main Entry Point
 *
 * Interactive physical memory allocator simulator:
 * - first-fit, best-fit and worst-fit placement
 * - eager coalescing of free regions
 * - utilization and fragmentation statistics
 */

use anyhow::Context;
use std::io;
use tracing::info;

use memsim::{init_tracing, shell, Session, SimulatorConfig};

fn main() -> anyhow::Result<()> {
    let config = SimulatorConfig::from_env().context("Invalid simulator configuration")?;

    // Initialize structured tracing
    init_tracing(config.trace_json)?;

    info!(
        policy = %config.policy,
        initial_memory = ?config.initial_memory,
        "memsim starting"
    );

    let mut session = Session::from_config(&config).context("Failed to create session")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    shell::run(&mut session, stdin.lock(), &mut out, &config.prompt)
        .context("Terminal I/O failed")?;

    Ok(())
}
