/*!
 * Session Tests
 * Command execution against an explicit session context
 */

use memsim::core::SimulatorConfig;
use memsim::memory::{MemoryError, PlacementPolicy};
use memsim::shell::{Outcome, Session, ShellError};
use pretty_assertions::assert_eq;

fn output(session: &mut Session, line: &str) -> String {
    match session.execute_line(line) {
        Ok(Outcome::Continue(text)) => text,
        other => panic!("'{}' did not continue: {:?}", line, other),
    }
}

#[test]
fn test_memory_commands_require_initialization() {
    let mut session = Session::default();

    for line in ["malloc 10", "free 1", "dump", "stats"] {
        assert_eq!(session.execute_line(line), Err(ShellError::NotInitialized), "{}", line);
    }
}

#[test]
fn test_allocation_flow_messages() {
    let mut session = Session::default();

    assert_eq!(output(&mut session, "init memory 100"), "memory of size 100 created");
    assert_eq!(
        output(&mut session, "malloc 40"),
        "Memory allocated with ID: 1 using first-fit"
    );
    assert_eq!(output(&mut session, "malloc 70"), "memory not available");
    assert_eq!(
        output(&mut session, "free 1"),
        "Memory with ID 1 freed successfully"
    );
    assert_eq!(output(&mut session, "free 1"), "No memory block with Id: 1 found");
}

#[test]
fn test_set_allocator_changes_placement() {
    let mut session = Session::default();
    output(&mut session, "init memory 93");
    for line in ["malloc 50", "malloc 1", "malloc 10", "malloc 1", "malloc 30", "malloc 1"] {
        output(&mut session, line);
    }
    for line in ["free 1", "free 3", "free 5"] {
        output(&mut session, line);
    }

    assert_eq!(output(&mut session, "set allocator best"), "Allocator set to best-fit");
    assert_eq!(session.policy(), PlacementPolicy::BestFit);
    assert_eq!(
        output(&mut session, "malloc 10"),
        "Memory allocated with ID: 7 using best-fit"
    );

    let memory = session.memory().unwrap();
    assert_eq!(memory.lookup(7).unwrap().start, 51);
}

#[test]
fn test_dump_output() {
    let mut session = Session::default();
    output(&mut session, "init memory 40");
    output(&mut session, "malloc 10");

    assert_eq!(
        output(&mut session, "dump"),
        "Memory alloted from: 0 to: 9 to user with ID: 1\nFree memory from: 10 to: 39"
    );
}

#[test]
fn test_dump_json() {
    let mut session = Session::default();
    output(&mut session, "init memory 40");
    output(&mut session, "malloc 10");

    let json: serde_json::Value = serde_json::from_str(&output(&mut session, "dump json")).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "start": 0, "end_inclusive": 9, "state": "allocated", "id": 1 },
            { "start": 10, "end_inclusive": 39, "state": "free" }
        ])
    );
}

#[test]
fn test_stats_output() {
    let mut session = Session::default();
    output(&mut session, "init memory 100");

    let before = output(&mut session, "stats");
    assert!(before.contains("Allocation Success Rate N/A"));

    output(&mut session, "malloc 10");
    output(&mut session, "malloc 10");
    output(&mut session, "malloc 20");
    output(&mut session, "malloc 60");
    output(&mut session, "free 1");
    output(&mut session, "free 3");
    output(&mut session, "malloc 500");

    let stats = output(&mut session, "stats");
    let lines: Vec<&str> = stats.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Total memory 100",
            "Free memory 30",
            "Allocated memory 70",
            "Largest free block 20",
            "Memory Utilization 70.00%",
            "External Fragmentation 33.33%",
            "Internal Fragmentation 0.00%",
            "Total Allocation Attempts: 5",
            "Successful Allocations: 4",
            "Failed Allocations: 1",
            "Allocation Success Rate 80.00%",
            "Memory Pressure MEDIUM",
        ]
    );
}

#[test]
fn test_stats_json() {
    let mut session = Session::default();
    output(&mut session, "init memory 10");

    let json: serde_json::Value = serde_json::from_str(&output(&mut session, "stats json")).unwrap();
    assert_eq!(json["total_memory"], 10);
    assert!(json["success_rate_pct"].is_null());
}

#[test]
fn test_zero_size_malloc_is_an_error() {
    let mut session = Session::default();
    output(&mut session, "init memory 10");

    assert!(matches!(
        session.execute_line("malloc 0"),
        Err(ShellError::Memory(MemoryError::InvalidArgument(_)))
    ));
    assert_eq!(session.memory().unwrap().stats().attempts, 0);
}

#[test]
fn test_reinitialization_discards_old_space() {
    let mut session = Session::default();
    output(&mut session, "init memory 10");
    output(&mut session, "malloc 5");

    output(&mut session, "init memory 20");
    let memory = session.memory().unwrap();
    assert_eq!(memory.total_size(), 20);
    assert_eq!(memory.stats().attempts, 0);
    assert_eq!(
        output(&mut session, "malloc 5"),
        "Memory allocated with ID: 1 using first-fit"
    );
}

#[test]
fn test_init_memory_zero_is_rejected() {
    let mut session = Session::default();
    assert!(matches!(
        session.execute_line("init memory 0"),
        Err(ShellError::Memory(MemoryError::InvalidArgument(_)))
    ));
    assert!(session.memory().is_none());
}

#[test]
fn test_session_from_config() {
    let config = SimulatorConfig {
        initial_memory: Some(64),
        policy: PlacementPolicy::WorstFit,
        ..SimulatorConfig::default()
    };
    let mut session = Session::from_config(&config).unwrap();

    assert_eq!(session.policy(), PlacementPolicy::WorstFit);
    assert_eq!(
        output(&mut session, "malloc 8"),
        "Memory allocated with ID: 1 using worst-fit"
    );
}

#[test]
fn test_blank_line_and_exit() {
    let mut session = Session::default();
    assert_eq!(session.execute_line("   "), Ok(Outcome::Continue(String::new())));
    assert_eq!(session.execute_line("exit"), Ok(Outcome::Exit));
}
