/*!
 * Structured Tracing
 * Subscriber setup and per-command spans using the tracing crate
 */

use crate::core::limits::DEFAULT_LOG_FILTER;
use std::time::Instant;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Log lines go to stderr so the shell's own output on stdout stays clean.
/// `log` records from the allocator are bridged into the same subscriber.
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
pub fn init_tracing(json: bool) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        // JSON output for parsing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()?;
        info!("Structured tracing initialized with JSON output");
    } else {
        // Human-readable output
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .compact(),
            )
            .try_init()?;
        info!("Structured tracing initialized");
    }

    Ok(())
}

/// Span covering the execution of one shell command
pub struct CommandSpan {
    span: tracing::Span,
    start: Instant,
}

impl CommandSpan {
    pub fn new(command: &str, line: u64) -> Self {
        let span = span!(
            Level::DEBUG,
            "command",
            command = command,
            line = line,
            duration_us = tracing::field::Empty,
            result = tracing::field::Empty,
        );

        let _entered = span.enter();
        debug!(command = command, line = line, "command started");
        drop(_entered);

        Self {
            span,
            start: Instant::now(),
        }
    }

    /// Run `f` inside this span
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        self.span.in_scope(f)
    }

    /// Record the command result and elapsed time
    pub fn finish(self, success: bool) {
        let elapsed = self.start.elapsed();
        self.span.record("duration_us", elapsed.as_micros() as u64);
        self.span
            .record("result", if success { "success" } else { "error" });

        let _entered = self.span.enter();
        debug!(
            duration_us = elapsed.as_micros() as u64,
            success = success,
            "command finished"
        );
    }
}
