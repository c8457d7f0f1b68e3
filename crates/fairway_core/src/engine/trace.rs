//! Per-shot diagnostic tracing.
//!
//! The engine reports friction regimes and bounce coefficients through an
//! injected sink rather than a process-wide logger, so the caller decides
//! where diagnostics go and tests can capture or suppress them
//! deterministically. Diagnostics never affect computed results.
//!
//! Three sinks ship with the crate:
//! - [`NullTrace`] drops everything
//! - [`LogTrace`] forwards to the `log` facade
//! - [`BufferTrace`] collects lines for inspection

use serde::{Deserialize, Serialize};

/// Diagnostic verbosity, lowest to highest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TraceLevel {
    Off,
    #[default]
    Error,
    Info,
    Verbose,
}

/// Receiver for per-shot diagnostics.
pub trait TraceSink {
    /// Highest level this sink wants to receive.
    fn level(&self) -> TraceLevel;
    /// Record one formatted line. Only called for enabled levels.
    fn write(&mut self, level: TraceLevel, message: &str);
}

/// Record a line at Info if the sink accepts it. The closure only runs when
/// the level is enabled, so formatting costs nothing otherwise.
pub fn info(sink: &mut dyn TraceSink, message: impl FnOnce() -> String) {
    if sink.level() >= TraceLevel::Info {
        let line = message();
        sink.write(TraceLevel::Info, &line);
    }
}

/// Record a line at Verbose if the sink accepts it.
pub fn verbose(sink: &mut dyn TraceSink, message: impl FnOnce() -> String) {
    if sink.level() >= TraceLevel::Verbose {
        let line = message();
        sink.write(TraceLevel::Verbose, &line);
    }
}

/// Sink that drops everything.
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn level(&self) -> TraceLevel {
        TraceLevel::Off
    }

    fn write(&mut self, _level: TraceLevel, _message: &str) {}
}

/// Sink that forwards to the `log` facade.
pub struct LogTrace {
    level: TraceLevel,
}

impl LogTrace {
    pub fn new(level: TraceLevel) -> Self {
        Self { level }
    }
}

impl TraceSink for LogTrace {
    fn level(&self) -> TraceLevel {
        self.level
    }

    fn write(&mut self, level: TraceLevel, message: &str) {
        match level {
            TraceLevel::Error => log::error!("{message}"),
            TraceLevel::Info => log::info!("{message}"),
            _ => log::debug!("{message}"),
        }
    }
}

/// Sink that buffers lines for later inspection (used in tests and the CLI).
pub struct BufferTrace {
    level: TraceLevel,
    entries: Vec<(TraceLevel, String)>,
}

impl BufferTrace {
    pub fn new(level: TraceLevel) -> Self {
        Self { level, entries: Vec::new() }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(_, line)| line.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TraceSink for BufferTrace {
    fn level(&self) -> TraceLevel {
        self.level
    }

    fn write(&mut self, level: TraceLevel, message: &str) {
        self.entries.push((level, message.to_string()));
    }
}
