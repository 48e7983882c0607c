//! Logging
//!
//! Routes `tracing` events (the reorder crate logs every move through it)
//! to the browser console, one console call per formatted event.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Console method an event of `level` is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Debug,
    Log,
    Warn,
    Error,
}

impl ConsoleMethod {
    fn for_level(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Log,
            _ => ConsoleMethod::Debug,
        }
    }

    fn write(self, line: &str) {
        let value = wasm_bindgen::JsValue::from_str(line);
        match self {
            ConsoleMethod::Debug => web_sys::console::debug_1(&value),
            ConsoleMethod::Log => web_sys::console::log_1(&value),
            ConsoleMethod::Warn => web_sys::console::warn_1(&value),
            ConsoleMethod::Error => web_sys::console::error_1(&value),
        }
    }
}

/// Buffers one formatted event and flushes it to the console on drop
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buffer);
        let line = text.trim_end();
        if !line.is_empty() {
            self.method.write(line);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { method: ConsoleMethod::Log, buffer: Vec::new() }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter { method: ConsoleMethod::for_level(*meta.level()), buffer: Vec::new() }
    }
}

/// Most verbose level written: debug in dev builds, info in release
pub fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the console subscriber. Safe to call more than once.
pub fn init() {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level())
        // No clock on wasm32-unknown-unknown
        .without_time()
        .with_target(true)
        .try_init();
    if let Err(e) = result {
        web_sys::console::warn_1(&format!("[LOG] tracing subscriber not installed: {}", e).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_map_to_console_methods() {
        assert_eq!(ConsoleMethod::for_level(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::INFO), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::for_level(Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::for_level(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_max_level_includes_move_warnings() {
        assert!(max_level() >= Level::INFO);
    }
}
