#![deny(missing_docs)]
//! Shared logging utilities for the portfolio workspace.
//!
//! This crate provides the `page_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every record is
//! prefixed with the virtual page clock of the current thread so that timer
//! driven output can be correlated with the dispatcher.

use std::cell::Cell;

thread_local! {
    /// Virtual page time in milliseconds for the current thread.
    static PAGE_TIME_MS: Cell<u64> = const { Cell::new(0) };
}

/// Sets the virtual page time for the current thread.
/// The dispatcher calls this whenever its scheduler clock moves.
pub fn set_page_time_ms(ms: u64) {
    PAGE_TIME_MS.with(|v| v.set(ms));
}

/// Retrieves the virtual page time for the current thread.
/// Returns 0 before the dispatcher has advanced.
pub fn page_time_ms() -> u64 {
    PAGE_TIME_MS.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! page_trace {
    ($($arg:tt)*) => {{
        log::trace!("[t={}ms] {}", $crate::page_time_ms(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! page_debug {
    ($($arg:tt)*) => {{
        log::debug!("[t={}ms] {}", $crate::page_time_ms(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! page_info {
    ($($arg:tt)*) => {{
        log::info!("[t={}ms] {}", $crate::page_time_ms(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! page_warn {
    ($($arg:tt)*) => {{
        log::warn!("[t={}ms] {}", $crate::page_time_ms(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! page_error {
    ($($arg:tt)*) => {{
        log::error!("[t={}ms] {}", $crate::page_time_ms(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_time_is_thread_local() {
        set_page_time_ms(1500);
        assert_eq!(page_time_ms(), 1500);
        let other = std::thread::spawn(page_time_ms).join().unwrap();
        assert_eq!(other, 0);
    }
}
