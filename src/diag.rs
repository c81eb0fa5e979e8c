//! Process-wide diagnostics for the `proxymark` runtime.
//!
//! Diagnostics configuration is applied exactly once during setup, before
//! any proxy is constructed. The benchmark entry point sets the level first,
//! then builds its wrappers, so construction-time output (which wrapper was
//! generated, for which selector) is controlled by an explicit, documented
//! initialization order rather than hidden global mutation.
//!
//! Output goes to stderr so it never interleaves with the benchmark driver's
//! report on stdout.
//!
//! # Example
//!
//! ```
//! use proxymark::diag::{self, Level};
//!
//! diag::set_level(Level::Debug);
//! proxymark::debug!("setup step {}", 1);
//! ```

use std::fmt::Arguments;
use std::sync::atomic::{AtomicU8, Ordering};

/// Diagnostic levels, ordered from most severe (Error) to least (Debug).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Error level - setup failures
    Error = 0,
    /// Warning level - suspicious but non-fatal conditions
    Warn = 1,
    /// Info level - setup progress
    Info = 2,
    /// Debug level - per-wrapper construction detail
    Debug = 3,
}

impl Level {
    /// Returns the string representation of this level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }
}

/// Global minimum level. Defaults to `Level::Warn` so measurement runs stay
/// quiet unless setup opts in.
static LEVEL: AtomicU8 = AtomicU8::new(Level::Warn as u8);

/// Sets the minimum diagnostic level.
///
/// Intended to be called once during process-wide setup, before proxies are
/// built. The last level set wins.
pub fn set_level(level: Level) {
    LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Returns the current minimum diagnostic level.
pub fn level() -> Level {
    match LEVEL.load(Ordering::Relaxed) {
        0 => Level::Error,
        1 => Level::Warn,
        2 => Level::Info,
        _ => Level::Debug,
    }
}

/// Checks whether a message at the given level would be emitted.
pub fn enabled(level: Level) -> bool {
    level as u8 <= LEVEL.load(Ordering::Relaxed)
}

/// Internal function that performs the actual emission.
///
/// Called by the diagnostic macros after the level check.
#[doc(hidden)]
pub fn __emit(level: Level, target: &str, args: Arguments) {
    if !enabled(level) {
        return;
    }
    eprintln!("[{}] {target}: {args}", level.as_str());
}

/// The primary diagnostic macro. Captures the calling module path.
#[macro_export]
macro_rules! diag_log {
    (level: $level:expr, $($arg:tt)*) => {
        {
            if $crate::diag::enabled($level) {
                $crate::diag::__emit(
                    $level,
                    module_path!(),
                    format_args!($($arg)*)
                );
            }
        }
    };
}

/// Emits a message at the Error level.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::diag_log!(level: $crate::diag::Level::Error, $($arg)*)
    };
}

/// Emits a message at the Warn level.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::diag_log!(level: $crate::diag::Level::Warn, $($arg)*)
    };
}

/// Emits a message at the Info level.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::diag_log!(level: $crate::diag::Level::Info, $($arg)*)
    };
}

/// Emits a message at the Debug level.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::diag_log!(level: $crate::diag::Level::Debug, $($arg)*)
    };
}
