//! Debug logging for development-time diagnostics.
//!
//! These macros are controlled by the `dev-log` feature flag and compile
//! away to nothing when it is disabled, so the trie walk and relationship
//! analyzer can be instrumented without any runtime cost in a normal build.
//!
//! ```bash
//! cargo test --features "dev-log"
//! ```
//!
//! ```rust
//! use pathmux::{debug_log, debug_trace};
//!
//! debug_log!("registered pattern {}", "GET /items/{id}");
//! debug_trace!("walking node at depth {}", 3);
//! ```

/// General registration/matching progress, prefixed with `[DEBUG]`.
#[macro_export]
#[cfg(feature = "dev-log")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        println!("[DEBUG] {}", format!($($arg)*));
    };
}

#[macro_export]
#[cfg(not(feature = "dev-log"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

/// Recoverable-error diagnostics, prefixed with `[ERROR]`, to stderr.
#[macro_export]
#[cfg(feature = "dev-log")]
macro_rules! debug_error {
    ($($arg:tt)*) => {
        eprintln!("[ERROR] {}", format!($($arg)*));
    };
}

#[macro_export]
#[cfg(not(feature = "dev-log"))]
macro_rules! debug_error {
    ($($arg:tt)*) => {};
}

/// Non-fatal warnings, prefixed with `[WARN]`, to stderr.
#[macro_export]
#[cfg(feature = "dev-log")]
macro_rules! debug_warn {
    ($($arg:tt)*) => {
        eprintln!("[WARN] {}", format!($($arg)*));
    };
}

#[macro_export]
#[cfg(not(feature = "dev-log"))]
macro_rules! debug_warn {
    ($($arg:tt)*) => {};
}

/// Verbose step-by-step tracing of the trie walk, prefixed with `[TRACE]`.
#[macro_export]
#[cfg(feature = "dev-log")]
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        println!("[TRACE] {}", format!($($arg)*));
    };
}

#[macro_export]
#[cfg(not(feature = "dev-log"))]
macro_rules! debug_trace {
    ($($arg:tt)*) => {};
}
