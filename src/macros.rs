//! printf-style shorthands: `info!(log, "loaded {} rows", n)`.
//!
//! The arguments go through `format_args!`, so nothing is formatted unless the
//! level passes the logger's allow-list.

/// Writes a formatted message at an explicit level.
#[macro_export]
macro_rules! log {
    ($log:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::IndentLogExt as _;
        $log.log($level, format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! debug {
    ($log:expr, $($arg:tt)+) => {
        $crate::log!($log, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($log:expr, $($arg:tt)+) => {
        $crate::log!($log, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($log:expr, $($arg:tt)+) => {
        $crate::log!($log, $crate::LogLevel::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($log:expr, $($arg:tt)+) => {
        $crate::log!($log, $crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! sql {
    ($log:expr, $($arg:tt)+) => {
        $crate::log!($log, $crate::LogLevel::Sql, $($arg)+)
    };
}
