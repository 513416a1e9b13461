/// Conditional debug logging for development builds
///
/// The `debug_log!` macro forwards to `log::debug!` and is compiled out of
/// production (release) builds by default. Warnings and errors should keep
/// using `log::warn!` and `log::error!` directly.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```ignore
/// crate::debug_log!("Loaded {} stations", graph.station_count());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)+) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            ::log::debug!($($arg)+);
        }
    };
}
