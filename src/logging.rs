//! Logging abstraction layer.
//!
//! Resolvers log through the macros below, which forward to the
//! [`log`](https://docs.rs/log) or [`tracing`](https://docs.rs/tracing)
//! crate depending on the enabled feature. Enable at most one of them.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! Resolution is hot code, so the resolvers themselves stay at `trace` and
//! `debug`. `warn` is reserved for configuration mistakes, such as adding a
//! search path that does not exist.
//!
//! ```ignore
//! use view_resolver::{debug_log, trace_log, warn_log};
//!
//! trace_log!("Trying candidate '{}'", candidate);
//! debug_log!("Attached resolver with priority {}", priority);
//! warn_log!("Template path '{}' is not a directory", path.display());
//! ```

/// Emit a **trace**-level log message.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level log message.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit a **warn**-level log message.
///
/// Used when a resolver is configured in a way that can never succeed.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}
