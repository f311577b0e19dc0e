//! Cross-platform logging module.
//!
//! The `log_*!` macros format their arguments and hand them to [`log_impl`],
//! which writes to `web_sys::console` on the web and to `tracing` on desktop.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

#[cfg(target_arch = "wasm32")]
pub fn log_impl(level: Level, msg: &str) {
    let value = wasm_bindgen::JsValue::from_str(msg);
    match level {
        Level::Debug => web_sys::console::debug_1(&value),
        Level::Info => web_sys::console::log_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Error => web_sys::console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_impl(level: Level, msg: &str) {
    match level {
        Level::Debug => tracing::debug!("{}", msg),
        Level::Info => tracing::info!("{}", msg),
        Level::Warn => tracing::warn!("{}", msg),
        Level::Error => tracing::error!("{}", msg),
    }
}

/// Log an info message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::log_impl($crate::logging::Level::Info, &format!($($arg)*))
    };
}

/// Log an error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log_impl($crate::logging::Level::Error, &format!($($arg)*))
    };
}

/// Log a warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::log_impl($crate::logging::Level::Warn, &format!($($arg)*))
    };
}

/// Log a debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log_impl($crate::logging::Level::Debug, &format!($($arg)*))
    };
}
