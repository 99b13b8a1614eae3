//! Console logging macros
//!
//! On wasm32 the messages go to the browser console through `web_sys`,
//! native builds (tests, tooling) print to stderr.
//!
//! Usage:
//! ```rust
//! use arena_engine::{engine_log, engine_warn};
//!
//! engine_log!("spawned {} props", 40);
//! engine_warn!("entity {} has no mesh", 3);
//! ```

#[doc(hidden)]
pub fn console_log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[arena] {}", msg);
    }
}

#[doc(hidden)]
pub fn console_warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[arena] WARN {}", msg);
    }
}

/// Informational message to the host console
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        $crate::core::utils::log::console_log(&format!($($arg)*));
    }};
}

/// Recoverable problem (skipped entity, failed asset) to the host console
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        $crate::core::utils::log::console_warn(&format!($($arg)*));
    }};
}
