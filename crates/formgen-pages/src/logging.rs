//! Logging abstraction layer for formgen-pages
//!
//! These macros work across WASM and native targets. In the browser they
//! write to the developer console and compile to no-ops in release builds.
//! Natively they emit `tracing` events, so whatever subscriber the host
//! installs decides what is kept.
//!
//! ## Macro Overview
//!
//! | Macro | Feature Required | WASM (debug builds) | Non-WASM |
//! |-------|------------------|---------------------|----------|
//! | `debug_log!` | `debug-hooks` | `console.debug` | `tracing::debug!` |
//! | `info_log!` | None | `console.info` | `tracing::info!` |
//! | `warn_log!` | None | `console.warn` | `tracing::warn!` |
//! | `error_log!` | None | `console.error` | `tracing::error!` |
//!
//! ## Example
//!
//! ```
//! use formgen_pages::{debug_log, error_log, info_log, warn_log};
//!
//! // Only logged with the `debug-hooks` feature
//! debug_log!("Rendered {} fields", 5);
//!
//! info_log!("Form mounted");
//! warn_log!("Notification replaced before it was shown");
//! error_log!("Failed to bind preview: {}", "missing element");
//! ```

/// Logs a debug message (requires the `debug-hooks` feature)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message (requires the `debug-hooks` feature)
#[macro_export]
#[cfg(all(feature = "debug-hooks", not(target_arch = "wasm32")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__tracing::debug!($($arg)*);
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(any(
	not(feature = "debug-hooks"),
	all(not(debug_assertions), target_arch = "wasm32")
))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message
///
/// # Example
///
/// ```
/// formgen_pages::info_log!("Form submitted: {}", r#"{"n":"Ada"}"#);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__tracing::info!($($arg)*);
	}};
}

/// No-op info_log in release WASM builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__tracing::warn!($($arg)*);
	}};
}

/// No-op warn_log in release WASM builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__tracing::error!($($arg)*);
	}};
}

/// No-op error_log in release WASM builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}
