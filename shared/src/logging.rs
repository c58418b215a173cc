//! Shared logging utilities for consistent tracing across the blender

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::types::ActionKind;

/// Build the per-crate filter directive for a base level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("blender={base_level},shared={base_level},reqwest=warn,hyper=warn")
}

/// Initialize stdout tracing with an optional base level.
///
/// `RUST_LOG` wins over the computed directive when set.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for action-aware info logging
#[macro_export]
macro_rules! action_info {
    ($action:expr, $($arg:tt)*) => {
        tracing::info!(
            action = %$action,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for action-aware warning logging
#[macro_export]
macro_rules! action_warn {
    ($action:expr, $($arg:tt)*) => {
        tracing::warn!(
            action = %$action,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for action-aware error logging
#[macro_export]
macro_rules! action_error {
    ($action:expr, $($arg:tt)*) => {
        tracing::error!(
            action = %$action,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for action-aware debug logging
#[macro_export]
macro_rules! action_debug {
    ($action:expr, $($arg:tt)*) => {
        tracing::debug!(
            action = %$action,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for a dispatched action
pub fn log_dispatch(action: ActionKind, details: &str) {
    info!(
        action = %action,
        timestamp = format_timestamp(),
        "🚀 Dispatching {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(action: ActionKind, context: &str, error: &dyn std::fmt::Display) {
    error!(
        action = %action,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(action: ActionKind, message: &str) {
    info!(
        action = %action,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
