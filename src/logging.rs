//! Diagnostic output.
//!
//! Diagnostics go to stderr, one line per event, so stdout only ever carries
//! the JSON result.

use std::any::Any;
use std::panic::{self, Location};

use tracing::error;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Replaces the default panic output (several lines, straight to stderr)
/// with a single `error` event.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        error!("{}", panic_line(info.payload(), info.location()));
    }));
}

/// One-line description of a panic: location and message.
pub fn panic_line(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
    let message = panic_payload_to_string(payload);
    match location {
        Some(location) => format!(
            "panicked at {}:{}: {}",
            location.file(),
            location.line(),
            message.replace('\n', " ")
        ),
        None => format!("panicked: {}", message.replace('\n', " ")),
    }
}

/// Message carried by a panic payload, when it is a string.
pub fn panic_payload_to_string(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
