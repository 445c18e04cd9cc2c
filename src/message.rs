//! Status message formatting

use chrono::{DateTime, SecondsFormat, Utc};

/// Builds the status line sent on every tick.
pub fn format_status(device_id: &str, at: DateTime<Utc>) -> String {
    format!(
        "Hello World! from {}: {}",
        device_id,
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Status line stamped with the current time.
pub fn status_now(device_id: &str) -> String {
    format_status(device_id, Utc::now())
}
