//! Device identity lookup
//!
//! Derives a serial-number string for this machine:
//! - primary MAC address (colons stripped), when one exists
//! - hostname fallback
//! - `"unknown"` as a last resort
//!
//! The lookup runs on every call. Identity can be unavailable right after
//! boot and appear later, so callers re-query instead of caching.

use gethostname::gethostname;
use mac_address::get_mac_address;
use tracing::debug;

/// Supplies the device identifier stamped into every status message.
pub trait IdentityProvider {
    fn serial_number(&self) -> String;
}

/// Identity backed by the machine's own network hardware.
#[derive(Debug, Default)]
pub struct SystemIdentity;

impl SystemIdentity {
    pub fn new() -> Self {
        Self
    }
}

impl IdentityProvider for SystemIdentity {
    fn serial_number(&self) -> String {
        match get_mac_address() {
            Ok(Some(mac)) => return serial_from_mac(mac.bytes()),
            Ok(None) => debug!("no MAC address found, falling back to hostname"),
            Err(e) => debug!("MAC lookup failed ({}), falling back to hostname", e),
        }

        let hostname = gethostname().to_string_lossy().to_string();
        if hostname.is_empty() {
            "unknown".to_string()
        } else {
            hostname
        }
    }
}

/// Serial string from raw MAC bytes (lowercase hex, no separators).
fn serial_from_mac(bytes: [u8; 6]) -> String {
    format!(
        "{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
    )
}
