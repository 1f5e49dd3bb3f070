//! Redaction of raw cell values in log events.
//!
//! Cell values may identify patients. Library crates pass every raw value
//! through [`redact_value`] before logging it; the binary flips the switch
//! when the operator asks for row-level logging.

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when row-level logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

pub fn set_log_data_enabled(enabled: bool) {
    LOG_DATA_ENABLED.store(enabled, Ordering::Release);
}

/// Returns true if row-level logging is explicitly enabled.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Acquire)
}

/// Returns the input value when row-level logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_hidden_until_enabled() {
        set_log_data_enabled(false);
        assert_eq!(redact_value("PA1234"), REDACTED_VALUE);
        set_log_data_enabled(true);
        assert_eq!(redact_value("PA1234"), "PA1234");
        set_log_data_enabled(false);
    }
}
