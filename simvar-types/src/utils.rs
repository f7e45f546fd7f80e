use std::time::{SystemTime, UNIX_EPOCH};

use crate::ValidationError;

/// Get the current unix timestamp in milliseconds
pub fn timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}

/// Get the current wall-clock time in fractional seconds.
///
/// Used as the waveform phase; same instant produces the same phase across
/// concurrent readers.
pub fn clock_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs_f64()
}

/// Derive the address-space node id for a browse name
pub fn derive_node_id(browse_name: &str) -> String {
    format!("ns=1;s={browse_name}")
}

/// Validate a provided browse name value
pub fn validate_browse_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::InvalidBrowseName(name.into()));
    }
    for c in name.chars() {
        if c.is_control() || matches!(c, ';' | '=') {
            return Err(ValidationError::InvalidBrowseName(name.into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_browse_name_valid_strings() {
        assert!(validate_browse_name("Temperature").is_ok());
        assert!(validate_browse_name("Sensor_01").is_ok());
        assert!(validate_browse_name("pH").is_ok());
    }

    #[test]
    fn test_validate_browse_name_invalid_strings() {
        assert!(validate_browse_name("").is_err());
        assert!(validate_browse_name("a;b").is_err());
        assert!(validate_browse_name("a=b").is_err());
        assert!(validate_browse_name("a\nb").is_err());
    }

    #[test]
    fn test_derive_node_id() {
        assert_eq!(derive_node_id("Temperature"), "ns=1;s=Temperature");
    }
}
