use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{utils, DataType, Waveform};

/// Error types for definition validation.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("{0:?} is not a valid browse name")]
    InvalidBrowseName(String),
    #[error("node id must not be empty")]
    EmptyNodeId,
    #[error("range bounds must be finite")]
    NonFiniteRange,
    #[error("minimum {min} exceeds maximum {max}")]
    InvertedRange { min: f64, max: f64 },
}

/// A named, typed, ranged configuration describing one simulated data point.
///
/// Serializes in the camelCase form used by the catalogue import/export
/// format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDefinition {
    /// Unique identifier, assigned at creation, immutable.
    pub id: Uuid,
    /// Human readable name, unique across the catalogue.
    pub browse_name: String,
    /// Address-space node id, unique across the catalogue.
    pub node_id: String,
    /// The kind computed samples are coerced to before exposure.
    pub data_type: DataType,
    /// Advisory lower bound in milliseconds on how often readers may be
    /// notified of new values. Passed through to the address space unchanged.
    pub minimum_sampling_interval: u64,
    pub minimum: f64,
    pub maximum: f64,
    /// Waveform selector. Ignored when `data_type` is `Boolean`.
    pub value_type: Waveform,
}

impl VariableDefinition {
    /// Checks the definition against the catalogue invariants.
    ///
    /// Inverted ranges (`minimum > maximum`) are rejected rather than
    /// silently swapped.
    pub fn validate(&self) -> Result<(), ValidationError> {
        utils::validate_browse_name(&self.browse_name)?;
        if self.node_id.is_empty() {
            return Err(ValidationError::EmptyNodeId);
        }
        if !self.minimum.is_finite() || !self.maximum.is_finite() {
            return Err(ValidationError::NonFiniteRange);
        }
        if self.minimum > self.maximum {
            return Err(ValidationError::InvertedRange {
                min: self.minimum,
                max: self.maximum,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition() -> VariableDefinition {
        VariableDefinition {
            id: Uuid::new_v4(),
            browse_name: "Temperature".into(),
            node_id: "ns=1;s=Temperature".into(),
            data_type: DataType::Double,
            minimum_sampling_interval: 100,
            minimum: -50.0,
            maximum: 100.0,
            value_type: Waveform::Triangle,
        }
    }

    #[test]
    fn valid_definition_passes() {
        assert!(definition().validate().is_ok());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut def = definition();
        def.minimum = 10.0;
        def.maximum = -10.0;
        assert_eq!(
            def.validate(),
            Err(ValidationError::InvertedRange {
                min: 10.0,
                max: -10.0
            })
        );
    }

    #[test]
    fn non_finite_range_is_rejected() {
        let mut def = definition();
        def.maximum = f64::NAN;
        assert_eq!(def.validate(), Err(ValidationError::NonFiniteRange));
    }

    #[test]
    fn empty_node_id_is_rejected() {
        let mut def = definition();
        def.node_id = String::new();
        assert_eq!(def.validate(), Err(ValidationError::EmptyNodeId));
    }

    #[test]
    fn serializes_in_camel_case() {
        let json = serde_json::to_value(definition()).unwrap();
        assert!(json.get("browseName").is_some());
        assert!(json.get("minimumSamplingInterval").is_some());
        assert_eq!(json["dataType"], "Double");
        assert_eq!(json["valueType"], "Triangle");
    }
}
