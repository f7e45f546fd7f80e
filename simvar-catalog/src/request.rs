use serde::{Deserialize, Serialize};
use simvar_types::{DataType, Waveform};

/// Request payload for creating a variable definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVariable {
    pub browse_name: String,
    /// Derived from the browse name when absent.
    #[serde(default)]
    pub node_id: Option<String>,
    pub data_type: DataType,
    pub minimum_sampling_interval: u64,
    pub minimum: f64,
    pub maximum: f64,
    pub value_type: Waveform,
}

/// Request payload for updating a variable definition.
///
/// Absent fields keep their current value; the definition's id never changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariableUpdate {
    pub browse_name: Option<String>,
    pub node_id: Option<String>,
    pub data_type: Option<DataType>,
    pub minimum_sampling_interval: Option<u64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub value_type: Option<Waveform>,
}
