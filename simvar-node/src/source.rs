use simvar_space::ValueSource;
use simvar_types::{utils, DataType, Value, VariableDefinition};

use crate::waveform;

/// A value source backed by the waveform engine.
///
/// Holds an immutable snapshot of the definition taken at install time; a
/// later catalogue update installs a fresh source rather than mutating this
/// one. Every read recomputes the value from the current wall clock.
pub(crate) struct WaveSource {
    definition: VariableDefinition,
}

impl WaveSource {
    pub(crate) fn new(definition: VariableDefinition) -> Self {
        Self { definition }
    }
}

impl ValueSource for WaveSource {
    fn read(&self) -> Value {
        let definition = &self.definition;
        if definition.data_type == DataType::Boolean {
            return Value::Boolean(waveform::sample_boolean());
        }
        let sample = waveform::sample(
            definition.value_type,
            definition.minimum,
            definition.maximum,
            utils::clock_seconds(),
        );
        Value::coerce(definition.data_type, sample)
    }
}
