use serde::{Deserialize, Serialize};

/// The primitive kinds a variable can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
    String,
}

/// A concrete value produced for a variable read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Boolean(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float(f32),
    Double(f64),
    Text(String),
}

impl Value {
    /// Coerces a raw sample into the representation for `datatype`.
    ///
    /// Integer kinds round to the nearest whole number and saturate at the
    /// type bounds. `Boolean` treats any non-zero sample as true.
    pub fn coerce(datatype: DataType, sample: f64) -> Value {
        match datatype {
            DataType::Boolean => Value::Boolean(sample != 0.0),
            DataType::Int16 => Value::Int16(sample.round() as i16),
            DataType::Int32 => Value::Int32(sample.round() as i32),
            DataType::Int64 => Value::Int64(sample.round() as i64),
            DataType::UInt16 => Value::UInt16(sample.round() as u16),
            DataType::UInt32 => Value::UInt32(sample.round() as u32),
            DataType::UInt64 => Value::UInt64(sample.round() as u64),
            DataType::Float => Value::Float(sample as f32),
            DataType::Double => Value::Double(sample),
            DataType::String => Value::Text(sample.to_string()),
        }
    }

    /// The kind of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Boolean(_) => DataType::Boolean,
            Value::Int16(_) => DataType::Int16,
            Value::Int32(_) => DataType::Int32,
            Value::Int64(_) => DataType::Int64,
            Value::UInt16(_) => DataType::UInt16,
            Value::UInt32(_) => DataType::UInt32,
            Value::UInt64(_) => DataType::UInt64,
            Value::Float(_) => DataType::Float,
            Value::Double(_) => DataType::Double,
            Value::Text(_) => DataType::String,
        }
    }

    /// The numeric contents widened to `f64`, if this is a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int16(v) => Some(*v as f64),
            Value::Int32(v) => Some(*v as f64),
            Value::Int64(v) => Some(*v as f64),
            Value::UInt16(v) => Some(*v as f64),
            Value::UInt32(v) => Some(*v as f64),
            Value::UInt64(v) => Some(*v as f64),
            Value::Float(v) => Some(*v as f64),
            Value::Double(v) => Some(*v),
            Value::Boolean(_) | Value::Text(_) => None,
        }
    }
}
