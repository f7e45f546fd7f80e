use std::sync::Arc;

use simvar_types::{DataType, Value};
use thiserror::Error;

/// Error types for address space operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpaceError {
    #[error("the address space is unavailable")]
    Unavailable,
    #[error("a variable with node id {0:?} is already installed")]
    DuplicateNodeId(String),
    #[error("a variable with display name {0:?} is already installed")]
    DuplicateName(String),
    #[error("no variable is installed under the given handle")]
    UnknownHandle,
}

/// Identifies one installed value source.
///
/// Returned by [AddressSpace::install](crate::AddressSpace::install) and
/// consumed by [AddressSpace::remove](crate::AddressSpace::remove).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceHandle(u64);

impl SourceHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Describes a variable to install, independent of how its value is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSpec {
    pub node_id: String,
    pub display_name: String,
    pub data_type: DataType,
    /// Advisory sampling interval hint in milliseconds, forwarded to protocol
    /// readers unchanged.
    pub sampling_interval: u64,
}

/// Produces the current value for an installed variable.
///
/// Invoked by the address space on every protocol read, possibly from many
/// reader contexts at once; implementations must not block.
pub trait ValueSource: Send + Sync {
    fn read(&self) -> Value;
}

pub type SharedSource = Arc<dyn ValueSource>;
