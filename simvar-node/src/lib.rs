//! Part of [simvar](https://crates.io/crates/simvar), a simulated industrial variable server.
//!
//! This library holds the simulation core. [waveform] computes sample values
//! from a shape, a range and the current instant; [Binder] keeps the exposed
//! address-space variable set consistent with the catalogue; [Simulator] is
//! the service handle that catalogue mutations flow through.

mod binder;
mod builder;
mod error;
mod node;
mod source;

pub mod waveform;

pub use binder::{BindError, Binder};
pub use builder::SimulatorBuilder;
pub use error::ServiceError;
pub use node::Simulator;
