//! Part of [simvar](https://crates.io/crates/simvar), a simulated industrial variable server.
//!
//! This library defines the traits and types used to integrate a protocol
//! address space. The protocol stack itself (transport, encoding, sessions)
//! is an external capability; the simulation server only installs and removes
//! readable variables through the [AddressSpace] trait.
//!
//! # Feature Flags
//!
//! - `memory`: Enables the in-memory [AddressSpace] implementation. Disabled by default.

mod traits;
mod types;

pub use traits::{AddressSpace, DynAddressSpace};
pub use types::*;

/// A basic [AddressSpace] implementation backed by process memory
///
/// Useful for writing tests where it is not appropriate to be running a real
/// protocol server
#[cfg(any(feature = "memory", doc))]
pub mod memory;
