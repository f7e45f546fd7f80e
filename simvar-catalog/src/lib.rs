//! Part of [simvar](https://crates.io/crates/simvar), a simulated industrial variable server.
//!
//! This library holds the catalogue: the authoritative, persisted set of
//! variable definitions that the exposed address space is rebuilt from after
//! every mutation.

mod request;
mod seed;
mod store;

pub use request::{NewVariable, VariableUpdate};
pub use seed::seed;
pub use store::{Catalog, StoreError};
