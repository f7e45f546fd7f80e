use simvar_catalog::StoreError;
use thiserror::Error;

use crate::BindError;

/// Error types for catalogue-mutating service operations.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The catalogue itself rejected the mutation; nothing changed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The catalogue write succeeded but the exposed variable set could not
    /// be rebuilt. The live set is stale until a retried mutation or
    /// [resync](crate::Simulator::resync) converges it.
    #[error("catalogue updated but not yet exposed: {0}")]
    StaleExposure(#[from] BindError),
}
