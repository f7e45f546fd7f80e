use async_trait::async_trait;

use crate::{SharedSource, SourceHandle, SpaceError, VariableSpec};

#[async_trait]
pub trait AddressSpace {
    /// Installs a readable variable backed by `source`.
    ///
    /// The source's [read](crate::ValueSource::read) is invoked on every
    /// protocol read until the variable is removed.
    ///
    /// # Returns
    ///
    /// - `Ok(handle)` identifying the installed variable
    /// - `Err(SpaceError::Unavailable)` if the space is not ready to accept installs
    /// - `Err(SpaceError::DuplicateNodeId)` / `Err(SpaceError::DuplicateName)` on collisions
    async fn install(
        &self,
        spec: VariableSpec,
        source: SharedSource,
    ) -> Result<SourceHandle, SpaceError>;

    /// Removes a previously installed variable.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the variable was removed
    /// - `Err(SpaceError::UnknownHandle)` if nothing is installed under `handle`
    async fn remove(&self, handle: SourceHandle) -> Result<(), SpaceError>;
}

pub type DynAddressSpace = dyn AddressSpace + Send + Sync;
