use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use simvar_space::{DynAddressSpace, SourceHandle, SpaceError, VariableSpec};
use simvar_types::VariableDefinition;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::timeout;

use crate::source::WaveSource;

/// Budget for a single address-space call before the rebuild is abandoned.
const SPACE_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Error types for binding-set rebuilds.
#[derive(Error, Debug)]
pub enum BindError {
    #[error("the address space is unavailable")]
    Unavailable,
    #[error("{0}")]
    Duplicate(SpaceError),
    #[error("the address space rejected an install: {0}")]
    Rejected(SpaceError),
    #[error("the address space did not answer within {}s", SPACE_CALL_TIMEOUT.as_secs())]
    Timeout,
}

impl From<SpaceError> for BindError {
    fn from(value: SpaceError) -> Self {
        match value {
            SpaceError::Unavailable => BindError::Unavailable,
            SpaceError::DuplicateNodeId(_) | SpaceError::DuplicateName(_) => {
                BindError::Duplicate(value)
            }
            other => BindError::Rejected(other),
        }
    }
}

struct BinderInner {
    installed: Vec<SourceHandle>,
}

/// Keeps the installed value-source set consistent with the catalogue.
///
/// All rebuilds run through a single critical section: concurrent catalogue
/// mutations queue and apply their snapshots whole, in lock-acquisition
/// order, so the exposed set always equals one mutation's catalogue and never
/// a mix of two.
pub struct Binder {
    inner: Mutex<BinderInner>,
}

impl Binder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BinderInner {
                installed: Vec::new(),
            }),
        }
    }

    /// Replaces the installed set with one value source per definition.
    ///
    /// The removal pass always runs to completion; individual removal
    /// failures are logged and tolerated since the space may already have
    /// dropped the node. The install pass aborts on the first error, leaving
    /// the space with only the sources installed so far — the error is
    /// surfaced to the caller and a later rebuild converges the set.
    pub async fn rebuild(
        &self,
        space: &DynAddressSpace,
        definitions: Vec<VariableDefinition>,
    ) -> Result<(), BindError> {
        let mut inner = self.inner.lock().await;

        let previous = std::mem::take(&mut inner.installed);
        let removed = previous.len();
        for handle in previous {
            match timeout(SPACE_CALL_TIMEOUT, space.remove(handle)).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => warn!("Failed to remove source {}: {e}", handle.raw()),
                Err(_) => return Err(BindError::Timeout),
            }
        }
        debug!("Removed {removed} installed sources");

        for definition in definitions {
            let spec = VariableSpec {
                node_id: definition.node_id.clone(),
                display_name: definition.browse_name.clone(),
                data_type: definition.data_type,
                sampling_interval: definition.minimum_sampling_interval,
            };
            let source = Arc::new(WaveSource::new(definition));
            match timeout(SPACE_CALL_TIMEOUT, space.install(spec, source)).await {
                Ok(Ok(handle)) => inner.installed.push(handle),
                Ok(Err(e)) => return Err(e.into()),
                Err(_) => return Err(BindError::Timeout),
            }
        }
        info!("Exposing {} variables", inner.installed.len());
        Ok(())
    }

    /// Number of sources the binder believes are installed.
    pub async fn installed_count(&self) -> usize {
        self.inner.lock().await.installed.len()
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}
