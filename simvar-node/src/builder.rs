use std::sync::Arc;

use simvar_catalog::Catalog;
use simvar_space::AddressSpace;

use crate::{Binder, Simulator};

/// A builder for creating and configuring [Simulator] instances.
pub struct SimulatorBuilder {
    space: Arc<dyn AddressSpace + Send + Sync>,
    catalog: Option<Catalog>,
}

impl SimulatorBuilder {
    /// Creates a new builder over the given address space.
    pub fn new<S: AddressSpace + Send + Sync + 'static>(space: S) -> Self {
        Self {
            space: Arc::new(space),
            catalog: None,
        }
    }

    /// Uses `catalog` as the backing store instead of a fresh in-memory one.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Builds the [Simulator] with the configured settings.
    ///
    /// The exposed variable set starts empty; call
    /// [resync](Simulator::resync) (or any mutation) to expose the
    /// catalogue's current contents.
    pub fn build(self) -> Simulator {
        Simulator {
            space: self.space,
            catalog: self.catalog.unwrap_or_default(),
            binder: Arc::new(Binder::new()),
        }
    }
}
