use std::sync::Arc;

use log::{error, info};
use simvar_catalog::{seed, Catalog, NewVariable, StoreError, VariableUpdate};
use simvar_space::DynAddressSpace;
use simvar_types::{utils, VariableDefinition};
use uuid::Uuid;

use crate::{BindError, Binder, ServiceError};

/// A handle for operating the simulation server.
///
/// Cloning is cheap; clones operate on the same catalogue, binder and address
/// space. Every mutating operation writes the catalogue first and then awaits
/// a full rebuild of the exposed variable set — the mutation has not
/// succeeded until both are done.
#[derive(Clone)]
pub struct Simulator {
    pub(crate) space: Arc<DynAddressSpace>,
    pub(crate) catalog: Catalog,
    pub(crate) binder: Arc<Binder>,
}

impl Simulator {
    /// All definitions currently in the catalogue, ordered by browse name.
    pub fn variables(&self) -> Vec<VariableDefinition> {
        self.catalog.list_all()
    }

    pub fn variable(&self, id: Uuid) -> Result<VariableDefinition, StoreError> {
        self.catalog.get(id)
    }

    pub async fn create_variable(
        &self,
        request: NewVariable,
    ) -> Result<VariableDefinition, ServiceError> {
        let definition = self.catalog.create(request)?;
        info!(
            "Created variable {} ({})",
            definition.browse_name, definition.id
        );
        self.resync().await?;
        Ok(definition)
    }

    pub async fn update_variable(
        &self,
        id: Uuid,
        request: VariableUpdate,
    ) -> Result<VariableDefinition, ServiceError> {
        let definition = self.catalog.update(id, request)?;
        info!(
            "Updated variable {} ({})",
            definition.browse_name, definition.id
        );
        self.resync().await?;
        Ok(definition)
    }

    pub async fn delete_variable(&self, id: Uuid) -> Result<(), ServiceError> {
        let definition = self.catalog.remove(id)?;
        info!(
            "Deleted variable {} ({})",
            definition.browse_name, definition.id
        );
        self.resync().await?;
        Ok(())
    }

    /// Replaces the whole catalogue with `definitions` and re-exposes it.
    ///
    /// Returns the number of definitions imported.
    pub async fn import(
        &self,
        definitions: Vec<VariableDefinition>,
    ) -> Result<usize, ServiceError> {
        let count = self.catalog.replace_all(definitions)?;
        info!("Imported {count} variables");
        self.resync().await?;
        Ok(count)
    }

    /// The current catalogue contents plus a timestamped backup file name.
    pub fn export(&self) -> (String, Vec<VariableDefinition>) {
        let filename = format!("backup-{}.json", utils::timestamp());
        (filename, self.catalog.list_all())
    }

    /// Empties the catalogue and tears down every exposed variable.
    pub async fn clear(&self) -> Result<(), ServiceError> {
        self.catalog.clear()?;
        info!("Cleared the catalogue");
        self.resync().await?;
        Ok(())
    }

    /// Inserts the default variable set and exposes the result.
    ///
    /// Returns the number of variables inserted; entries already present are
    /// skipped.
    pub async fn seed(&self) -> Result<usize, ServiceError> {
        let inserted = seed(&self.catalog)?;
        self.resync().await?;
        Ok(inserted)
    }

    /// Reconciles the exposed variable set with the current catalogue.
    ///
    /// Runs automatically after every catalogue mutation; call it directly to
    /// converge after a mutation reported
    /// [StaleExposure](crate::ServiceError::StaleExposure).
    pub async fn resync(&self) -> Result<(), BindError> {
        let definitions = self.catalog.list_all();
        if let Err(e) = self.binder.rebuild(self.space.as_ref(), definitions).await {
            error!("Rebuild failed, exposed set is stale: {e}");
            return Err(e);
        }
        Ok(())
    }
}
