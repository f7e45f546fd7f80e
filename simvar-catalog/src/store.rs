use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::{debug, info};
use simvar_types::{utils, ValidationError, VariableDefinition};
use thiserror::Error;
use uuid::Uuid;

use crate::{NewVariable, VariableUpdate};

/// Error types for catalogue operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("variable with id {0} not found")]
    NotFound(Uuid),
    #[error("a variable with browse name {0:?} already exists")]
    BrowseNameTaken(String),
    #[error("a variable with node id {0:?} already exists")]
    NodeIdTaken(String),
    #[error("duplicate variable id {0} in import data")]
    DuplicateId(Uuid),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to persist catalogue: {0}")]
    Persist(#[from] std::io::Error),
    #[error("catalogue data is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

struct CatalogInner {
    variables: HashMap<Uuid, VariableDefinition>,
    path: Option<PathBuf>,
}

/// The authoritative set of variable definitions.
///
/// Cloning is cheap; clones share the same underlying catalogue. When opened
/// with a path, the full catalogue is rewritten to disk after every mutation.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<Mutex<CatalogInner>>,
}

impl Catalog {
    /// Creates an empty in-memory catalogue.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(CatalogInner {
                variables: HashMap::new(),
                path: None,
            })),
        }
    }

    /// Opens a catalogue persisted at `path`, loading any existing contents.
    ///
    /// A missing file means an empty catalogue; it is created on the first
    /// mutation.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let variables = match fs::read(&path) {
            Ok(bytes) => {
                let definitions: Vec<VariableDefinition> = serde_json::from_slice(&bytes)?;
                info!(
                    "Loaded {} variables from {}",
                    definitions.len(),
                    path.display()
                );
                definitions.into_iter().map(|d| (d.id, d)).collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            inner: Arc::new(Mutex::new(CatalogInner {
                variables,
                path: Some(path),
            })),
        })
    }

    /// All definitions, ordered by browse name.
    pub fn list_all(&self) -> Vec<VariableDefinition> {
        let inner = self.inner.lock().unwrap();
        Self::sorted(&inner)
    }

    pub fn get(&self, id: Uuid) -> Result<VariableDefinition, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner
            .variables
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    pub fn contains_node_id(&self, node_id: &str) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.variables.values().any(|v| v.node_id == node_id)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a definition from `request`, deriving the node id from the
    /// browse name when none is given.
    pub fn create(&self, request: NewVariable) -> Result<VariableDefinition, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let node_id = request
            .node_id
            .unwrap_or_else(|| utils::derive_node_id(&request.browse_name));
        let definition = VariableDefinition {
            id: Uuid::new_v4(),
            browse_name: request.browse_name,
            node_id,
            data_type: request.data_type,
            minimum_sampling_interval: request.minimum_sampling_interval,
            minimum: request.minimum,
            maximum: request.maximum,
            value_type: request.value_type,
        };
        definition.validate()?;
        Self::check_conflicts(&inner, &definition, None)?;
        inner.variables.insert(definition.id, definition.clone());
        Self::persist(&inner)?;
        Ok(definition)
    }

    /// Overwrites the fields present in `request`, preserving identity.
    pub fn update(
        &self,
        id: Uuid,
        request: VariableUpdate,
    ) -> Result<VariableDefinition, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let mut definition = inner
            .variables
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))?;
        if let Some(browse_name) = request.browse_name {
            definition.browse_name = browse_name;
        }
        if let Some(node_id) = request.node_id {
            definition.node_id = node_id;
        }
        if let Some(data_type) = request.data_type {
            definition.data_type = data_type;
        }
        if let Some(interval) = request.minimum_sampling_interval {
            definition.minimum_sampling_interval = interval;
        }
        if let Some(minimum) = request.minimum {
            definition.minimum = minimum;
        }
        if let Some(maximum) = request.maximum {
            definition.maximum = maximum;
        }
        if let Some(value_type) = request.value_type {
            definition.value_type = value_type;
        }
        definition.validate()?;
        Self::check_conflicts(&inner, &definition, Some(id))?;
        inner.variables.insert(id, definition.clone());
        Self::persist(&inner)?;
        Ok(definition)
    }

    pub fn remove(&self, id: Uuid) -> Result<VariableDefinition, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let definition = inner.variables.remove(&id).ok_or(StoreError::NotFound(id))?;
        Self::persist(&inner)?;
        Ok(definition)
    }

    /// Replaces the whole catalogue with `definitions`.
    ///
    /// The input is validated as a unit; on any error the previous contents
    /// are kept.
    pub fn replace_all(&self, definitions: Vec<VariableDefinition>) -> Result<usize, StoreError> {
        let mut variables = HashMap::with_capacity(definitions.len());
        let mut browse_names = HashSet::new();
        let mut node_ids = HashSet::new();
        for definition in definitions {
            definition.validate()?;
            if !browse_names.insert(definition.browse_name.clone()) {
                return Err(StoreError::BrowseNameTaken(definition.browse_name));
            }
            if !node_ids.insert(definition.node_id.clone()) {
                return Err(StoreError::NodeIdTaken(definition.node_id));
            }
            let id = definition.id;
            if variables.insert(id, definition).is_some() {
                return Err(StoreError::DuplicateId(id));
            }
        }

        let mut inner = self.inner.lock().unwrap();
        inner.variables = variables;
        Self::persist(&inner)?;
        Ok(inner.variables.len())
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.variables.clear();
        Self::persist(&inner)?;
        Ok(())
    }

    fn check_conflicts(
        inner: &CatalogInner,
        definition: &VariableDefinition,
        exclude: Option<Uuid>,
    ) -> Result<(), StoreError> {
        for other in inner.variables.values() {
            if Some(other.id) == exclude {
                continue;
            }
            if other.browse_name == definition.browse_name {
                return Err(StoreError::BrowseNameTaken(definition.browse_name.clone()));
            }
            if other.node_id == definition.node_id {
                return Err(StoreError::NodeIdTaken(definition.node_id.clone()));
            }
        }
        Ok(())
    }

    fn sorted(inner: &CatalogInner) -> Vec<VariableDefinition> {
        let mut definitions: Vec<VariableDefinition> =
            inner.variables.values().cloned().collect();
        definitions.sort_by(|a, b| a.browse_name.cmp(&b.browse_name));
        definitions
    }

    fn persist(inner: &CatalogInner) -> Result<(), StoreError> {
        let path = match &inner.path {
            Some(path) => path,
            None => return Ok(()),
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec_pretty(&Self::sorted(inner))?;
        fs::write(path, json)?;
        debug!(
            "Persisted {} variables to {}",
            inner.variables.len(),
            path.display()
        );
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
