use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use simvar_types::Value;

use crate::{AddressSpace, SharedSource, SourceHandle, SpaceError, VariableSpec};

struct Installed {
    spec: VariableSpec,
    source: SharedSource,
}

struct MemorySpaceInner {
    next_handle: u64,
    installed: HashMap<u64, Installed>,
}

/// An [AddressSpace] implementation that holds installed variables in process
/// memory.
///
/// Cloning is cheap; clones operate on the same installed set, so a test can
/// keep one clone for inspection while the system under test owns another.
///
/// # Examples
///
/// ```
/// use simvar_space::memory::MemorySpace;
///
/// let space = MemorySpace::new();
/// assert_eq!(space.installed_count(), 0);
/// ```
#[derive(Clone)]
pub struct MemorySpace {
    available: Arc<AtomicBool>,
    inner: Arc<Mutex<MemorySpaceInner>>,
}

impl MemorySpace {
    pub fn new() -> Self {
        Self {
            available: Arc::new(AtomicBool::new(true)),
            inner: Arc::new(Mutex::new(MemorySpaceInner {
                next_handle: 0,
                installed: HashMap::new(),
            })),
        }
    }

    /// Marks the space available or unavailable.
    ///
    /// While unavailable every install and remove fails with
    /// [SpaceError::Unavailable]; installed variables keep answering reads.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn installed_count(&self) -> usize {
        self.inner.lock().unwrap().installed.len()
    }

    pub fn contains_node_id(&self, node_id: &str) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.installed.values().any(|i| i.spec.node_id == node_id)
    }

    /// Node ids of all installed variables, sorted.
    pub fn node_ids(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        let mut ids: Vec<String> = inner
            .installed
            .values()
            .map(|i| i.spec.node_id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// The spec the variable under `node_id` was installed with.
    pub fn spec(&self, node_id: &str) -> Option<VariableSpec> {
        let inner = self.inner.lock().unwrap();
        inner
            .installed
            .values()
            .find(|i| i.spec.node_id == node_id)
            .map(|i| i.spec.clone())
    }

    /// Dispatches a read against the variable installed under `node_id`, the
    /// way a protocol server would on a client read request.
    pub fn read(&self, node_id: &str) -> Option<Value> {
        let source = {
            let inner = self.inner.lock().unwrap();
            inner
                .installed
                .values()
                .find(|i| i.spec.node_id == node_id)
                .map(|i| i.source.clone())
        };
        source.map(|s| s.read())
    }
}

impl Default for MemorySpace {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressSpace for MemorySpace {
    async fn install(
        &self,
        spec: VariableSpec,
        source: SharedSource,
    ) -> Result<SourceHandle, SpaceError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(SpaceError::Unavailable);
        }
        let mut inner = self.inner.lock().unwrap();
        if inner
            .installed
            .values()
            .any(|i| i.spec.node_id == spec.node_id)
        {
            return Err(SpaceError::DuplicateNodeId(spec.node_id));
        }
        if inner
            .installed
            .values()
            .any(|i| i.spec.display_name == spec.display_name)
        {
            return Err(SpaceError::DuplicateName(spec.display_name));
        }
        inner.next_handle += 1;
        let handle = SourceHandle::new(inner.next_handle);
        inner.installed.insert(handle.raw(), Installed { spec, source });
        Ok(handle)
    }

    async fn remove(&self, handle: SourceHandle) -> Result<(), SpaceError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(SpaceError::Unavailable);
        }
        let mut inner = self.inner.lock().unwrap();
        match inner.installed.remove(&handle.raw()) {
            Some(_) => Ok(()),
            None => Err(SpaceError::UnknownHandle),
        }
    }
}
