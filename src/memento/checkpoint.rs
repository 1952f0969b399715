use super::errors::MementoResult;
use super::snapshot::{Memento, MementoConvertible};
use dashmap::DashMap;

/// Named snapshot storage owned by the caller
pub trait CheckpointStore: Send + Sync {
    /// Store a snapshot, replacing any previous one with the same name
    fn save(&self, name: &str, memento: Memento);

    fn restore(&self, name: &str) -> Option<Memento>;

    fn remove(&self, name: &str) -> Option<Memento>;

    /// Names of all stored snapshots, sorted
    fn names(&self) -> Vec<String>;
}

/// Process-local checkpoint store
#[derive(Debug, Default)]
pub struct InMemoryCheckpointStore {
    checkpoints: DashMap<String, Memento>,
}

impl InMemoryCheckpointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

impl CheckpointStore for InMemoryCheckpointStore {
    fn save(&self, name: &str, memento: Memento) {
        tracing::debug!(checkpoint = name, fields = memento.len(), "Checkpoint saved");
        self.checkpoints.insert(name.to_string(), memento);
    }

    fn restore(&self, name: &str) -> Option<Memento> {
        self.checkpoints.get(name).map(|entry| entry.value().clone())
    }

    fn remove(&self, name: &str) -> Option<Memento> {
        self.checkpoints.remove(name).map(|(_, memento)| memento)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .checkpoints
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }
}

/// Capture `originator` and store it under `name`
pub fn save_checkpoint<T: MementoConvertible>(
    store: &dyn CheckpointStore,
    name: &str,
    originator: &T,
) {
    store.save(name, originator.to_memento());
}

/// Rebuild a value from the snapshot stored under `name`
///
/// `Ok(None)` means no snapshot exists; an existing but unusable snapshot
/// is an error.
pub fn restore_checkpoint<T: MementoConvertible>(
    store: &dyn CheckpointStore,
    name: &str,
) -> MementoResult<Option<T>> {
    store
        .restore(name)
        .map(|memento| T::from_memento(&memento))
        .transpose()
}
