use crate::app::ConfigStore;
use crate::ports::{CompletionClient, KeyValueStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CompletionClient, S: KeyValueStore> {
    client: C,
    store: ConfigStore<S>,
}

impl<C: CompletionClient, S: KeyValueStore> AppContext<C, S> {
    pub fn new(client: C, storage: S) -> Self {
        Self { client, store: ConfigStore::new(storage) }
    }

    pub fn store(&self) -> &ConfigStore<S> {
        &self.store
    }

    /// Split into owned parts, e.g. to start a workflow session.
    pub fn into_parts(self) -> (C, ConfigStore<S>) {
        (self.client, self.store)
    }
}
