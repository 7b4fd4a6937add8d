use std::sync::Arc;

use crate::infra::config::Config;
use crate::store::JsonFileStore;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: JsonFileStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = JsonFileStore::new(config.storage.data_file.clone());
        Self {
            config: Arc::new(config),
            store,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &JsonFileStore {
        &self.store
    }
}
