use serde::{Deserialize, Serialize};
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> AppState {
        AppState {
            config,
            store,
        }
    }

    pub fn from_env() -> AppState {
        AppState::new(Configuration::from_env(), RepositoryStore::JsonFile)
    }
}
