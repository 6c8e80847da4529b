use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::gateway::GatewayPublisherVia;

// Repository persists a whole ordered collection at once; there are no partial writes.
pub trait Repository<Entity> {
    // loads every entity, NotFound when nothing has been stored yet
    fn load(&self) -> LibraryResult<Vec<Entity>>;

    // replaces the stored collection with entities
    fn save(&self, entities: &[Entity]) -> LibraryResult<usize>;

    // where the collection lives, used when reporting
    fn location(&self) -> String;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    InMemory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia {
        match self {
            RepositoryStore::JsonFile => { GatewayPublisherVia::Logs }
            RepositoryStore::InMemory => { GatewayPublisherVia::Memory }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_pick_publisher_for_store() {
        assert_eq!(GatewayPublisherVia::Logs, RepositoryStore::JsonFile.gateway_publisher());
        assert_eq!(GatewayPublisherVia::Memory, RepositoryStore::InMemory.gateway_publisher());
    }
}
