use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::serializer;

// DomainEventType defines the outcome being reported
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Issued,
    Returned,
    Rejected,
    Loaded,
    Saved,
    Failed,
}

// DomainEvent abstracts a notable outcome of an inventory operation
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub key: String,
    pub kind: DomainEventType,
    pub message: String,
    pub data: Value,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, key: &str, data: &T) -> Self {
        Self::build(name, key, DomainEventType::Added, "book added", to_data(data))
    }

    pub fn issued<T: Serialize>(name: &str, key: &str, data: &T) -> Self {
        Self::build(name, key, DomainEventType::Issued, "book issued", to_data(data))
    }

    pub fn returned<T: Serialize>(name: &str, key: &str, data: &T) -> Self {
        Self::build(name, key, DomainEventType::Returned, "book returned", to_data(data))
    }

    pub fn rejected(name: &str, key: &str, err: &LibraryError) -> Self {
        Self::build(name, key, DomainEventType::Rejected, err.to_string().as_str(), Value::Null)
    }

    pub fn loaded(name: &str, location: &str, count: usize) -> Self {
        Self::build(name, location, DomainEventType::Loaded,
                    format!("loaded {} books", count).as_str(), Value::from(count))
    }

    pub fn saved(name: &str, location: &str, count: usize) -> Self {
        Self::build(name, location, DomainEventType::Saved,
                    format!("saved {} books", count).as_str(), Value::from(count))
    }

    pub fn failed(name: &str, location: &str, err: &LibraryError) -> Self {
        Self::build(name, location, DomainEventType::Failed, err.to_string().as_str(), Value::Null)
    }

    // JSON form of the whole event, including its payload and timestamp
    pub fn to_json(&self) -> LibraryResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn build(name: &str, key: &str, kind: DomainEventType, message: &str, data: Value) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            key: key.to_string(),
            kind,
            message: message.to_string(),
            data,
            created_at: Utc::now().naive_utc(),
        }
    }
}

fn to_data<T: Serialize>(data: &T) -> Value {
    serde_json::to_value(data).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::core::library::LibraryError;
    use crate::utils::date::DATE_FMT;

    #[test]
    fn test_should_build_added() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("books", "key", &data);
        assert_eq!("books", event.name.as_str());
        assert_eq!("key", event.key.as_str());
        assert_eq!(DomainEventType::Added, event.kind);
        assert_eq!(1, event.data["a"]);
    }

    #[test]
    fn test_should_build_issued_and_returned() {
        let event = DomainEvent::issued("books", "key", &"data");
        assert_eq!(DomainEventType::Issued, event.kind);
        let event = DomainEvent::returned("books", "key", &"data");
        assert_eq!(DomainEventType::Returned, event.kind);
    }

    #[test]
    fn test_should_build_rejected() {
        let event = DomainEvent::rejected("books", "111", &LibraryError::not_found("no book 111"));
        assert_eq!(DomainEventType::Rejected, event.kind);
        assert_eq!("no book 111", event.message.as_str());
    }

    #[test]
    fn test_should_build_storage_events() {
        let event = DomainEvent::loaded("catalog", "catalog.json", 3);
        assert_eq!(DomainEventType::Loaded, event.kind);
        assert_eq!(3, event.data);
        let event = DomainEvent::saved("catalog", "catalog.json", 2);
        assert_eq!(DomainEventType::Saved, event.kind);
        let event = DomainEvent::failed("catalog", "catalog.json", &LibraryError::serialization("bad"));
        assert_eq!(DomainEventType::Failed, event.kind);
        assert_eq!("catalog.json", event.key.as_str());
    }

    #[test]
    fn test_should_give_unique_event_ids() {
        let first = DomainEvent::saved("catalog", "catalog.json", 0);
        let second = DomainEvent::saved("catalog", "catalog.json", 0);
        assert_ne!(first.event_id, second.event_id);
    }

    #[test]
    fn test_should_render_event_as_json() {
        let event = DomainEvent::added("books", "111", &HashMap::from([("title", "Dune")]));
        let json = event.to_json().expect("should write event");
        let value: serde_json::Value = serde_json::from_str(json.as_str()).expect("should read json");
        assert_eq!("Dune", value["data"]["title"]);
        assert_eq!("Added", value["kind"]);
        assert_eq!(event.created_at.format(DATE_FMT).to_string(), value["created_at"]);
        let loaded: DomainEvent = serde_json::from_str(json.as_str()).expect("should read event");
        assert_eq!(event.event_id, loaded.event_id);
    }
}
