use tracing::{error, info, warn};
use crate::core::events::{DomainEvent, DomainEventType};
use crate::gateway::events::EventPublisher;

// LogPublisher renders events through the tracing subscriber installed by the binary.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) {
        let json = event.to_json().unwrap_or_else(|err| format!("{{\"error\": \"{}\"}}", err));
        match event.kind {
            DomainEventType::Failed => {
                error!(key = %event.key, event = %json, "{} failed: {}", event.name, event.message);
            }
            DomainEventType::Rejected => {
                warn!(key = %event.key, event = %json, "{} rejected: {}", event.name, event.message);
            }
            _ => {
                info!(key = %event.key, event = %json, "{}: {}", event.name, event.message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::DomainEvent;
    use crate::core::library::LibraryError;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[test]
    fn test_should_publish_to_logs() {
        let publisher = LogPublisher::new();
        publisher.publish(&DomainEvent::added("books", "111", &"Dune"));
        publisher.publish(&DomainEvent::rejected("books", "111", &LibraryError::duplicate_key("dup")));
        publisher.publish(&DomainEvent::failed("catalog", "catalog.json", &LibraryError::serialization("bad")));
    }
}
