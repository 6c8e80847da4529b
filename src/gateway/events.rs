use crate::core::events::DomainEvent;

// EventPublisher receives every outcome the inventory reports. Publishing never fails the
// operation that produced the event.
pub trait EventPublisher {
    fn publish(&self, event: &DomainEvent);
}
