use std::cell::RefCell;
use std::rc::Rc;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events; clones share the same buffer so a caller can hand
// one clone to the inventory and inspect the other.
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    events: Rc<RefCell<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<DomainEventType> {
        self.events.borrow().iter().map(|e| e.kind).collect()
    }

    pub fn count(&self, kind: DomainEventType) -> usize {
        self.events.borrow().iter().filter(|e| e.kind == kind).count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
