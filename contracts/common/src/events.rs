//! Attestor Events
//!
//! Events are appended during a successful commit and consumed off-chain
//! for indexing and alerting. The log is append-only and ordered; records
//! carry no identity beyond their position.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::types::FieldElement;
use crate::Vec;

/// Event types for indexing and filtering
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum EventType {
    /// A new price value was committed
    Price = 0x01,
    /// The timestamp attached to a committed price
    Time = 0x02,
}

/// Events emitted by the verifier.
///
/// Every accepted update appends exactly one `Price` and one `Time` event,
/// in that order. Rejected updates emit nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub enum OracleEvent {
    /// Emitted when a verified price is committed
    Price {
        /// The committed value
        value: FieldElement,
    },
    /// Emitted immediately after `Price` with the attested timestamp
    Time {
        /// The provider's timestamp for the committed value
        timestamp: FieldElement,
    },
}

impl OracleEvent {
    /// Returns the event type for filtering
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Price { .. } => EventType::Price,
            Self::Time { .. } => EventType::Time,
        }
    }
}

// ============ Event Log ============

/// Append-only, ordered log of emitted events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<OracleEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Emit an event (append to the log)
    pub fn emit(&mut self, event: OracleEvent) {
        self.events.push(event);
    }

    /// Get all events in emission order
    pub fn events(&self) -> &[OracleEvent] {
        &self.events
    }

    /// Take ownership of all events
    pub fn into_events(self) -> Vec<OracleEvent> {
        self.events
    }

    /// Filter events by type
    pub fn filter_by_type(&self, event_type: EventType) -> Vec<&OracleEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Check if any events were emitted
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Get number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drain the log, returning the events in emission order
    pub fn drain(&mut self) -> Vec<OracleEvent> {
        core::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_order_preserved() {
        let mut log = EventLog::new();
        log.emit(OracleEvent::Price {
            value: FieldElement::from_u64(4200),
        });
        log.emit(OracleEvent::Time {
            timestamp: FieldElement::from_u64(1_000_000),
        });

        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[0].event_type(), EventType::Price);
        assert_eq!(log.events()[1].event_type(), EventType::Time);
    }

    #[test]
    fn test_filter_by_type() {
        let mut log = EventLog::new();
        for i in 0..3u64 {
            log.emit(OracleEvent::Price {
                value: FieldElement::from_u64(i),
            });
            log.emit(OracleEvent::Time {
                timestamp: FieldElement::from_u64(i),
            });
        }

        assert_eq!(log.filter_by_type(EventType::Price).len(), 3);
        assert_eq!(log.filter_by_type(EventType::Time).len(), 3);
    }

    #[test]
    fn test_drain_empties_the_log() {
        let mut log = EventLog::new();
        log.emit(OracleEvent::Price {
            value: FieldElement::ZERO,
        });

        let drained = log.drain();
        assert_eq!(drained.len(), 1);
        assert!(log.is_empty());
        assert!(!log.has_events());
    }
}
