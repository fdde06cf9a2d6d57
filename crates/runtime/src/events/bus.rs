//! Topic-based event bus implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{LogEvent, RejectionEvent, StepEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Completed engine steps
    Battle,
    /// New battle log lines
    Log,
    /// Rejected actions
    Diagnostics,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Step(StepEvent),
    Log(LogEvent),
    Rejected(RejectionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Step(_) => Topic::Battle,
            Event::Log(_) => Topic::Log,
            Event::Rejected(_) => Topic::Diagnostics,
        }
    }
}

struct Channels {
    battle: broadcast::Sender<Event>,
    log: broadcast::Sender<Event>,
    diagnostics: broadcast::Sender<Event>,
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; events sent while a topic
/// has no subscribers are dropped.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                battle: broadcast::channel(capacity).0,
                log: broadcast::channel(capacity).0,
                diagnostics: broadcast::channel(capacity).0,
            }),
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Battle => &self.channels.battle,
            Topic::Log => &self.channels.log,
            Topic::Diagnostics => &self.channels.diagnostics,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
