//! Event queue
//!
//! Engine callbacks can fire on the engine's internal threads. Handles to
//! this queue are cheap clones; producers push from anywhere and the
//! controller drains on its single sequence, so no store or tab field is
//! ever touched concurrently.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::EngineEvent;

#[derive(Clone, Default)]
pub struct EventQueue {
    inner: Arc<Mutex<VecDeque<EngineEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: EngineEvent) {
        tracing::trace!(event = ?event, "Queued engine event");
        self.inner.lock().push_back(event);
    }

    pub fn pop(&self) -> Option<EngineEvent> {
        self.inner.lock().pop_front()
    }

    /// Take everything queued so far, in arrival order.
    pub fn drain(&self) -> Vec<EngineEvent> {
        self.inner.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let queue = EventQueue::new();

        queue.push(EngineEvent::LoadFinished {
            tab_id: "a".to_string(),
        });
        queue.push(EngineEvent::LoadFinished {
            tab_id: "b".to_string(),
        });

        let events = queue.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], EngineEvent::LoadFinished { tab_id } if tab_id == "a"));
        assert!(matches!(&events[1], EngineEvent::LoadFinished { tab_id } if tab_id == "b"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clones_share_the_queue() {
        let queue = EventQueue::new();
        let producer = queue.clone();

        std::thread::spawn(move || {
            producer.push(EngineEvent::LoadFinished {
                tab_id: "t".to_string(),
            });
        })
        .join()
        .unwrap();

        assert_eq!(queue.len(), 1);
    }
}
