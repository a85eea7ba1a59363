//! Engine event queue
//!
//! Key principles:
//! - Immediate events are delivered on the next tick
//! - Deferred events carry a delivery time and are held until the
//!   simulation clock reaches it
//! - Delivery happens on the frame tick, on the same thread as every other
//!   scene mutation — there is no callback reentrancy
//!
//! Scheduled removal is the whole reason this queue exists: a fade posts
//! `RemoveNode` at `now + duration` and the tick applies it when due.

use crate::scene::NodeKey;

/// Event type identification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A node was added to the scene
    NodeSpawned,
    /// A fade began on a node
    FadeStarted,
    /// Remove a node from the scene
    RemoveNode,
}

/// An event targeting a single scene node
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// What happened (or should happen)
    pub kind: EventKind,
    /// The node concerned
    pub node: NodeKey,
    /// Simulation time the event was created
    pub at: f64,
}

impl Event {
    /// Create a new event
    pub fn new(kind: EventKind, node: NodeKey, at: f64) -> Self {
        Self { kind, node, at }
    }
}

/// Queue with immediate and time-deferred delivery
#[derive(Debug, Default)]
pub struct EventQueue {
    immediate: Vec<Event>,
    deferred: Vec<(f64, Event)>,
}

impl EventQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event for delivery on the next tick
    pub fn send(&mut self, event: Event) {
        self.immediate.push(event);
    }

    /// Enqueue an event for delivery once the clock reaches `delivery_time`
    pub fn post(&mut self, delivery_time: f64, event: Event) {
        self.deferred.push((delivery_time, event));
    }

    /// Take every event that is due at `now`: all immediate events, then
    /// deferred events whose delivery time has passed, in posting order.
    pub fn drain_due(&mut self, now: f64) -> Vec<Event> {
        let mut due = std::mem::take(&mut self.immediate);

        let mut i = 0;
        while i < self.deferred.len() {
            if self.deferred[i].0 <= now {
                let (_, event) = self.deferred.remove(i);
                due.push(event);
            } else {
                i += 1;
            }
        }
        due
    }

    /// Number of deferred events still waiting
    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    /// Drop all queued events
    pub fn clear(&mut self) {
        self.immediate.clear();
        self.deferred.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn some_key() -> NodeKey {
        let mut map: SlotMap<NodeKey, ()> = SlotMap::with_key();
        map.insert(())
    }

    #[test]
    fn immediate_events_drain_once() {
        let mut queue = EventQueue::new();
        queue.send(Event::new(EventKind::NodeSpawned, some_key(), 0.0));

        assert_eq!(queue.drain_due(0.0).len(), 1);
        assert!(queue.drain_due(0.0).is_empty());
    }

    #[test]
    fn deferred_events_wait_for_their_time() {
        let mut queue = EventQueue::new();
        queue.post(1.0, Event::new(EventKind::RemoveNode, some_key(), 0.5));

        // Not due yet at t=0.5
        assert!(queue.drain_due(0.5).is_empty());
        assert_eq!(queue.pending_deferred(), 1);

        // Due at t=1.0
        assert_eq!(queue.drain_due(1.0).len(), 1);
        assert_eq!(queue.pending_deferred(), 0);
    }

    #[test]
    fn due_events_keep_posting_order() {
        let key_a = some_key();
        let key_b = some_key();
        let mut queue = EventQueue::new();
        queue.post(0.2, Event::new(EventKind::RemoveNode, key_a, 0.0));
        queue.post(0.1, Event::new(EventKind::RemoveNode, key_b, 0.0));

        let due = queue.drain_due(1.0);
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].node, key_a);
        assert_eq!(due[1].node, key_b);
    }

    #[test]
    fn clear_discards_everything() {
        let mut queue = EventQueue::new();
        queue.send(Event::new(EventKind::NodeSpawned, some_key(), 0.0));
        queue.post(9.0, Event::new(EventKind::RemoveNode, some_key(), 0.0));

        queue.clear();
        assert!(queue.drain_due(100.0).is_empty());
    }
}
