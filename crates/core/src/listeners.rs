//! Event subscription.
//!
//! Subscribers are kept in one list per [`Event`] and called synchronously, in
//! registration order, at the point the engine emits. Handlers never receive a
//! reference to the engine, so they cannot re-enter it mid-tick; a host that
//! wants to react with commands forwards events (e.g. over a channel) and acts
//! on its next loop turn.

use std::fmt;

use crate::types::Event;

pub type Handler = Box<dyn FnMut() + Send>;
pub type AnyHandler = Box<dyn FnMut(Event) + Send>;

#[derive(Default)]
pub struct Listeners {
    per_event: [Vec<Handler>; Event::COUNT],
    any: Vec<AnyHandler>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, event: Event, handler: impl FnMut() + Send + 'static) {
        self.per_event[event.index()].push(Box::new(handler));
    }

    pub fn subscribe_all(&mut self, handler: impl FnMut(Event) + Send + 'static) {
        self.any.push(Box::new(handler));
    }

    pub fn emit(&mut self, event: Event) {
        for handler in &mut self.per_event[event.index()] {
            handler();
        }
        for handler in &mut self.any {
            handler(event);
        }
    }

    /// Subscribers that will see `event` (per-event plus catch-all).
    pub fn count(&self, event: Event) -> usize {
        self.per_event[event.index()].len() + self.any.len()
    }

    pub fn clear(&mut self) {
        for list in &mut self.per_event {
            list.clear();
        }
        self.any.clear();
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for event in Event::ALL {
            map.entry(&event.as_str(), &self.per_event[event.index()].len());
        }
        map.entry(&"any", &self.any.len());
        map.finish()
    }
}
