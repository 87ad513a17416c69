//! Typed publish/subscribe registry for game events.
//!
//! Listeners are grouped by the Rust type of the event they accept. Raising
//! an event of type `E` calls every listener subscribed to `E`, in
//! subscription order. The bus is an ordinary owned value; share it however
//! the game shares the rest of its state.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;

use log::debug;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Slot<E> {
    id: ListenerId,
    listener: Box<dyn Fn(&E)>,
}

/// Event listeners keyed by event type.
#[derive(Default)]
pub struct EventBus {
    /// `TypeId::of::<E>()` → `Vec<Slot<E>>`.
    listeners: HashMap<TypeId, Box<dyn Any>>,
    next_id: u64,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    fn slots<E: 'static>(&self) -> Option<&Vec<Slot<E>>> {
        self.listeners
            .get(&TypeId::of::<E>())
            .and_then(|b| b.downcast_ref::<Vec<Slot<E>>>())
    }

    /// Register `listener` for events of type `E`.
    pub fn subscribe<E: 'static>(&mut self, listener: impl Fn(&E) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        let slots = self
            .listeners
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(Vec::<Slot<E>>::new()));
        if let Some(slots) = slots.downcast_mut::<Vec<Slot<E>>>() {
            slots.push(Slot {
                id,
                listener: Box::new(listener),
            });
        }
        debug!("subscribed {:?} to {}", id, type_name::<E>());
        id
    }

    /// Remove a listener previously registered for `E`.
    ///
    /// Returns `true` if the listener was found. When the last listener of a
    /// type goes, the type is dropped from the bus.
    pub fn unsubscribe<E: 'static>(&mut self, id: ListenerId) -> bool {
        let key = TypeId::of::<E>();
        let Some(slots) = self
            .listeners
            .get_mut(&key)
            .and_then(|b| b.downcast_mut::<Vec<Slot<E>>>())
        else {
            return false;
        };
        let before = slots.len();
        slots.retain(|s| s.id != id);
        let removed = slots.len() != before;
        if slots.is_empty() {
            self.listeners.remove(&key);
        }
        if removed {
            debug!("unsubscribed {:?} from {}", id, type_name::<E>());
        }
        removed
    }

    /// Deliver `event` to every listener of `E`.
    ///
    /// Returns `true` if at least one listener was called.
    pub fn raise<E: 'static>(&self, event: &E) -> bool {
        match self.slots::<E>() {
            Some(slots) if !slots.is_empty() => {
                for s in slots {
                    (s.listener)(event);
                }
                true
            }
            _ => false,
        }
    }

    /// Number of listeners registered for `E`.
    pub fn listener_count<E: 'static>(&self) -> usize {
        self.slots::<E>().map_or(0, Vec::len)
    }

    /// Whether no listener of any type is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("event_types", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use tilesearch_core::Point;

    #[derive(Debug, PartialEq)]
    struct UnitMoved {
        from: Point,
        to: Point,
    }

    #[derive(Debug, PartialEq)]
    struct TurnEnded(u32);

    #[test]
    fn raise_reaches_matching_listeners_in_order() {
        let mut bus = EventBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l1 = Rc::clone(&log);
        bus.subscribe(move |e: &UnitMoved| l1.borrow_mut().push(format!("a {}", e.to)));
        let l2 = Rc::clone(&log);
        bus.subscribe(move |e: &UnitMoved| l2.borrow_mut().push(format!("b {}", e.from)));
        let l3 = Rc::clone(&log);
        bus.subscribe(move |e: &TurnEnded| l3.borrow_mut().push(format!("turn {}", e.0)));

        assert!(bus.raise(&UnitMoved {
            from: Point::new(0, 0),
            to: Point::new(1, 0),
        }));
        assert_eq!(*log.borrow(), vec!["a (1,0)", "b (0,0)"]);

        assert!(bus.raise(&TurnEnded(3)));
        assert_eq!(log.borrow().last().map(String::as_str), Some("turn 3"));
    }

    #[test]
    fn raise_without_listeners() {
        let bus = EventBus::new();
        assert!(!bus.raise(&TurnEnded(1)));
        assert!(bus.is_empty());
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let mut bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));
        let h1 = Rc::clone(&hits);
        let a = bus.subscribe(move |_: &TurnEnded| *h1.borrow_mut() += 1);
        let h2 = Rc::clone(&hits);
        let b = bus.subscribe(move |_: &TurnEnded| *h2.borrow_mut() += 10);
        assert_eq!(bus.listener_count::<TurnEnded>(), 2);

        assert!(bus.unsubscribe::<TurnEnded>(a));
        assert!(!bus.unsubscribe::<TurnEnded>(a));
        bus.raise(&TurnEnded(0));
        assert_eq!(*hits.borrow(), 10);

        assert!(bus.unsubscribe::<TurnEnded>(b));
        assert_eq!(bus.listener_count::<TurnEnded>(), 0);
        assert!(bus.is_empty());
        assert!(!bus.raise(&TurnEnded(0)));
    }

    #[test]
    fn unsubscribe_checks_event_type() {
        let mut bus = EventBus::new();
        let id = bus.subscribe(|_: &TurnEnded| {});
        assert!(!bus.unsubscribe::<UnitMoved>(id));
        assert_eq!(bus.listener_count::<TurnEnded>(), 1);
    }
}
