use std::cell::Cell;
use std::rc::Rc;

use super::*;

fn answer(statuses: &[&str]) -> ChatAnswer {
    ChatAnswer {
        message: "done".to_owned(),
        status_updates: statuses.iter().map(|s| (*s).to_owned()).collect(),
        logs: Vec::new(),
        database_response: None,
    }
}

struct DropFlag(Rc<Cell<bool>>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

// =============================================================
// StatusCadence
// =============================================================

#[test]
fn cadence_requires_status_updates() {
    let result = StatusCadence::new(answer(&[]));
    assert_eq!(result.unwrap_err().message, "done");
}

#[test]
fn cadence_advances_in_order_then_stops() {
    let mut cadence = StatusCadence::new(answer(&["a", "b"])).unwrap();
    assert_eq!(cadence.remaining(), 2);
    assert_eq!(cadence.advance(), Some("a"));
    assert_eq!(cadence.advance(), Some("b"));
    assert_eq!(cadence.advance(), None);
    assert_eq!(cadence.remaining(), 0);
}

#[test]
fn cadence_returns_answer_without_statuses() {
    let cadence = StatusCadence::new(answer(&["a"])).unwrap();
    let back = cadence.into_answer();
    assert_eq!(back.message, "done");
    assert!(back.status_updates.is_empty());
}

// =============================================================
// CadenceSlot
// =============================================================

#[test]
fn slot_ticks_through_statuses_then_exhausts() {
    let mut slot = CadenceSlot::default();
    let mut cadence = StatusCadence::new(answer(&["a", "b", "c"])).unwrap();
    assert_eq!(cadence.advance(), Some("a"));
    let (generation, displaced) = slot.install(cadence);
    assert!(displaced.is_none());

    assert!(matches!(slot.tick(generation), SlotTick::Show(s) if s == "b"));
    assert!(matches!(slot.tick(generation), SlotTick::Show(s) if s == "c"));
    assert!(matches!(slot.tick(generation), SlotTick::Exhausted(_)));
    assert!(!slot.is_active());
    assert!(matches!(slot.tick(generation), SlotTick::Stale));
}

#[test]
fn install_displaces_and_invalidates_previous() {
    let mut slot = CadenceSlot::default();
    let (first, _) = slot.install(StatusCadence::new(answer(&["a"])).unwrap());
    let (second, displaced) = slot.install(StatusCadence::new(answer(&["x"])).unwrap());
    assert_ne!(first, second);
    assert!(displaced.is_some());
    assert!(matches!(slot.tick(first), SlotTick::Stale));
    assert!(matches!(slot.tick(second), SlotTick::Show(s) if s == "x"));
}

#[test]
fn take_returns_timer_for_cancellation() {
    let dropped = Rc::new(Cell::new(false));
    let mut slot = CadenceSlot::default();
    let (generation, _) = slot.install(StatusCadence::new(answer(&["a"])).unwrap());
    assert!(slot.attach_timer(generation, Box::new(DropFlag(Rc::clone(&dropped)))).is_ok());

    let retired = slot.take().unwrap();
    assert!(!dropped.get());
    drop(retired);
    assert!(dropped.get());
}

#[test]
fn attach_timer_rejects_stale_generation() {
    let mut slot = CadenceSlot::default();
    let (generation, _) = slot.install(StatusCadence::new(answer(&["a"])).unwrap());
    let _ = slot.take();
    let rejected = slot.attach_timer(generation, Box::new(()));
    assert!(rejected.is_err());
}

#[test]
fn take_on_empty_slot_still_bumps_generation() {
    let mut slot = CadenceSlot::default();
    let before = slot.generation();
    assert!(slot.take().is_none());
    assert!(slot.generation() > before);
}
