use super::*;

#[test]
fn new_slot_has_nothing_pending() {
    let slot = RevertSlot::default();
    assert_eq!(slot.due_ms(), None);
}

#[test]
fn arm_sets_due_time_relative_to_now() {
    let mut slot = RevertSlot::default();
    slot.arm(1_000.0, 3000);
    assert_eq!(slot.due_ms(), Some(4_000.0));
}

#[test]
fn fire_with_live_ticket_clears_pending() {
    let mut slot = RevertSlot::default();
    let ticket = slot.arm(0.0, 300);
    assert!(slot.fire(ticket));
    assert_eq!(slot.due_ms(), None);
    assert!(!slot.fire(ticket));
}

#[test]
fn rearm_supersedes_older_ticket() {
    let mut slot = RevertSlot::default();
    let first = slot.arm(0.0, 3000);
    let second = slot.arm(1_500.0, 3000);
    assert_ne!(first, second);
    assert!(!slot.fire(first));
    assert_eq!(slot.due_ms(), Some(4_500.0));
    assert!(slot.fire(second));
}
