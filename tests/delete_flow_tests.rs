//! End-to-end tests for the drag-to-delete confirmation flow
mod common;

use common::{folder_named, seeded_store};
use ddl_todo::{DRAG_DELETE_THRESHOLD, DeleteFlow};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_threshold_is_fifty_points() {
    assert_eq!(DRAG_DELETE_THRESHOLD, 50.0);
}

#[test]
fn test_full_gesture_deletes_folder_and_tasks() {
    let mut store = seeded_store();
    let health = folder_named(&store, "Health");
    assert_eq!(store.tasks_for_folder(health).len(), 2);

    // Long-press drag over the folder card, released well past the
    // threshold, then the dialog's destructive button
    store.mark_folder_for_deletion(health);
    store.finish_folder_drag(72.0, -14.0);
    assert_eq!(store.delete_flow(), DeleteFlow::Confirming(health));

    let removed = store.confirm_folder_deletion().expect("dialog confirmed");
    assert_eq!(removed.id, health);

    assert_eq!(store.delete_flow(), DeleteFlow::Idle);
    assert!(store.find_folder(health).is_none());
    assert!(store.tasks().iter().all(|t| t.folder_id != health));
    assert_eq!(store.folder_count(), 3);
    assert_eq!(store.task_count(), 4);
}

#[test]
fn test_short_drag_keeps_everything() {
    let mut store = seeded_store();
    let work = folder_named(&store, "Work");

    store.mark_folder_for_deletion(work);
    store.finish_folder_drag(12.0, 30.0);

    assert_eq!(store.delete_flow(), DeleteFlow::Idle);
    assert!(store.find_folder(work).is_some());
    assert_eq!(store.task_count(), 6);
}

#[test]
fn test_cancelled_dialog_keeps_everything() {
    let mut store = seeded_store();
    let work = folder_named(&store, "Work");

    store.mark_folder_for_deletion(work);
    store.finish_folder_drag(0.0, 88.0);
    assert_eq!(store.delete_flow(), DeleteFlow::Confirming(work));

    store.cancel_folder_deletion();
    assert_eq!(store.delete_flow(), DeleteFlow::Idle);
    assert!(store.find_folder(work).is_some());
    assert_eq!(store.task_count(), 6);
}

#[test]
fn test_each_flow_step_signals_once() {
    let mut store = seeded_store();
    let others = folder_named(&store, "Others");

    let signals = Rc::new(Cell::new(0u32));
    let probe = Rc::clone(&signals);
    store.subscribe(move || probe.set(probe.get() + 1));

    store.mark_folder_for_deletion(others);
    assert_eq!(signals.get(), 1);

    store.finish_folder_drag(60.0, 0.0);
    assert_eq!(signals.get(), 2);

    // Confirmation covers the cascade and the flow reset together
    store.confirm_folder_deletion();
    assert_eq!(signals.get(), 3);
}

#[test]
fn test_marking_another_folder_moves_the_pending_state() {
    let mut store = seeded_store();
    let health = folder_named(&store, "Health");
    let work = folder_named(&store, "Work");

    // The drag can slide from one card onto another before release
    store.mark_folder_for_deletion(health);
    store.mark_folder_for_deletion(work);
    store.finish_folder_drag(64.0, 0.0);

    assert_eq!(store.delete_flow(), DeleteFlow::Confirming(work));
    store.confirm_folder_deletion();

    assert!(store.find_folder(health).is_some());
    assert!(store.find_folder(work).is_none());
}
