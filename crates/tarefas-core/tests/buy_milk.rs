//! End-to-end walk through the store: add, complete, delete.

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use tarefas_core::{TaskChange, TaskStore};

#[test]
fn add_toggle_remove_updates_counters() {
    let mut store = TaskStore::new();
    assert_eq!(store.counters().to_string(), "0 de 0");

    let id = store.add("Buy milk").expect("must add task");
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].text(), "Buy milk");
    assert!(!store.tasks()[0].is_completed());
    assert_eq!(store.counters().to_string(), "0 de 1");

    assert!(store.toggle(id));
    assert!(store.tasks()[0].is_completed());
    assert_eq!(store.counters().to_string(), "1 de 1");

    assert!(store.remove(id));
    assert!(store.is_empty());
    assert_eq!(store.counters().to_string(), "0 de 0");
}

#[test]
fn subscriber_sees_the_whole_lifecycle() {
    let log: Rc<RefCell<Vec<TaskChange>>> = Rc::default();
    let mut store = TaskStore::new();
    let sink = Rc::clone(&log);
    store.subscribe(move |change| sink.borrow_mut().push(*change));

    let id = store.add("Buy milk").expect("must add task");
    store.add("   ");
    store.toggle(id);
    store.remove(id);

    assert_eq!(
        *log.borrow(),
        vec![
            TaskChange::Added { id, index: 0 },
            TaskChange::Toggled {
                id,
                completed: true
            },
            TaskChange::Removed { id, index: 0 },
        ]
    );
    assert_eq!(store.revision(), 3);
}
