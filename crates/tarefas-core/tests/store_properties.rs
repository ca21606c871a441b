#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;

use tarefas_core::{Task, TaskId, TaskStore};

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    Remove(usize),
    ToggleUnknown,
    RemoveUnknown,
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ \t]{0,4}",
        "[ \t]{0,2}[a-zA-Z0-9çãé ]{1,12}[ \t]{0,2}",
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => text_strategy().prop_map(Op::Add),
        2 => any::<usize>().prop_map(Op::Toggle),
        1 => any::<usize>().prop_map(Op::Remove),
        1 => Just(Op::ToggleUnknown),
        1 => Just(Op::RemoveUnknown),
    ]
}

fn pick(store: &TaskStore, raw: usize) -> Option<TaskId> {
    if store.is_empty() {
        None
    } else {
        Some(store.tasks()[raw % store.len()].id())
    }
}

fn flags(store: &TaskStore) -> Vec<(TaskId, bool)> {
    store
        .tasks()
        .iter()
        .map(|task| (task.id(), task.is_completed()))
        .collect()
}

proptest! {
    #[test]
    fn add_grows_by_one_for_non_blank_text(text in text_strategy()) {
        let mut store = TaskStore::new();
        store.add("existing");
        let before = store.len();

        let added = store.add(&text);

        if text.trim().is_empty() {
            prop_assert!(added.is_none());
            prop_assert_eq!(store.len(), before);
        } else {
            let id = added.expect("non-blank text must be accepted");
            prop_assert_eq!(store.len(), before + 1);
            let last = store.tasks().last().expect("list is not empty");
            prop_assert_eq!(last.id(), id);
            prop_assert_eq!(last.text(), text.trim());
            prop_assert!(!last.is_completed());
        }
    }

    #[test]
    fn toggle_is_an_involution_on_one_task(
        texts in prop::collection::vec("[a-z]{1,6}", 1..8),
        raw in any::<usize>(),
    ) {
        let mut store = TaskStore::new();
        for text in &texts {
            store.add(text);
        }
        let target = pick(&store, raw).expect("store is not empty");
        let original = flags(&store);

        prop_assert!(store.toggle(target));
        let once = flags(&store);
        for ((id, before), (_, after)) in original.iter().zip(&once) {
            if *id == target {
                prop_assert_ne!(before, after);
            } else {
                prop_assert_eq!(before, after);
            }
        }

        prop_assert!(store.toggle(target));
        prop_assert_eq!(flags(&store), original);
    }

    #[test]
    fn counters_match_list_after_any_sequence(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut store = TaskStore::new();
        let mut expected_revision = 0_u64;

        for op in ops {
            let before: Vec<Task> = store.tasks().to_vec();
            match op {
                Op::Add(text) => {
                    if store.add(&text).is_some() {
                        expected_revision += 1;
                    }
                }
                Op::Toggle(raw) => {
                    if let Some(id) = pick(&store, raw) {
                        prop_assert!(store.toggle(id));
                        expected_revision += 1;
                    }
                }
                Op::Remove(raw) => {
                    if let Some(id) = pick(&store, raw) {
                        prop_assert!(store.remove(id));
                        prop_assert_eq!(store.len(), before.len() - 1);
                        prop_assert!(store.get(id).is_none());
                        prop_assert!(!store.remove(id));
                        expected_revision += 1;
                    }
                }
                Op::ToggleUnknown => {
                    prop_assert!(!store.toggle(TaskId::new()));
                    prop_assert_eq!(store.tasks(), before.as_slice());
                }
                Op::RemoveUnknown => {
                    prop_assert!(!store.remove(TaskId::new()));
                    prop_assert_eq!(store.tasks(), before.as_slice());
                }
            }

            let counters = store.counters();
            prop_assert_eq!(counters.total, store.tasks().len());
            prop_assert_eq!(
                counters.completed,
                store.tasks().iter().filter(|task| task.is_completed()).count()
            );
            prop_assert_eq!(store.revision(), expected_revision);
        }
    }
}
