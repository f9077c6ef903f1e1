use std::fs;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use sift::io::store::Store;
use sift::model::{Task, TaskList};
use sift::ops::list_ops;

fn sample_tasks() -> Vec<Task> {
    let mut plan = Task::new("plan the release");
    plan.description = "collect changelog entries\ncut the branch".into();
    plan.future_date = NaiveDate::from_ymd_opt(2026, 9, 14);
    let mut invoices = Task::new("send invoices");
    invoices.resolved = true;
    vec![plan, invoices, Task::new("water the office plants")]
}

#[test]
fn saved_state_is_stable_across_load_and_resave() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path());

    store.save_tasks(&sample_tasks()).unwrap();
    let first = fs::read(store.tasks_path()).unwrap();

    let loaded = store.load_tasks();
    store.save_tasks(&loaded).unwrap();
    let second = fs::read(store.tasks_path()).unwrap();

    assert_eq!(
        String::from_utf8(first).unwrap(),
        String::from_utf8(second).unwrap()
    );
}

#[test]
fn edits_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    {
        let store = Store::new(dir.path());
        let mut list = TaskList::from_tasks(store.load_tasks());
        list_ops::insert(&mut list, Task::new("first session task"), 0).unwrap();
        list_ops::insert(&mut list, Task::new("second session task"), 1).unwrap();
        list_ops::toggle_resolved(&mut list, 1).unwrap();
        store.save_tasks(list.tasks()).unwrap();
    }

    let store = Store::new(dir.path());
    let list = TaskList::from_tasks(store.load_tasks());
    let titles: Vec<_> = list.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["first session task", "second session task"]);
    assert!(!list.tasks()[0].resolved);
    assert!(list.tasks()[1].resolved);
    assert_eq!(list.cursor(), Some(0));
}

#[test]
fn log_entries_accumulate_across_sessions() {
    let dir = TempDir::new().unwrap();

    {
        let store = Store::new(dir.path());
        let mut entries = store.load_log();
        entries.push("[2026-08-26 09:00:00] Added task: 'a'".to_string());
        store.save_log(&entries).unwrap();
    }

    let store = Store::new(dir.path());
    let mut entries = store.load_log();
    entries.push("[2026-08-26 09:05:00] Resolved task: 'a'".to_string());
    store.save_log(&entries).unwrap();

    let reloaded = store.load_log();
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded[0].ends_with("Added task: 'a'"));
    assert!(reloaded[1].ends_with("Resolved task: 'a'"));
}
