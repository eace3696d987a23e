use chrono::NaiveDate;
use lazytask_core::{Priority, Subtask, Task};

#[test]
fn task_new_sets_defaults() {
    let task = Task::new(42, "hello");

    assert_eq!(task.id, 42);
    assert_eq!(task.text, "hello");
    assert!(!task.completed);
    assert_eq!(task.deadline, None);
    assert_eq!(task.priority, Priority::Medium);
    assert!(task.subtasks.is_empty());
}

#[test]
fn toggle_flips_completion_both_ways() {
    let mut task = Task::new(1, "flip me");

    task.toggle();
    assert!(task.completed);

    task.toggle();
    assert!(!task.completed);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new(1_718_000_000_000, "Buy milk");
    task.deadline = date(2024, 6, 1);
    task.priority = Priority::High;
    task.subtasks.push(Subtask::new(1_718_000_000_001, "oat"));

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 1_718_000_000_000_i64);
    assert_eq!(json["text"], "Buy milk");
    assert_eq!(json["completed"], false);
    assert_eq!(json["deadline"], "2024-06-01");
    assert_eq!(json["priority"], "High");
    assert_eq!(json["subtasks"][0]["id"], 1_718_000_000_001_i64);
    assert_eq!(json["subtasks"][0]["text"], "oat");
    assert_eq!(json["subtasks"][0]["completed"], false);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn legacy_blob_from_the_original_app_loads_losslessly() {
    // Shape written by the browser version of the tracker.
    let blob = r#"[
        {"id":1718000000000,"text":"Buy milk","completed":false,
         "deadline":"2024-06-01","priority":"Medium",
         "subtasks":[{"id":1718000000001,"text":"oat","completed":true}]},
        {"id":1718000000002,"text":"Ship release","completed":true,
         "deadline":null,"priority":"High","subtasks":[]}
    ]"#;

    let tasks: Vec<Task> = serde_json::from_str(blob).unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].text, "Buy milk");
    assert_eq!(tasks[0].deadline, date(2024, 6, 1));
    assert_eq!(tasks[0].subtasks.len(), 1);
    assert!(tasks[0].subtasks[0].completed);
    assert!(tasks[1].completed);
    assert_eq!(tasks[1].deadline, None);
    assert_eq!(tasks[1].priority, Priority::High);
}

#[test]
fn missing_optional_fields_default_on_load() {
    let blob = r#"[{"id":7,"text":"bare"}]"#;

    let tasks: Vec<Task> = serde_json::from_str(blob).unwrap();

    assert_eq!(tasks.len(), 1);
    assert!(!tasks[0].completed);
    assert_eq!(tasks[0].deadline, None);
    assert_eq!(tasks[0].priority, Priority::Medium);
    assert!(tasks[0].subtasks.is_empty());
}

#[test]
fn unreadable_deadline_and_priority_degrade_to_defaults() {
    let blob = r#"[{"id":7,"text":"junk fields",
        "deadline":"next tuesday","priority":"Urgent"}]"#;

    let tasks: Vec<Task> = serde_json::from_str(blob).unwrap();

    assert_eq!(tasks[0].deadline, None);
    assert_eq!(tasks[0].priority, Priority::Medium);
}

#[test]
fn non_string_deadline_and_priority_degrade_to_defaults() {
    let blob = r#"[{"id":7,"text":"typed junk","deadline":12345,"priority":3}]"#;

    let tasks: Vec<Task> = serde_json::from_str(blob).unwrap();

    assert_eq!(tasks[0].deadline, None);
    assert_eq!(tasks[0].priority, Priority::Medium);
}

#[test]
fn unreadable_completed_degrades_to_default() {
    let blob = r#"[{"id":1,"text":"x","completed":"yes"}]"#;

    let tasks: Vec<Task> = serde_json::from_str(blob).unwrap();

    assert_eq!(tasks.len(), 1);
    assert!(!tasks[0].completed);
}

#[test]
fn non_array_subtasks_degrade_to_empty() {
    let blob = r#"[{"id":1,"text":"x","subtasks":"none"}]"#;

    let tasks: Vec<Task> = serde_json::from_str(blob).unwrap();

    assert!(tasks[0].subtasks.is_empty());
}

#[test]
fn unreadable_subtask_entries_are_dropped_not_fatal() {
    let blob = r#"[{"id":1,"text":"x","subtasks":[
        {"id":2,"text":"kept"},
        {"text":"no id"},
        {"id":3,"text":"loose flag","completed":"yes"}
    ]}]"#;

    let tasks: Vec<Task> = serde_json::from_str(blob).unwrap();

    let subtasks = &tasks[0].subtasks;
    assert_eq!(subtasks.len(), 2);
    assert_eq!(subtasks[0].text, "kept");
    assert_eq!(subtasks[1].text, "loose flag");
    assert!(!subtasks[1].completed);
}

#[test]
fn one_junk_field_never_loses_the_rest_of_the_list() {
    let blob = r#"[
        {"id":1,"text":"fine"},
        {"id":2,"text":"odd flag","completed":42},
        {"id":3,"text":"also fine","completed":true}
    ]"#;

    let tasks: Vec<Task> = serde_json::from_str(blob).unwrap();

    assert_eq!(tasks.len(), 3);
    assert!(!tasks[1].completed);
    assert!(tasks[2].completed);
}

#[test]
fn missing_id_or_text_fails_the_record() {
    assert!(serde_json::from_str::<Vec<Task>>(r#"[{"text":"no id"}]"#).is_err());
    assert!(serde_json::from_str::<Vec<Task>>(r#"[{"id":1}]"#).is_err());
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    Some(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}
