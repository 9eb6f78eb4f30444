//! End-to-end terminal sessions driven through `App::run`

#![allow(clippy::unwrap_used)] // Tests can unwrap

use composable_todo_runtime::Store;
use std::io::Cursor;
use todo::{App, Todo, TodoId, TodoReducer, TodoState, ViewOptions};

fn run_session(app: &mut App, script: &str) -> String {
    let mut out = Vec::new();
    app.run(Cursor::new(script.as_bytes()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn new_app() -> App {
    App::new(
        Store::new(TodoState::new(), TodoReducer::new()),
        ViewOptions::default(),
    )
    .with_prompt("> ")
}

#[test]
fn test_full_session() {
    let mut app = new_app();

    let output = run_session(
        &mut app,
        "add Buy milk\nadd Write docs\ntoggle 1\nedit 2 Write better docs\nrm 1\nquit\nadd ignored\n",
    );

    assert!(output.starts_with("Todo List\n=========\n  (no todos)\n> "));
    assert!(output.contains("[x] #1 Buy milk"));
    assert!(output.ends_with("  [ ] #2 Write better docs\n> "));
    assert_eq!(
        app.state().todos,
        vec![Todo::new(TodoId::new(2), "Write better docs")]
    );
}

#[test]
fn test_bad_commands_do_not_end_session() {
    let mut app = new_app();

    let output = run_session(&mut app, "\nfly away\ntoggle x\nadd ok\n");

    assert!(output.contains("error: unknown command `fly`"));
    assert!(output.contains("error: invalid todo id `x`"));
    assert_eq!(app.state().todos, vec![Todo::new(TodoId::FIRST, "ok")]);
}

#[test]
fn test_end_of_input_stops_session() {
    let mut app = new_app();
    let output = run_session(&mut app, "draft half typed");

    assert!(output.contains("new: half typed"));
    assert!(output.ends_with("> \n"));
    assert_eq!(app.state().new_todo, "half typed");
}

#[test]
fn test_load_command_reads_seed_file() {
    let path = std::env::temp_dir().join(format!("todo-seed-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"[{"id": 3, "text": "from file", "done": true}]"#,
    )
    .unwrap();

    let mut app = new_app();
    let output = run_session(&mut app, &format!("add before\nload {}\nadd after\n", path.display()));
    std::fs::remove_file(&path).unwrap();

    assert!(output.contains("[x] #3 from file"));
    assert_eq!(
        app.state().todos,
        vec![
            Todo {
                id: TodoId::new(3),
                text: "from file".to_string(),
                done: true,
            },
            Todo::new(TodoId::new(4), "after"),
        ]
    );
}
