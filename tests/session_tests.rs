//! End-to-end tests for the scripted session driver.
//!
//! A session reads one command per line, applies it to a shared workspace
//! backed by the default dashboard menu, and prints the result.

use practice_desk::config::Config;
use practice_desk::navigation::{PracticeModule, RouteTable};
use practice_desk::session::{Session, SessionSummary};
use practice_desk::{SharedWorkspace, WorkspaceManager};

fn session(max_tabs: usize) -> Session<RouteTable> {
    let mut config = Config::default();
    config.workspace.max_tabs = max_tabs;
    let workspace = SharedWorkspace::new(WorkspaceManager::new(&config.workspace));
    Session::new(workspace, RouteTable::from_menu(&config.menu))
}

fn run(session: &Session<RouteTable>, script: &str) -> (SessionSummary, Vec<String>) {
    let mut out = Vec::new();
    let summary = session
        .run(script.as_bytes(), &mut out)
        .expect("in-memory session should not fail");
    let text = String::from_utf8(out).expect("utf8 output");
    (summary, text.lines().map(str::to_string).collect())
}

#[test]
fn test_open_list_and_close() {
    let session = session(15);
    let (summary, lines) = run(
        &session,
        "# morning routine\nopen /patients\nopen /inventory\nactivate patients\nlist\nclose /patients\nlist\n",
    );

    assert_eq!(summary, SessionSummary { commands: 6, errors: 0 });
    assert_eq!(
        lines,
        vec![
            "opened /patients",
            "opened /inventory",
            "switched to /patients",
            "* 1. Patients (/patients)",
            "  2. Inventory (/inventory)",
            "closed /patients",
            "* 1. Inventory (/inventory)",
        ]
    );
}

#[test]
fn test_record_paths_open_their_own_tabs() {
    let session = session(15);
    let (_, lines) = run(&session, "open /patients\nopen /patients/42\nlist\n");

    assert_eq!(lines[1], "opened /patients/42");
    assert_eq!(lines[3], "* 2. Patients / 42 (/patients/42)");

    let module = session
        .workspace()
        .with(|mgr| mgr.active_content().map(|view| view.module));
    assert_eq!(module, Some(PracticeModule::Patients));
}

#[test]
fn test_unknown_path_opens_nothing() {
    let session = session(15);
    let (summary, lines) = run(&session, "open /billing\nstatus\n");

    assert_eq!(summary.errors, 0);
    assert_eq!(lines, vec!["no view for /billing", "0/15 tabs open"]);
}

#[test]
fn test_eviction_and_capacity_warning() {
    let session = session(5);
    let script = "open /\nopen /patients\nopen /inventory\nopen /staff\nstatus\nopen /cash\nstatus\nopen /reports\nlist\n";
    let (_, lines) = run(&session, script);

    assert!(lines.contains(&"4/5 tabs open".to_string()));
    assert!(lines.contains(
        &"warning: 4 of 5 tabs open; the oldest tab will close when the limit is reached"
            .to_string()
    ));
    assert!(lines.contains(
        &"warning: 5 of 5 tabs open; opening another tab closes the oldest".to_string()
    ));
    assert!(lines.contains(&"opened /reports (closed oldest tab /)".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("* 5. Reports (/reports)"));
}

#[test]
fn test_capacity_command_clamps_and_evicts() {
    let session = session(15);
    let mut script = String::new();
    for i in 1..=7 {
        script.push_str(&format!("open /patients/{i}\n"));
    }
    script.push_str("capacity 2\nstatus\ncapacity lots\ncapacity 99\n");

    let (_, lines) = run(&session, &script);

    assert!(lines.contains(&"capacity set to 5".to_string()));
    assert!(lines.contains(&"closed 2 oldest tab(s)".to_string()));
    assert!(lines.contains(&"5/5 tabs open".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("capacity set to 50"));
    assert_eq!(session.workspace().capacity(), 50);
}

#[test]
fn test_bad_lines_are_reported_and_skipped() {
    let session = session(15);
    let (summary, lines) = run(&session, "open\nfrobnicate\nopen /staff\n");

    assert_eq!(summary, SessionSummary { commands: 1, errors: 2 });
    assert_eq!(
        lines,
        vec![
            "error: line 1: 'open' needs an argument",
            "error: line 2: unknown command 'frobnicate'",
            "opened /staff",
        ]
    );
}

#[test]
fn test_clear_and_close_oldest_on_empty() {
    let session = session(15);
    let (_, lines) = run(&session, "open /staff\nclear\nclose-oldest\nlist\nactivate /staff\n");

    assert_eq!(
        lines,
        vec![
            "opened /staff",
            "closed all tabs",
            "no tabs open",
            "no tabs open",
            "/staff is not open",
        ]
    );
}
