//! End-to-end session runs with scripted input.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use mrs_cli::commands::{run_config, run_history};
use mrs_cli::session::{Session, SessionEnd};
use mrs_persistence::{
    AppConfiguration, HistoryLog, JsonHistoryStore, MemoryHistoryStore, ReferentialValue,
    TomlConfigurationStore,
};
use tempfile::TempDir;

const BATCH: &str = r#"{
  "groups": [
    { "name": "G1", "measures": [
      { "id": 1, "value": 10.2, "operator": "A" },
      { "id": 2, "value": 9.7 }
    ] },
    { "name": "G2", "measures": [ { "id": 1, "value": 4.0, "ignored": true } ] }
  ]
}"#;

fn workspace() -> (TempDir, PathBuf, TomlConfigurationStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let batch = dir.path().join("batch.json");
    fs::write(&batch, BATCH).expect("write batch");
    let config = TomlConfigurationStore::new(dir.path().join("configuration.toml"));
    (dir, batch, config)
}

async fn run_script(
    history: Arc<MemoryHistoryStore>,
    config: TomlConfigurationStore,
    script: &str,
) -> (SessionEnd, String) {
    let mut session = Session::new(history, Arc::new(config));
    let mut out = Vec::new();
    let end = session
        .run(Cursor::new(script.to_string()), &mut out)
        .await
        .expect("session");
    (end, String::from_utf8(out).expect("utf8"))
}

#[tokio::test]
async fn import_toggle_and_history() {
    let (_dir, batch, config) = workspace();
    let history = Arc::new(MemoryHistoryStore::new());
    let script = format!(
        "import {}\ntoggle G1 2\ntoggle G1 99\ntoggle Nope 1\nhistory\nquit\n",
        batch.display()
    );

    let (end, output) = run_script(Arc::clone(&history), config, &script).await;

    assert_eq!(end, SessionEnd::Quit);
    assert!(output.contains("G1/2 is now ignored."));
    assert_eq!(output.matches("Nothing to toggle.").count(), 2);
    assert!(output.contains("ignore G1/2"));
    let entries = history.list().expect("list");
    assert_eq!(entries.len(), 2);
    assert!(entries[1].data.measure("G1", 2).expect("measure").ignored);
}

#[tokio::test]
async fn report_pages_are_gated_until_import() {
    let (_dir, batch, config) = workspace();
    let mut stored = AppConfiguration::default();
    stored.report.title = "Bench 4".into();
    stored.referential.name = "Gold".into();
    stored.referential.values.insert(
        "G1".into(),
        ReferentialValue {
            target: 10.0,
            tolerance: 0.5,
        },
    );
    config.save(&stored).expect("save");

    let script = format!(
        "report\npage raw\nimport {}\nreport\noption error\n",
        batch.display()
    );
    let (end, output) = run_script(Arc::new(MemoryHistoryStore::new()), config, &script).await;

    assert_eq!(end, SessionEnd::EndOfInput);
    assert!(output.contains("Report needs an imported model."));
    assert!(output.contains("Raw data needs an imported model."));
    assert!(output.contains("Bench 4"));
    assert!(output.contains("Referential: Gold"));
    assert!(output.contains("Use error for referential: false"));
}

#[tokio::test]
async fn reopen_restores_an_earlier_snapshot() {
    let (_dir, batch, config) = workspace();
    let history = Arc::new(MemoryHistoryStore::new());
    let script = format!(
        "import {}\ntoggle G1 1\nreopen 0\nreopen 42\n",
        batch.display()
    );

    let (_, output) = run_script(Arc::clone(&history), config, &script).await;

    assert!(output.contains("No history entry #42."));
    let entries = history.list().expect("list");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2].data, entries[0].data);
}

#[tokio::test]
async fn update_flow_ends_with_reload() {
    let (_dir, _batch, config) = workspace();
    let script = "update waiting 9 2.1.0\nupdate dismiss\nstatus\nupdate confirm\n\
                  update state 9 activating\nupdate state 9 activated\nstatus\n";

    let (end, output) = run_script(Arc::new(MemoryHistoryStore::new()), config, script).await;

    assert_eq!(end, SessionEnd::Reload);
    assert!(output.contains("Pending replacement worker#9 (version 2.1.0)"));
    assert!(output.contains("| update: UpdateAvailable (dismissed)"));
    assert!(output.contains("Update activated, reloading."));
    // Commands after the reload request are not read.
    assert_eq!(output.matches("Page: Import").count(), 7);
}

#[tokio::test]
async fn bad_commands_do_not_end_the_session() {
    let (dir, _batch, config) = workspace();
    let missing = dir.path().join("missing.json");
    let script = format!("frobnicate\nimport {}\nselect G1\nhelp\n", missing.display());

    let (end, output) = run_script(Arc::new(MemoryHistoryStore::new()), config, &script).await;

    assert_eq!(end, SessionEnd::EndOfInput);
    assert!(output.contains("error: unknown command 'frobnicate'"));
    assert!(output.contains("error: Failed to read"));
    assert!(output.contains("No such group."));
    assert!(output.contains("Commands:"));
}

#[test]
fn history_command_lists_most_recent_first() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonHistoryStore::new(dir.path().join("history.json"));
    let mut out = Vec::new();
    run_history(&store, None, &mut out).expect("empty history");
    assert!(String::from_utf8_lossy(&out).contains("No entries."));
}

#[test]
fn config_command_reports_malformed_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("configuration.toml");
    fs::write(&path, "decimal_places = [").expect("write");
    let mut out = Vec::new();

    let err = run_config(&TomlConfigurationStore::new(&path), &mut out).expect_err("malformed");

    assert!(err.to_string().contains("could not be read"));
    assert!(String::from_utf8_lossy(&out).contains("configuration.toml"));
}
