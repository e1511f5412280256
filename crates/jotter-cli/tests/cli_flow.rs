use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const PASSWORD: &str = "abc123";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_jotter"))
}

/// Isolated XDG homes plus a store directory.
struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    fn store(&self) -> PathBuf {
        self.path().join("store")
    }

    fn config_file(&self) -> PathBuf {
        self.path().join("config").join("jotter").join("config.toml")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env("XDG_DATA_HOME", self.path().join("data"))
            .env("JOTTER_STORE", self.store())
            .env("NO_COLOR", "1")
            .env_remove("JOTTER_CONFIG")
            .env_remove("JOTTER_PASSWORD")
            .env_remove("JOTTER_LOG")
            .stdin(Stdio::null());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("run jotter")
    }

    fn run_with_password(&self, args: &[&str], password: &str) -> Output {
        self.command(args)
            .env("JOTTER_PASSWORD", password)
            .output()
            .expect("run jotter")
    }

    fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn jotter");
        child
            .stdin
            .take()
            .expect("stdin")
            .write_all(input.as_bytes())
            .expect("write stdin");
        child.wait_with_output().expect("wait jotter")
    }

    /// Create a note quietly and return its id.
    fn create(&self, args: &[&str]) -> String {
        let mut full = vec!["-q", "new"];
        full.extend_from_slice(args);
        let output = self.run(&full);
        assert_success(&output);
        stdout(&output).trim().to_string()
    }

    fn stored_notes(&self) -> String {
        std::fs::read_to_string(self.store().join("notes.json")).expect("read store")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed: stdout={}, stderr={}",
        stdout(output),
        stderr(output)
    );
}

fn json(output: &Output) -> serde_json::Value {
    assert_success(output);
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn test_cli_init_writes_config_and_store() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["init"]);
    assert_success(&output);
    assert!(stdout(&output).contains("Initialized jotter store"));

    let config = std::fs::read_to_string(sandbox.config_file()).expect("config written");
    assert!(config.contains("[store]"));
    assert!(config.contains("backend = \"file\""));
    assert_eq!(sandbox.stored_notes(), "[]");

    let again = sandbox.run(&["init"]);
    assert_eq!(again.status.code(), Some(4));
    assert!(stderr(&again).contains("--force"));
}

#[test]
fn test_cli_new_list_show() {
    let sandbox = Sandbox::new();
    let id = sandbox.create(&[
        "--title",
        "Shopping",
        "--content",
        "Milk, eggs",
        "--tags",
        "home, errands,",
    ]);

    let list = json(&sandbox.run(&["list", "--json"]));
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    assert_eq!(list[0]["id"], id.as_str());
    assert_eq!(list[0]["tags"], serde_json::json!(["home", "errands"]));

    let show = sandbox.run(&["show", &id]);
    assert_success(&show);
    let text = stdout(&show);
    assert!(text.contains("Title: Shopping"));
    assert!(text.contains("Milk, eggs"));

    let plain = stdout(&sandbox.run(&["list"]));
    assert!(plain.starts_with(&format!("{}\tShopping\thome, errands", id)));
}

#[test]
fn test_cli_new_reads_stdin() {
    let sandbox = Sandbox::new();
    let output = sandbox.run_with_stdin(&["-q", "new", "--title", "Piped"], "from stdin\n");
    assert_success(&output);
    let id = stdout(&output).trim().to_string();

    let shown = json(&sandbox.run(&["show", &id, "--json"]));
    assert_eq!(shown["content"], "from stdin");
}

#[test]
fn test_cli_rejects_empty_note() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["new", "--title", "  ", "--content", "x"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("Title and content cannot be empty"));
    assert!(!sandbox.store().join("notes.json").exists());
}

#[test]
fn test_cli_locked_note_round_trip() {
    let sandbox = Sandbox::new();
    let output = sandbox.run_with_password(
        &["-q", "new", "--title", "Shopping", "--content", "Milk, eggs", "--lock"],
        PASSWORD,
    );
    assert_success(&output);
    let id = stdout(&output).trim().to_string();

    let raw = sandbox.stored_notes();
    assert!(!raw.contains("Milk"));
    assert!(raw.contains("\"isLocked\":true"));

    let list = stdout(&sandbox.run(&["list"]));
    assert!(list.contains("[locked]"));

    let no_password = sandbox.run(&["show", &id]);
    assert_eq!(no_password.status.code(), Some(5));

    let wrong = sandbox.run_with_password(&["show", &id], "wrong");
    assert_eq!(wrong.status.code(), Some(5));
    assert!(stderr(&wrong).contains("Incorrect password"));

    let right = json(&sandbox.run_with_password(&["show", &id, "--json"], PASSWORD));
    assert_eq!(right["content"], "Milk, eggs");
    assert_eq!(right["isLocked"], true);

    // Still locked after viewing
    assert!(!sandbox.stored_notes().contains("Milk"));
}

#[test]
fn test_cli_edit_unlock_stores_plaintext() {
    let sandbox = Sandbox::new();
    let output = sandbox.run_with_password(
        &["-q", "new", "--title", "Diary", "--content", "dear diary", "--lock"],
        PASSWORD,
    );
    let id = stdout(&output).trim().to_string();

    let edit = sandbox.run_with_password(&["edit", &id, "--unlock"], PASSWORD);
    assert_success(&edit);
    assert!(stdout(&edit).contains("Note updated"));

    let shown = json(&sandbox.run(&["show", &id, "--json"]));
    assert_eq!(shown["isLocked"], false);
    assert_eq!(shown["content"], "dear diary");
}

#[test]
fn test_cli_edit_keeps_id_and_position() {
    let sandbox = Sandbox::new();
    let first = sandbox.create(&["--title", "first", "--content", "1"]);
    sandbox.create(&["--title", "second", "--content", "2"]);

    let edit = sandbox.run(&["edit", &first, "--title", "renamed", "--reminder", "2026-05-01T09:30"]);
    assert_success(&edit);

    let list = json(&sandbox.run(&["list", "--json"]));
    assert_eq!(list[0]["id"], first.as_str());
    assert_eq!(list[0]["title"], "renamed");
    assert_eq!(list[0]["reminder"], "2026-05-01T09:30");

    let bad = sandbox.run(&["edit", &first, "--reminder", "soon"]);
    assert_eq!(bad.status.code(), Some(4));
}

#[test]
fn test_cli_unknown_ids_are_not_found() {
    let sandbox = Sandbox::new();
    assert_eq!(sandbox.run(&["show", "42"]).status.code(), Some(3));
    assert_eq!(sandbox.run(&["edit", "42", "--title", "x"]).status.code(), Some(3));
    assert_eq!(sandbox.run(&["delete", "42"]).status.code(), Some(3));
    assert_eq!(sandbox.run(&["export", "42"]).status.code(), Some(3));
}

#[test]
fn test_cli_delete_persists() {
    let sandbox = Sandbox::new();
    let id = sandbox.create(&["--title", "gone", "--content", "soon"]);

    let delete = sandbox.run(&["delete", &id]);
    assert_success(&delete);
    assert!(stdout(&delete).contains("Note deleted"));
    assert_eq!(sandbox.stored_notes(), "[]");
}

#[test]
fn test_cli_search_and_reminders() {
    let sandbox = Sandbox::new();
    let late = sandbox.create(&["--title", "Dentist", "--content", "call", "--reminder", "2026-12-01T08:00"]);
    sandbox.create(&["--title", "Shopping", "--content", "Milk", "--tags", "home"]);
    let early = sandbox.create(&["--title", "Standup", "--content", "MILK supply", "--reminder", "2026-01-01T08:00"]);

    let hits = json(&sandbox.run(&["search", "milk", "--json"]));
    let titles: Vec<_> = hits
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Shopping", "Standup"]);

    let tagged = json(&sandbox.run(&["list", "--tag", "HOME", "--json"]));
    assert_eq!(tagged.as_array().map(Vec::len), Some(1));

    let due = json(&sandbox.run(&["reminders", "--json"]));
    assert_eq!(due[0]["id"], early.as_str());
    assert_eq!(due[1]["id"], late.as_str());
}

#[test]
fn test_cli_export_html_and_text() {
    let sandbox = Sandbox::new();
    let id = sandbox.create(&["--title", "Plan", "--content", "Ship *it*", "--tags", "work"]);
    let out = sandbox.path().join("exports");

    let html = sandbox.run(&["export", &id, "--format", "html", "--out", out.to_str().unwrap()]);
    assert_success(&html);
    let written = std::fs::read_to_string(out.join("Plan.html")).expect("html export");
    assert!(written.contains("<h1>Plan</h1>"));
    assert!(written.contains("<em>it</em>"));

    let text = sandbox.run(&["export", &id, "--stdout"]);
    assert_success(&text);
    assert_eq!(stdout(&text), "Plan\n\nShip *it*\n\nTags: work\n");

    let bad = sandbox.run(&["export", &id, "--format", "pdf"]);
    assert_eq!(bad.status.code(), Some(4));
}

#[test]
fn test_cli_export_locked_needs_password() {
    let sandbox = Sandbox::new();
    let output = sandbox.run_with_password(
        &["-q", "new", "--title", "Secret", "--content", "hidden", "--lock"],
        PASSWORD,
    );
    let id = stdout(&output).trim().to_string();

    let denied = sandbox.run_with_password(&["export", &id, "--stdout"], "nope");
    assert_eq!(denied.status.code(), Some(5));

    let ok = sandbox.run_with_password(&["export", &id, "--stdout"], PASSWORD);
    assert_success(&ok);
    assert!(stdout(&ok).contains("hidden"));
}

#[test]
fn test_cli_sqlite_backend_from_config() {
    let sandbox = Sandbox::new();
    let init = sandbox.run(&["init", "--backend", "sqlite"]);
    assert_success(&init);
    assert!(sandbox.store().join("notes.db").exists());

    let id = sandbox.create(&["--title", "Shopping", "--content", "Milk"]);
    let list = json(&sandbox.run(&["list", "--json"]));
    assert_eq!(list[0]["id"], id.as_str());
    assert!(!sandbox.store().join("notes.json").exists());
}

#[test]
fn test_cli_config_env_override() {
    let sandbox = Sandbox::new();
    let custom = sandbox.path().join("custom.toml");
    let elsewhere = sandbox.path().join("elsewhere");
    std::fs::write(
        &custom,
        format!("[store]\nbackend = \"file\"\npath = \"{}\"\n", elsewhere.display()),
    )
    .expect("write config");

    let output = sandbox
        .command(&["-q", "new", "--title", "t", "--content", "c"])
        .env("JOTTER_CONFIG", &custom)
        .env_remove("JOTTER_STORE")
        .output()
        .expect("run jotter");
    assert_success(&output);
    assert!(elsewhere.join("notes.json").exists());
}

#[test]
fn test_cli_doctor_reports_corrupt_store() {
    let sandbox = Sandbox::new();
    sandbox.create(&["--title", "a", "--content", "b"]);

    let ok = sandbox.run(&["doctor"]);
    assert_success(&ok);
    assert!(stdout(&ok).contains("Doctor: OK"));
    assert!(stdout(&ok).contains("- notes: 1 (0 locked)"));

    std::fs::write(sandbox.store().join("notes.json"), "{not json").expect("corrupt store");
    let failed = sandbox.run(&["doctor"]);
    assert_eq!(failed.status.code(), Some(6));
    assert!(stderr(&failed).contains("Doctor: FAILED"));

    // Ordinary commands treat the corrupt store as empty
    let list = json(&sandbox.run(&["list", "--json"]));
    assert_eq!(list, serde_json::json!([]));
}

#[test]
fn test_cli_completions() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["completions", "bash"]);
    assert_success(&output);
    assert!(stdout(&output).contains("jotter"));
}
