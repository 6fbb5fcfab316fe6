use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_shelf"))
}

/// Isolated data and config directories for one test.
struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("tempdir"),
        }
    }

    fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    fn config_home(&self) -> PathBuf {
        self.root.path().join("config")
    }

    fn write_config(&self, contents: &str) {
        let dir = self.config_home().join("shelf");
        std::fs::create_dir_all(&dir).expect("create config dir");
        std::fs::write(dir.join("config.toml"), contents).expect("write config");
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .env("SHELF_DATA_DIR", self.data_dir())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.root.path().join("xdg-data"))
            .env("NO_COLOR", "1")
            .env_remove("SHELF_CONFIG")
            .env_remove("SHELF_LOG")
            .stdin(Stdio::null());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("run shelf")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "shelf {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }

    fn run_shell(&self, script: &str) -> Output {
        let mut child = self
            .command(&["shell"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn shell");
        child
            .stdin
            .take()
            .expect("stdin")
            .write_all(script.as_bytes())
            .expect("write script");
        child.wait_with_output().expect("wait for shell")
    }
}

fn json_list(stdout: &str) -> Vec<serde_json::Value> {
    serde_json::from_str(stdout).expect("valid json array")
}

fn exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

#[test]
fn test_first_run_lists_sample_books() {
    let env = TestEnv::new();
    let output = env.run(&["book", "list", "--json"]);
    assert!(output.status.success());

    let books = json_list(&String::from_utf8_lossy(&output.stdout));
    let titles: Vec<&str> = books.iter().map(|b| b["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["The Hobbit", "1984", "Clean Code"]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("No saved data"));

    // Read-only commands never write a snapshot.
    assert!(!exists(&env.data_dir().join("books.json")));
}

#[test]
fn test_add_book_persists_across_runs() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["book", "add", "Dune", "Frank Herbert", "--copies", "2"]);
    assert_eq!(
        stdout.trim_end(),
        "status=ok\nid=4\ntitle=Dune\nauthor=Frank Herbert\ncopies=2"
    );
    assert!(exists(&env.data_dir().join("books.json")));
    assert!(exists(&env.data_dir().join("members.json")));

    let books = json_list(&env.run_ok(&["book", "list", "--json"]));
    assert_eq!(books.len(), 4);
    assert_eq!(books[3]["id"], 4);
    assert_eq!(books[3]["available_copies"], 2);
}

#[test]
fn test_issue_return_and_remove_guard() {
    let env = TestEnv::new();
    env.run_ok(&["member", "register", "Ann"]);
    let stdout = env.run_ok(&["issue", "1", "2"]);
    assert!(stdout.contains("available=1"));

    let members = json_list(&env.run_ok(&["member", "list", "--json"]));
    assert_eq!(members[0]["issued_books"], serde_json::json!([2]));

    let refused = env.run(&["book", "remove", "2", "--yes"]);
    assert_eq!(refused.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&refused.stderr).contains("on loan"));

    env.run_ok(&["return", "1", "2"]);
    env.run_ok(&["book", "remove", "2", "--yes"]);

    let plain = env.run_ok(&["book", "list", "--format", "plain"]);
    assert_eq!(
        plain.lines().collect::<Vec<_>>(),
        vec![
            "[ID:1] The Hobbit by J.R.R. Tolkien (Available: 3 / 3)",
            "[ID:3] Clean Code by Robert C. Martin (Available: 1 / 1)",
        ]
    );
}

#[test]
fn test_refusals_map_to_exit_codes() {
    let env = TestEnv::new();
    env.run_ok(&["member", "register", "Ann"]);

    let unknown_member = env.run(&["issue", "7", "1"]);
    assert_eq!(unknown_member.status.code(), Some(3));

    let unknown_book = env.run(&["issue", "1", "42"]);
    assert_eq!(unknown_book.status.code(), Some(3));

    env.run_ok(&["issue", "1", "3"]);
    let exhausted = env.run(&["issue", "1", "3"]);
    assert_eq!(exhausted.status.code(), Some(4));

    let not_held = env.run(&["return", "1", "1"]);
    assert_eq!(not_held.status.code(), Some(4));

    let bad_format = env.run(&["book", "list", "--format", "csv"]);
    assert_eq!(bad_format.status.code(), Some(4));
}

#[test]
fn test_search_by_author_is_case_insensitive() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["book", "search", "ORWELL", "--by", "author", "--format", "plain"]);
    assert_eq!(
        stdout.trim_end(),
        "[ID:2] 1984 by George Orwell (Available: 2 / 2)"
    );

    let books = json_list(&env.run_ok(&["book", "search", "", "--json"]));
    assert_eq!(books.len(), 3);
}

#[test]
fn test_check_reports_missing_ok_and_corrupt() {
    let env = TestEnv::new();
    let missing = env.run(&["check"]);
    assert_eq!(missing.status.code(), Some(3));

    env.run_ok(&["member", "register", "Ann"]);
    let stdout = env.run_ok(&["check"]);
    assert!(stdout.contains("status=ok"));
    assert!(stdout.contains("members=1"));

    std::fs::write(
        env.data_dir().join("members.json"),
        r#"{"format_version": 1, "members": [{"id": 1, "name": "Ann", "issued_books": [99]}]}"#,
    )
    .expect("write members");
    let corrupt = env.run(&["check"]);
    assert_eq!(corrupt.status.code(), Some(6));
}

#[test]
fn test_corrupt_snapshot_falls_back_to_samples() {
    let env = TestEnv::new();
    env.run_ok(&["member", "register", "Ann"]);
    std::fs::write(env.data_dir().join("books.json"), "not json").expect("corrupt books");

    let output = env.run(&["book", "list", "--json"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load saved data"));
    assert_eq!(json_list(&String::from_utf8_lossy(&output.stdout)).len(), 3);
}

#[test]
fn test_shell_session_saves_on_exit() {
    let env = TestEnv::new();
    let output = env.run_shell("2\n1\nAnn\n3\n3\n1\n1\n6\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No saved data, starting with sample books"));
    assert!(stdout.contains("Registered: [MID:1] Ann (Borrowed: 0)"));
    assert!(stdout.contains("Book issued successfully"));
    assert!(stdout.contains("Saving before exit..."));
    assert!(!stdout.contains("Data saved."));
    assert!(stdout.trim_end().ends_with("Goodbye!"));

    let members = env.run_ok(&["member", "list", "--format", "plain"]);
    assert_eq!(members.trim_end(), "[MID:1] Ann (Borrowed: 1)");

    let again = env.run_shell("6\n");
    assert!(String::from_utf8_lossy(&again.stdout).contains("Library data loaded from disk"));
}

#[test]
fn test_shell_respects_save_on_exit_config() {
    let env = TestEnv::new();
    env.write_config("[shell]\nsave_on_exit = false\n");

    let output = env.run_shell("2\n1\nAnn\n3\n6\n");
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Saving before exit"));
    assert!(!exists(&env.data_dir().join("members.json")));
}

#[test]
fn test_config_data_dir_used_without_flag() {
    let env = TestEnv::new();
    let configured = env.root.path().join("configured");
    env.write_config(&format!(
        "[storage]\ndata_dir = \"{}\"\n",
        configured.display()
    ));

    let output = env
        .command(&["member", "register", "Ann"])
        .env_remove("SHELF_DATA_DIR")
        .output()
        .expect("run shelf");
    assert!(output.status.success());
    assert!(exists(&configured.join("members.json")));
    assert!(!exists(&env.data_dir().join("members.json")));
}

#[test]
fn test_completions_generate() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["completions", "bash"]);
    assert!(stdout.contains("shelf"));
}
