#![cfg(unix)]

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::{Mutex, MutexGuard};

use serde_json::{Value, json};
use tempfile::TempDir;

// 스크립트 작성과 실행이 다른 테스트의 fork와 겹치면 ETXTBSY가 날 수 있어 직렬화한다.
static SERIAL: Mutex<()> = Mutex::new(());

struct Sandbox {
    dir: TempDir,
    _guard: MutexGuard<'static, ()>,
}

impl Sandbox {
    fn new() -> Self {
        Self::with_executable_name("tstoy")
    }

    fn with_executable_name(name: &str) -> Self {
        let guard = SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let dir = tempfile::tempdir().expect("create temp dir");
        let bin = dir.path().join("bin");
        fs::create_dir_all(&bin).expect("create bin dir");

        let root = dir.path().join("configs");
        let script = format!(
            r#"#!/bin/sh
root='{root}'
if [ "$1" != "show" ] || [ "$2" != "path" ]; then
  echo "unknown command" >&2
  exit 2
fi
case "$3" in
  machine|user) echo "$root/$3/config.json" ;;
  "") echo "$root/machine/config.json"; echo "$root/user/config.json" ;;
  *) echo "unknown scope $3" >&2; exit 1 ;;
esac
"#,
            root = root.display()
        );
        let script_path = bin.join(name);
        {
            let mut file = fs::File::create(&script_path).expect("create fake executable");
            file.write_all(script.as_bytes()).expect("write fake executable");
            file.sync_all().expect("sync fake executable");
        }
        fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755))
            .expect("mark fake executable");

        Self { dir, _guard: guard }
    }

    fn config_path(&self, scope: &str) -> PathBuf {
        self.dir.path().join("configs").join(scope).join("config.json")
    }

    fn settings_path(&self) -> PathBuf {
        self.dir.path().join("settings.json")
    }

    fn command(&self, path_var: &Path) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tstoy-dsc"));
        cmd.current_dir(self.dir.path())
            .env_clear()
            .env("PATH", path_var)
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("xdg"))
            .env("TSTOY_DSC_CONFIG", self.settings_path())
            .env("RUST_LOG", "warn");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.run_with_stdin(args, None)
    }

    fn run_with_stdin(&self, args: &[&str], stdin: Option<&str>) -> Output {
        self.run_in(&self.dir.path().join("bin"), args, stdin)
    }

    fn run_in(&self, path_var: &Path, args: &[&str], stdin: Option<&str>) -> Output {
        let mut cmd = self.command(path_var);
        cmd.args(args)
            .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("spawn tstoy-dsc");
        if let Some(input) = stdin {
            let mut pipe = child.stdin.take().expect("stdin pipe");
            // stdin을 읽지 않고 끝나는 명령이면 EPIPE가 날 수 있다.
            let _ = pipe.write_all(input.as_bytes());
        }
        child.wait_with_output().expect("wait tstoy-dsc")
    }
}

fn json_lines(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout line is JSON"))
        .collect()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn get_reports_absent_when_file_is_missing() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["get", "--scope", "machine"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        json_lines(&output),
        vec![json!({"ensure": "absent", "scope": "machine"})]
    );
}

#[test]
fn set_then_get_round_trips_the_desired_state() {
    let sandbox = Sandbox::new();

    let set = sandbox.run(&[
        "set",
        "--scope",
        "user",
        "--updateAutomatically",
        "--updateFrequency",
        "45",
    ]);
    assert!(set.status.success(), "{}", stderr(&set));
    let expected = json!({
        "ensure": "present",
        "scope": "user",
        "updateAutomatically": true,
        "updateFrequency": 45
    });
    assert_eq!(json_lines(&set), vec![expected.clone()]);

    let written: Value =
        serde_json::from_str(&fs::read_to_string(sandbox.config_path("user")).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({"updates": {"automatic": true, "checkFrequency": 45}})
    );

    let get = sandbox.run(&["get", "--scope", "user"]);
    assert!(get.status.success(), "{}", stderr(&get));
    assert_eq!(json_lines(&get), vec![expected]);
}

#[test]
fn repeated_set_leaves_file_unchanged() {
    let sandbox = Sandbox::new();
    let args = ["set", "--scope", "machine", "--updateFrequency", "30"];

    assert!(sandbox.run(&args).status.success());
    let first = fs::read_to_string(sandbox.config_path("machine")).unwrap();
    assert!(sandbox.run(&args).status.success());
    let second = fs::read_to_string(sandbox.config_path("machine")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn set_with_defaults_writes_an_empty_updates_block() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["set", "--scope", "machine"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let written: Value =
        serde_json::from_str(&fs::read_to_string(sandbox.config_path("machine")).unwrap())
            .unwrap();
    assert_eq!(written, json!({"updates": {}}));
}

#[test]
fn set_absent_deletes_the_file() {
    let sandbox = Sandbox::new();
    assert!(sandbox.run(&["set", "--scope", "user"]).status.success());
    assert!(sandbox.config_path("user").is_file());

    let output = sandbox.run(&["set", "--scope", "user", "--ensure", "absent"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(!sandbox.config_path("user").exists());
    assert_eq!(
        json_lines(&output),
        vec![json!({"ensure": "absent", "scope": "user"})]
    );
}

#[test]
fn set_without_scope_fails_and_writes_nothing() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["set", "--updateFrequency", "5"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("scope is required"));
    assert!(output.stdout.is_empty());
    assert!(!sandbox.dir.path().join("configs").exists());
}

#[test]
fn set_reads_desired_state_from_stdin() {
    let sandbox = Sandbox::new();

    let output = sandbox.run_with_stdin(
        &["set"],
        Some(r#"{"Scope":"Machine","UpdateAutomatically":true}"#),
    );

    assert!(output.status.success(), "{}", stderr(&output));
    let written: Value =
        serde_json::from_str(&fs::read_to_string(sandbox.config_path("machine")).unwrap())
            .unwrap();
    assert_eq!(written, json!({"updates": {"automatic": true}}));
}

#[test]
fn get_takes_scope_from_stdin_only_without_flag() {
    let sandbox = Sandbox::new();
    assert!(sandbox.run(&["set", "--scope", "user", "--updateFrequency", "9"]).status.success());

    let from_json = sandbox.run_with_stdin(&["get"], Some(r#"{"scope":"user"}"#));
    assert!(from_json.status.success(), "{}", stderr(&from_json));
    assert_eq!(json_lines(&from_json)[0]["updateFrequency"], json!(9));

    let from_flag = sandbox.run_with_stdin(&["get", "--scope", "machine"], Some(r#"{"scope":"user"}"#));
    assert!(from_flag.status.success(), "{}", stderr(&from_flag));
    assert_eq!(
        json_lines(&from_flag),
        vec![json!({"ensure": "absent", "scope": "machine"})]
    );
}

#[test]
fn get_all_and_export_emit_machine_then_user() {
    let sandbox = Sandbox::new();
    assert!(sandbox.run(&["set", "--scope", "user", "--updateAutomatically"]).status.success());

    for args in [&["get", "--all"][..], &["export"][..]] {
        let output = sandbox.run(args);
        assert!(output.status.success(), "{}", stderr(&output));
        assert_eq!(
            json_lines(&output),
            vec![
                json!({"ensure": "absent", "scope": "machine"}),
                json!({"ensure": "present", "scope": "user", "updateAutomatically": true}),
            ]
        );
    }
}

#[test]
fn set_preserves_unrelated_keys_in_the_file() {
    let sandbox = Sandbox::new();
    let path = sandbox.config_path("machine");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"theme":"dark","updates":{"automatic":false,"checkFrequency":3}}"#)
        .unwrap();

    let output = sandbox.run(&["set", "--scope", "machine", "--updateAutomatically", "--updateFrequency", "3"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({"theme": "dark", "updates": {"automatic": true, "checkFrequency": 3}})
    );
}

#[test]
fn missing_executable_is_fatal() {
    let sandbox = Sandbox::new();
    let empty = sandbox.dir.path().join("empty");
    fs::create_dir_all(&empty).unwrap();

    for args in [
        &["get", "--scope", "user"][..],
        &["set", "--scope", "user", "--updateFrequency", "7"][..],
    ] {
        let output = sandbox.run_in(&empty, args, None);

        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert!(stderr(&output).contains("not found"));
        assert!(output.stdout.is_empty());
    }
    assert!(!sandbox.dir.path().join("configs").exists());
}

#[test]
fn settings_file_can_rename_the_executable() {
    let sandbox = Sandbox::with_executable_name("tstoy-nightly");
    fs::write(sandbox.settings_path(), r#"{"executable":"tstoy-nightly"}"#).unwrap();

    let output = sandbox.run(&["get", "--scope", "machine"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        json_lines(&output),
        vec![json!({"ensure": "absent", "scope": "machine"})]
    );
}

#[test]
fn out_of_range_frequency_flag_is_a_usage_error() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["set", "--scope", "user", "--updateFrequency", "91"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!sandbox.config_path("user").exists());
}

#[test]
fn schema_describes_the_resource_properties() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["schema"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let schema = &json_lines(&output)[0];
    assert_eq!(schema["properties"]["updateFrequency"]["maximum"], json!(90));
    assert!(schema["properties"]["scope"].is_object());
}
