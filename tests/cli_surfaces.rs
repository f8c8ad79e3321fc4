//! CLI tests for the non-check subcommands: validate, list, prompt, tags,
//! init.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE: &str = r#"version: "1"
prompts:
  - id: setup
    description: First-time setup
    content: |
      Install the toolchain.
      Run the bootstrap script.
checks:
  - id: vet
    run: "true"
    tags: [lint, fast]
  - id: tests
    run: "true"
    requires: [vet]
    tags: [tests]
"#;

fn workspace(config: &str) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("vibeguard.yaml"), config).expect("write config");
    dir
}

fn vibeguard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vibeguard").expect("binary builds");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn validate_prints_one_ok_line() {
    let dir = workspace(SAMPLE);
    vibeguard(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok:"))
        .stdout(predicate::str::contains("2 checks, 1 prompts"));
}

#[test]
fn validate_rejects_bad_config_with_line_number() {
    let dir = workspace("checks:\n  - id: a\n    run: x\n  - id: a\n    run: y\n");
    vibeguard(&dir)
        .arg("validate")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vibeguard.yaml:4"))
        .stderr(predicate::str::contains("duplicate check id"));
}

#[test]
fn list_prints_check_ids_in_config_order() {
    let dir = workspace(SAMPLE);
    vibeguard(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout("vet\ntests\n");
}

#[test]
fn list_verbose_includes_details() {
    let dir = workspace(SAMPLE);
    vibeguard(&dir)
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vet (error)"))
        .stdout(predicate::str::contains("requires: vet"))
        .stdout(predicate::str::contains("tags: lint, fast"));
}

#[test]
fn list_json_is_parseable() {
    let dir = workspace(SAMPLE);
    let output = vibeguard(&dir).args(["--json", "list"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["id"], "vet");
    assert_eq!(json[1]["requires"][0], "vet");
}

#[test]
fn tags_prints_sorted_unique_set() {
    let dir = workspace(SAMPLE);
    vibeguard(&dir)
        .arg("tags")
        .assert()
        .success()
        .stdout("fast\nlint\ntests\n");
}

#[test]
fn prompt_without_id_lists_prompts_and_builtin_init() {
    let dir = workspace(SAMPLE);
    vibeguard(&dir)
        .arg("prompt")
        .assert()
        .success()
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn prompt_with_id_emits_raw_content_on_stdout() {
    let dir = workspace(SAMPLE);
    vibeguard(&dir)
        .args(["prompt", "setup"])
        .assert()
        .success()
        .stdout("Install the toolchain.\nRun the bootstrap script.\n")
        .stderr("");
}

#[test]
fn builtin_init_prompt_works_without_a_config_file() {
    let dir = TempDir::new().unwrap();
    vibeguard(&dir)
        .args(["prompt", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vibeguard"));
}

#[test]
fn user_defined_init_prompt_takes_precedence() {
    let dir = workspace(
        r#"prompts:
  - id: init
    content: custom bootstrap text
checks:
  - id: a
    run: "true"
"#,
    );
    vibeguard(&dir)
        .args(["prompt", "init"])
        .assert()
        .success()
        .stdout("custom bootstrap text\n");
}

#[test]
fn unknown_prompt_exits_3() {
    let dir = workspace(SAMPLE);
    vibeguard(&dir)
        .args(["prompt", "ghost"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("prompt with ID \"ghost\" not found"));
}

#[test]
fn init_writes_a_valid_starter_config() {
    let dir = TempDir::new().unwrap();
    vibeguard(&dir).arg("init").assert().success();
    assert!(dir.path().join("vibeguard.yaml").exists());
    vibeguard(&dir).arg("validate").assert().success();
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = workspace(SAMPLE);
    vibeguard(&dir)
        .arg("init")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("refusing to overwrite"));
}

#[test]
fn init_lists_templates() {
    let dir = TempDir::new().unwrap();
    vibeguard(&dir)
        .args(["init", "--list-templates"])
        .assert()
        .success()
        .stdout("default\ngo\nrust\n");
}

#[test]
fn init_rust_template_validates() {
    let dir = TempDir::new().unwrap();
    vibeguard(&dir)
        .args(["init", "--template", "rust"])
        .assert()
        .success();
    vibeguard(&dir).arg("validate").assert().success();
}

#[test]
fn init_unknown_template_exits_3() {
    let dir = TempDir::new().unwrap();
    vibeguard(&dir)
        .args(["init", "--template", "cobol"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown starter template"));
}

#[test]
fn init_assist_prints_agent_prompt() {
    let dir = TempDir::new().unwrap();
    vibeguard(&dir)
        .args(["init", "--assist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vibeguard.yaml"));
}
