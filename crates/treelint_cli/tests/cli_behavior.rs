//! Integration tests for CLI behavior
//!
//! These tests drive the built binary and check exit codes, stdout and the
//! files left on disk.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary from an empty directory so no ambient config is picked up.
fn treelint_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_treelint"));
    cmd.current_dir(cwd);
    cmd
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

fn copy_fixture(dir: &TempDir, name: &str) -> PathBuf {
    let target = dir.path().join(name);
    fs::copy(fixture(name), &target).unwrap();
    target
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        let dir = TempDir::new().unwrap();
        treelint_cmd(dir.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        let dir = TempDir::new().unwrap();
        treelint_cmd(dir.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn dry_run_requires_fix() {
        let dir = TempDir::new().unwrap();
        treelint_cmd(dir.path())
            .args(["check", "--dry-run"])
            .arg(fixture("clean.html"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("--fix"));
    }
}

mod check_command {
    use super::*;

    #[test]
    fn clean_file_succeeds() {
        let dir = TempDir::new().unwrap();
        treelint_cmd(dir.path())
            .arg("check")
            .arg(fixture("clean.html"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 1 files, found 0 issues"));
    }

    #[test]
    fn animation_assignment_fails_with_location() {
        let dir = TempDir::new().unwrap();
        treelint_cmd(dir.path())
            .arg("check")
            .arg(fixture("trigger.html"))
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "1:12 error [angular-animation-trigger-assignment]",
            ))
            .stdout(predicate::str::contains("fix: Bind to property [@fade]"))
            .stdout(predicate::str::contains("fix: Remove attribute value"));
    }

    #[test]
    fn warnings_do_not_fail() {
        let dir = TempDir::new().unwrap();
        treelint_cmd(dir.path())
            .arg("check")
            .arg(fixture("shapes.tree.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "1:14 warning [drools-empty-enum]: Enum 'Shape' declares no constants",
            ));
    }

    #[test]
    fn walks_directories() {
        let dir = TempDir::new().unwrap();
        treelint_cmd(dir.path())
            .arg("check")
            .arg(fixtures_dir())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Checked 3 files, found 2 issues"));
    }

    #[test]
    fn reports_zero_files_for_nonexistent_path() {
        let dir = TempDir::new().unwrap();
        treelint_cmd(dir.path())
            .args(["check", "nonexistent.html"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 0 files"));
    }

    #[test]
    fn unsupported_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let notes = dir.path().join("notes.txt");
        fs::write(&notes, "plain text").unwrap();

        treelint_cmd(dir.path())
            .arg("check")
            .arg(&notes)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Unsupported file type"));
    }

    #[test]
    fn json_output_lists_diagnostics_per_file() {
        let dir = TempDir::new().unwrap();
        let output = treelint_cmd(dir.path())
            .args(["check", "--format", "json"])
            .arg(fixture("trigger.html"))
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let files = json.as_array().unwrap();
        assert_eq!(files.len(), 1);
        let diagnostics = files[0]["diagnostics"].as_array().unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0]["inspection_id"],
            "angular-animation-trigger-assignment"
        );
        assert_eq!(diagnostics[0]["severity"], "error");
        assert_eq!(diagnostics[0]["fixes"][0]["kind"], "rename-to-binding-form");
        assert_eq!(diagnostics[0]["fixes"][0]["trigger"], "fade");
    }
}

mod fix_command {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fix_rewrites_file() {
        let dir = TempDir::new().unwrap();
        let path = copy_fixture(&dir, "trigger.html");

        treelint_cmd(dir.path())
            .args(["check", "--fix"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Fixed 1 issues in 1 files"));

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<div [@fade]=\"open\"></div>\n"
        );
    }

    #[test]
    fn dry_run_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = copy_fixture(&dir, "trigger.html");
        let before = fs::read_to_string(&path).unwrap();

        treelint_cmd(dir.path())
            .args(["check", "--fix", "--dry-run"])
            .arg(&path)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Would fix 1 issues in 1 files"));

        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn nothing_to_fix() {
        let dir = TempDir::new().unwrap();
        let path = copy_fixture(&dir, "clean.html");

        treelint_cmd(dir.path())
            .args(["check", "--fix"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("No fixable issues found."));
    }
}

mod config {
    use super::*;

    #[test]
    fn discovered_config_disables_inspection() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".treelint.json"),
            r#"{ "inspections": { "angular-animation-trigger-assignment": false } }"#,
        )
        .unwrap();
        let path = copy_fixture(&dir, "trigger.html");

        treelint_cmd(dir.path())
            .arg("check")
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("found 0 issues"));
    }

    #[test]
    fn severity_override_applies() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("custom.json");
        fs::write(
            &config,
            r#"{ "inspections": { "angular-animation-trigger-assignment": "info" } }"#,
        )
        .unwrap();

        treelint_cmd(dir.path())
            .arg("--config")
            .arg(&config)
            .arg("check")
            .arg(fixture("trigger.html"))
            .assert()
            .success()
            .stdout(predicate::str::contains("1:12 info"));
    }

    #[test]
    fn exclude_patterns_skip_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("dist")).unwrap();
        fs::copy(fixture("trigger.html"), dir.path().join("dist/trigger.html")).unwrap();
        fs::write(
            dir.path().join(".treelint.json"),
            r#"{ "exclude": ["**/dist/**"] }"#,
        )
        .unwrap();

        treelint_cmd(dir.path())
            .args(["check", "."])
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 0 files"));
    }

    #[test]
    fn exclude_patterns_are_relative_to_the_config_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::copy(fixture("trigger.html"), root.join("dist/trigger.html")).unwrap();
        fs::copy(fixture("clean.html"), root.join("src/clean.html")).unwrap();
        fs::write(root.join(".treelint.json"), r#"{ "exclude": ["dist/**"] }"#).unwrap();

        treelint_cmd(&root.join("src"))
            .arg("check")
            .arg(root)
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 1 files, found 0 issues"));
    }

    #[test]
    fn relative_config_path_anchors_excludes_at_working_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("dist")).unwrap();
        fs::copy(fixture("trigger.html"), dir.path().join("dist/trigger.html")).unwrap();
        fs::write(dir.path().join("custom.json"), r#"{ "exclude": ["dist/**"] }"#).unwrap();

        treelint_cmd(dir.path())
            .args(["--config", "custom.json", "check", "."])
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 0 files"));
    }

    #[test]
    fn invalid_config_exits_with_two() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("bad.json");
        fs::write(&config, r#"{ "max_fix_iterations": 0 }"#).unwrap();

        treelint_cmd(dir.path())
            .arg("--config")
            .arg(&config)
            .arg("check")
            .arg(fixture("clean.html"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Config validation failed"));
    }

    #[test]
    fn unknown_inspection_exits_with_two() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("unknown.json");
        fs::write(&config, r#"{ "inspections": { "no-such-inspection": true } }"#).unwrap();

        treelint_cmd(dir.path())
            .arg("--config")
            .arg(&config)
            .arg("rules")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Unknown inspection: no-such-inspection"));
    }
}

mod dump_command {
    use super::*;

    #[test]
    fn prints_raw_tree() {
        let dir = TempDir::new().unwrap();
        let output = treelint_cmd(dir.path())
            .arg("dump")
            .arg(fixture("trigger.html"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["source"], "<div @fade=\"open\"></div>\n");
        assert_eq!(json["tree"]["type"], "Document");
    }

    /// Source text of the `TagName` child of a start or end tag.
    fn tag_name<'a>(source: &'a str, tag: &serde_json::Value) -> &'a str {
        let name = tag["children"]
            .as_array()
            .unwrap()
            .iter()
            .find(|child| child["type"] == "TagName")
            .unwrap();
        let start = name["range"][0].as_u64().unwrap() as usize;
        let end = name["range"][1].as_u64().unwrap() as usize;
        &source[start..end]
    }

    #[test]
    fn pairs_start_and_end_tags_of_nested_elements() {
        let dir = TempDir::new().unwrap();
        let page = dir.path().join("page.html");
        fs::write(&page, "<div id=\"x\"><p>hi</p></div>").unwrap();

        let output = treelint_cmd(dir.path())
            .arg("dump")
            .arg(&page)
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let source = json["source"].as_str().unwrap();
        let root_children = json["tree"]["children"].as_array().unwrap();
        assert_eq!(root_children.len(), 1);

        let div = &root_children[0];
        let div_parts: Vec<&str> = div["children"]
            .as_array()
            .unwrap()
            .iter()
            .map(|child| child["type"].as_str().unwrap())
            .collect();
        assert_eq!(div_parts, vec!["StartTag", "Element", "EndTag"]);
        assert_eq!(tag_name(source, &div["children"][0]), "div");
        assert_eq!(tag_name(source, &div["children"][2]), "div");

        let p = &div["children"][1];
        assert_eq!(tag_name(source, &p["children"][0]), "p");
        assert_eq!(tag_name(source, &p["children"][2]), "p");
        assert_eq!(p["children"][1]["type"], "Text");
    }
}

mod rules_command {
    use super::*;

    #[test]
    fn lists_builtin_inspections() {
        let dir = TempDir::new().unwrap();
        treelint_cmd(dir.path())
            .arg("rules")
            .assert()
            .success()
            .stdout(predicate::str::contains("angular-animation-trigger-assignment"))
            .stdout(predicate::str::contains("drools-empty-enum"))
            .stdout(predicate::str::contains("warning"));
    }
}
